//! # Row Translator
//!
//! Turns a labelled [`Record`] into a block of CRF++ training lines: one
//! line per token with its feature columns and BIO tag, followed by a blank
//! line separating it from the next record.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::tagging::features::TokenFeatures;
use crate::tagging::matcher::{ExpectedTokens, FieldMatcher, MatchState};
use crate::tagging::tags::{Field, Tag};
use crate::tagging::tokenizer::Tokenizer;
use crate::text::clean_unicode_fractions;
use crate::types::Record;

/// How the upper end of a quantity range is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeEndTagging {
    /// `B-RANGE_END`, the vocabulary of the existing training files.
    #[default]
    Distinct,
    /// The quantity tags, so both ends of "4 to 6" read `B-QTY`.
    AsQuantity,
}

impl RangeEndTagging {
    fn apply(self, field: Option<Field>) -> Option<Field> {
        match (self, field) {
            (Self::AsQuantity, Some(Field::RangeEnd)) => Some(Field::Qty),
            _ => field,
        }
    }
}

/// Configuration for the translator.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Replace vulgar fraction characters ("½") before tokenizing
    pub clean_unicode_fractions: bool,
    /// Label used for the upper end of a quantity range
    pub range_end_tagging: RangeEndTagging,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            clean_unicode_fractions: true,
            range_end_tagging: RangeEndTagging::Distinct,
        }
    }
}

impl TranslatorConfig {
    /// Create a new translator configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable unicode fraction cleanup.
    pub fn with_unicode_fraction_cleanup(mut self, enabled: bool) -> Self {
        self.clean_unicode_fractions = enabled;
        self
    }

    /// Set how range ends are labelled.
    pub fn with_range_end_tagging(mut self, tagging: RangeEndTagging) -> Self {
        self.range_end_tagging = tagging;
        self
    }
}

/// A token with its feature columns and tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub features: TokenFeatures,
    pub tag: Tag,
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.text, self.features, self.tag)
    }
}

/// All tagged tokens of one phrase, in phrase order.
///
/// Displays as a CRF++ training block, blank line included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedPhrase {
    pub tokens: Vec<TaggedToken>,
}

impl TaggedPhrase {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.tokens.iter().map(|t| t.tag).collect()
    }

    /// Number of tokens carrying a field tag.
    pub fn tagged_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.tag != Tag::Other).count()
    }
}

impl fmt::Display for TaggedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        writeln!(f)
    }
}

/// Translates labelled records into tagged training data.
#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslatorConfig,
    tokenizer: Tokenizer,
}

impl Translator {
    /// Create a new translator with the given configuration.
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        Ok(Self {
            config,
            tokenizer: Tokenizer::new()?,
        })
    }

    /// The configuration this translator was built with.
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tag every token of the record's phrase.
    ///
    /// Never fails: field values that cannot be found in the phrase leave
    /// the corresponding tokens tagged `OTHER`.
    pub fn translate(&self, record: &Record) -> TaggedPhrase {
        let phrase = if self.config.clean_unicode_fractions {
            clean_unicode_fractions(&record.input)
        } else {
            record.input.clone()
        };
        let tokens = self.tokenizer.tokenize(&phrase);

        let expected = ExpectedTokens::from_record(
            record,
            &self.tokenizer,
            self.config.clean_unicode_fractions,
        );
        let mut matcher = FieldMatcher::new(&expected);
        let fields: Vec<Option<Field>> = tokens
            .iter()
            .map(|token| matcher.next_field(token))
            .collect();

        for field in expected.fields() {
            if !fields.contains(&Some(field)) {
                debug!(%field, input = %record.input, "field value not found in phrase");
            }
        }
        if matcher.state() != MatchState::Settled {
            debug!(state = ?matcher.state(), input = %record.input, "quantity slot left open");
        }

        let features = TokenFeatures::extract(&tokens);
        let mut previous = None;
        let tagged = tokens
            .into_iter()
            .zip(features)
            .zip(fields)
            .map(|((text, features), field)| {
                let field = self.config.range_end_tagging.apply(field);
                let tag = match field {
                    Some(f) if previous == Some(f) => Tag::inside(f),
                    Some(f) => Tag::begin(f),
                    None => Tag::Other,
                };
                previous = field;
                TaggedToken {
                    text,
                    features,
                    tag,
                }
            })
            .collect();

        TaggedPhrase { tokens: tagged }
    }

    /// Translate a record into its CRF++ training block.
    ///
    /// # Examples
    /// ```
    /// use ingredient_tagger_core::{Record, Translator, TranslatorConfig};
    ///
    /// let translator = Translator::new(TranslatorConfig::default()).unwrap();
    /// let record = Record::new("3 bananas").with_qty(3.0).with_name("bananas");
    ///
    /// assert_eq!(
    ///     translator.translate_row(&record),
    ///     "3\tI1\tL4\tNoCAP\tNoPAREN\tB-QTY\nbananas\tI2\tL4\tNoCAP\tNoPAREN\tB-NAME\n\n"
    /// );
    /// ```
    pub fn translate_row(&self, record: &Record) -> String {
        self.translate(record).to_string()
    }
}
