//! # Ingredient Phrase Tokenizer
//!
//! Splits ingredient phrases into tokens for sequence labeling.
//!
//! Recipes often give an American unit followed by a metric alternative:
//!
//! * 2 tablespoons/30 milliliters milk or cream
//! * 2 1/2 cups/300 grams all-purpose flour
//!
//! The labelled data only records the American unit, so the text is split
//! on "cups/" and friends to make the unit its own token. Mixed numbers are
//! clumped into one token so "2 1/2" is never split in two.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::text::CLUMP_MARKER;

/// Units that may be followed by a slash and a metric alternative.
const AMERICAN_UNITS: &[&str] = &[
    "cup",
    "tablespoon",
    "teaspoon",
    "pound",
    "ounce",
    "quart",
    "pint",
];

/// Abbreviations expanded when written straight after a number ("100g").
/// The abbreviation must end the word, so "1gallon" is left alone.
const UNIT_ABBREVIATIONS: &[(&str, &str)] = &[
    (r"(\d+)g\b\.?", "grams"),
    (r"(\d+)oz\b\.?", "ounces"),
    (r"(\d+)lbs?\b\.?", "pounds"),
    (r"(\d+)m[lL]\b\.?", "milliliters"),
    (r"(\d+)tsp\b\.?", "teaspoons"),
    (r"(\d+)tbsp\b\.?", "tablespoons"),
];

/// Punctuation kept as standalone tokens.
const SPLIT_PUNCTUATION: &[char] = &[',', '(', ')'];

/// Tokenizer for ingredient phrases.
///
/// Holds its pre-compiled patterns, so build it once and reuse it.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    abbreviations: Vec<(Regex, String)>,
    re_us_uk_split: Regex,
    re_mixed_number: Regex,
}

impl Tokenizer {
    /// Constructs a new `Tokenizer` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        let abbreviations = UNIT_ABBREVIATIONS
            .iter()
            .map(|(pattern, unit)| -> Result<(Regex, String)> {
                Ok((Regex::new(pattern)?, format!("${{1}} {unit}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            abbreviations,
            re_us_uk_split: Regex::new(&format!(r"\b({})(s?)/", AMERICAN_UNITS.join("|")))?,
            re_mixed_number: Regex::new(r"(\d+)\s+(\d+/\d+)")?,
        })
    }

    /// Tokenize a phrase into an ordered sequence of tokens.
    ///
    /// # Examples
    /// ```
    /// use ingredient_tagger_core::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("2 1/2 cups/300 grams all-purpose flour");
    /// assert_eq!(tokens, ["2$1/2", "cups", "300", "grams", "all-purpose", "flour"]);
    /// ```
    pub fn tokenize(&self, phrase: &str) -> Vec<String> {
        let expanded = self.expand_unit_abbreviations(phrase);
        let split = self.normalize_us_uk_split(&expanded);
        let clumped = self.clump_fractions(&split);
        split_tokens(&clumped)
    }

    /// Expands "100g" to "100 grams", "8oz" to "8 ounces" and so on.
    pub fn expand_unit_abbreviations(&self, s: &str) -> String {
        let mut out = s.to_string();
        for (re, replacement) in &self.abbreviations {
            if let Cow::Owned(replaced) = re.replace_all(&out, replacement.as_str()) {
                out = replaced;
            }
        }
        out
    }

    /// Replaces the slash in "cups/300 grams" with a space.
    pub fn normalize_us_uk_split<'a>(&self, s: &'a str) -> Cow<'a, str> {
        self.re_us_uk_split.replace_all(s, "${1}${2} ")
    }

    /// Joins mixed numbers into a single token: "aaa 1 2/3 bbb" becomes
    /// "aaa 1$2/3 bbb".
    pub fn clump_fractions<'a>(&self, s: &'a str) -> Cow<'a, str> {
        self.re_mixed_number.replace_all(s, |caps: &Captures<'_>| {
            format!("{}{}{}", &caps[1], CLUMP_MARKER, &caps[2])
        })
    }
}

/// Splits on whitespace, commas and parentheses, keeping the punctuation.
fn split_tokens(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current_start = 0;

    for (idx, c) in s.char_indices() {
        let is_punct = SPLIT_PUNCTUATION.contains(&c);
        if is_punct || c.is_whitespace() {
            if idx > current_start {
                tokens.push(s[current_start..idx].to_string());
            }
            if is_punct {
                tokens.push(c.to_string());
            }
            current_start = idx + c.len_utf8();
        }
    }

    if current_start < s.len() {
        tokens.push(s[current_start..].to_string());
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(s: &str) -> Vec<String> {
        Tokenizer::new().unwrap().tokenize(s)
    }

    #[test]
    fn test_splits_slash_separated_alternatives() {
        assert_eq!(
            tokenize("2 tablespoons/30 milliliters milk or cream"),
            ["2", "tablespoons", "30", "milliliters", "milk", "or", "cream"]
        );
        assert_eq!(
            tokenize("2 1/2 cups/300 grams all-purpose flour"),
            ["2$1/2", "cups", "300", "grams", "all-purpose", "flour"]
        );
    }

    #[test]
    fn test_every_american_unit_splits_from_metric_amount() {
        for unit in AMERICAN_UNITS {
            for word in [unit.to_string(), format!("{unit}s")] {
                let tokens = tokenize(&format!("1 {word}/250 grams butter"));
                let pos = tokens.iter().position(|t| *t == word).unwrap();
                assert_eq!(tokens[pos + 1], "250", "{word}");
            }
        }
    }

    #[test]
    fn test_slash_inside_other_words_is_kept() {
        assert_eq!(tokenize("1 teacup/mug"), ["1", "teacup/mug"]);
        assert_eq!(tokenize("1/2 cup"), ["1/2", "cup"]);
    }

    #[test]
    fn test_parens() {
        assert_eq!(
            tokenize("2 tablespoons milk (or cream)"),
            ["2", "tablespoons", "milk", "(", "or", "cream", ")"]
        );
    }

    #[test]
    fn test_commas() {
        assert_eq!(
            tokenize("Half a vanilla bean, split lengthwise, seeds scraped"),
            [
                "Half",
                "a",
                "vanilla",
                "bean",
                ",",
                "split",
                "lengthwise",
                ",",
                "seeds",
                "scraped"
            ]
        );
    }

    #[test]
    fn test_parens_and_commas() {
        assert_eq!(
            tokenize(
                "1 cup peeled and cooked fresh chestnuts (about 20), or 1 cup canned, unsweetened chestnuts"
            ),
            [
                "1",
                "cup",
                "peeled",
                "and",
                "cooked",
                "fresh",
                "chestnuts",
                "(",
                "about",
                "20",
                ")",
                ",",
                "or",
                "1",
                "cup",
                "canned",
                ",",
                "unsweetened",
                "chestnuts"
            ]
        );
    }

    #[test]
    fn test_expands_unit_abbreviations() {
        let pairs = [
            ("100g melted chocolate", ["100", "grams", "melted", "chocolate"]),
            ("8oz diet coke", ["8", "ounces", "diet", "coke"]),
            ("15ml coconut oil", ["15", "milliliters", "coconut", "oil"]),
            ("15mL coconut oil", ["15", "milliliters", "coconut", "oil"]),
            ("2lbs. ground beef", ["2", "pounds", "ground", "beef"]),
            ("1tbsp olive oil", ["1", "tablespoons", "olive", "oil"]),
        ];
        for (phrase, expected) in pairs {
            assert_eq!(tokenize(phrase), expected, "{phrase}");
        }
    }

    #[test]
    fn test_abbreviation_without_number_is_untouched() {
        assert_eq!(tokenize("a pinch of g salt"), ["a", "pinch", "of", "g", "salt"]);
        assert_eq!(tokenize("oz of ml"), ["oz", "of", "ml"]);
    }

    #[test]
    fn test_abbreviation_must_end_the_word() {
        assert_eq!(tokenize("1gallon milk"), ["1gallon", "milk"]);
        assert_eq!(tokenize("100grams flour"), ["100grams", "flour"]);
        assert_eq!(tokenize("2tspn salt"), ["2tspn", "salt"]);
        assert_eq!(tokenize("100g, sifted"), ["100", "grams", ",", "sifted"]);
    }

    #[test]
    fn test_mixed_numbers_are_single_tokens() {
        assert_eq!(tokenize("1 3/4 cups"), ["1$3/4", "cups"]);
        assert_eq!(tokenize("10   1/2 ounces"), ["10$1/2", "ounces"]);
        assert_eq!(tokenize("about 6 1/2-inch pieces"), ["about", "6$1/2-inch", "pieces"]);
    }

    #[test]
    fn test_whitespace_never_yields_empty_tokens() {
        assert_eq!(tokenize("  salt \t and   pepper  "), ["salt", "and", "pepper"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_is_pure() {
        let tokenizer = Tokenizer::new().unwrap();
        let phrase = "2 1/2 pounds bell peppers (about 6 peppers), cut";
        assert_eq!(tokenizer.tokenize(phrase), tokenizer.tokenize(phrase));
    }

    #[test]
    fn test_non_ascii_tokens() {
        assert_eq!(tokenize("2 jalapeños, seeded"), ["2", "jalapeños", ",", "seeded"]);
    }
}
