//! Alignment of phrase tokens with the structured fields of a record.
//!
//! Not every word of a phrase has a field, quantities are stored as numbers
//! but spelled as text, and comments are often stitched together from
//! several parts of the phrase. Matching is therefore best-effort: a token
//! that matches nothing is simply left unlabelled.

use std::collections::HashSet;

use crate::tagging::tags::Field;
use crate::tagging::tokenizer::Tokenizer;
use crate::text::{clean_unicode_fractions, format_quantity, normalize_token, parse_quantity};
use crate::types::Record;

/// Words that join the two ends of a quantity range ("4 to 6").
const RANGE_CONNECTORS: &[&str] = &["to", "-", "or"];

/// The token forms each field of a record is expected to take in its phrase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedTokens {
    /// Formatted quantity, absent when the record has none.
    pub qty: Option<String>,
    /// Formatted range end, absent when the record has no range.
    pub range_end: Option<String>,
    pub unit: HashSet<String>,
    pub name: HashSet<String>,
    pub comment: HashSet<String>,
}

impl ExpectedTokens {
    /// Tokenize and normalize every field value of a record.
    pub fn from_record(record: &Record, tokenizer: &Tokenizer, clean_fractions: bool) -> Self {
        let text_tokens = |value: &str| -> HashSet<String> {
            let value = if clean_fractions {
                clean_unicode_fractions(value)
            } else {
                value.to_string()
            };
            tokenizer
                .tokenize(&value)
                .iter()
                .map(|t| normalize_token(t))
                .collect()
        };
        let number = |value: f64| (value != 0.0).then(|| format_quantity(value));

        Self {
            qty: number(record.qty),
            range_end: number(record.range_end),
            unit: text_tokens(&record.unit),
            name: text_tokens(&record.name),
            comment: text_tokens(&record.comment),
        }
    }

    /// Fields that have a value to look for in the phrase.
    pub fn fields(&self) -> Vec<Field> {
        [
            (Field::Qty, self.qty.is_some()),
            (Field::RangeEnd, self.range_end.is_some()),
            (Field::Unit, !self.unit.is_empty()),
            (Field::Name, !self.name.is_empty()),
            (Field::Comment, !self.comment.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}

/// Which quantity slots of the record are still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// The quantity has not been seen yet.
    AwaitingQty,
    /// The quantity is consumed (or absent) and a range end is expected.
    AwaitingRangeEnd,
    /// Every quantity slot is consumed; only text fields can match.
    Settled,
}

/// Walks a phrase token by token and decides which field each token belongs to.
///
/// Priority per token: quantity, range end, unit, name, comment. Each
/// quantity slot matches at most once, so a repeated number later in the
/// phrase ("or 1 cup canned") is not tagged as the quantity again.
#[derive(Debug, Clone)]
pub struct FieldMatcher<'a> {
    expected: &'a ExpectedTokens,
    state: MatchState,
    previous: Option<Field>,
}

impl<'a> FieldMatcher<'a> {
    pub fn new(expected: &'a ExpectedTokens) -> Self {
        let state = if expected.qty.is_some() {
            MatchState::AwaitingQty
        } else if expected.range_end.is_some() {
            MatchState::AwaitingRangeEnd
        } else {
            MatchState::Settled
        };

        Self {
            expected,
            state,
            previous: None,
        }
    }

    /// The quantity slots still open after the tokens seen so far.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Consume the next token and return the field it belongs to, if any.
    pub fn next_field(&mut self, token: &str) -> Option<Field> {
        let field = self.match_token(token);
        self.previous = field;
        field
    }

    fn match_token(&mut self, token: &str) -> Option<Field> {
        let number = parse_quantity(token).map(format_quantity);

        match self.state {
            MatchState::AwaitingQty if number.is_some() && number == self.expected.qty => {
                self.state = if self.expected.range_end.is_some() {
                    MatchState::AwaitingRangeEnd
                } else {
                    MatchState::Settled
                };
                return Some(Field::Qty);
            }
            MatchState::AwaitingRangeEnd
                if number.is_some() && number == self.expected.range_end =>
            {
                self.state = MatchState::Settled;
                return Some(Field::RangeEnd);
            }
            MatchState::AwaitingRangeEnd
                if self.previous == Some(Field::Qty) && RANGE_CONNECTORS.contains(&token) =>
            {
                return None;
            }
            _ => {}
        }

        let normalized = normalize_token(token);
        if self.expected.unit.contains(&normalized) {
            Some(Field::Unit)
        } else if self.expected.name.contains(&normalized) {
            Some(Field::Name)
        } else if self.expected.comment.contains(&normalized) {
            Some(Field::Comment)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(record: &Record) -> ExpectedTokens {
        ExpectedTokens::from_record(record, &Tokenizer::new().unwrap(), true)
    }

    fn match_all(record: &Record, tokens: &[&str]) -> Vec<Option<Field>> {
        let expected = expected(record);
        let mut matcher = FieldMatcher::new(&expected);
        tokens.iter().map(|t| matcher.next_field(t)).collect()
    }

    #[test]
    fn test_expected_tokens() {
        let record = Record::new("2 1/2 pounds bell peppers")
            .with_qty(2.5)
            .with_unit("pound")
            .with_name("Bell Peppers");
        let expected = expected(&record);
        assert_eq!(expected.qty.as_deref(), Some("2.5"));
        assert_eq!(expected.range_end, None);
        assert!(expected.unit.contains("pound"));
        assert!(expected.name.contains("bell"));
        assert!(expected.name.contains("peppers"));
        assert!(expected.comment.is_empty());
        assert_eq!(expected.fields(), [Field::Qty, Field::Unit, Field::Name]);
    }

    #[test]
    fn test_range_states() {
        let record = Record::new("4 to 6 large cloves garlic")
            .with_qty(4.0)
            .with_range_end(6.0)
            .with_unit("clove")
            .with_name("garlic");
        let expected = expected(&record);
        let mut matcher = FieldMatcher::new(&expected);

        assert_eq!(matcher.state(), MatchState::AwaitingQty);
        assert_eq!(matcher.next_field("4"), Some(Field::Qty));
        assert_eq!(matcher.state(), MatchState::AwaitingRangeEnd);
        assert_eq!(matcher.next_field("to"), None);
        assert_eq!(matcher.next_field("6"), Some(Field::RangeEnd));
        assert_eq!(matcher.state(), MatchState::Settled);
        assert_eq!(matcher.next_field("large"), None);
        assert_eq!(matcher.next_field("cloves"), Some(Field::Unit));
        assert_eq!(matcher.next_field("garlic"), Some(Field::Name));
    }

    #[test]
    fn test_connector_only_after_quantity() {
        let record = Record::new("4 cloves garlic, 6 to taste")
            .with_qty(4.0)
            .with_range_end(6.0)
            .with_comment("to taste");
        let fields = match_all(&record, &["4", "cloves", "to", "6", "to"]);
        assert_eq!(
            fields,
            [Some(Field::Qty), None, Some(Field::Comment), Some(Field::RangeEnd), Some(Field::Comment)]
        );
    }

    #[test]
    fn test_quantity_slot_is_consumed_once() {
        let record = Record::new("1 cup chestnuts, or 1 cup canned")
            .with_qty(1.0)
            .with_unit("cup")
            .with_name("chestnuts");
        let fields = match_all(&record, &["1", "cup", "chestnuts", ",", "or", "1", "cup"]);
        assert_eq!(
            fields,
            [
                Some(Field::Qty),
                Some(Field::Unit),
                Some(Field::Name),
                None,
                None,
                None,
                Some(Field::Unit)
            ]
        );
    }

    #[test]
    fn test_clumped_quantity_matches_float() {
        let record = Record::new("2 1/2 pounds").with_qty(2.5).with_unit("pound");
        assert_eq!(
            match_all(&record, &["2$1/2", "pounds"]),
            [Some(Field::Qty), Some(Field::Unit)]
        );
    }

    #[test]
    fn test_unit_beats_name() {
        let record = Record::new("2 cloves garlic")
            .with_qty(2.0)
            .with_unit("clove")
            .with_name("garlic cloves");
        let expected = expected(&record);
        assert!(expected.unit.contains("clove"));
        assert!(expected.name.contains("clove"));
        assert_eq!(
            match_all(&record, &["2", "cloves", "garlic"]),
            [Some(Field::Qty), Some(Field::Unit), Some(Field::Name)]
        );
    }

    #[test]
    fn test_name_beats_comment() {
        let record = Record::new("bell peppers (about 6 peppers)")
            .with_name("bell peppers")
            .with_comment("(about 6 peppers)");
        assert_eq!(
            match_all(&record, &["peppers", "(", "6"]),
            [Some(Field::Name), Some(Field::Comment), Some(Field::Comment)]
        );
    }

    #[test]
    fn test_matching_ignores_case() {
        let record = Record::new("2 Cloves Garlic").with_unit("clove").with_name("garlic");
        assert_eq!(
            match_all(&record, &["Cloves", "Garlic"]),
            [Some(Field::Unit), Some(Field::Name)]
        );
    }

    #[test]
    fn test_zero_quantity_has_no_slot() {
        let record = Record::new("0 salt").with_name("salt");
        let expected = expected(&record);
        assert_eq!(FieldMatcher::new(&expected).state(), MatchState::Settled);
        assert_eq!(match_all(&record, &["0", "salt"]), [None, Some(Field::Name)]);
    }

    #[test]
    fn test_unmatched_values_fall_through() {
        let record = Record::new("a handful of herbs").with_qty(3.0).with_name("basil");
        assert_eq!(match_all(&record, &["a", "handful", "of", "herbs"]), [None, None, None, None]);
    }
}
