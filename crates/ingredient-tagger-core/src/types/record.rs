use serde::{Deserialize, Serialize};

/// One labelled training example: an ingredient phrase together with the
/// structured values a human annotator extracted from it.
///
/// Text fields default to the empty string and numeric fields to `0.0`,
/// which is how blank cells in the labelled dataset are read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// The free-text phrase, e.g. "4 to 6 large cloves garlic".
    pub input: String,

    /// Ingredient name, e.g. "garlic".
    #[serde(default)]
    pub name: String,

    /// Quantity. `0.0` means the phrase has no quantity.
    #[serde(default)]
    pub qty: f64,

    /// Upper bound of a quantity range ("4 to 6"). `0.0` means no range.
    #[serde(default)]
    pub range_end: f64,

    /// Unit, e.g. "clove".
    #[serde(default)]
    pub unit: String,

    /// Everything else the annotator considered a comment.
    #[serde(default)]
    pub comment: String,
}

impl Record {
    /// Creates a record with the given phrase and all fields blank.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_qty(mut self, qty: f64) -> Self {
        self.qty = qty;
        self
    }

    #[must_use]
    pub fn with_range_end(mut self, range_end: f64) -> Self {
        self.range_end = range_end;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns `true` if the record carries a quantity range.
    #[must_use]
    pub fn has_range(&self) -> bool {
        self.range_end != 0.0
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record(input={:?}", self.input)?;
        if self.qty != 0.0 {
            write!(f, ", qty={}", self.qty)?;
        }
        if self.has_range() {
            write!(f, ", range_end={}", self.range_end)?;
        }
        if !self.unit.is_empty() {
            write!(f, ", unit={:?}", self.unit)?;
        }
        if !self.name.is_empty() {
            write!(f, ", name={:?}", self.name)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_blank() {
        let record = Record::new("3 bananas");
        assert_eq!(record.input, "3 bananas");
        assert_eq!(record.qty, 0.0);
        assert_eq!(record.range_end, 0.0);
        assert!(record.name.is_empty());
        assert!(record.unit.is_empty());
        assert!(record.comment.is_empty());
        assert!(!record.has_range());
    }

    #[test]
    fn record_display() {
        let record = Record::new("4 to 6 large cloves garlic")
            .with_qty(4.0)
            .with_range_end(6.0)
            .with_unit("clove")
            .with_name("garlic");
        let display = record.to_string();
        assert!(display.contains("qty=4"));
        assert!(display.contains("range_end=6"));
        assert!(display.contains("\"clove\""));
        assert!(display.contains("\"garlic\""));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let record: Record = serde_json::from_str(r#"{"input": "3 bananas", "qty": 3.0}"#).unwrap();
        assert_eq!(record, Record::new("3 bananas").with_qty(3.0));
    }
}
