//! # BIO Tags for Ingredient Phrases
//!
//! Defines the label vocabulary of the CRF training files. Uses the BIO
//! (Begin-Inside-Outside) tagging scheme so the model can tell the start of
//! a field apart from its continuation.

use std::fmt;
use std::str::FromStr;

use crate::error::TaggerError;

/// Structured fields of a labelled ingredient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Qty,
    RangeEnd,
    Unit,
    Name,
    Comment,
}

impl Field {
    /// Label stem used in the training files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Qty => "QTY",
            Self::RangeEnd => "RANGE_END",
            Self::Unit => "UNIT",
            Self::Name => "NAME",
            Self::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BIO tags for labeling tokens in ingredient phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    BeginQty,
    InsideQty,
    BeginRangeEnd,
    InsideRangeEnd,
    BeginUnit,
    InsideUnit,
    BeginName,
    InsideName,
    BeginComment,
    InsideComment,
    // Token carries none of the record's fields
    Other,
}

impl Tag {
    /// Total number of distinct tags.
    pub const NUM_TAGS: usize = 11;

    /// Get all possible tags in order.
    pub fn all_tags() -> &'static [Tag] {
        &[
            Tag::BeginQty,
            Tag::InsideQty,
            Tag::BeginRangeEnd,
            Tag::InsideRangeEnd,
            Tag::BeginUnit,
            Tag::InsideUnit,
            Tag::BeginName,
            Tag::InsideName,
            Tag::BeginComment,
            Tag::InsideComment,
            Tag::Other,
        ]
    }

    /// Position of the tag in `all_tags`, used as a dense array index.
    pub fn index(&self) -> usize {
        match self {
            Tag::BeginQty => 0,
            Tag::InsideQty => 1,
            Tag::BeginRangeEnd => 2,
            Tag::InsideRangeEnd => 3,
            Tag::BeginUnit => 4,
            Tag::InsideUnit => 5,
            Tag::BeginName => 6,
            Tag::InsideName => 7,
            Tag::BeginComment => 8,
            Tag::InsideComment => 9,
            Tag::Other => 10,
        }
    }

    /// Inverse of `index`.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::all_tags().get(idx).copied()
    }

    /// The `B-` tag for a field.
    pub fn begin(field: Field) -> Self {
        match field {
            Field::Qty => Tag::BeginQty,
            Field::RangeEnd => Tag::BeginRangeEnd,
            Field::Unit => Tag::BeginUnit,
            Field::Name => Tag::BeginName,
            Field::Comment => Tag::BeginComment,
        }
    }

    /// The `I-` tag for a field.
    pub fn inside(field: Field) -> Self {
        match field {
            Field::Qty => Tag::InsideQty,
            Field::RangeEnd => Tag::InsideRangeEnd,
            Field::Unit => Tag::InsideUnit,
            Field::Name => Tag::InsideName,
            Field::Comment => Tag::InsideComment,
        }
    }

    /// Check if this is a "Begin" tag.
    pub fn is_begin(&self) -> bool {
        matches!(
            self,
            Tag::BeginQty
                | Tag::BeginRangeEnd
                | Tag::BeginUnit
                | Tag::BeginName
                | Tag::BeginComment
        )
    }

    /// Check if this is an "Inside" tag.
    pub fn is_inside(&self) -> bool {
        !self.is_begin() && *self != Tag::Other
    }

    /// Check if this tag marks a quantity, either the quantity itself or the
    /// upper end of a range.
    pub fn is_quantity(&self) -> bool {
        matches!(self.field(), Some(Field::Qty | Field::RangeEnd))
    }

    /// Get the field this tag labels.
    pub fn field(&self) -> Option<Field> {
        match self {
            Tag::BeginQty | Tag::InsideQty => Some(Field::Qty),
            Tag::BeginRangeEnd | Tag::InsideRangeEnd => Some(Field::RangeEnd),
            Tag::BeginUnit | Tag::InsideUnit => Some(Field::Unit),
            Tag::BeginName | Tag::InsideName => Some(Field::Name),
            Tag::BeginComment | Tag::InsideComment => Some(Field::Comment),
            Tag::Other => None,
        }
    }

    /// Check if transitioning from `from` tag to `to` tag is valid.
    ///
    /// An `I-*` tag may only follow a `B-*` or `I-*` tag of the same field.
    pub fn is_valid_transition(from: Tag, to: Tag) -> bool {
        !to.is_inside() || from.field() == to.field()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field() {
            Some(field) if self.is_begin() => write!(f, "B-{field}"),
            Some(field) => write!(f, "I-{field}"),
            None => write!(f, "OTHER"),
        }
    }
}

impl FromStr for Tag {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_tags()
            .iter()
            .copied()
            .find(|tag| tag.to_string() == s)
            .ok_or_else(|| TaggerError::UnknownTag(s.to_string()))
    }
}
