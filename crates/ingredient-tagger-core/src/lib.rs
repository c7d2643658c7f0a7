//! # Ingredient Tagger Core
//!
//! Turns labelled recipe ingredient phrases into CRF++ training data.
//! Provides the phrase tokenizer, the BIO tag vocabulary and the row
//! translator that aligns phrase tokens with a record's structured fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use ingredient_tagger_core::{Record, Tag, Translator, TranslatorConfig};
//!
//! let translator = Translator::new(TranslatorConfig::default()).unwrap();
//! let record = Record::new("4 to 6 large cloves garlic")
//!     .with_qty(4.0)
//!     .with_range_end(6.0)
//!     .with_unit("clove")
//!     .with_name("garlic");
//!
//! let phrase = translator.translate(&record);
//! assert_eq!(phrase.texts(), ["4", "to", "6", "large", "cloves", "garlic"]);
//! assert_eq!(phrase.tags()[4], Tag::BeginUnit);
//! ```
pub mod error;
pub mod tagging;
pub mod text;
pub mod types;

// Re-export primary API
pub use error::{Result, TaggerError};
pub use tagging::{
    ExpectedTokens, Field, FieldMatcher, MatchState, RangeEndTagging, Tag, TaggedPhrase,
    TaggedToken, TokenFeatures, Tokenizer, Translator, TranslatorConfig,
};
pub use types::Record;
