pub mod features;
pub mod matcher;
pub mod tags;
pub mod tokenizer;
pub mod translator;

pub use features::TokenFeatures;
pub use matcher::{ExpectedTokens, FieldMatcher, MatchState};
pub use tags::{Field, Tag};
pub use tokenizer::Tokenizer;
pub use translator::{RangeEndTagging, TaggedPhrase, TaggedToken, Translator, TranslatorConfig};
