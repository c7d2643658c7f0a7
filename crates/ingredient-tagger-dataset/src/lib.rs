//! # Ingredient Tagger Dataset
//!
//! Dataset plumbing around the core translator: reading and writing the
//! labelled ingredient CSV, and generating CRF training files from it.

pub mod error;
pub mod generate;
pub mod labelled_data;

pub use error::{DataError, Result};
pub use generate::{GenerateStats, OutputFormat, generate, normalize, write_phrase};
pub use labelled_data::{REQUIRED_COLUMNS, Reader, Writer};
