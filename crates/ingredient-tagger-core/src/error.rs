use thiserror::Error;

/// Errors that can occur while tokenizing or tagging ingredient phrases.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A tag string is not part of the training label vocabulary.
    #[error("unknown tag: {0:?}")]
    UnknownTag(String),
}

/// Result type alias for tagger operations.
pub type Result<T> = std::result::Result<T, TaggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TaggerError::UnknownTag("B-FOO".into());
        assert_eq!(err.to_string(), "unknown tag: \"B-FOO\"");

        let err = TaggerError::from(regex::Regex::new("(").unwrap_err());
        assert!(err.to_string().starts_with("regex compilation error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TaggerError>();
    }
}
