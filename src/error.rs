use thiserror::Error;

/// Common URL error types
#[derive(Error, Debug)]
pub enum UrlError {
    #[error("Invalid suffix record {record}: {message}")]
    InvalidSuffixRecord { record: usize, message: String },

    #[error("No match: {0:?} is not a recognized URL")]
    NoMatch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UrlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_record_error_is_matchable() {
        let err = UrlError::InvalidSuffixRecord {
            record: 3,
            message: "top-level label contains '.'".into(),
        };
        match &err {
            UrlError::InvalidSuffixRecord { record, .. } => assert_eq!(*record, 3),
            _ => panic!("expected InvalidSuffixRecord"),
        }
    }

    #[test]
    fn test_suffix_record_display_includes_record_number() {
        let err = UrlError::InvalidSuffixRecord {
            record: 7,
            message: "bad label".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("record 7"), "got: {}", display);
        assert!(display.contains("bad label"), "got: {}", display);
    }

    #[test]
    fn test_no_match_display_quotes_input() {
        let err = UrlError::NoMatch("http://a b.com/".into());
        assert_eq!(
            err.to_string(),
            "No match: \"http://a b.com/\" is not a recognized URL"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: UrlError = io.into();
        assert!(matches!(err, UrlError::IoError(_)));
    }
}
