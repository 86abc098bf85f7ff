use thiserror::Error;

/// Rejected form input. The `Display` text is the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired { fields: Vec<&'static str> },
    #[error("{label} must be at least {min} characters.")]
    TooShort { label: &'static str, min: usize },
    #[error("Please select a file to upload")]
    MissingFile,
}

pub(crate) fn require_min_len(
    value: &str,
    label: &'static str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { label, min });
    }
    Ok(())
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_message_names_field_and_minimum() {
        let err = require_min_len("x", "Title", 2).unwrap_err();
        assert_eq!(err.to_string(), "Title must be at least 2 characters.");
    }

    #[test]
    fn min_len_counts_characters_not_bytes() {
        assert!(require_min_len("éé", "Title", 2).is_ok());
        assert!(require_min_len("é", "Title", 2).is_err());
    }

    #[test]
    fn missing_required_has_single_user_message() {
        let err = ValidationError::MissingRequired {
            fields: vec!["name", "email"],
        };
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" a "));
    }
}
