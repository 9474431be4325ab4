use crate::domain::model::Level;
use crate::utils::error::{MathsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MathsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Source tags are `guest:<language>:<operation>`, so segments may not contain
/// the separator or whitespace.
pub fn validate_tag_segment(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains(':') || value.chars().any(char::is_whitespace) {
        return Err(MathsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot contain ':' or whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MathsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MathsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_level(field_name: &str, value: &str) -> Result<Level> {
    Level::parse(value).ok_or_else(|| MathsError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Valid levels: trace, debug, info, warn, error, critical".to_string(),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| MathsError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Field is required".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tag_segment() {
        assert!(validate_tag_segment("component.language", "rust").is_ok());
        assert!(validate_tag_segment("component.language", "").is_err());
        assert!(validate_tag_segment("component.language", "ru st").is_err());
        assert!(validate_tag_segment("component.language", "guest:rust").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("logging.file", "./guest.jsonl").is_ok());
        assert!(validate_path("logging.file", "").is_err());
        assert!(validate_path("logging.file", "a\0b").is_err());
    }

    #[test]
    fn test_validate_level() {
        assert_eq!(validate_level("logging.level", "Info").unwrap(), Level::Info);
        assert!(validate_level("logging.level", "verbose").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("x", &present).unwrap(), 3);
        assert!(validate_required_field("x", &missing).is_err());
    }
}
