use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathsError {
    #[error("Arithmetic overflow: {a} {op} {b}")]
    Overflow { op: String, a: String, b: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operand '{value}': {reason}")]
    InvalidOperand { value: String, reason: String },

    #[error("Logging sink failed: {message}")]
    Logging { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MathsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MathsError::Overflow { .. }
            | MathsError::DivisionByZero
            | MathsError::InvalidOperand { .. } => ErrorSeverity::High,
            MathsError::Logging { .. } | MathsError::IoError(_) => ErrorSeverity::Medium,
            MathsError::ConfigError { .. }
            | MathsError::ConfigValidationError { .. }
            | MathsError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            MathsError::SerializationError(_) => ErrorSeverity::High,
        }
    }

    /// Stable name reported to hosts alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            MathsError::Overflow { .. } => "overflow",
            MathsError::DivisionByZero => "division_by_zero",
            MathsError::InvalidOperand { .. } => "invalid_operand",
            MathsError::Logging { .. } => "logging",
            MathsError::ConfigError { .. }
            | MathsError::ConfigValidationError { .. }
            | MathsError::InvalidConfigValueError { .. } => "config",
            MathsError::IoError(_) => "io",
            MathsError::SerializationError(_) => "serialization",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MathsError::Overflow { op, a, b } => {
                format!("The result of {} {} {} does not fit the numeric type", a, op, b)
            }
            MathsError::DivisionByZero => "Cannot divide by zero".to_string(),
            MathsError::InvalidOperand { value, .. } => {
                format!("'{}' is not a valid operand", value)
            }
            MathsError::Logging { .. } => "The log sink rejected the event".to_string(),
            MathsError::ConfigError { .. }
            | MathsError::ConfigValidationError { .. }
            | MathsError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MathsError::Overflow { .. } => "Use smaller operands or switch to --numeric float",
            MathsError::DivisionByZero => "Pass a non-zero divisor",
            MathsError::InvalidOperand { .. } => {
                "Check that operands match the configured numeric family"
            }
            MathsError::Logging { .. } => "Check that the log file is writable",
            MathsError::ConfigError { .. }
            | MathsError::ConfigValidationError { .. }
            | MathsError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
            MathsError::IoError(_) => "Check file paths and permissions",
            MathsError::SerializationError(_) => "Send one JSON object per line",
        }
    }
}

pub type Result<T> = std::result::Result<T, MathsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_errors_are_high_severity() {
        assert_eq!(MathsError::DivisionByZero.severity(), ErrorSeverity::High);
        let overflow = MathsError::Overflow {
            op: "*".to_string(),
            a: "9".to_string(),
            b: "9".to_string(),
        };
        assert_eq!(overflow.severity(), ErrorSeverity::High);
        assert_eq!(overflow.kind(), "overflow");
        assert_eq!(overflow.to_string(), "Arithmetic overflow: 9 * 9");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = MathsError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.kind(), "config");
        assert!(err.user_friendly_message().contains("bad"));
    }
}
