use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    InvalidConfiguration { reason: String },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl Error for MonitorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = MonitorError::InvalidConfiguration {
            reason: "patience must be a positive integer, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: patience must be a positive integer, got 0"
        );
    }
}
