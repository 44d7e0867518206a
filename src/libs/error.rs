use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurateError {
    /// The annotation table is malformed (missing column, bad coordinate)
    SchemaError {
        /// A human-readable message explaining the error
        message: String,
        /// The line number (1-based)
        line: usize,
    },
    /// Parameters that can never produce a match
    ConfigurationError(String),
}

impl CurateError {
    pub fn schema(line: usize, message: impl Into<String>) -> Self {
        CurateError::SchemaError {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for CurateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurateError::SchemaError { message, line } => {
                write!(f, "Schema error at line {}: {}", line, message)
            }
            CurateError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CurateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = CurateError::schema(3, "expected 16 or 17 columns, found 5");
        assert_eq!(
            err.to_string(),
            "Schema error at line 3: expected 16 or 17 columns, found 5"
        );

        let err = CurateError::ConfigurationError("tolerance must be non-negative".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: tolerance must be non-negative"
        );
    }
}
