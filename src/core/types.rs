/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    IoError,
    ParseError,
    ValidationError,
}

impl ErrorCategory {
    /// Stable code shown in front of the message.
    pub fn code(self) -> &'static str {
        match self {
            ErrorCategory::IoError => "IO_ERROR",
            ErrorCategory::ParseError => "PARSE_ERROR",
            ErrorCategory::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
