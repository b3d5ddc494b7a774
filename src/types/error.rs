use thiserror::Error;

/// cleanquote error types
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Failed to parse a policy file
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Pricing policy is missing or malformed
    #[error("config error: {0}")]
    Config(String),

    /// Input named a clean type, condition, pet load or add-on we don't know
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Caller-supplied input that cannot be priced at all
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for cleanquote
pub type Result<T> = std::result::Result<T, QuoteError>;
