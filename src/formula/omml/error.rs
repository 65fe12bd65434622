use thiserror::Error;

/// Errors that can occur during OMML parsing
#[derive(Error, Debug)]
pub enum OmmlError {
    /// Malformed XML reported by the reader
    #[error("XML parsing error at position {position}: {message}")]
    Xml { position: u64, message: String },

    /// Element or text content is not valid UTF-8
    #[error("Text encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Nesting deeper than the parser accepts
    #[error("XML depth limit exceeded: {0}")]
    DepthLimitExceeded(usize),

    /// Input is well-formed XML but not usable OMML
    #[error("Invalid OMML structure: {0}")]
    InvalidStructure(String),
}
