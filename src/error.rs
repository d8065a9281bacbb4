use std::io;
use thiserror::Error;

/// Result type for spectral pipeline operations
pub type SeisResult<T> = Result<T, SeisError>;

/// Error types for reading, assembling, and reporting traces
#[derive(Error, Debug)]
pub enum SeisError {
    /// IO error (file operations, writing the report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input is not a recognized recording container
    #[error("Unsupported container: {0}")]
    UnsupportedContainer(String),

    /// Container header or record structure is malformed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Segment carries an encoding tag this reader does not know
    #[error("Unknown sample encoding tag: {tag}")]
    UnknownEncoding {
        /// The offending tag byte
        tag: u8,
    },

    /// Trace produced no numeric samples to analyze
    #[error("Trace {id} has no numeric samples")]
    EmptyTrace {
        /// Identifier of the empty trace
        id: String,
    },

    /// Statistics requested over an empty sample sequence
    #[error("Cannot compute statistics of an empty sample sequence")]
    EmptyStatistics,

    /// Chart rendering failed
    #[error("Plot error: {0}")]
    PlotError(String),
}
