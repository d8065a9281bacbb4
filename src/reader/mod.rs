//! Trace reader implementations

/// Length-prefixed container reader
pub mod container;
/// In-memory reader for tests and deterministic playback
pub mod memory;

pub use container::ContainerReader;
pub use memory::MemoryReader;

use crate::core::Trace;
use crate::error::SeisResult;
use std::path::Path;

/// Trait for recording readers that yield logical traces
pub trait TraceReader {
    /// Get the next logical trace from the recording
    fn next_trace(&mut self) -> SeisResult<Option<Trace>>;
}

/// Create a reader from a file path
pub fn from_file<P: AsRef<Path>>(path: P) -> SeisResult<Box<dyn TraceReader>> {
    ContainerReader::from_file(path).map(|r| Box::new(r) as Box<dyn TraceReader>)
}
