//! The spectral-analysis pipeline: assembly, statistics, and the driver

/// Trace assembly into one sample sequence
pub mod assemble;
/// Per-recording pipeline driver
pub mod pipeline;
/// Summary statistics and demeaning
pub mod stats;

pub use assemble::assemble;
pub use pipeline::{Pipeline, PipelineReport};
pub use stats::{SummaryStats, demean};
