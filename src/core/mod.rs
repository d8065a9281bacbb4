//! Core data model for traces and segments

/// Trace, segment, and sample buffer types
pub mod trace;

pub use trace::{AssembledTrace, SampleBuffer, SampleEncoding, Segment, Trace};
