#![warn(missing_docs)]

//! # ms2fft: frequency-domain reports for seismic recordings
//!
//! Converts a multi-segment seismic time-series recording into a
//! frequency-domain report. For every logical trace in the input, the
//! pipeline reconstructs one contiguous sample sequence from the trace's
//! segments, removes the DC offset, runs a forward discrete Fourier
//! transform, and writes the non-redundant half of the spectrum as
//! frequency/real/imaginary triples.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ms2fft::processor::Pipeline;
//! use ms2fft::reader;
//!
//! let mut reader = reader::from_file("recording.strc")?;
//! let mut sink = std::fs::File::create("fftoutput.txt")?;
//! let report = Pipeline::new().run(reader.as_mut(), &mut sink, None)?;
//! println!("{} traces, {} bins", report.traces_processed, report.bins_written);
//! ```

// Declare modules
/// Core data model: traces, segments, sample buffers
pub mod core;
/// Error types for pipeline operations
pub mod error;
/// Optional magnitude-spectrum chart rendering
pub mod plot;
/// Trace assembly, statistics, and the pipeline driver
pub mod processor;
/// Trace reader implementations
pub mod reader;
/// Transform-engine binding and report formatting
pub mod spectrum;

// Export public types
pub use crate::core::{AssembledTrace, SampleBuffer, SampleEncoding, Segment, Trace};
pub use error::{SeisError, SeisResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
