use crate::error::SeisResult;
use crate::processor::{SummaryStats, assemble, demean};
use crate::reader::TraceReader;
use crate::spectrum::{Spectrum, write_spectrum};
use log::{debug, info, warn};
use std::io::Write;

/// Counters describing one pipeline run
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Traces fully assembled, transformed, and written
    pub traces_processed: u64,
    /// Traces skipped after a recoverable error
    pub traces_failed: u64,
    /// Frequency bins written to the report
    pub bins_written: u64,
    /// Largest sample rate seen across processed traces, in Hz
    pub max_sample_rate: f64,
}

/// Per-trace driver: assemble, compute statistics, demean, transform, write.
///
/// Recoverable per-trace errors are logged and counted; the run continues
/// with the next trace. Reader and sink errors abort the run.
pub struct Pipeline {
    half: bool,
}

impl Pipeline {
    /// Create a driver that emits the non-redundant half spectrum
    pub fn new() -> Self {
        Pipeline { half: true }
    }

    /// Emit the full spectrum instead of the non-redundant half
    pub fn full_spectrum(mut self, full: bool) -> Self {
        self.half = !full;
        self
    }

    /// Process every trace the reader yields, writing records to `sink`.
    /// When `dump` is given, demeaned samples are written to it one per
    /// line before each trace is transformed.
    pub fn run<W: Write>(
        &self,
        reader: &mut dyn TraceReader,
        sink: &mut W,
        mut dump: Option<&mut dyn Write>,
    ) -> SeisResult<PipelineReport> {
        let mut report = PipelineReport::default();

        while let Some(trace) = reader.next_trace()? {
            let mut assembled = match assemble(&trace) {
                Ok(assembled) => assembled,
                Err(err) => {
                    warn!("skipping trace {}: {err}", trace.id);
                    report.traces_failed += 1;
                    continue;
                }
            };

            let stats = match SummaryStats::compute(&assembled.samples) {
                Ok(stats) => stats,
                Err(err) => {
                    warn!("skipping trace {}: {err}", trace.id);
                    report.traces_failed += 1;
                    continue;
                }
            };
            demean(&mut assembled.samples, stats.mean);
            debug!(
                "trace {}: {} samples at {} Hz, mean {:.6}, stddev {:.6}",
                trace.id,
                assembled.samples.len(),
                assembled.sample_rate,
                stats.mean,
                stats.std_dev
            );

            if let Some(out) = dump.as_mut() {
                for v in &assembled.samples {
                    writeln!(out, "{v:.6}")?;
                }
            }

            let spectrum = Spectrum::forward(&assembled.samples, assembled.sample_rate);
            write_spectrum(&spectrum, self.half, sink)?;

            let count = if self.half {
                spectrum.len() / 2
            } else {
                spectrum.len()
            };
            report.bins_written += count as u64;
            report.traces_processed += 1;
            report.max_sample_rate = report.max_sample_rate.max(assembled.sample_rate);
        }

        info!(
            "processed {} trace(s), {} failed, {} bin(s) written",
            report.traces_processed, report.traces_failed, report.bins_written
        );
        Ok(report)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new()
    }
}
