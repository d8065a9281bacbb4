use crate::core::{AssembledTrace, SampleBuffer, Trace};
use crate::error::{SeisError, SeisResult};
use log::{debug, warn};

/// Flatten a trace's segments into one f64 sample sequence.
///
/// The output is sized once from the declared total. Numeric segments are
/// converted element by element; text segments contribute no samples and are
/// reported as a warning, which shortens the assembled sequence relative to
/// the declared total. The trace's sample rate is the most recently
/// processed segment's rate; a rate change between segments is warned about
/// but does not stop assembly.
pub fn assemble(trace: &Trace) -> SeisResult<AssembledTrace> {
    let declared_total = trace.total_declared() as usize;
    let mut samples: Vec<f64> = Vec::with_capacity(declared_total);
    let mut sample_rate: Option<f64> = None;

    for (idx, segment) in trace.segments.iter().enumerate() {
        if let Some(rate) = sample_rate {
            if rate != segment.sample_rate() {
                warn!(
                    "trace {}: segment {} reports {} Hz after {} Hz; keeping the most recent rate",
                    trace.id,
                    idx,
                    segment.sample_rate(),
                    rate
                );
            }
        }
        // last segment wins, matching the recording layout's convention
        sample_rate = Some(segment.sample_rate());

        let buffer = segment.materialize();
        if buffer.len() as u64 != segment.declared_count() {
            warn!(
                "trace {}: segment {} decoded {} of {} declared samples",
                trace.id,
                idx,
                buffer.len(),
                segment.declared_count()
            );
        }

        match buffer {
            SampleBuffer::Int32(values) => {
                samples.extend(values.iter().map(|&v| f64::from(v)));
            }
            SampleBuffer::Float32(values) => {
                samples.extend(values.iter().map(|&v| f64::from(v)));
            }
            SampleBuffer::Float64(values) => {
                samples.extend(values);
            }
            SampleBuffer::Text(text) => {
                warn!(
                    "trace {}: segment {} is a {}-byte text segment, contributes no numeric samples",
                    trace.id,
                    idx,
                    text.len()
                );
                debug!("trace {}: segment {} text: {}", trace.id, idx, text);
            }
        }
    }

    let sample_rate = sample_rate.ok_or_else(|| SeisError::EmptyTrace {
        id: trace.id.clone(),
    })?;
    if samples.is_empty() {
        return Err(SeisError::EmptyTrace {
            id: trace.id.clone(),
        });
    }

    Ok(AssembledTrace {
        samples,
        sample_rate,
    })
}
