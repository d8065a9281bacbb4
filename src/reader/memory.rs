use super::TraceReader;
use crate::core::Trace;
use crate::error::SeisResult;
use std::collections::VecDeque;

/// In-memory reader useful for tests and deterministic playback
pub struct MemoryReader {
    queue: VecDeque<Trace>,
}

impl MemoryReader {
    /// Create a reader that yields the given traces in order
    pub fn new(traces: impl IntoIterator<Item = Trace>) -> Self {
        MemoryReader {
            queue: traces.into_iter().collect(),
        }
    }
}

impl TraceReader for MemoryReader {
    fn next_trace(&mut self) -> SeisResult<Option<Trace>> {
        Ok(self.queue.pop_front())
    }
}
