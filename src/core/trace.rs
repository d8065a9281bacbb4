use crate::error::{SeisError, SeisResult};

/// Native encoding of a segment's sample payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEncoding {
    /// 32-bit signed integer samples
    Int32,
    /// 32-bit float samples
    Float32,
    /// 64-bit float samples
    Float64,
    /// ASCII text; carries no numeric samples
    Text,
}

impl SampleEncoding {
    /// Resolve a container tag byte to an encoding
    pub fn from_tag(tag: u8) -> SeisResult<Self> {
        match tag {
            0 => Ok(SampleEncoding::Int32),
            1 => Ok(SampleEncoding::Float32),
            2 => Ok(SampleEncoding::Float64),
            3 => Ok(SampleEncoding::Text),
            t => Err(SeisError::UnknownEncoding { tag: t }),
        }
    }

    /// Get the container tag byte for this encoding
    pub fn tag(&self) -> u8 {
        match self {
            SampleEncoding::Int32 => 0,
            SampleEncoding::Float32 => 1,
            SampleEncoding::Float64 => 2,
            SampleEncoding::Text => 3,
        }
    }

    /// Get bytes per encoded sample
    pub fn sample_size(&self) -> usize {
        match self {
            SampleEncoding::Int32 => 4,
            SampleEncoding::Float32 => 4,
            SampleEncoding::Float64 => 8,
            SampleEncoding::Text => 1,
        }
    }

    /// Get the encoding name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            SampleEncoding::Int32 => "int32",
            SampleEncoding::Float32 => "float32",
            SampleEncoding::Float64 => "float64",
            SampleEncoding::Text => "text",
        }
    }
}

/// A segment's samples materialized into their native type
#[derive(Debug, Clone, PartialEq)]
pub enum SampleBuffer {
    /// 32-bit signed integer samples
    Int32(Vec<i32>),
    /// 32-bit float samples
    Float32(Vec<f32>),
    /// 64-bit float samples
    Float64(Vec<f64>),
    /// Text payload, not convertible to numeric samples
    Text(String),
}

impl SampleBuffer {
    /// Get the decoded sample count (byte count for text)
    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::Int32(values) => values.len(),
            SampleBuffer::Float32(values) => values.len(),
            SampleBuffer::Float64(values) => values.len(),
            SampleBuffer::Text(text) => text.len(),
        }
    }

    /// Check if the buffer holds nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the encoding this buffer was decoded from
    pub fn encoding(&self) -> SampleEncoding {
        match self {
            SampleBuffer::Int32(_) => SampleEncoding::Int32,
            SampleBuffer::Float32(_) => SampleEncoding::Float32,
            SampleBuffer::Float64(_) => SampleEncoding::Float64,
            SampleBuffer::Text(_) => SampleEncoding::Text,
        }
    }
}

/// Segment payload, either raw container bytes or an already typed buffer
#[derive(Debug, Clone)]
enum SegmentPayload {
    Raw(Vec<u8>),
    Decoded(SampleBuffer),
}

/// A contiguous run of samples sharing one encoding and nominal rate
#[derive(Debug, Clone)]
pub struct Segment {
    /// Nominal sample rate in samples per second
    sample_rate: f64,
    /// Native encoding of the payload
    encoding: SampleEncoding,
    /// Sample count the container header declares for this segment
    declared_count: u64,
    /// Undecoded or pre-decoded sample data
    payload: SegmentPayload,
}

impl Segment {
    /// Create a segment over raw container bytes, decoded on demand
    pub fn from_raw(
        sample_rate: f64,
        encoding: SampleEncoding,
        declared_count: u64,
        raw: Vec<u8>,
    ) -> Self {
        Segment {
            sample_rate,
            encoding,
            declared_count,
            payload: SegmentPayload::Raw(raw),
        }
    }

    /// Create a segment over an already typed buffer
    pub fn from_buffer(sample_rate: f64, declared_count: u64, buffer: SampleBuffer) -> Self {
        Segment {
            sample_rate,
            encoding: buffer.encoding(),
            declared_count,
            payload: SegmentPayload::Decoded(buffer),
        }
    }

    /// Get the nominal sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Get the native encoding
    pub fn encoding(&self) -> SampleEncoding {
        self.encoding
    }

    /// Get the declared sample count
    pub fn declared_count(&self) -> u64 {
        self.declared_count
    }

    /// Materialize the typed sample buffer.
    ///
    /// A raw payload shorter than `declared_count` whole samples decodes to
    /// fewer samples without error; the trailing partial sample, if any, is
    /// dropped. The assembler reports the shortfall.
    pub fn materialize(&self) -> SampleBuffer {
        match &self.payload {
            SegmentPayload::Decoded(buffer) => buffer.clone(),
            SegmentPayload::Raw(bytes) => decode_raw(self.encoding, bytes),
        }
    }
}

fn decode_raw(encoding: SampleEncoding, bytes: &[u8]) -> SampleBuffer {
    match encoding {
        SampleEncoding::Int32 => SampleBuffer::Int32(
            bytes
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        SampleEncoding::Float32 => SampleBuffer::Float32(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        SampleEncoding::Float64 => SampleBuffer::Float64(
            bytes
                .chunks_exact(8)
                .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect(),
        ),
        SampleEncoding::Text => SampleBuffer::Text(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// One logical channel of a recording
#[derive(Debug, Clone)]
pub struct Trace {
    /// Channel identifier from the container
    pub id: String,
    /// Ordered segments composing the channel
    pub segments: Vec<Segment>,
}

impl Trace {
    /// Create an empty trace with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Trace {
            id: id.into(),
            segments: Vec::new(),
        }
    }

    /// Sum of the segments' declared sample counts
    pub fn total_declared(&self) -> u64 {
        self.segments.iter().map(|s| s.declared_count()).sum()
    }
}

/// One trace flattened into a uniform f64 sample sequence
#[derive(Debug, Clone)]
pub struct AssembledTrace {
    /// Samples in temporal order
    pub samples: Vec<f64>,
    /// Sample rate in Hz carried over from the segments
    pub sample_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_tag_round_trip() {
        for encoding in [
            SampleEncoding::Int32,
            SampleEncoding::Float32,
            SampleEncoding::Float64,
            SampleEncoding::Text,
        ] {
            assert_eq!(SampleEncoding::from_tag(encoding.tag()).unwrap(), encoding);
        }
        assert!(SampleEncoding::from_tag(9).is_err());
    }

    #[test]
    fn test_materialize_int32() {
        let mut raw = Vec::new();
        for v in [-3i32, 0, 7] {
            raw.extend_from_slice(&v.to_le_bytes());
        }
        let segment = Segment::from_raw(100.0, SampleEncoding::Int32, 3, raw);
        assert_eq!(segment.materialize(), SampleBuffer::Int32(vec![-3, 0, 7]));
    }

    #[test]
    fn test_materialize_drops_partial_sample() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&1.5f64.to_le_bytes());
        raw.extend_from_slice(&[0u8; 3]);
        let segment = Segment::from_raw(100.0, SampleEncoding::Float64, 2, raw);
        let buffer = segment.materialize();
        assert_eq!(buffer, SampleBuffer::Float64(vec![1.5]));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_materialize_text() {
        let segment = Segment::from_raw(1.0, SampleEncoding::Text, 5, b"hello".to_vec());
        assert_eq!(segment.materialize(), SampleBuffer::Text("hello".to_string()));
    }

    #[test]
    fn test_buffer_encoding_matches_variant() {
        let segment = Segment::from_buffer(50.0, 2, SampleBuffer::Float32(vec![1.0, 2.0]));
        assert_eq!(segment.encoding(), SampleEncoding::Float32);
        assert_eq!(segment.declared_count(), 2);
    }

    #[test]
    fn test_total_declared() {
        let mut trace = Trace::new("NET.STA.LOC.CHA");
        trace
            .segments
            .push(Segment::from_buffer(40.0, 3, SampleBuffer::Int32(vec![1, 2, 3])));
        trace
            .segments
            .push(Segment::from_buffer(40.0, 2, SampleBuffer::Int32(vec![4, 5])));
        assert_eq!(trace.total_declared(), 5);
    }
}
