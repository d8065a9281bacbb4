use super::TraceReader;
use crate::core::{SampleEncoding, Segment, Trace};
use crate::error::{SeisError, SeisResult};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Magic bytes at the start of every trace container
pub const MAGIC: [u8; 4] = *b"STRC";
/// Container version this reader understands
pub const VERSION: u16 = 1;

/// Reader for the length-prefixed trace container format.
///
/// Layout, all integers little-endian: magic `STRC`, u16 version, u32 trace
/// count; per trace a u16-length-prefixed id and a u32 segment count; per
/// segment a u8 encoding tag, f64 sample rate, u32 declared sample count,
/// u32 payload byte length, and the payload bytes. Payloads stay undecoded
/// until a segment is materialized.
pub struct ContainerReader {
    input: BufReader<File>,
    remaining_traces: u32,
}

impl ContainerReader {
    /// Open a container file and validate its header
    pub fn from_file<P: AsRef<Path>>(path: P) -> SeisResult<Self> {
        let file = File::open(path.as_ref())?;
        let mut input = BufReader::new(file);

        let mut magic = [0u8; 4];
        input
            .read_exact(&mut magic)
            .map_err(|_| SeisError::ParseError("cannot read container header".to_string()))?;
        if magic != MAGIC {
            return Err(SeisError::UnsupportedContainer(format!(
                "bad magic {magic:02x?}"
            )));
        }

        let version = read_u16(&mut input)?;
        if version != VERSION {
            return Err(SeisError::UnsupportedContainer(format!(
                "unknown version {version}"
            )));
        }

        let remaining_traces = read_u32(&mut input)?;
        debug!("container holds {remaining_traces} trace(s)");

        Ok(ContainerReader {
            input,
            remaining_traces,
        })
    }
}

impl TraceReader for ContainerReader {
    fn next_trace(&mut self) -> SeisResult<Option<Trace>> {
        if self.remaining_traces == 0 {
            return Ok(None);
        }
        self.remaining_traces -= 1;

        let id_len = read_u16(&mut self.input)? as usize;
        let mut id_bytes = vec![0u8; id_len];
        self.input.read_exact(&mut id_bytes)?;
        let id = String::from_utf8(id_bytes)
            .map_err(|_| SeisError::ParseError("trace id is not valid UTF-8".to_string()))?;

        let segment_count = read_u32(&mut self.input)?;
        let mut trace = Trace::new(id);

        for _ in 0..segment_count {
            let tag = read_u8(&mut self.input)?;
            let encoding = SampleEncoding::from_tag(tag)?;
            let sample_rate = read_f64(&mut self.input)?;
            let declared_count = read_u32(&mut self.input)? as u64;
            let payload_len = read_u32(&mut self.input)? as usize;
            let mut payload = vec![0u8; payload_len];
            self.input.read_exact(&mut payload)?;
            trace
                .segments
                .push(Segment::from_raw(sample_rate, encoding, declared_count, payload));
        }

        debug!(
            "trace {}: {} segment(s), {} declared sample(s)",
            trace.id,
            trace.segments.len(),
            trace.total_declared()
        );
        Ok(Some(trace))
    }
}

fn read_u8(input: &mut impl Read) -> SeisResult<u8> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u16(input: &mut impl Read) -> SeisResult<u16> {
    let mut buf = [0u8; 2];
    input.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32(input: &mut impl Read) -> SeisResult<u32> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f64(input: &mut impl Read) -> SeisResult<f64> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}
