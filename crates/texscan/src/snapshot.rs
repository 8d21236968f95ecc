//! Binary snapshots of the engine state.
//!
//! A snapshot records everything needed to resume lexing at a token boundary:
//!     the mode, the pending inline verbatim delimiter and the classification table
//!     including its open groups.
//! The format is:
//!
//! ```txt
//! mode:              1 byte
//! pending delimiter: 4 bytes, little endian
//! frame count:       varint
//! for each frame:
//!     interval count: varint
//!     for each interval:
//!         lo:       4 bytes, little endian
//!         hi:       4 bytes, little endian
//!         category: 1 byte
//! ```
//!
//! Varints are unsigned LEB128.
//! The frames are those returned by [CatCodeTable::frames]; the first is the base frame,
//!     so the frame count is at least 1.
use crate::catcode::Category;
use crate::scanner::Mode;
use crate::table::{CatCodeTable, Interval};

/// Maximum size of a snapshot written with [Snapshot::encode_into].
pub const SNAPSHOT_CAPACITY: usize = 1024;

/// Error returned if encoding or decoding a snapshot fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot ended while reading the {0}")]
    Truncated(&'static str),
    #[error("invalid mode byte {0}")]
    InvalidMode(u8),
    #[error("invalid category byte {0}")]
    InvalidCategory(u8),
    #[error("invalid interval {lo:#x}..={hi:#x}")]
    InvalidInterval { lo: u32, hi: u32 },
    #[error("varint does not fit in 32 bits")]
    VarintOverflow,
    #[error("snapshot contains no base frame")]
    NoFrames,
    #[error("{0} unexpected bytes after the end of the snapshot")]
    TrailingBytes(usize),
    #[error("snapshot needs {needed} bytes but only {capacity} are available")]
    Overflow { needed: usize, capacity: usize },
}

/// Decoded form of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: Mode,
    pub pending_delimiter: u32,
    pub frames: Vec<Vec<Interval>>,
}

impl Snapshot {
    /// Captures the provided state.
    pub fn capture(mode: Mode, pending_delimiter: u32, table: &CatCodeTable) -> Snapshot {
        Snapshot {
            mode,
            pending_delimiter,
            frames: table.frames(),
        }
    }

    /// Rebuilds the classification table recorded in this snapshot.
    pub fn table(&self) -> CatCodeTable {
        CatCodeTable::from_frames(&self.frames)
    }

    /// Encodes the snapshot, appending the bytes to the provided vector.
    pub fn encode(&self, b: &mut Vec<u8>) {
        let mut w = Writer { b };
        w.u8(self.mode as u8);
        w.u32(self.pending_delimiter);
        w.varint(self.frames.len());
        for frame in &self.frames {
            w.varint(frame.len());
            for interval in frame {
                w.u32(interval.lo);
                w.u32(interval.hi);
                w.u8(interval.category as u8);
            }
        }
    }

    /// Encodes the snapshot into a fixed buffer.
    ///
    /// Nothing is written if the encoding is larger than the buffer or than [SNAPSHOT_CAPACITY].
    /// Returns the number of bytes written.
    pub fn encode_into(&self, buffer: &mut [u8]) -> Result<usize, SnapshotError> {
        let mut b = Vec::new();
        self.encode(&mut b);
        let capacity = buffer.len().min(SNAPSHOT_CAPACITY);
        if b.len() > capacity {
            return Err(SnapshotError::Overflow {
                needed: b.len(),
                capacity,
            });
        }
        buffer[..b.len()].copy_from_slice(&b);
        Ok(b.len())
    }

    /// Decodes a snapshot.
    ///
    /// The whole input must be consumed.
    pub fn decode(b: &[u8]) -> Result<Snapshot, SnapshotError> {
        let mut d = Deserializer { b };
        let mode = d.u8("mode")?;
        let mode = Mode::try_from(mode).map_err(SnapshotError::InvalidMode)?;
        let pending_delimiter = d.u32("pending delimiter")?;
        let num_frames = d.varint()?;
        if num_frames == 0 {
            return Err(SnapshotError::NoFrames);
        }
        // Every frame takes at least one byte, so a corrupt count cannot force a huge allocation.
        let mut frames = Vec::with_capacity(num_frames.min(d.b.len()));
        for _ in 0..num_frames {
            let num_intervals = d.varint()?;
            let mut frame = Vec::with_capacity(num_intervals.min(d.b.len() / 9));
            for _ in 0..num_intervals {
                frame.push(d.interval()?);
            }
            frames.push(frame);
        }
        if !d.b.is_empty() {
            return Err(SnapshotError::TrailingBytes(d.b.len()));
        }
        Ok(Snapshot {
            mode,
            pending_delimiter,
            frames,
        })
    }
}

struct Writer<'a> {
    b: &'a mut Vec<u8>,
}

impl<'a> Writer<'a> {
    fn u8(&mut self, u: u8) {
        self.b.push(u);
    }
    fn u32(&mut self, u: u32) {
        self.b.extend_from_slice(&u.to_le_bytes());
    }
    fn varint(&mut self, n: usize) {
        let mut n = n;
        loop {
            let low = (n & 0x7F) as u8;
            n >>= 7;
            if n == 0 {
                self.b.push(low);
                return;
            }
            self.b.push(low | 0x80);
        }
    }
}

struct Deserializer<'a> {
    b: &'a [u8],
}

impl<'a> Deserializer<'a> {
    fn get<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], SnapshotError> {
        let Some((head, tail)) = self.b.split_first_chunk::<N>() else {
            return Err(SnapshotError::Truncated(field));
        };
        self.b = tail;
        Ok(*head)
    }

    fn u8(&mut self, field: &'static str) -> Result<u8, SnapshotError> {
        Ok(u8::from_le_bytes(self.get::<1>(field)?))
    }

    fn u32(&mut self, field: &'static str) -> Result<u32, SnapshotError> {
        Ok(u32::from_le_bytes(self.get::<4>(field)?))
    }

    fn varint(&mut self) -> Result<usize, SnapshotError> {
        let mut n: u32 = 0;
        let mut shift = 0;
        loop {
            let byte = self.u8("varint")?;
            let low = (byte & 0x7F) as u32;
            if shift >= 32 || (low << shift) >> shift != low {
                return Err(SnapshotError::VarintOverflow);
            }
            n |= low << shift;
            if byte & 0x80 == 0 {
                return Ok(n as usize);
            }
            shift += 7;
        }
    }

    fn interval(&mut self) -> Result<Interval, SnapshotError> {
        let lo = self.u32("interval")?;
        let hi = self.u32("interval")?;
        let category = self.u8("interval")?;
        let category = Category::try_from(category).map_err(SnapshotError::InvalidCategory)?;
        if lo > hi || hi > char::MAX as u32 {
            return Err(SnapshotError::InvalidInterval { lo, hi });
        }
        Ok(Interval::new(lo, hi, category))
    }
}
