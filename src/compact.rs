//! Byte compaction: one private byte per distinct non-ASCII code point, so
//! byte-indexed string algorithms can run over Unicode signatures.
//!
//! ASCII passes through unchanged. Non-ASCII code points are numbered from
//! `0x80` in order of first appearance, left string first. A compactor is
//! scoped to one comparison; the byte space is never shared between
//! comparisons.

use smallvec::SmallVec;
use thiserror::Error;

/// Distinct non-ASCII code points one comparison can map (`0x80..=0xFE`).
pub const MAX_CODE_POINTS: usize = 127;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompactError {
    #[error("more than {limit} distinct multi-byte code points in one comparison")]
    ByteSpaceExhausted { limit: usize },
}

#[derive(Debug, Default)]
pub struct ByteCompactor {
    map: SmallVec<[(char, u8); 64]>,
}

impl ByteCompactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of code points mapped so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    fn byte_for(&mut self, c: char) -> Result<u8, CompactError> {
        if let Some(&(_, b)) = self.map.iter().find(|(m, _)| *m == c) {
            return Ok(b);
        }
        if self.map.len() >= MAX_CODE_POINTS {
            return Err(CompactError::ByteSpaceExhausted {
                limit: MAX_CODE_POINTS,
            });
        }
        let b = 0x80 + self.map.len() as u8;
        self.map.push((c, b));
        Ok(b)
    }

    /// Compacts `text`, extending the mapping with any new code points.
    pub fn compact(&mut self, text: &str) -> Result<Vec<u8>, CompactError> {
        if text.is_ascii() {
            return Ok(text.as_bytes().to_vec());
        }
        let mut out = Vec::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c as u8);
            } else {
                out.push(self.byte_for(c)?);
            }
        }
        Ok(out)
    }
}

/// Compacts both sides of one comparison with a fresh mapping.
pub fn compact_pair(left: &str, right: &str) -> Result<(Vec<u8>, Vec<u8>), CompactError> {
    let mut compactor = ByteCompactor::new();
    let left = compactor.compact(left)?;
    let right = compactor.compact(right)?;
    Ok((left, right))
}
