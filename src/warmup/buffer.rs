//! Growth Buffer Module
//!
//! Append-only storage behind the cache warmup, with the per-tick growth rule.

use crate::warmup::{CACHE_ENTRY_SIZE, FILLER_CHUNK, MAX_CACHE_SIZE};

// == Growth Limits ==
/// Threshold and nominal entry size used to estimate the buffer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthLimits {
    /// Upper bound for the estimated size, in bytes
    pub max_size: usize,
    /// Bytes each entry is assumed to occupy
    pub entry_size: usize,
}

impl GrowthLimits {
    /// Creates limits from a threshold and a nominal entry size.
    pub fn new(max_size: usize, entry_size: usize) -> Self {
        Self {
            max_size,
            entry_size,
        }
    }

    // == Estimated Size ==
    /// Estimated footprint of a buffer holding `len` entries.
    ///
    /// This is `len * entry_size` and nothing more; the real allocation of
    /// a [`FillerRecord`] is not measured.
    pub fn estimated_size(&self, len: usize) -> usize {
        len.saturating_mul(self.entry_size)
    }

    // == Allows Growth ==
    /// Returns true if a buffer currently holding `len` entries may grow.
    pub fn allows_growth(&self, len: usize) -> bool {
        self.estimated_size(len) < self.max_size
    }
}

impl Default for GrowthLimits {
    fn default() -> Self {
        Self::new(MAX_CACHE_SIZE, CACHE_ENTRY_SIZE)
    }
}

// == Filler Record ==
/// One warmup entry: `entry_size / 8` references to the shared [`FILLER_CHUNK`].
///
/// Only the reference array is allocated per record; its real size is
/// `len * size_of::<&str>()`, twice the nominal entry size on 64-bit targets.
#[derive(Debug, Clone)]
pub struct FillerRecord {
    chunks: Vec<&'static str>,
}

impl FillerRecord {
    /// Builds a fresh record sized from the nominal entry size.
    pub fn new(entry_size: usize) -> Self {
        Self {
            chunks: vec![FILLER_CHUNK; entry_size / FILLER_CHUNK.len()],
        }
    }

    /// Number of strings in the record.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the record holds no strings.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterates over the strings of the record.
    pub fn chunks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chunks.iter().copied()
    }
}

// == Growth Buffer ==
/// Append-only list of filler records. Nothing is ever removed.
#[derive(Debug)]
pub struct GrowthBuffer {
    records: Vec<FillerRecord>,
    limits: GrowthLimits,
}

impl GrowthBuffer {
    // == Constructor ==
    /// Creates an empty buffer governed by `limits`.
    pub fn new(limits: GrowthLimits) -> Self {
        Self {
            records: Vec::new(),
            limits,
        }
    }

    // == Tick ==
    /// Runs one warmup step.
    ///
    /// Appends a new record if the estimated size is still below the
    /// threshold. Returns whether a record was appended.
    pub fn tick(&mut self) -> bool {
        if !self.limits.allows_growth(self.records.len()) {
            return false;
        }

        self.records.push(FillerRecord::new(self.limits.entry_size));
        true
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Estimated size of the buffer, as used by [`GrowthBuffer::tick`].
    pub fn estimated_size(&self) -> usize {
        self.limits.estimated_size(self.records.len())
    }
}

impl Default for GrowthBuffer {
    fn default() -> Self {
        Self::new(GrowthLimits::default())
    }
}
