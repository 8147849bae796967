//! Line-aligned partitioning of the input buffer.
//!
//! The buffer is divided into one contiguous byte range per worker. Interior
//! boundaries are moved forward to the byte after the next `\n`, so no
//! sample line is ever split across two chunks and every line is attributed
//! to exactly one chunk. Boundary resolution happens once, up front; after
//! that the chunks are fully independent.

/// A half-open, line-aligned byte range `[start, end)` into the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Split `buffer` into `workers` contiguous, line-aligned chunks.
///
/// The first chunk always starts at 0 and the last always ends at
/// `buffer.len()`; together the chunks cover the buffer exactly once.
/// A chunk may come out empty when a single line spans several nominal
/// chunk sizes.
pub fn partition_lines(buffer: &[u8], workers: usize) -> Vec<Chunk> {
    let workers = workers.max(1);
    let len = buffer.len();
    let nominal = len / workers;

    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0usize;
    for i in 1..workers {
        // Provisional boundary at a multiple of the nominal size, then
        // advanced past the next line terminator.
        let provisional = (i * nominal).max(start);
        let end = next_line_start(buffer, provisional).max(start);
        chunks.push(Chunk { start, end });
        start = end;
    }
    chunks.push(Chunk { start, end: len });
    chunks
}

/// Position of the first byte after the next `\n` at or beyond `from`,
/// or `buffer.len()` when no terminator remains.
#[inline]
fn next_line_start(buffer: &[u8], from: usize) -> usize {
    if from >= buffer.len() {
        return buffer.len();
    }
    match buffer[from..].iter().position(|&b| b == b'\n') {
        Some(offset) => from + offset + 1,
        None => buffer.len(),
    }
}
