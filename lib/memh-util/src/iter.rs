use crate::U8SliceUtils;
use std::slice::ChunksExact;

/// Complete little-endian words of a byte slice, paired with their byte
/// offset. A trailing partial word is never yielded.
pub struct Words<'a> {
    chunks: ChunksExact<'a, u8>,
    offset: usize,
}

impl<'a> Words<'a> {
    pub fn new(data: &'a [u8]) -> Words<'a> {
        Words {
            chunks: data.chunks_exact(4),
            offset: 0,
        }
    }

    /// Bytes left over after the last complete word.
    pub fn remainder(&self) -> &'a [u8] {
        self.chunks.remainder()
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<(usize, u32)> {
        let chunk = self.chunks.next()?;
        let offset = self.offset;

        self.offset += 4;

        Some((offset, chunk.read_u32_le()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Words<'_> {}
