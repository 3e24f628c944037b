//! Static chunk source.

use chunkwise_core::{Chunk, Result};

use crate::traits::Sequence;

/// A sequence over caller-supplied chunks.
///
/// Production re-emits each stored chunk unchanged, in the order given,
/// empty chunks included. Iteration clones out of the stored data rather
/// than consuming it, so a drained `Static` can be rewound and replayed;
/// composed pipelines stay single-pass regardless.
pub struct Static<T> {
    chunks: Vec<Chunk<T>>,
    cursor: usize,
}

impl<T> Static<T> {
    pub fn new(chunks: Vec<Chunk<T>>) -> Self {
        Static { chunks, cursor: 0 }
    }

    /// Reset to the first chunk. The one sanctioned re-entry point in the
    /// pipeline: after a rewind the same chunks replay from the top.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl<T: Clone> Sequence for Static<T> {
    type Item = T;

    fn next_chunk(&mut self) -> Result<Option<Chunk<T>>> {
        let Some(chunk) = self.chunks.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        Ok(Some(chunk.clone()))
    }
}
