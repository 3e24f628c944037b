//! `std::iter` bridge for chunk-at-a-time consumption.

use chunkwise_core::{Chunk, Result};

use crate::traits::Sequence;

/// Iterator over a sequence's chunks.
///
/// Yields `Ok` per chunk, at most one `Err` if the pipeline fails, then
/// `None` forever. Chunks consumed before a failure remain valid.
pub struct Chunks<S> {
    sequence: S,
    done: bool,
}

impl<S> Chunks<S> {
    pub(crate) fn new(sequence: S) -> Self {
        Chunks {
            sequence,
            done: false,
        }
    }

    /// Hand back the underlying sequence, e.g. to rewind a static source.
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S: Sequence> Iterator for Chunks<S> {
    type Item = Result<Chunk<S::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.sequence.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
