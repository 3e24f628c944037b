//! Source-order concatenation.

use chunkwise_core::{Chunk, Result};

use crate::traits::{BoxedSequence, Sequence};

/// Chains sources end to end.
///
/// Each source is drained to exhaustion, strictly in list order, before the
/// next is pulled. Chunks cross unchanged, boundaries and empty chunks
/// included; nothing is merged or reordered across source boundaries.
/// Sources are boxed so operators of different concrete types can be
/// chained together.
pub struct Concat<T> {
    sources: Vec<BoxedSequence<T>>,
    current: usize,
}

impl<T> Concat<T> {
    pub fn new(sources: Vec<BoxedSequence<T>>) -> Self {
        Concat {
            sources,
            current: 0,
        }
    }

    pub(crate) fn pair<A, B>(first: A, second: B) -> Self
    where
        A: Sequence<Item = T> + 'static,
        B: Sequence<Item = T> + 'static,
    {
        Concat::new(vec![Box::new(first), Box::new(second)])
    }

    /// Append another source after the existing ones. Chaining `and` keeps
    /// the source list flat instead of nesting pairwise concats.
    pub fn and<S>(mut self, source: S) -> Self
    where
        S: Sequence<Item = T> + 'static,
    {
        self.sources.push(Box::new(source));
        self
    }
}

impl<T> Sequence for Concat<T> {
    type Item = T;

    fn next_chunk(&mut self) -> Result<Option<Chunk<T>>> {
        while let Some(source) = self.sources.get_mut(self.current) {
            if let Some(chunk) = source.next_chunk()? {
                return Ok(Some(chunk));
            }
            self.current += 1;
        }
        Ok(None)
    }
}
