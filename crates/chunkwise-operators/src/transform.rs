//! The shared chunk-wise transform engine behind `filter` and `map`.

use chunkwise_core::{Chunk, Result};

use crate::traits::{Phase, Sequence};

type ChunkFn<In, Out> = Box<dyn FnMut(Chunk<In>) -> Result<Chunk<Out>>>;

/// Applies a chunk-level function to each upstream chunk.
///
/// Filtering and mapping are thin constructors over this one engine. A
/// chunk whose every element is dropped disappears along with its boundary;
/// the consumer never sees an empty chunk. Elements are never reordered
/// within a chunk and chunks are never merged.
///
/// A failure inside the applied function fails the in-flight pull and
/// poisons this transform; failures from further upstream pass through
/// unchanged and leave it untouched.
pub struct Transform<S: Sequence, Out> {
    upstream: S,
    apply: ChunkFn<S::Item, Out>,
    phase: Phase,
}

impl<S: Sequence, Out> Transform<S, Out> {
    /// Build a transform from a whole-chunk function.
    ///
    /// The chaining methods on [`Sequence`] cover the elementwise cases;
    /// this is the extension point for new chunk-wise combinators.
    pub fn with_chunk_fn<F>(upstream: S, apply: F) -> Self
    where
        F: FnMut(Chunk<S::Item>) -> Result<Chunk<Out>> + 'static,
    {
        Transform {
            upstream,
            apply: Box::new(apply),
            phase: Phase::Active,
        }
    }

    pub(crate) fn map<F>(upstream: S, mut transform: F) -> Self
    where
        F: FnMut(S::Item) -> Out + 'static,
    {
        Self::with_chunk_fn(upstream, move |chunk: Chunk<S::Item>| {
            Ok(chunk.into_iter().map(&mut transform).collect())
        })
    }

    pub(crate) fn try_map<F>(upstream: S, mut transform: F) -> Self
    where
        F: FnMut(S::Item) -> Result<Out> + 'static,
    {
        Self::with_chunk_fn(upstream, move |chunk: Chunk<S::Item>| {
            let mut out = Vec::with_capacity(chunk.len());
            for element in chunk {
                out.push(transform(element)?);
            }
            Ok(out)
        })
    }
}

impl<S: Sequence> Transform<S, S::Item> {
    pub(crate) fn filter<P>(upstream: S, mut predicate: P) -> Self
    where
        P: FnMut(&S::Item) -> bool + 'static,
    {
        Self::with_chunk_fn(upstream, move |chunk: Chunk<S::Item>| {
            Ok(chunk.into_iter().filter(|element| predicate(element)).collect())
        })
    }

    pub(crate) fn try_filter<P>(upstream: S, mut predicate: P) -> Self
    where
        P: FnMut(&S::Item) -> Result<bool> + 'static,
    {
        Self::with_chunk_fn(upstream, move |chunk: Chunk<S::Item>| {
            let mut kept = Vec::with_capacity(chunk.len());
            for element in chunk {
                if predicate(&element)? {
                    kept.push(element);
                }
            }
            Ok(kept)
        })
    }
}

impl<S: Sequence, Out> Sequence for Transform<S, Out> {
    type Item = Out;

    fn next_chunk(&mut self) -> Result<Option<Chunk<Out>>> {
        if !self.phase.may_produce()? {
            return Ok(None);
        }
        loop {
            let Some(chunk) = self.upstream.next_chunk()? else {
                self.phase = Phase::Done;
                return Ok(None);
            };
            let out = match (self.apply)(chunk) {
                Ok(out) => out,
                Err(err) => {
                    self.phase.poison(&err);
                    return Err(err);
                }
            };
            if !out.is_empty() {
                return Ok(Some(out));
            }
            // every element was dropped; pull again instead of emitting empty
        }
    }
}
