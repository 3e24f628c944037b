//! Sequence trait + common interfaces.
//!
//! A pipeline is built by calling combinator methods on a `Sequence`; each
//! returns a new sequence lazily wrapping its upstream. Nothing moves until
//! a pull: data flows chunk-by-chunk, on demand, from the terminal end
//! backward to the source.

use chunkwise_core::{Chunk, Error, Result, SortKey};

use crate::concat::Concat;
use crate::iter::Chunks;
use crate::ordered::Ordered;
use crate::transform::Transform;

/// Boxed sequence, for heterogeneous source lists and dynamic composition.
pub type BoxedSequence<T> = Box<dyn Sequence<Item = T>>;

/// A lazy, pull-based producer of chunks.
///
/// Invariants:
/// - Chunks arrive in emission order; a consumer never observes reordering
///   across pulls of one sequence.
/// - Implementations own their transient iteration state and never mutate
///   their upstream.
/// - Exhaustion is fused: once a clean `Ok(None)` has been returned, every
///   later pull returns `Ok(None)` as well.
pub trait Sequence {
    type Item;

    /// Produce the next chunk, or `Ok(None)` once exhausted.
    fn next_chunk(&mut self) -> Result<Option<Chunk<Self::Item>>>;

    /// Drain the pipeline and flatten every chunk into one list, in
    /// emission order. Surfaces the first failure raised by any pull.
    fn collect(mut self) -> Result<Vec<Self::Item>>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while let Some(chunk) = self.next_chunk()? {
            out.extend(chunk);
        }
        Ok(out)
    }

    /// Drain the pipeline, returning the chunks verbatim.
    fn collect_chunks(mut self) -> Result<Vec<Chunk<Self::Item>>>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while let Some(chunk) = self.next_chunk()? {
            out.push(chunk);
        }
        Ok(out)
    }

    /// Keep only elements for which `predicate` is true. Chunk-wise and
    /// order-preserving; chunks left empty are dropped, not emitted.
    fn filter<P>(self, predicate: P) -> Transform<Self, Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool + 'static,
    {
        Transform::filter(self, predicate)
    }

    /// `filter` with a fallible predicate. A predicate failure fails the
    /// in-flight pull and poisons the transform.
    fn try_filter<P>(self, predicate: P) -> Transform<Self, Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Result<bool> + 'static,
    {
        Transform::try_filter(self, predicate)
    }

    /// Apply `transform` to every element. Chunk-wise, order-preserving,
    /// element type may change.
    fn map<U, F>(self, transform: F) -> Transform<Self, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U + 'static,
    {
        Transform::map(self, transform)
    }

    /// `map` with a fallible transform.
    fn try_map<U, F>(self, transform: F) -> Transform<Self, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<U> + 'static,
    {
        Transform::try_map(self, transform)
    }

    /// Sort the whole sequence under an ordered key list; position in the
    /// list is tie-break priority. Eager: the first pull on the result
    /// drains this sequence completely.
    fn order_by(self, keys: Vec<SortKey<Self::Item>>) -> Ordered<Self>
    where
        Self: Sized,
    {
        Ordered::new(self, keys)
    }

    /// Chain `other` after this sequence, preserving chunk boundaries and
    /// source order. `Concat::and` appends further sources.
    fn concat<S>(self, other: S) -> Concat<Self::Item>
    where
        Self: Sized + 'static,
        S: Sequence<Item = Self::Item> + 'static,
    {
        Concat::pair(self, other)
    }

    /// Bridge into a `std` iterator over `Result`-wrapped chunks, for
    /// manual step-by-step consumption.
    fn into_chunks(self) -> Chunks<Self>
    where
        Self: Sized,
    {
        Chunks::new(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn next_chunk(&mut self) -> Result<Option<Chunk<Self::Item>>> {
        (**self).next_chunk()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn next_chunk(&mut self) -> Result<Option<Chunk<Self::Item>>> {
        (**self).next_chunk()
    }
}

/// Lifecycle shared by the stateful operators.
pub(crate) enum Phase {
    Active,
    Done,
    Poisoned(String),
}

impl Phase {
    /// `Ok(true)` while the operator may produce, `Ok(false)` once cleanly
    /// exhausted, the stored failure once poisoned.
    pub(crate) fn may_produce(&self) -> Result<bool> {
        match self {
            Phase::Active => Ok(true),
            Phase::Done => Ok(false),
            Phase::Poisoned(msg) => Err(Error::Poisoned(msg.clone())),
        }
    }

    pub(crate) fn poison(&mut self, err: &Error) {
        *self = Phase::Poisoned(err.to_string());
    }
}
