//! Streaming k-way merge of individually sorted sequences.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use chunkwise_core::{Chunk, Error, Rank, Result, SortKey};

use crate::traits::{BoxedSequence, Phase, Sequence};

const DEFAULT_CHUNK_ROWS: usize = 1024;

/// Merges N sequences, each already sorted under the same key list, into
/// one globally sorted sequence.
///
/// Streaming: at most one buffered upstream chunk per source plus the
/// output chunk in flight. Each pull advances only the sources that lose
/// elements to the output, and an upstream chunk is pulled only once a
/// source's buffered chunk runs dry. Rank ties between sources go to the
/// earlier source, so the merge is stable across its inputs.
///
/// Every source is validated as it drains: an element ranking before its
/// predecessor within the same source fails the merge with
/// [`Error::Unsorted`] instead of producing silently unsorted output. Any
/// failure poisons the merge; winners already moved into the in-flight
/// output chunk are discarded with it.
pub struct Merge<T> {
    sources: Vec<Source<T>>,
    keys: Vec<SortKey<T>>,
    heap: BinaryHeap<Frontier<T>>,
    chunk_rows: usize,
    started: bool,
    phase: Phase,
}

impl<T> Merge<T> {
    /// All sources must already be sorted under `keys`.
    pub fn new(sources: Vec<BoxedSequence<T>>, keys: Vec<SortKey<T>>) -> Self {
        Merge {
            sources: sources.into_iter().map(Source::new).collect(),
            keys,
            heap: BinaryHeap::new(),
            chunk_rows: DEFAULT_CHUNK_ROWS,
            started: false,
            phase: Phase::Active,
        }
    }

    /// Cap output chunks at `rows` elements. Values below one are lifted
    /// to one; every pull must make progress.
    pub fn with_chunk_rows(mut self, rows: usize) -> Self {
        self.chunk_rows = rows.max(1);
        self
    }

    /// Pull the next element of source `index` into the heap, if any remain.
    fn push_frontier(&mut self, index: usize) -> Result<()> {
        let source = &mut self.sources[index];
        let Some(element) = source.next_element()? else {
            return Ok(());
        };
        let rank = source.rank_next(&self.keys, &element, index)?;
        self.heap.push(Frontier {
            rank,
            source: index,
            element,
        });
        Ok(())
    }

    fn init_frontier(&mut self) -> Result<()> {
        for index in 0..self.sources.len() {
            self.push_frontier(index)?;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            sources = self.sources.len(),
            live = self.heap.len(),
            "merge frontier initialized"
        );

        Ok(())
    }

    fn fill_chunk(&mut self) -> Result<Chunk<T>> {
        if !self.started {
            self.started = true;
            self.init_frontier()?;
        }
        let mut out = Vec::new();
        while out.len() < self.chunk_rows {
            let Some(entry) = self.heap.pop() else {
                break;
            };
            out.push(entry.element);
            self.push_frontier(entry.source)?;
        }
        Ok(out)
    }
}

impl<T> Sequence for Merge<T> {
    type Item = T;

    fn next_chunk(&mut self) -> Result<Option<Chunk<T>>> {
        if !self.phase.may_produce()? {
            return Ok(None);
        }
        let chunk = match self.fill_chunk() {
            Ok(chunk) => chunk,
            Err(err) => {
                self.phase.poison(&err);
                return Err(err);
            }
        };
        if chunk.is_empty() {
            self.phase = Phase::Done;
            return Ok(None);
        }
        Ok(Some(chunk))
    }
}

/// One upstream plus its buffered lookahead.
struct Source<T> {
    upstream: BoxedSequence<T>,
    buffer: VecDeque<T>,
    last_rank: Option<Rank>,
    exhausted: bool,
}

impl<T> Source<T> {
    fn new(upstream: BoxedSequence<T>) -> Self {
        Source {
            upstream,
            buffer: VecDeque::new(),
            last_rank: None,
            exhausted: false,
        }
    }

    /// Take the next element, pulling upstream chunks as needed. Empty
    /// chunks are skipped; `None` means this source is spent.
    fn next_element(&mut self) -> Result<Option<T>> {
        while self.buffer.is_empty() && !self.exhausted {
            match self.upstream.next_chunk()? {
                Some(chunk) => self.buffer.extend(chunk),
                None => self.exhausted = true,
            }
        }
        Ok(self.buffer.pop_front())
    }

    /// Rank `element`, refusing ranks that move backwards relative to what
    /// this source already emitted.
    fn rank_next(&mut self, keys: &[SortKey<T>], element: &T, index: usize) -> Result<Rank> {
        let rank = Rank::of(keys, element)?;
        if let Some(prev) = &self.last_rank {
            if rank < *prev {
                return Err(Error::Unsorted(format!(
                    "source {index} emitted an element ranking before its predecessor"
                )));
            }
        }
        self.last_rank = Some(rank.clone());
        Ok(rank)
    }
}

/// Heap entry for the merge frontier.
///
/// Ordered in reverse so the std max-heap pops the smallest rank first;
/// rank ties prefer the earlier source.
struct Frontier<T> {
    rank: Rank,
    source: usize,
    element: T,
}

impl<T> PartialEq for Frontier<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Frontier<T> {}

impl<T> PartialOrd for Frontier<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Frontier<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then(other.source.cmp(&self.source))
    }
}
