//! Eager whole-sequence sort.

use chunkwise_core::{Chunk, Rank, Result, SortKey};

use crate::traits::{Phase, Sequence};

/// Sorts the entire upstream under an ordered key list.
///
/// The first pull drains upstream completely into memory; laziness is
/// sacrificed here by construction, so ordering an unbounded source will
/// not terminate. Output is exactly one chunk holding every upstream
/// element in sorted order, or no chunk at all when upstream held none.
///
/// Equal-ranked elements keep their arrival order: each element is sorted
/// together with its original input index, so stability does not depend on
/// the sort algorithm underneath.
///
/// Any failure during the drain (an upstream pull or a key extractor)
/// poisons the sort; the partially drained buffer is discarded and cannot
/// be resumed.
pub struct Ordered<S: Sequence> {
    upstream: S,
    keys: Vec<SortKey<S::Item>>,
    phase: Phase,
}

impl<S: Sequence> Ordered<S> {
    pub fn new(upstream: S, keys: Vec<SortKey<S::Item>>) -> Self {
        Ordered {
            upstream,
            keys,
            phase: Phase::Active,
        }
    }

    fn drain_and_sort(&mut self) -> Result<Chunk<S::Item>> {
        let mut ranked: Vec<(Rank, usize, S::Item)> = Vec::new();
        while let Some(chunk) = self.upstream.next_chunk()? {
            for element in chunk {
                let rank = Rank::of(&self.keys, &element)?;
                ranked.push((rank, ranked.len(), element));
            }
        }
        ranked.sort_by(|(ra, ia, _), (rb, ib, _)| ra.cmp(rb).then(ia.cmp(ib)));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            elements = ranked.len(),
            keys = self.keys.len(),
            "sort materialized upstream"
        );

        Ok(ranked.into_iter().map(|(_, _, element)| element).collect())
    }
}

impl<S: Sequence> Sequence for Ordered<S> {
    type Item = S::Item;

    fn next_chunk(&mut self) -> Result<Option<Chunk<S::Item>>> {
        if !self.phase.may_produce()? {
            return Ok(None);
        }
        let sorted = match self.drain_and_sort() {
            Ok(sorted) => sorted,
            Err(err) => {
                self.phase.poison(&err);
                return Err(err);
            }
        };
        self.phase = Phase::Done;
        if sorted.is_empty() {
            Ok(None)
        } else {
            Ok(Some(sorted))
        }
    }
}
