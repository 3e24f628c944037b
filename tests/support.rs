//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use chunkwise::{Chunk, Error, Result, Sequence};

/// Build owned chunks from slice literals.
pub fn int_chunks(chunks: &[&[i64]]) -> Vec<Chunk<i64>> {
    chunks.iter().map(|c| c.to_vec()).collect()
}

/// A sequence that follows a script: it serves its chunks in order, and can
/// be told to fail one specific pull with a transform error before carrying
/// on with the remaining chunks.
pub struct Scripted<T> {
    chunks: Vec<Chunk<T>>,
    cursor: usize,
    pulls: usize,
    fail_at_pull: Option<usize>,
}

impl<T> Scripted<T> {
    pub fn new(chunks: Vec<Chunk<T>>) -> Self {
        Scripted {
            chunks,
            cursor: 0,
            pulls: 0,
            fail_at_pull: None,
        }
    }

    /// Fail the `n`-th pull (zero-based), then keep serving chunks on later
    /// pulls as if nothing happened.
    pub fn fail_at_pull(mut self, n: usize) -> Self {
        self.fail_at_pull = Some(n);
        self
    }
}

impl<T: Clone> Sequence for Scripted<T> {
    type Item = T;

    fn next_chunk(&mut self) -> Result<Option<Chunk<T>>> {
        let pull = self.pulls;
        self.pulls += 1;
        if self.fail_at_pull == Some(pull) {
            return Err(Error::Transform("scripted failure".into()));
        }
        let Some(chunk) = self.chunks.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        Ok(Some(chunk.clone()))
    }
}

/// Wraps a sequence and counts how often it is pulled, for laziness and
/// demand-driving assertions.
pub struct Counting<S> {
    inner: S,
    pulls: Rc<Cell<usize>>,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        (Counting { inner, pulls }, counter)
    }
}

impl<S: Sequence> Sequence for Counting<S> {
    type Item = S::Item;

    fn next_chunk(&mut self) -> Result<Option<Chunk<S::Item>>> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next_chunk()
    }
}
