//! The unit of data delivery.
//!
//! A chunk is a bare container, deliberately not a behavior-carrying type.
//! Boundaries are part of the pipeline contract: transforms and
//! concatenation preserve them, the sort operator collapses everything into
//! one chunk, and the merge operator re-chunks its output.

/// One ordered batch of elements, produced atomically by a single pull.
pub type Chunk<T> = Vec<T>;
