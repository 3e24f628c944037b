#![forbid(unsafe_code)]
//! chunkwise-operators: the lazy sequence surface
//! (filter/map/order_by/concat/merge).
//!
//! Design intent:
//! - Synchronous, cooperative pull; no producer runs ahead of demand.
//! - One chunk of work per `next_chunk` call; each operator owns its
//!   iteration state and never mutates its upstream.
//! - The optional `tracing` feature instruments the two buffering points
//!   (sort materialization, merge frontier).

pub mod concat;
pub mod iter;
pub mod merge;
pub mod ordered;
pub mod source;
pub mod traits;
pub mod transform;

pub use concat::Concat;
pub use iter::Chunks;
pub use merge::Merge;
pub use ordered::Ordered;
pub use source::Static;
pub use traits::{BoxedSequence, Sequence};
pub use transform::Transform;

use chunkwise_core::Chunk;

/// Build a pipeline head over in-memory chunks.
pub fn from_chunks<T>(chunks: Vec<Chunk<T>>) -> Static<T> {
    Static::new(chunks)
}
