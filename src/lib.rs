#![forbid(unsafe_code)]
//! chunkwise: lazy, chunk-oriented sequence pipelines.
//!
//! Facade over the workspace members; most callers need only this crate.
//!
//! ```
//! use chunkwise::{from_chunks, Sequence, SortKey};
//!
//! let sorted = from_chunks(vec![vec![3_i64, 1], vec![2]])
//!     .order_by(vec![SortKey::asc(|n: &i64| *n)])
//!     .collect()?;
//! assert_eq!(sorted, vec![1, 2, 3]);
//! # Ok::<(), chunkwise::Error>(())
//! ```

pub use chunkwise_core::{key_cmp, Chunk, Direction, Error, Key, Rank, Result, SortKey};
pub use chunkwise_operators::{
    from_chunks, BoxedSequence, Chunks, Concat, Merge, Ordered, Sequence, Static, Transform,
};
