#![forbid(unsafe_code)]
//! chunkwise-core: element-agnostic vocabulary for the chunkwise pipeline.
//!
//! Design intent:
//! - No I/O, no runtime, no operator logic here.
//! - Everything the operator crate needs to talk about chunks, sort keys,
//!   and failures, and nothing else.

pub mod chunk;
pub mod error;
pub mod key;

pub use chunk::Chunk;
pub use error::{Error, Result};
pub use key::{key_cmp, Direction, Key, Rank, SortKey};
