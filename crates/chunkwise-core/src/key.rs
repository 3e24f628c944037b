//! Sort-key vocabulary: the comparable key scalar, extraction records, and
//! the per-element rank tuple shared by the sort and merge operators.
//!
//! Elements stay opaque to the pipeline; ordering only ever sees the `Key`
//! values an extractor derives from them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A comparable sort-key value derived from an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

/// Compare two keys for sorting.
///
/// Nulls are sorted first, then values are compared within their variant.
/// NaN compares equal to itself and after every other float. Mixed variants
/// are ordered by variant rank (callers are expected to supply keys of one
/// variant per position; the rank order just keeps the comparison total).
pub fn key_cmp(a: &Key, b: &Key) -> Ordering {
    use Key::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (Int(x), Int(y)) => x.cmp(y),
        (Float(x), Float(y)) => {
            if x.is_nan() && y.is_nan() {
                Ordering::Equal
            } else if x.is_nan() {
                Ordering::Greater
            } else if y.is_nan() {
                Ordering::Less
            } else {
                x.partial_cmp(y).unwrap_or(Ordering::Equal)
            }
        }
        (Str(x), Str(y)) => x.cmp(y),
        (Bytes(x), Bytes(y)) => x.cmp(y),
        _ => variant_rank(a).cmp(&variant_rank(b)),
    }
}

/// Assign a numeric order to key variants for mixed-variant comparisons.
fn variant_rank(k: &Key) -> u8 {
    use Key::*;
    match k {
        Null => 0,
        Bool(_) => 1,
        Int(_) => 2,
        Float(_) => 3,
        Str(_) => 4,
        Bytes(_) => 5,
    }
}

impl From<bool> for Key {
    fn from(v: bool) -> Self {
        Key::Bool(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Int(v as i64)
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int(v)
    }
}

impl From<f32> for Key {
    fn from(v: f32) -> Self {
        Key::Float(v as f64)
    }
}

impl From<f64> for Key {
    fn from(v: f64) -> Self {
        Key::Float(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

impl From<Vec<u8>> for Key {
    fn from(v: Vec<u8>) -> Self {
        Key::Bytes(v)
    }
}

impl<K: Into<Key>> From<Option<K>> for Key {
    fn from(v: Option<K>) -> Self {
        match v {
            Some(k) => k.into(),
            None => Key::Null,
        }
    }
}

/// Sort direction for one key position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    Desc,
}

/// One (extractor, direction) record.
///
/// An ordered `Vec<SortKey<T>>` defines key priority: position 0 is the
/// primary key, position 1 breaks its ties, and so on.
pub struct SortKey<T> {
    extract: Box<dyn Fn(&T) -> Result<Key>>,
    direction: Direction,
}

impl<T> SortKey<T> {
    /// Ascending key from an infallible extractor.
    pub fn asc<K, F>(extract: F) -> Self
    where
        K: Into<Key>,
        F: Fn(&T) -> K + 'static,
    {
        SortKey {
            extract: Box::new(move |element| Ok(extract(element).into())),
            direction: Direction::Asc,
        }
    }

    /// Descending key from an infallible extractor.
    pub fn desc<K, F>(extract: F) -> Self
    where
        K: Into<Key>,
        F: Fn(&T) -> K + 'static,
    {
        SortKey {
            extract: Box::new(move |element| Ok(extract(element).into())),
            direction: Direction::Desc,
        }
    }

    /// Key from a fallible extractor and an explicit direction.
    pub fn try_new<F>(direction: Direction, extract: F) -> Self
    where
        F: Fn(&T) -> Result<Key> + 'static,
    {
        SortKey {
            extract: Box::new(extract),
            direction,
        }
    }

    /// Extract this key from one element.
    pub fn key_of(&self, element: &T) -> Result<Key> {
        (self.extract)(element)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// The ordered key tuple computed for one element, with each position's
/// direction baked in.
///
/// Carrying the direction inside the tuple gives `Rank` a self-contained
/// total `Ord`, so the sort operator's comparator and the merge operator's
/// heap entries share one comparison engine.
#[derive(Debug, Clone)]
pub struct Rank {
    parts: Vec<(Key, Direction)>,
}

impl Rank {
    /// Rank `element` under an ordered key list.
    pub fn of<T>(keys: &[SortKey<T>], element: &T) -> Result<Rank> {
        let mut parts = Vec::with_capacity(keys.len());
        for key in keys {
            parts.push((key.key_of(element)?, key.direction()));
        }
        Ok(Rank { parts })
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        for ((a, dir), (b, _)) in self.parts.iter().zip(other.parts.iter()) {
            let ord = match dir {
                Direction::Asc => key_cmp(a, b),
                Direction::Desc => key_cmp(a, b).reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.parts.len().cmp(&other.parts.len())
    }
}
