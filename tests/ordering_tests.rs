//! Sort operator behavior: key priority, direction, stability, edge cases.

mod support;

use chunkwise::{from_chunks, Direction, Error, Key, Sequence, SortKey};
use support::int_chunks;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    dept: &'static str,
    salary: i64,
    name: &'static str,
}

fn employees() -> Vec<Vec<Employee>> {
    let e = |dept, salary, name| Employee { dept, salary, name };
    vec![
        vec![
            e("ops", 70, "ada"),
            e("eng", 90, "brin"),
            e("eng", 90, "cole"),
        ],
        vec![e("eng", 120, "dara"), e("ops", 60, "eli")],
    ]
}

#[test]
fn test_order_by_single_key_ascending() {
    let out = from_chunks(int_chunks(&[&[4, 1], &[3, 3, 2]]))
        .order_by(vec![SortKey::asc(|n: &i64| *n)])
        .collect()
        .unwrap();
    assert_eq!(out, vec![1, 2, 3, 3, 4]);
}

#[test]
fn test_order_by_single_key_descending() {
    let out = from_chunks(int_chunks(&[&[4, 1], &[3, 2]]))
        .order_by(vec![SortKey::desc(|n: &i64| *n)])
        .collect()
        .unwrap();
    assert_eq!(out, vec![4, 3, 2, 1]);
}

#[test]
fn test_order_by_emits_exactly_one_chunk() {
    let out = from_chunks(int_chunks(&[&[9], &[7], &[8], &[1]]))
        .order_by(vec![SortKey::asc(|n: &i64| *n)])
        .collect_chunks()
        .unwrap();
    assert_eq!(out, vec![vec![1, 7, 8, 9]]);
}

#[test]
fn test_order_by_multi_key_priority() {
    let out = from_chunks(employees())
        .order_by(vec![
            SortKey::asc(|e: &Employee| e.dept),
            SortKey::desc(|e: &Employee| e.salary),
            SortKey::asc(|e: &Employee| e.name),
        ])
        .map(|e| e.name)
        .collect()
        .unwrap();
    // eng by salary desc (name breaking the 90/90 tie), then ops
    assert_eq!(out, vec!["dara", "brin", "cole", "ada", "eli"]);
}

#[test]
fn test_order_by_equal_keys_keep_arrival_order() {
    let out = from_chunks(vec![
        vec![(1, "first"), (1, "second")],
        vec![(0, "third"), (1, "fourth")],
    ])
    .order_by(vec![SortKey::asc(|p: &(i64, &str)| p.0)])
    .collect()
    .unwrap();
    assert_eq!(
        out,
        vec![(0, "third"), (1, "first"), (1, "second"), (1, "fourth")]
    );
}

#[test]
fn test_order_by_empty_upstream_emits_no_chunk() {
    let out = from_chunks(Vec::<Vec<i64>>::new())
        .order_by(vec![SortKey::asc(|n: &i64| *n)])
        .collect_chunks()
        .unwrap();
    assert!(out.is_empty());

    // empty chunks hold no elements either
    let out = from_chunks(int_chunks(&[&[], &[]]))
        .order_by(vec![SortKey::asc(|n: &i64| *n)])
        .collect_chunks()
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_order_by_null_keys_sort_first() {
    let out = from_chunks(vec![vec![(Some(5), "a"), (None, "b"), (Some(2), "c")]])
        .order_by(vec![SortKey::asc(|p: &(Option<i64>, &str)| p.0)])
        .map(|p| p.1)
        .collect()
        .unwrap();
    assert_eq!(out, vec!["b", "c", "a"]);
}

#[test]
fn test_order_by_nan_sorts_last_ascending() {
    let out = from_chunks(vec![vec![2.0_f64, f64::NAN, 1.0]])
        .order_by(vec![SortKey::asc(|x: &f64| *x)])
        .collect()
        .unwrap();
    assert_eq!(out[0], 1.0);
    assert_eq!(out[1], 2.0);
    assert!(out[2].is_nan());
}

#[test]
fn test_order_by_mixed_variant_keys_by_variant_rank() {
    // ints rank before strings regardless of lexical value
    let out = from_chunks(vec![vec!["10", "9", "true"]])
        .order_by(vec![SortKey::asc(|s: &&str| match s.parse::<i64>() {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Str(s.to_string()),
        })])
        .collect()
        .unwrap();
    assert_eq!(out, vec!["9", "10", "true"]);
}

#[test]
fn test_order_by_fallible_extractor_happy_path() {
    let keys = vec![SortKey::try_new(Direction::Asc, |s: &&str| {
        s.parse::<i64>()
            .map(Key::Int)
            .map_err(|e| Error::Key(format!("{s}: {e}")))
    })];
    let out = from_chunks(vec![vec!["10", "2", "33"]])
        .order_by(keys)
        .collect()
        .unwrap();
    assert_eq!(out, vec!["2", "10", "33"]);
}

#[test]
fn test_order_by_composes_with_transforms() {
    let out = from_chunks(int_chunks(&[&[5, 2], &[8, 1, 6]]))
        .filter(|n| n % 2 == 0)
        .order_by(vec![SortKey::desc(|n: &i64| *n)])
        .map(|n| n / 2)
        .collect()
        .unwrap();
    assert_eq!(out, vec![4, 3, 1]);
}
