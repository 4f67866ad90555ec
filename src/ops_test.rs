//! # Sequence Operation Property Tests
//!
//! Checks the structural guarantees of the operations in [`crate::ops`] over
//! a range of input lengths and parameters, rather than single examples:
//!
//! - batching preserves every item and its order, with bounded batch sizes
//! - aggregation preserves the total and the set of keys
//! - text filtering yields an order-preserving subsequence with no blanks
//! - partitioning splits the input without losing or duplicating items
//! - optional unwrapping yields exactly the present values, in order
//! - repeated calls on the same input give identical results

use crate::ops::{
  SequenceExt, batch, filter_non_empty_strings, group_by_and_sum, is_blank, map_optional,
  split_stream,
};
use std::collections::HashSet;

fn sample(len: usize) -> Vec<u32> {
  (0..len as u32).map(|i| i.wrapping_mul(2_654_435_761) % 97).collect()
}

#[test]
fn test_batch_concatenation_reproduces_input() {
  for len in 0..40 {
    let input = sample(len);
    for size in 1..12usize {
      let batches = batch(input.clone(), size).unwrap();
      let flattened: Vec<u32> = batches.iter().flatten().copied().collect();
      assert_eq!(flattened, input, "len={len} size={size}");
    }
  }
}

#[test]
fn test_batch_lengths_are_bounded() {
  for len in 0..40 {
    for size in 1..12usize {
      let batches = batch(sample(len), size).unwrap();
      assert_eq!(batches.len(), len.div_ceil(size));
      if let Some((last, full)) = batches.split_last() {
        assert!(full.iter().all(|b| b.len() == size));
        assert!((1..=size).contains(&last.len()));
      }
    }
  }
}

#[test]
fn test_batch_rejects_non_positive_sizes() {
  for size in [0i64, -1, -64, i64::MIN] {
    assert!(batch(sample(5), size).unwrap_err().is_invalid_argument());
  }
}

#[test]
fn test_batch_matches_batched_adapter() {
  let input = sample(23);
  let eager = batch(input.clone(), 4).unwrap();
  let lazy: Vec<Vec<u32>> = input.into_iter().batched(4).unwrap().collect();
  assert_eq!(eager, lazy);
}

#[test]
fn test_group_by_and_sum_preserves_total_and_keys() {
  let records: Vec<(u32, u64)> = sample(200)
    .into_iter()
    .enumerate()
    .map(|(i, v)| (v % 7, i as u64))
    .collect();

  let sums = group_by_and_sum(&records, |r| r.0, |r| r.1);

  let total: u64 = records.iter().map(|r| r.1).sum();
  let distinct: HashSet<u32> = records.iter().map(|r| r.0).collect();
  assert_eq!(sums.values().sum::<u64>(), total);
  assert_eq!(sums.len(), distinct.len());
}

#[test]
fn test_filter_non_empty_strings_is_clean_subsequence() {
  let entry = |v: u32| match v % 6 {
    0 => None,
    1 => Some(" ".repeat(v as usize % 3)),
    2 => Some("\u{1F}\t\u{2028}".to_string()),
    3 => Some("\u{A0}".to_string()),
    _ => Some(format!("item-{v}")),
  };
  let input: Vec<Option<String>> = sample(60).into_iter().map(entry).collect();

  let kept: Vec<String> = filter_non_empty_strings(input).collect();

  assert!(kept.iter().all(|s| !is_blank(s)));
  let expected: Vec<String> = sample(60)
    .into_iter()
    .filter(|v| v % 6 >= 3)
    .filter_map(entry)
    .collect();
  assert_eq!(kept, expected);
}

#[test]
fn test_split_stream_partitions_input() {
  let input = sample(50);

  let partition = split_stream(input.clone(), |v| v % 3 == 0);

  assert_eq!(partition.len(), input.len());
  assert!(partition.matched.iter().all(|v| v % 3 == 0));
  assert!(partition.unmatched.iter().all(|v| v % 3 != 0));
  let matched: Vec<u32> = input.iter().copied().filter(|v| v % 3 == 0).collect();
  assert_eq!(partition.matched, matched);
}

#[test]
fn test_map_optional_yields_present_values_in_order() {
  let input: Vec<Option<u32>> = sample(50)
    .into_iter()
    .map(|v| (v % 2 == 1).then_some(v))
    .collect();

  let values: Vec<u32> = map_optional(input.clone()).collect();

  assert!(values.len() <= input.len());
  assert_eq!(values, input.into_iter().flatten().collect::<Vec<_>>());
}

#[test]
fn test_operations_are_idempotent() {
  let input = sample(33);

  assert_eq!(batch(input.clone(), 5).unwrap(), batch(input.clone(), 5).unwrap());
  assert_eq!(
    group_by_and_sum(&input, |v| **v % 5, |v| **v),
    group_by_and_sum(&input, |v| **v % 5, |v| **v)
  );
  assert_eq!(
    split_stream(input.clone(), |v| *v > 40),
    split_stream(input.clone(), |v| *v > 40)
  );
  let optional: Vec<Option<u32>> = input.iter().map(|v| v.checked_sub(30)).collect();
  assert_eq!(
    map_optional(optional.clone()).collect::<Vec<_>>(),
    map_optional(optional).collect::<Vec<_>>()
  );
  let strings: Vec<Option<String>> = input
    .iter()
    .map(|v| (v % 4 != 0).then(|| " ".repeat(*v as usize % 3) + &"x".repeat(*v as usize % 2)))
    .collect();
  assert_eq!(
    filter_non_empty_strings(strings.clone()).collect::<Vec<_>>(),
    filter_non_empty_strings(strings).collect::<Vec<_>>()
  );
}
