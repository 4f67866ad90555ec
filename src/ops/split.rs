//! Partitioning of a sequence by a predicate.

use std::convert::Infallible;
use std::vec;
use tracing::trace;

/// The two halves of a partitioned sequence.
///
/// Both halves are owned and keep the relative order the items had in the
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
  /// Items for which the predicate returned `true`.
  pub matched: Vec<T>,
  /// Items for which the predicate returned `false`.
  pub unmatched: Vec<T>,
}

impl<T> Default for Partition<T> {
  fn default() -> Self {
    Self {
      matched: Vec::new(),
      unmatched: Vec::new(),
    }
  }
}

impl<T> Partition<T> {
  /// Appends `item` to the matched or unmatched half.
  pub fn push(&mut self, item: T, matched: bool) {
    if matched {
      self.matched.push(item);
    } else {
      self.unmatched.push(item);
    }
  }

  /// Total number of items across both halves.
  pub fn len(&self) -> usize {
    self.matched.len() + self.unmatched.len()
  }

  /// Returns `true` if both halves are empty.
  pub fn is_empty(&self) -> bool {
    self.matched.is_empty() && self.unmatched.is_empty()
  }

  /// Splits into two independent iterators, matched first.
  pub fn into_iters(self) -> (vec::IntoIter<T>, vec::IntoIter<T>) {
    (self.matched.into_iter(), self.unmatched.into_iter())
  }
}

impl<T> From<Partition<T>> for (Vec<T>, Vec<T>) {
  fn from(partition: Partition<T>) -> Self {
    (partition.matched, partition.unmatched)
  }
}

/// Partitions `input` into the items that satisfy `predicate` and those that
/// do not.
///
/// The input is traversed once, eagerly, and the predicate is evaluated once
/// per item.
///
/// # Example
///
/// ```rust
/// use streamutils::ops::split_stream;
///
/// let partition = split_stream(1..=5, |n| n % 2 == 0);
/// assert_eq!(partition.matched, vec![2, 4]);
/// assert_eq!(partition.unmatched, vec![1, 3, 5]);
/// ```
pub fn split_stream<I, F>(input: I, mut predicate: F) -> Partition<I::Item>
where
  I: IntoIterator,
  F: FnMut(&I::Item) -> bool,
{
  match try_split_stream(input, |item| Ok::<_, Infallible>(predicate(item))) {
    Ok(partition) => partition,
    Err(never) => match never {},
  }
}

/// Fallible form of [`split_stream`].
///
/// The first error returned by `predicate` stops the traversal and is
/// returned as is. No partial partition is returned.
pub fn try_split_stream<I, F, E>(input: I, mut predicate: F) -> Result<Partition<I::Item>, E>
where
  I: IntoIterator,
  F: FnMut(&I::Item) -> Result<bool, E>,
{
  let mut partition = Partition::default();
  for item in input {
    let matched = predicate(&item)?;
    partition.push(item, matched);
  }
  trace!(
    matched = partition.matched.len(),
    unmatched = partition.unmatched.len(),
    "partitioned input"
  );
  Ok(partition)
}
