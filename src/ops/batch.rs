//! Fixed-size batching of sequences.
//!
//! [`batch`] consumes its input eagerly and returns every batch at once;
//! [`Batched`] is the lazy adapter underneath it and yields the same batches
//! one at a time.

use crate::error::{Result, SequenceError};
use std::iter::{Fuse, FusedIterator};
use tracing::trace;

/// Iterator adapter that groups items of the inner iterator into `Vec`s of
/// `size` items, followed by any remaining items at the end.
///
/// Every batch except possibly the last holds exactly `size` items. The last
/// holds between 1 and `size`. No empty batch is ever produced.
#[derive(Debug, Clone)]
pub struct Batched<I: Iterator> {
  inner: Fuse<I>,
  size: usize,
  flushed: usize,
}

impl<I: Iterator> Batched<I> {
  /// Wraps `inner`, batching its items into groups of `size`.
  ///
  /// # Errors
  ///
  /// Returns [`SequenceError::InvalidArgument`] if `size` is zero. The inner
  /// iterator is not advanced in that case.
  pub fn new(inner: I, size: usize) -> Result<Self> {
    if size == 0 {
      return Err(SequenceError::invalid_argument(
        "size",
        "batch size must be greater than zero",
      ));
    }
    Ok(Self {
      inner: inner.fuse(),
      size,
      flushed: 0,
    })
  }

  /// The configured batch size.
  pub fn size(&self) -> usize {
    self.size
  }
}

impl<I: Iterator> Iterator for Batched<I> {
  type Item = Vec<I::Item>;

  fn next(&mut self) -> Option<Self::Item> {
    let capacity = self.size.min(self.inner.size_hint().0);
    let mut current_batch = Vec::with_capacity(capacity);
    for item in self.inner.by_ref() {
      current_batch.push(item);
      if current_batch.len() == self.size {
        break;
      }
    }
    if current_batch.is_empty() {
      return None;
    }
    self.flushed += 1;
    trace!(
      batch = self.flushed,
      len = current_batch.len(),
      size = self.size,
      "flushed batch"
    );
    Some(current_batch)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let (lower, upper) = self.inner.size_hint();
    (
      lower.div_ceil(self.size),
      upper.map(|upper| upper.div_ceil(self.size)),
    )
  }
}

impl<I: Iterator> FusedIterator for Batched<I> {}

/// Splits `input` into consecutive batches of `size` items.
///
/// The input is consumed once, in order. Example: `[1, 2, 3, 4, 5]` with a
/// size of 2 gives `[[1, 2], [3, 4], [5]]`. An empty input gives no batches.
///
/// `size` may be any integer type. Zero, negative values and values that do
/// not fit in a `usize` are rejected.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `size` is not a positive
/// integer. Nothing is read from `input` in that case.
///
/// # Example
///
/// ```rust
/// use streamutils::ops::batch;
///
/// let batches = batch(vec![1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(batch(vec![1, 2, 3], -1).is_err());
/// ```
pub fn batch<I, S>(input: I, size: S) -> Result<Vec<Vec<I::Item>>>
where
  I: IntoIterator,
  S: TryInto<usize>,
{
  let size = size
    .try_into()
    .ok()
    .filter(|size| *size > 0)
    .ok_or_else(|| {
      SequenceError::invalid_argument("size", "batch size must be a positive integer")
    })?;
  let batches: Vec<_> = Batched::new(input.into_iter(), size)?.collect();
  trace!(batches = batches.len(), size, "batched input");
  Ok(batches)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_batch_exact_size() {
    let result = batch(vec![1, 2, 3, 4, 5, 6], 3).unwrap();
    assert_eq!(result, vec![vec![1, 2, 3], vec![4, 5, 6]]);
  }

  #[test]
  fn test_batch_partial_last_chunk() {
    let result = batch(vec![1, 2, 3, 4, 5], 2).unwrap();
    assert_eq!(result, vec![vec![1, 2], vec![3, 4], vec![5]]);
  }

  #[test]
  fn test_batch_empty_input() {
    let result = batch(Vec::<i32>::new(), 2).unwrap();
    assert_eq!(result, Vec::<Vec<i32>>::new());
  }

  #[test]
  fn test_batch_size_one() {
    let result = batch(vec![1, 2, 3], 1).unwrap();
    assert_eq!(result, vec![vec![1], vec![2], vec![3]]);
  }

  #[test]
  fn test_batch_size_larger_than_input() {
    let result = batch(vec![1, 2, 3], 5).unwrap();
    assert_eq!(result, vec![vec![1, 2, 3]]);
  }

  #[test]
  fn test_batch_zero_size_error() {
    let err = batch(vec![1, 2, 3], 0).unwrap_err();
    assert!(err.is_invalid_argument());
  }

  #[test]
  fn test_batch_negative_size_error() {
    let err = batch(vec![1, 2, 3], -1).unwrap_err();
    assert!(err.is_invalid_argument());
  }

  #[test]
  fn test_batch_accepts_usize() {
    let size: usize = 2;
    let result = batch("abc".chars(), size).unwrap();
    assert_eq!(result, vec![vec!['a', 'b'], vec!['c']]);
  }

  #[test]
  fn test_batch_huge_size_does_not_preallocate() {
    let result = batch(vec![1, 2], usize::MAX).unwrap();
    assert_eq!(result, vec![vec![1, 2]]);
  }

  #[test]
  fn test_batched_zero_size_does_not_advance_inner() {
    let mut source = vec![1, 2, 3].into_iter();
    assert!(Batched::new(source.by_ref(), 0).is_err());
    assert_eq!(source.len(), 3);
  }

  #[test]
  fn test_batched_is_lazy() {
    let mut batches = Batched::new(1.., 2).unwrap();
    assert_eq!(batches.next(), Some(vec![1, 2]));
    assert_eq!(batches.next(), Some(vec![3, 4]));
  }

  #[test]
  fn test_batched_is_fused() {
    let mut batches = Batched::new(vec![1, 2, 3].into_iter(), 2).unwrap();
    assert_eq!(batches.next(), Some(vec![1, 2]));
    assert_eq!(batches.next(), Some(vec![3]));
    assert_eq!(batches.next(), None);
    assert_eq!(batches.next(), None);
  }

  #[test]
  fn test_batched_size_hint() {
    let batches = Batched::new(vec![1, 2, 3, 4, 5].into_iter(), 2).unwrap();
    assert_eq!(batches.size_hint(), (3, Some(3)));
    assert_eq!(batches.size(), 2);
  }

  #[test]
  fn test_batches_are_independent() {
    let mut result = batch(vec![1, 2, 3, 4], 2).unwrap();
    result[0].push(99);
    assert_eq!(result[1], vec![3, 4]);
  }
}
