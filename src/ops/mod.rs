//! # Sequence Operations
//!
//! Stateless helpers over iterators and collections.
//!
//! | operation | evaluation | result |
//! |---|---|---|
//! | [`batch`] | eager | `Vec<Vec<T>>` of fixed-size groups |
//! | [`group_by_and_sum`] | eager | `HashMap<K, V>` of per-key sums |
//! | [`filter_non_empty_strings`] | lazy | iterator of present, non-blank strings |
//! | [`split_stream`] | eager | [`Partition`] of matched and unmatched items |
//! | [`map_optional`] | lazy | iterator of the `Some` values |
//!
//! Every operation consumes its input exactly once. Eager operations return
//! freshly allocated collections that own their items; lazy ones read from
//! the input only as they are polled.
//!
//! [`SequenceExt`] exposes the same operations in method position on any
//! iterator.
//!
//! ```rust
//! use streamutils::ops::SequenceExt;
//!
//! let batches: Vec<Vec<u32>> = (1..=5).batched(2)?.collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let partition = (1..=5).split_by(|n| n % 2 == 0);
//! assert_eq!(partition.matched, vec![2, 4]);
//! # Ok::<(), streamutils::error::SequenceError>(())
//! ```

mod batch;
mod group_sum;
mod optional;
mod split;
mod text;

pub use batch::{Batched, batch};
pub use group_sum::{group_by_and_sum, try_group_by_and_sum};
pub(crate) use group_sum::add_to_group;
pub use optional::map_optional;
pub use split::{Partition, split_stream, try_split_stream};
pub use text::{NonEmptyStrings, filter_non_empty_strings, is_blank};

use crate::error::Result;
use num_traits::{WrappingAdd, Zero};
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Flatten;

/// Extends all [`Iterator`]s with the sequence operations.
pub trait SequenceExt: Iterator + Sized {
  /// Lazily groups items into batches of `size`. See [`batch`].
  fn batched(self, size: usize) -> Result<Batched<Self>> {
    Batched::new(self, size)
  }

  /// Sums `value_of` per `key_of`. See [`group_by_and_sum`].
  fn group_sum<K, V, KF, VF>(self, key_of: KF, value_of: VF) -> HashMap<K, V>
  where
    K: Eq + Hash,
    V: WrappingAdd + Zero,
    KF: FnMut(&Self::Item) -> K,
    VF: FnMut(&Self::Item) -> V,
  {
    group_by_and_sum(self, key_of, value_of)
  }

  /// Keeps present, non-blank strings. See [`filter_non_empty_strings`].
  fn non_empty_strings<S>(self) -> NonEmptyStrings<Self>
  where
    Self: Iterator<Item = Option<S>>,
    S: AsRef<str>,
  {
    filter_non_empty_strings(self)
  }

  /// Partitions by `predicate`. See [`split_stream`].
  fn split_by<F>(self, predicate: F) -> Partition<Self::Item>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    split_stream(self, predicate)
  }

  /// Unwraps `Some` values and drops `None`. See [`map_optional`].
  fn present<T>(self) -> Flatten<Self>
  where
    Self: Iterator<Item = Option<T>>,
  {
    map_optional(self)
  }
}

impl<I: Iterator> SequenceExt for I {}
