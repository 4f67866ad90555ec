//! # streamutils
//!
//! Batching, grouping, filtering and partitioning helpers for Rust sequences.
//!
//! The crate has two layers:
//!
//! - [`ops`]: synchronous, stateless functions over anything that implements
//!   `IntoIterator`, plus the [`ops::SequenceExt`] extension trait.
//! - [`transformers`]: the same operations as async stream transformers,
//!   built on the [`Transformer`] trait.
//!
//! ## Key Features
//!
//! - **Batching**: fixed-size groups with a trailing partial batch
//! - **Aggregation**: per-key wrapping sums over caller-defined records
//! - **Text filtering**: drop absent and whitespace-only strings, lazily
//! - **Partitioning**: one eager pass into matched and unmatched halves
//! - **Optional unwrapping**: keep the `Some` values, lazily
//!
//! ## Quick Start
//!
//! ```rust
//! use streamutils::ops::{batch, filter_non_empty_strings, group_by_and_sum, map_optional, split_stream};
//!
//! assert_eq!(batch(vec![1, 2, 3, 4, 5], 2)?, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let totals = group_by_and_sum(vec![("A", 10), ("B", 20), ("A", 5)], |r| r.0, |r| r.1);
//! assert_eq!(totals["A"], 15);
//!
//! let words: Vec<_> = filter_non_empty_strings(vec![Some(""), Some("abc"), None]).collect();
//! assert_eq!(words, vec!["abc"]);
//!
//! let (even, odd): (Vec<i32>, Vec<i32>) = split_stream(1..=5, |n| n % 2 == 0).into();
//! assert_eq!((even, odd), (vec![2, 4], vec![1, 3, 5]));
//!
//! let present: Vec<_> = map_optional(vec![Some('a'), None, Some('b')]).collect();
//! assert_eq!(present, vec!['a', 'b']);
//! # Ok::<(), streamutils::error::SequenceError>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Error types.
pub mod error;
/// Input trait for stream consumers.
pub mod input;
/// Synchronous sequence operations.
pub mod ops;
/// Output trait for stream producers.
pub mod output;
/// Core transformer trait and configuration.
pub mod transformer;
/// Async stream transformers for each sequence operation.
pub mod transformers;

pub use error::{ComponentInfo, SequenceError};
pub use input::Input;
pub use output::Output;
pub use transformer::{Transformer, TransformerConfig};

#[cfg(test)]
mod ops_test;
