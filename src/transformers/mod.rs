//! # Transformers Module
//!
//! Async stream counterparts of the operations in [`crate::ops`]. Each
//! transformer consumes a pinned, boxed `futures::Stream` and returns another,
//! with the same semantics as the synchronous operation it mirrors:
//!
//! | transformer | mirrors | output |
//! |---|---|---|
//! | [`BatchTransformer`] | [`crate::ops::batch`] | one `Vec<T>` per batch |
//! | [`GroupSumTransformer`] | [`crate::ops::group_by_and_sum`] | one `HashMap<K, V>` at end of input |
//! | [`NonEmptyStringsTransformer`] | [`crate::ops::filter_non_empty_strings`] | each kept string |
//! | [`PartitionTransformer`] | [`crate::ops::split_stream`] | one [`crate::ops::Partition`] at end of input |
//! | [`MapOptionalTransformer`] | [`crate::ops::map_optional`] | each `Some` value |
//!
//! ## Configuration
//!
//! Transformers can be given a component name (see
//! [`crate::Transformer::with_name`]) which is attached to their log events.
//!
//! ## Example Usage
//!
//! ```rust
//! use futures::{StreamExt, stream};
//! use streamutils::Transformer;
//! use streamutils::transformers::MapOptionalTransformer;
//!
//! # async fn example() {
//! let mut transformer = MapOptionalTransformer::<i32>::new();
//! let input = Box::pin(stream::iter(vec![Some(1), None, Some(3)]));
//! let values: Vec<i32> = transformer.transform(input).await.collect().await;
//! assert_eq!(values, vec![1, 3]);
//! # }
//! ```
pub mod batch_transformer;
pub mod group_sum_transformer;
pub mod map_optional_transformer;
pub mod non_empty_strings_transformer;
pub mod partition_transformer;

pub use batch_transformer::*;
pub use group_sum_transformer::*;
pub use map_optional_transformer::*;
pub use non_empty_strings_transformer::*;
pub use partition_transformer::*;
