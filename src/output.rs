//! Output trait for components that produce streams.

use futures::Stream;

/// A component that produces a stream of `Self::Output` items.
pub trait Output {
  /// The item type produced.
  type Output;
  /// The stream type the items are emitted on.
  type OutputStream: Stream<Item = Self::Output> + Send;
}
