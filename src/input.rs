//! Input trait for components that consume streams.
//!
//! Implemented by every transformer in [`crate::transformers`]. The
//! associated `InputStream` is usually a pinned, boxed stream so that
//! transformers can be driven from any executor.
//!
//! ```rust
//! use futures::Stream;
//! use std::pin::Pin;
//! use streamutils::input::Input;
//!
//! struct Sink;
//!
//! impl Input for Sink {
//!   type Input = i32;
//!   type InputStream = Pin<Box<dyn Stream<Item = i32> + Send>>;
//! }
//! ```

use futures::Stream;

/// A component that consumes a stream of `Self::Input` items.
pub trait Input {
  /// The item type consumed.
  type Input;
  /// The stream type the items arrive on.
  type InputStream: Stream<Item = Self::Input> + Send;
}
