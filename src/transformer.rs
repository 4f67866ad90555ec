//! # Transformer Trait
//!
//! This module defines the [`Transformer`] trait for components that turn one
//! async stream into another. Each sequence operation in [`crate::ops`] has a
//! transformer counterpart in [`crate::transformers`] with the same
//! semantics, for inputs that arrive as a `futures::Stream` rather than an
//! in-memory iterator.
//!
//! ## Key Concepts
//!
//! - **Transformer**: consumes an [`Input::InputStream`] and returns an
//!   [`Output::OutputStream`]
//! - **TransformerConfig**: per-component configuration (currently the
//!   component name used in log events)
//! - **ComponentInfo**: name and type of a transformer, for diagnostics
//!
//! ## Example
//!
//! ```rust
//! use futures::{StreamExt, stream};
//! use streamutils::Transformer;
//! use streamutils::transformers::BatchTransformer;
//!
//! # async fn example() -> Result<(), streamutils::error::SequenceError> {
//! let mut transformer = BatchTransformer::<i32>::new(2)?.with_name("pairs".to_string());
//! let batches: Vec<Vec<i32>> = transformer
//!   .transform(Box::pin(stream::iter(vec![1, 2, 3])))
//!   .await
//!   .collect()
//!   .await;
//! assert_eq!(batches, vec![vec![1, 2], vec![3]]);
//! # Ok(())
//! # }
//! ```

use crate::error::ComponentInfo;
use crate::{input::Input, output::Output};
use async_trait::async_trait;

/// Configuration shared by all transformers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformerConfig {
  /// Optional name for identifying this transformer in logs.
  pub name: Option<String>,
}

impl TransformerConfig {
  /// Sets the name for this transformer configuration.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }
}

/// Trait for components that transform data streams.
///
/// Implementors provide [`Transformer::transform`] and the three
/// configuration hooks; everything else has a default.
#[async_trait]
pub trait Transformer: Input + Output {
  /// Transforms a stream of input items into a stream of output items.
  ///
  /// The returned stream reads from `input` only as it is polled.
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream;

  /// Replaces the configuration for this transformer.
  fn set_config(&mut self, config: TransformerConfig) {
    self.set_config_impl(config);
  }

  /// Returns a reference to the transformer's configuration.
  fn config(&self) -> &TransformerConfig {
    self.get_config_impl()
  }

  /// Returns a mutable reference to the transformer's configuration.
  fn config_mut(&mut self) -> &mut TransformerConfig {
    self.get_config_mut_impl()
  }

  /// Sets the name for this transformer.
  #[must_use]
  fn with_name(mut self, name: String) -> Self
  where
    Self: Sized,
  {
    let config = self.get_config_impl().clone().with_name(name);
    self.set_config(config);
    self
  }

  /// Returns information about the component for log events.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config()
        .name()
        .unwrap_or_else(|| "transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores the configuration.
  fn set_config_impl(&mut self, config: TransformerConfig);

  /// Returns the stored configuration.
  fn get_config_impl(&self) -> &TransformerConfig;

  /// Returns the stored configuration mutably.
  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig;
}
