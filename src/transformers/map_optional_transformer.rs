//! Map-optional transformer.

use crate::error::ComponentInfo;
use crate::{Input, Output, Transformer, TransformerConfig};
use async_trait::async_trait;
use futures::{Stream, StreamExt, future};
use std::marker::PhantomData;
use std::pin::Pin;

/// Unwraps the `Some` items of a stream and silently drops the `None` items.
pub struct MapOptionalTransformer<T> {
  config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> Default for MapOptionalTransformer<T> {
  fn default() -> Self {
    Self {
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> MapOptionalTransformer<T>
where
  T: Send + 'static,
{
  /// Creates a new `MapOptionalTransformer`.
  pub fn new() -> Self {
    Self::default()
  }
}

impl<T> Input for MapOptionalTransformer<T>
where
  T: Send + 'static,
{
  type Input = Option<T>;
  type InputStream = Pin<Box<dyn Stream<Item = Option<T>> + Send>>;
}

impl<T> Output for MapOptionalTransformer<T>
where
  T: Send + 'static,
{
  type Output = T;
  type OutputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}

#[async_trait]
impl<T> Transformer for MapOptionalTransformer<T>
where
  T: Send + 'static,
{
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    Box::pin(input.filter_map(future::ready))
  }

  fn set_config_impl(&mut self, config: TransformerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig {
    &mut self.config
  }

  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config
        .name()
        .unwrap_or_else(|| "map_optional_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}
