//! Non-empty strings transformer.

use crate::error::ComponentInfo;
use crate::ops::is_blank;
use crate::{Input, Output, Transformer, TransformerConfig};
use async_trait::async_trait;
use futures::{Stream, StreamExt, future};
use std::marker::PhantomData;
use std::pin::Pin;
use tracing::trace;

/// Drops absent and blank strings from a stream of `Option<S>`.
///
/// An item passes iff it is `Some` and not blank in the sense of
/// [`crate::ops::is_blank`].
/// Items are forwarded as soon as they arrive.
pub struct NonEmptyStringsTransformer<S> {
  config: TransformerConfig,
  _phantom: PhantomData<fn(S)>,
}

impl<S> Default for NonEmptyStringsTransformer<S> {
  fn default() -> Self {
    Self {
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<S> NonEmptyStringsTransformer<S>
where
  S: AsRef<str> + Send + 'static,
{
  /// Creates a new `NonEmptyStringsTransformer`.
  pub fn new() -> Self {
    Self::default()
  }
}

impl<S> Input for NonEmptyStringsTransformer<S>
where
  S: Send + 'static,
{
  type Input = Option<S>;
  type InputStream = Pin<Box<dyn Stream<Item = Option<S>> + Send>>;
}

impl<S> Output for NonEmptyStringsTransformer<S>
where
  S: Send + 'static,
{
  type Output = S;
  type OutputStream = Pin<Box<dyn Stream<Item = S> + Send>>;
}

#[async_trait]
impl<S> Transformer for NonEmptyStringsTransformer<S>
where
  S: AsRef<str> + Send + 'static,
{
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    trace!(component = %self.component_info().name, "filtering blank strings");
    Box::pin(input.filter_map(|value| {
      future::ready(value.filter(|value| !is_blank(value.as_ref())))
    }))
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
        .unwrap_or_else(|| "non_empty_strings_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}
