//! Partition transformer.

use crate::error::ComponentInfo;
use crate::ops::Partition;
use crate::{Input, Output, Transformer, TransformerConfig};
use async_trait::async_trait;
use futures::{Stream, StreamExt, future, stream};
use std::marker::PhantomData;
use std::pin::Pin;
use tracing::debug;

/// Splits a stream into the items that satisfy a predicate and those that do not.
///
/// The whole input is consumed before anything is emitted. The output stream
/// then yields exactly one [`Partition`], which is empty when the input was.
pub struct PartitionTransformer<F, T> {
  predicate: F,
  config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<F, T> PartitionTransformer<F, T>
where
  F: FnMut(&T) -> bool + Clone + Send + 'static,
  T: Send + 'static,
{
  /// Creates a partition transformer for `predicate`.
  ///
  /// The predicate is cloned for every call to `transform`, so state captured
  /// by it starts fresh for each input stream.
  ///
  /// # Arguments
  ///
  /// * `predicate` - Returns `true` for items that belong in `matched`.
  pub fn new(predicate: F) -> Self {
    Self {
      predicate,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<F, T> Input for PartitionTransformer<F, T>
where
  T: Send + 'static,
{
  type Input = T;
  type InputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}

impl<F, T> Output for PartitionTransformer<F, T>
where
  T: Send + 'static,
{
  type Output = Partition<T>;
  type OutputStream = Pin<Box<dyn Stream<Item = Partition<T>> + Send>>;
}

#[async_trait]
impl<F, T> Transformer for PartitionTransformer<F, T>
where
  F: FnMut(&T) -> bool + Clone + Send + 'static,
  T: Send + 'static,
{
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut predicate = self.predicate.clone();
    let component = self.component_info().name;

    Box::pin(stream::once(async move {
      let partition = input
        .fold(Partition::default(), move |mut partition, item| {
          let matched = predicate(&item);
          partition.push(item, matched);
          future::ready(partition)
        })
        .await;
      debug!(
        component = %component,
        matched = partition.matched.len(),
        unmatched = partition.unmatched.len(),
        "input exhausted"
      );
      partition
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
        .unwrap_or_else(|| "partition_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}
