//! Batch transformer.

use crate::error::{ComponentInfo, Result, SequenceError};
use crate::{Input, Output, Transformer, TransformerConfig};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::marker::PhantomData;
use std::pin::Pin;
use tracing::{debug, trace};

/// A transformer that groups items in a stream into batches of a specified size.
///
/// This transformer collects incoming items until the specified `size` is reached,
/// then emits them as a `Vec<T>`. Once the input ends, any remaining items are
/// emitted as a final, shorter batch. An empty input produces no batches.
pub struct BatchTransformer<T> {
  size: usize,
  config: TransformerConfig,
  _phantom: PhantomData<T>,
}

impl<T> BatchTransformer<T>
where
  T: Send + 'static,
{
  /// Creates a new `BatchTransformer` with the given batch size.
  ///
  /// # Arguments
  ///
  /// * `size` - The number of items in each full batch. Must be greater than zero.
  ///
  /// # Returns
  ///
  /// The transformer, with the default configuration.
  ///
  /// # Errors
  ///
  /// Returns [`SequenceError::InvalidArgument`] if `size` is zero.
  pub fn new(size: usize) -> Result<Self> {
    if size == 0 {
      return Err(SequenceError::invalid_argument(
        "size",
        "batch size must be greater than zero",
      ));
    }
    Ok(Self {
      size,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    })
  }

  /// The configured batch size.
  pub fn size(&self) -> usize {
    self.size
  }
}

impl<T> Input for BatchTransformer<T>
where
  T: Send + 'static,
{
  type Input = T;
  type InputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}

impl<T> Output for BatchTransformer<T>
where
  T: Send + 'static,
{
  type Output = Vec<T>;
  type OutputStream = Pin<Box<dyn Stream<Item = Vec<T>> + Send>>;
}

#[async_trait]
impl<T> Transformer for BatchTransformer<T>
where
  T: Send + 'static,
{
  async fn transform(&mut self, mut input: Self::InputStream) -> Self::OutputStream {
    let size = self.size;
    let component = self.component_info().name;

    Box::pin(async_stream::stream! {
      let mut current_batch: Vec<T> = Vec::new();
      let mut flushed = 0usize;
      while let Some(item) = input.next().await {
        current_batch.push(item);
        if current_batch.len() == size {
          flushed += 1;
          trace!(component = %component, batch = flushed, "flushed batch");
          yield std::mem::take(&mut current_batch);
        }
      }
      if !current_batch.is_empty() {
        flushed += 1;
        trace!(
          component = %component,
          batch = flushed,
          len = current_batch.len(),
          "flushed final batch"
        );
        yield current_batch;
      }
      debug!(component = %component, batches = flushed, "input exhausted");
    })
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
        .unwrap_or_else(|| "batch_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::stream;

  #[tokio::test]
  async fn test_batch_exact_size() {
    let mut transformer = BatchTransformer::<i32>::new(3).unwrap();
    let input = stream::iter(vec![1, 2, 3, 4, 5, 6]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![1, 2, 3], vec![4, 5, 6]]);
  }

  #[tokio::test]
  async fn test_batch_partial_last_chunk() {
    let mut transformer = BatchTransformer::<i32>::new(2).unwrap();
    let input = stream::iter(vec![1, 2, 3, 4, 5]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![1, 2], vec![3, 4], vec![5]]);
  }

  #[tokio::test]
  async fn test_batch_empty_input() {
    let mut transformer = BatchTransformer::<i32>::new(2).unwrap();
    let input = stream::iter(Vec::<i32>::new());
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, Vec::<Vec<i32>>::new());
  }

  #[tokio::test]
  async fn test_batch_size_larger_than_input() {
    let mut transformer = BatchTransformer::<i32>::new(5).unwrap();
    let input = stream::iter(vec![1, 2, 3]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![1, 2, 3]]);
  }

  #[test]
  fn test_batch_zero_size_error() {
    let result = BatchTransformer::<i32>::new(0);
    assert!(matches!(result, Err(SequenceError::InvalidArgument { .. })));
  }

  #[test]
  fn test_batch_with_name() {
    let transformer = BatchTransformer::<i32>::new(3)
      .unwrap()
      .with_name("batch_3".to_string());

    assert_eq!(transformer.config().name(), Some("batch_3".to_string()));
    assert_eq!(transformer.component_info().name, "batch_3");
  }

  #[test]
  fn test_batch_default_name() {
    let transformer = BatchTransformer::<i32>::new(3).unwrap();
    assert_eq!(transformer.component_info().name, "batch_transformer");
    assert_eq!(transformer.size(), 3);
  }
}
