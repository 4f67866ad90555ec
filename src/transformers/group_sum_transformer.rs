//! Group-and-sum transformer.

use crate::error::ComponentInfo;
use crate::ops::add_to_group;
use crate::{Input, Output, Transformer, TransformerConfig};
use async_trait::async_trait;
use futures::{Stream, StreamExt, future, stream};
use num_traits::{WrappingAdd, Zero};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::pin::Pin;
use tracing::debug;

/// A transformer that sums a value per key over the whole input stream.
///
/// The output stream yields exactly one `HashMap<K, V>` once the input ends,
/// holding one entry per distinct key. An empty input yields one empty map.
/// Sums wrap on overflow, as in [`crate::ops::group_by_and_sum`].
pub struct GroupSumTransformer<R, K, V, KF, VF> {
  key_of: KF,
  value_of: VF,
  config: TransformerConfig,
  _phantom: PhantomData<fn(R) -> (K, V)>,
}

impl<R, K, V, KF, VF> GroupSumTransformer<R, K, V, KF, VF>
where
  KF: FnMut(&R) -> K + Clone + Send + 'static,
  VF: FnMut(&R) -> V + Clone + Send + 'static,
{
  /// Creates a transformer keyed by `key_of` that sums `value_of`.
  ///
  /// # Arguments
  ///
  /// * `key_of` - Computes the group key of a record. Called before `value_of`.
  /// * `value_of` - Computes the value a record adds to its group.
  ///
  /// # Returns
  ///
  /// A `GroupSumTransformer` that emits a single map per input stream.
  pub fn new(key_of: KF, value_of: VF) -> Self {
    Self {
      key_of,
      value_of,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<R, K, V, KF, VF> Input for GroupSumTransformer<R, K, V, KF, VF>
where
  R: Send + 'static,
{
  type Input = R;
  type InputStream = Pin<Box<dyn Stream<Item = R> + Send>>;
}

impl<R, K, V, KF, VF> Output for GroupSumTransformer<R, K, V, KF, VF>
where
  K: Send + 'static,
  V: Send + 'static,
{
  type Output = HashMap<K, V>;
  type OutputStream = Pin<Box<dyn Stream<Item = HashMap<K, V>> + Send>>;
}

#[async_trait]
impl<R, K, V, KF, VF> Transformer for GroupSumTransformer<R, K, V, KF, VF>
where
  R: Send + 'static,
  K: Eq + Hash + Send + 'static,
  V: WrappingAdd + Zero + Send + 'static,
  KF: FnMut(&R) -> K + Clone + Send + 'static,
  VF: FnMut(&R) -> V + Clone + Send + 'static,
{
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut key_of = self.key_of.clone();
    let mut value_of = self.value_of.clone();
    let component = self.component_info().name;

    Box::pin(stream::once(async move {
      let sums = input
        .fold(HashMap::new(), move |mut sums, record| {
          let key = key_of(&record);
          let value = value_of(&record);
          add_to_group(&mut sums, key, &value);
          future::ready(sums)
        })
        .await;
      debug!(component = %component, keys = sums.len(), "input exhausted");
      sums
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
        .unwrap_or_else(|| "group_sum_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}
