//! Keyed aggregation of records.

use num_traits::{WrappingAdd, Zero};
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;
use tracing::trace;

/// Groups `records` by `key_of` and sums `value_of` within each group.
///
/// The result holds one entry per distinct key. Sums use the fixed-width
/// arithmetic of `V` and wrap on overflow instead of panicking. Iteration
/// order of the returned map is unspecified. An empty input gives an empty
/// map.
///
/// # Example
///
/// ```rust
/// use streamutils::ops::group_by_and_sum;
///
/// let records = vec![("A", 10), ("B", 20), ("A", 5)];
/// let totals = group_by_and_sum(records, |r| r.0, |r| r.1);
/// assert_eq!(totals["A"], 15);
/// assert_eq!(totals["B"], 20);
/// ```
pub fn group_by_and_sum<I, K, V, KF, VF>(
  records: I,
  mut key_of: KF,
  mut value_of: VF,
) -> HashMap<K, V>
where
  I: IntoIterator,
  K: Eq + Hash,
  V: WrappingAdd + Zero,
  KF: FnMut(&I::Item) -> K,
  VF: FnMut(&I::Item) -> V,
{
  let result = try_group_by_and_sum(
    records,
    |record| Ok::<_, Infallible>(key_of(record)),
    |record| Ok(value_of(record)),
  );
  match result {
    Ok(sums) => sums,
    Err(never) => match never {},
  }
}

/// Fallible form of [`group_by_and_sum`].
///
/// The key of a record is computed before its value. The first error returned
/// by either callback stops the aggregation and is returned as is; the
/// partially built map is discarded.
pub fn try_group_by_and_sum<I, K, V, E, KF, VF>(
  records: I,
  mut key_of: KF,
  mut value_of: VF,
) -> Result<HashMap<K, V>, E>
where
  I: IntoIterator,
  K: Eq + Hash,
  V: WrappingAdd + Zero,
  KF: FnMut(&I::Item) -> Result<K, E>,
  VF: FnMut(&I::Item) -> Result<V, E>,
{
  let mut sums: HashMap<K, V> = HashMap::new();
  let mut seen = 0usize;
  for record in records {
    let key = key_of(&record)?;
    let value = value_of(&record)?;
    add_to_group(&mut sums, key, &value);
    seen += 1;
  }
  trace!(records = seen, keys = sums.len(), "grouped and summed records");
  Ok(sums)
}

/// Adds `value` to the running sum for `key`, starting from zero.
pub(crate) fn add_to_group<K, V>(sums: &mut HashMap<K, V>, key: K, value: &V)
where
  K: Eq + Hash,
  V: WrappingAdd + Zero,
{
  let sum = sums.entry(key).or_insert_with(V::zero);
  *sum = sum.wrapping_add(value);
}
