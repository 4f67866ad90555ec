//! Unwrapping of optional values.

use std::iter::Flatten;

/// Yields the values of the `Some` entries of `input`, in order, and skips
/// the `None` entries.
///
/// Only `None` counts as absent: `Some(0)` or `Some(String::new())` are
/// present values and are kept. The returned iterator is lazy.
///
/// # Example
///
/// ```rust
/// use streamutils::ops::map_optional;
///
/// let values: Vec<_> = map_optional(vec![Some("a"), None, Some("b")]).collect();
/// assert_eq!(values, vec!["a", "b"]);
/// ```
pub fn map_optional<I, T>(input: I) -> Flatten<I::IntoIter>
where
  I: IntoIterator<Item = Option<T>>,
{
  input.into_iter().flatten()
}
