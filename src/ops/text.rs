//! Filtering of absent and blank text values.

use std::iter::FusedIterator;

/// Returns `true` if `value` is empty or consists only of whitespace.
///
/// Whitespace here is the Unicode space, line and paragraph separators plus
/// the ASCII controls `\t`, `\n`, `\u{B}`, `\u{C}`, `\r` and the
/// information separators `\u{1C}`..=`\u{1F}`. The no-break spaces
/// `\u{A0}`, `\u{2007}` and `\u{202F}` are content, not whitespace.
pub fn is_blank(value: &str) -> bool {
  value.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
  matches!(
    c,
    '\t'
      | '\n'
      | '\u{B}'
      | '\u{C}'
      | '\r'
      | '\u{1C}'..='\u{1F}'
      | ' '
      | '\u{1680}'
      | '\u{2000}'..='\u{2006}'
      | '\u{2008}'..='\u{200A}'
      | '\u{2028}'
      | '\u{2029}'
      | '\u{205F}'
      | '\u{3000}'
  )
}

/// Lazy iterator over the present, non-blank strings of an inner iterator.
///
/// Created by [`filter_non_empty_strings`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct NonEmptyStrings<I> {
  inner: I,
}

impl<I, S> Iterator for NonEmptyStrings<I>
where
  I: Iterator<Item = Option<S>>,
  S: AsRef<str>,
{
  type Item = S;

  fn next(&mut self) -> Option<S> {
    self
      .inner
      .find_map(|value| value.filter(|value| !is_blank(value.as_ref())))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, self.inner.size_hint().1)
  }
}

impl<I, S> FusedIterator for NonEmptyStrings<I>
where
  I: FusedIterator<Item = Option<S>>,
  S: AsRef<str>,
{
}

/// Keeps the strings of `input` that are present and not blank.
///
/// `None` entries, empty strings and whitespace-only strings are dropped.
/// Order is preserved and duplicates are kept. The returned iterator is lazy:
/// nothing is read from `input` until it is polled.
///
/// # Example
///
/// ```rust
/// use streamutils::ops::filter_non_empty_strings;
///
/// let input = vec![Some(""), Some("abc"), None, Some("   "), Some("xyz")];
/// let kept: Vec<_> = filter_non_empty_strings(input).collect();
/// assert_eq!(kept, vec!["abc", "xyz"]);
/// ```
pub fn filter_non_empty_strings<I, S>(input: I) -> NonEmptyStrings<I::IntoIter>
where
  I: IntoIterator<Item = Option<S>>,
  S: AsRef<str>,
{
  NonEmptyStrings {
    inner: input.into_iter(),
  }
}
