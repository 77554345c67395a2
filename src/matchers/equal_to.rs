use std::fmt::Debug;

use super::{Describe, Matcher};
use crate::render;

pub struct EqualTo<E> {
  expected: E,
}

pub fn equal_to<E>(expected: E) -> EqualTo<E> {
  EqualTo { expected }
}

impl<E: Debug> Describe for EqualTo<E> {
  fn describe(&self) -> String {
    format!("equals {}", render::value(&self.expected))
  }
}

impl<T, E> Matcher<T> for EqualTo<E>
where
  T: PartialEq<E> + ?Sized,
  E: Debug,
{
  fn matches(&self, actual: &T) -> bool {
    actual.eq(&self.expected)
  }
}

matcher_ops!(EqualTo<E>);

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn compiles_with_different_expectations() {
    assert!(equal_to(1).matches(&1));
    assert!(equal_to("abc").matches(&"abc".to_string()));
    assert!(equal_to(vec![1, 2]).matches(&vec![1, 2]));
  }

  #[test]
  fn rejects_different_values() {
    assert!(!equal_to(2).matches(&1));
  }

  #[test]
  fn describes_expected_value() {
    assert_eq!(equal_to("x").describe(), "equals <\"x\">");
  }
}
