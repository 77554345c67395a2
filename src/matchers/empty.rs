use super::{Describe, Matcher};
use crate::range::RangeEmpty;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

pub fn is_empty() -> IsEmpty {
  IsEmpty
}

impl Describe for IsEmpty {
  fn describe(&self) -> String {
    "is empty".to_string()
  }
}

impl<R: RangeEmpty + ?Sized> Matcher<R> for IsEmpty {
  fn matches(&self, actual: &R) -> bool {
    actual.range_is_empty()
  }
}

matcher_ops!(IsEmpty);

#[cfg(test)]
mod tests {

  use std::collections::{HashSet, LinkedList};

  use super::*;

  #[test]
  fn compiles_with_different_expectations() {
    assert!(is_empty().matches(&Vec::<i8>::new()));
    assert!(is_empty().matches(&HashSet::<i8>::new()));
    assert!(is_empty().matches(&[0u8; 0]));
    assert!(is_empty().matches(&None::<i8>));
  }

  #[test]
  fn non_empty_containers() {
    assert!(!is_empty().matches(&[0.0]));
    assert!(!is_empty().matches(&vec!['a', 'b', 'c']));
  }

  #[test]
  fn only_the_outer_range_counts() {
    let mut outer: LinkedList<LinkedList<LinkedList<i32>>> = LinkedList::new();
    outer.push_back(LinkedList::new());
    assert!((!is_empty()).matches(&outer));
    assert!(outer.front().is_some_and(|inner| is_empty().matches(inner)));
  }
}
