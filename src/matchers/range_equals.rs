use std::fmt::Debug;

use tracing::trace;

use super::{Describe, Equality, Matcher, Relation};
use crate::config;
use crate::range::{Cursor, Range, Sentinel};
use crate::render;

/// Positional comparison of the subject against `expected`, element by element.
pub struct RangeEquals<E, P = Equality> {
  expected: E,
  relation: P,
}

pub fn range_equals<E: Range>(expected: E) -> RangeEquals<E> {
  RangeEquals {
    expected,
    relation: Equality,
  }
}

pub fn range_equals_by<E: Range, P>(expected: E, relation: P) -> RangeEquals<E, P> {
  RangeEquals { expected, relation }
}

impl<E, P> Describe for RangeEquals<E, P>
where
  E: Range,
  E::Element: Debug,
{
  fn describe(&self) -> String {
    format!("elements are {}", render::elements(&self.expected, config::render()))
  }
}

impl<A, E, P> Matcher<A> for RangeEquals<E, P>
where
  A: Range + ?Sized,
  E: Range,
  E::Element: Debug,
  P: Relation<A::Element, E::Element>,
{
  fn matches(&self, actual: &A) -> bool {
    if let (Some(actual_len), Some(expected_len)) = (actual.known_len(), self.expected.known_len())
      && actual_len != expected_len
    {
      trace!(actual_len, expected_len, "range_equals rejected on length");
      return false;
    }

    let mut left = actual.begin();
    let left_end = actual.end();
    let mut right = self.expected.begin();
    let right_end = self.expected.end();
    let mut index = 0usize;
    loop {
      match (left_end.is_reached(&left), right_end.is_reached(&right)) {
        (true, true) => return true,
        (false, false) => {}
        _ => {
          trace!(index, "range_equals ran out of elements on one side");
          return false;
        }
      }
      if !self.relation.holds(left.get(), right.get()) {
        trace!(index, "range_equals short-circuited on a differing element");
        return false;
      }
      left.advance();
      right.advance();
      index += 1;
    }
  }
}

matcher_ops!(RangeEquals<E, P>);
