use std::fmt::Debug;

use tracing::trace;

use super::equal_to::{EqualTo, equal_to};
use super::{Describe, Matcher, Relation};
use crate::range::{self, Range};
use crate::render;

pub struct Contains<M> {
  element: M,
}

/// Matches an element standing in `relation` to a fixed target, e.g. a string whose length is the target.
pub struct RelatedTo<T, P> {
  target: T,
  relation: P,
}

pub fn contains<T>(value: T) -> Contains<EqualTo<T>> {
  Contains { element: equal_to(value) }
}

pub fn contains_by<T, P>(value: T, relation: P) -> Contains<RelatedTo<T, P>> {
  Contains {
    element: RelatedTo { target: value, relation },
  }
}

pub fn contains_matching<M>(matcher: M) -> Contains<M> {
  Contains { element: matcher }
}

impl<M: Describe> Describe for Contains<M> {
  fn describe(&self) -> String {
    format!("contains element that {}", self.element.describe())
  }
}

impl<R, M> Matcher<R> for Contains<M>
where
  R: Range + ?Sized,
  M: Matcher<R::Element>,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| self.element.matches(element)) {
      Some(index) => {
        trace!(index, "contains stopped at first matching element");
        true
      }
      None => false,
    }
  }
}

impl<T: Debug, P> Describe for RelatedTo<T, P> {
  fn describe(&self) -> String {
    format!("is related to {}", render::value(&self.target))
  }
}

impl<E, T, P> Matcher<E> for RelatedTo<T, P>
where
  E: ?Sized,
  T: Debug,
  P: Relation<E, T>,
{
  fn matches(&self, actual: &E) -> bool {
    self.relation.holds(actual, &self.target)
  }
}

matcher_ops!(Contains<M>, RelatedTo<T, P>);
