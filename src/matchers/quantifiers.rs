use tracing::trace;

use super::{Describe, Matcher};
use crate::range::{self, Range};

pub struct AllMatch<M> {
  element: M,
}

pub struct AnyMatch<M> {
  element: M,
}

pub struct NoneMatch<M> {
  element: M,
}

pub fn all_match<M>(matcher: M) -> AllMatch<M> {
  AllMatch { element: matcher }
}

pub fn any_match<M>(matcher: M) -> AnyMatch<M> {
  AnyMatch { element: matcher }
}

pub fn none_match<M>(matcher: M) -> NoneMatch<M> {
  NoneMatch { element: matcher }
}

impl<M: Describe> Describe for AllMatch<M> {
  fn describe(&self) -> String {
    format!("all match {}", self.element.describe())
  }
}

impl<M: Describe> Describe for AnyMatch<M> {
  fn describe(&self) -> String {
    format!("any match {}", self.element.describe())
  }
}

impl<M: Describe> Describe for NoneMatch<M> {
  fn describe(&self) -> String {
    format!("none match {}", self.element.describe())
  }
}

impl<R, M> Matcher<R> for AllMatch<M>
where
  R: Range + ?Sized,
  M: Matcher<R::Element>,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| !self.element.matches(element)) {
      Some(index) => {
        trace!(index, "all_match short-circuited on a failing element");
        false
      }
      None => true,
    }
  }
}

impl<R, M> Matcher<R> for AnyMatch<M>
where
  R: Range + ?Sized,
  M: Matcher<R::Element>,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| self.element.matches(element)) {
      Some(index) => {
        trace!(index, "any_match short-circuited on a matching element");
        true
      }
      None => false,
    }
  }
}

impl<R, M> Matcher<R> for NoneMatch<M>
where
  R: Range + ?Sized,
  M: Matcher<R::Element>,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| self.element.matches(element)) {
      Some(index) => {
        trace!(index, "none_match short-circuited on a matching element");
        false
      }
      None => true,
    }
  }
}

matcher_ops!(AllMatch<M>, AnyMatch<M>, NoneMatch<M>);
