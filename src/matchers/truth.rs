use tracing::trace;

use super::{Describe, Matcher};
use crate::range::{self, Range};

/// Explicit conversion of an element into a truth value.
pub trait Truth {
  fn truth(&self) -> bool;
}

impl Truth for bool {
  fn truth(&self) -> bool {
    *self
  }
}

impl<T: Truth + ?Sized> Truth for &T {
  fn truth(&self) -> bool {
    (**self).truth()
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AllTrue;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTrue;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoneTrue;

pub fn all_true() -> AllTrue {
  AllTrue
}

pub fn any_true() -> AnyTrue {
  AnyTrue
}

pub fn none_true() -> NoneTrue {
  NoneTrue
}

impl Describe for AllTrue {
  fn describe(&self) -> String {
    "contains only true".to_string()
  }
}

impl Describe for AnyTrue {
  fn describe(&self) -> String {
    "contains at least one true".to_string()
  }
}

impl Describe for NoneTrue {
  fn describe(&self) -> String {
    "contains no true".to_string()
  }
}

impl<R> Matcher<R> for AllTrue
where
  R: Range + ?Sized,
  R::Element: Truth,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| !element.truth()) {
      Some(index) => {
        trace!(index, "all_true short-circuited on a false element");
        false
      }
      None => true,
    }
  }
}

impl<R> Matcher<R> for AnyTrue
where
  R: Range + ?Sized,
  R::Element: Truth,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| element.truth()) {
      Some(index) => {
        trace!(index, "any_true short-circuited on a true element");
        true
      }
      None => false,
    }
  }
}

impl<R> Matcher<R> for NoneTrue
where
  R: Range + ?Sized,
  R::Element: Truth,
{
  fn matches(&self, actual: &R) -> bool {
    match range::position(actual, |element| element.truth()) {
      Some(index) => {
        trace!(index, "none_true short-circuited on a true element");
        false
      }
      None => true,
    }
  }
}

matcher_ops!(AllTrue, AnyTrue, NoneTrue);
