use super::{Describe, Matcher};

pub struct MatchAnd<L, R> {
  left: L,
  right: R,
}

impl<L, R> MatchAnd<L, R> {
  pub fn new(left: L, right: R) -> Self {
    MatchAnd { left, right }
  }
}

impl<L: Describe, R: Describe> Describe for MatchAnd<L, R> {
  fn describe(&self) -> String {
    format!("({} and {})", self.left.describe(), self.right.describe())
  }
}

impl<T, L, R> Matcher<T> for MatchAnd<L, R>
where
  T: ?Sized,
  L: Matcher<T>,
  R: Matcher<T>,
{
  fn matches(&self, actual: &T) -> bool {
    self.left.matches(actual) && self.right.matches(actual)
  }
}

pub struct MatchOr<L, R> {
  left: L,
  right: R,
}

impl<L, R> MatchOr<L, R> {
  pub fn new(left: L, right: R) -> Self {
    MatchOr { left, right }
  }
}

impl<L: Describe, R: Describe> Describe for MatchOr<L, R> {
  fn describe(&self) -> String {
    format!("({} or {})", self.left.describe(), self.right.describe())
  }
}

impl<T, L, R> Matcher<T> for MatchOr<L, R>
where
  T: ?Sized,
  L: Matcher<T>,
  R: Matcher<T>,
{
  fn matches(&self, actual: &T) -> bool {
    self.left.matches(actual) || self.right.matches(actual)
  }
}

pub struct MatchNot<M> {
  inner: M,
}

impl<M> MatchNot<M> {
  pub fn new(inner: M) -> Self {
    MatchNot { inner }
  }
}

impl<M: Describe> Describe for MatchNot<M> {
  fn describe(&self) -> String {
    format!("not {}", self.inner.describe())
  }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for MatchNot<M> {
  fn matches(&self, actual: &T) -> bool {
    !self.inner.matches(actual)
  }
}

matcher_ops!(MatchAnd<L, R>, MatchOr<L, R>, MatchNot<M>);
