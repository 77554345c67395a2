use super::equal_to::{EqualTo, equal_to};
use super::{Describe, Matcher};
use crate::range::RangeSize;

pub struct SizeIs<M> {
  size: M,
}

pub fn size_is(size: usize) -> SizeIs<EqualTo<usize>> {
  SizeIs { size: equal_to(size) }
}

pub fn size_matching<M>(matcher: M) -> SizeIs<M> {
  SizeIs { size: matcher }
}

impl<M: Describe> Describe for SizeIs<M> {
  fn describe(&self) -> String {
    format!("has size that {}", self.size.describe())
  }
}

impl<R, M> Matcher<R> for SizeIs<M>
where
  R: RangeSize + ?Sized,
  M: Matcher<usize>,
{
  fn matches(&self, actual: &R) -> bool {
    self.size.matches(&actual.range_size())
  }
}

matcher_ops!(SizeIs<M>);
