macro_rules! matcher_ops {
  ($($matcher:ident $(<$($param:ident),*>)?),* $(,)?) => {
    $(
      impl$(<$($param),*>)? ::std::ops::Not for $matcher$(<$($param),*>)? {
        type Output = $crate::matchers::composition::MatchNot<Self>;

        fn not(self) -> Self::Output {
          $crate::matchers::composition::MatchNot::new(self)
        }
      }

      impl<$($($param,)*)? Rhs> ::std::ops::BitAnd<Rhs> for $matcher$(<$($param),*>)? {
        type Output = $crate::matchers::composition::MatchAnd<Self, Rhs>;

        fn bitand(self, rhs: Rhs) -> Self::Output {
          $crate::matchers::composition::MatchAnd::new(self, rhs)
        }
      }

      impl<$($($param,)*)? Rhs> ::std::ops::BitOr<Rhs> for $matcher$(<$($param),*>)? {
        type Output = $crate::matchers::composition::MatchOr<Self, Rhs>;

        fn bitor(self, rhs: Rhs) -> Self::Output {
          $crate::matchers::composition::MatchOr::new(self, rhs)
        }
      }
    )*
  };
}

pub mod composition;
pub mod contains;
pub mod empty;
pub mod equal_to;
pub mod predicate;
pub mod quantifiers;
pub mod range_equals;
pub mod size;
pub mod truth;
pub mod unordered;

pub use composition::{MatchAnd, MatchNot, MatchOr};
pub use contains::{Contains, RelatedTo, contains, contains_by, contains_matching};
pub use empty::{IsEmpty, is_empty};
pub use equal_to::{EqualTo, equal_to};
pub use predicate::{Predicate, predicate};
pub use quantifiers::{AllMatch, AnyMatch, NoneMatch, all_match, any_match, none_match};
pub use range_equals::{RangeEquals, range_equals, range_equals_by};
pub use size::{SizeIs, size_is, size_matching};
pub use truth::{AllTrue, AnyTrue, NoneTrue, Truth, all_true, any_true, none_true};
pub use unordered::{UnorderedRangeEquals, unordered_range_equals, unordered_range_equals_by};

/// Human readable explanation of what a matcher accepts, used when reporting a mismatch.
pub trait Describe {
  fn describe(&self) -> String;
}

pub trait Matcher<T: ?Sized>: Describe {
  fn matches(&self, actual: &T) -> bool;
}

impl<D: Describe + ?Sized> Describe for &D {
  fn describe(&self) -> String {
    (**self).describe()
  }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
  fn matches(&self, actual: &T) -> bool {
    (**self).matches(actual)
  }
}

/// Method forms of `&`, `|` and `!`, available for any matcher including ones defined outside this crate.
pub trait MatcherExt: Describe + Sized {
  fn and<R: Describe>(self, rhs: R) -> MatchAnd<Self, R> {
    MatchAnd::new(self, rhs)
  }

  fn or<R: Describe>(self, rhs: R) -> MatchOr<Self, R> {
    MatchOr::new(self, rhs)
  }

  #[allow(clippy::should_implement_trait)]
  fn not(self) -> MatchNot<Self> {
    MatchNot::new(self)
  }
}

impl<M: Describe> MatcherExt for M {}

/// Binary predicate between an element of the subject and an element or value on the expected side.
pub trait Relation<A: ?Sized, B: ?Sized> {
  fn holds(&self, actual: &A, expected: &B) -> bool;
}

impl<A: ?Sized, B: ?Sized, F> Relation<A, B> for F
where
  F: Fn(&A, &B) -> bool,
{
  fn holds(&self, actual: &A, expected: &B) -> bool {
    self(actual, expected)
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Equality;

impl<A, B> Relation<A, B> for Equality
where
  A: PartialEq<B> + ?Sized,
  B: ?Sized,
{
  fn holds(&self, actual: &A, expected: &B) -> bool {
    actual == expected
  }
}
