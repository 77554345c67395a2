//! Matchers over container-like values.
//!
//! ```
//! use range_matchers::expect;
//! use range_matchers::prelude::*;
//!
//! let scores = vec![3, 1, 2];
//! expect!(scores).to_satisfy(contains(1) & size_is(3));
//! expect!(scores).to_satisfy(unordered_range_equals([1, 2, 3]));
//! expect!(scores).not().to_satisfy(range_equals([1, 2, 3]));
//! ```

pub mod assertion;
pub mod config;
pub mod error;
pub mod matchers;
pub mod range;
pub mod render;

pub mod prelude {
  pub use crate::assertion::{Locatable, expect, since};
  pub use crate::error::MatchFailure;
  pub use crate::matchers::{
    Describe, Equality, Matcher, MatcherExt, Relation, Truth, all_match, all_true, any_match, any_true, contains, contains_by,
    contains_matching, equal_to, is_empty, none_match, none_true, predicate, range_equals, range_equals_by, size_is, size_matching,
    unordered_range_equals, unordered_range_equals_by,
  };
  pub use crate::range::{Cursor, Range, RangeEmpty, RangeSize, Sentinel};
}
