use std::fmt::Debug;

use tracing::trace;

use super::{Describe, Equality, Matcher, Relation};
use crate::config;
use crate::range::{self, Range};
use crate::render;

/// Multiset comparison: the subject matches when its elements can be paired one-to-one with the expected
/// elements under `relation`, regardless of order.
pub struct UnorderedRangeEquals<E, P = Equality> {
  expected: E,
  relation: P,
}

pub fn unordered_range_equals<E: Range>(expected: E) -> UnorderedRangeEquals<E> {
  UnorderedRangeEquals {
    expected,
    relation: Equality,
  }
}

pub fn unordered_range_equals_by<E: Range, P>(expected: E, relation: P) -> UnorderedRangeEquals<E, P> {
  UnorderedRangeEquals { expected, relation }
}

impl<E, P> Describe for UnorderedRangeEquals<E, P>
where
  E: Range,
  E::Element: Debug,
{
  fn describe(&self) -> String {
    format!("unordered elements are {}", render::elements(&self.expected, config::render()))
  }
}

impl<A, E, P> Matcher<A> for UnorderedRangeEquals<E, P>
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
      trace!(actual_len, expected_len, "unordered_range_equals rejected on length");
      return false;
    }

    let left = range::elements(actual);
    let right = range::elements(&self.expected);
    if left.len() != right.len() {
      trace!(actual_len = left.len(), expected_len = right.len(), "unordered_range_equals rejected on length");
      return false;
    }

    let compatible = |left_index: usize, right_index: usize| self.relation.holds(left[left_index], right[right_index]);

    // first-fit pass; everything below `first_free` is already owned
    let mut owners: Vec<Option<usize>> = vec![None; right.len()];
    let mut first_free = 0;
    let mut unpaired = Vec::new();
    for index in 0..left.len() {
      match (first_free..right.len()).find(|&candidate| owners[candidate].is_none() && compatible(index, candidate)) {
        Some(candidate) => {
          owners[candidate] = Some(index);
          while first_free < right.len() && owners[first_free].is_some() {
            first_free += 1;
          }
        }
        None => unpaired.push(index),
      }
    }

    let mut visited = vec![false; right.len()];
    for index in unpaired {
      if !(0..right.len()).any(|candidate| compatible(index, candidate)) {
        trace!(index, "unordered_range_equals found no partner for element");
        return false;
      }
      visited.fill(false);
      if !augment(index, &compatible, &mut owners, &mut visited) {
        trace!(index, "unordered_range_equals could not pair element");
        return false;
      }
    }
    true
  }
}

/// Kuhn's augmenting path step: pairs `root` with a free candidate, reassigning earlier pairs along the way.
/// The search keeps its own stack, so long reassignment chains cost heap rather than call depth.
fn augment<F>(root: usize, compatible: &F, owners: &mut [Option<usize>], visited: &mut [bool]) -> bool
where
  F: Fn(usize, usize) -> bool,
{
  // (left element, next candidate to try)
  let mut stack = vec![(root, 0)];
  // path[k] is the candidate stack[k] wants, currently owned by stack[k + 1]
  let mut path = Vec::new();
  while let Some(&(left, next)) = stack.last() {
    let Some(right) = (next..owners.len()).find(|&candidate| !visited[candidate] && compatible(left, candidate)) else {
      stack.pop();
      path.pop();
      continue;
    };
    let top = stack.len() - 1;
    stack[top].1 = right + 1;
    visited[right] = true;
    match owners[right] {
      Some(previous) => {
        path.push(right);
        stack.push((previous, 0));
      }
      None => {
        owners[right] = Some(left);
        for (&(owner, _), &taken) in stack.iter().zip(&path) {
          owners[taken] = Some(owner);
        }
        return true;
      }
    }
  }
  false
}

matcher_ops!(UnorderedRangeEquals<E, P>);
