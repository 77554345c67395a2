//! Uniform access to container-like values.
//!
//! A range hands out a [`Cursor`] positioned on its first element and a [`Sentinel`] that knows when a cursor
//! has run off the end. The two are distinct types, so sentinel-terminated ranges plug in as easily as the std
//! containers do. Size and emptiness are separate capabilities: some types can report one without being
//! traversable at all.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque, btree_set, hash_set, linked_list, vec_deque};
use std::{option, slice};

pub trait Cursor<'a> {
  type Element: 'a;

  /// Panics when the cursor is already at the end of its range.
  fn get(&self) -> &'a Self::Element;
  fn advance(&mut self);
}

pub trait Sentinel<C> {
  fn is_reached(&self, cursor: &C) -> bool;
}

pub trait Range {
  type Element;
  type Cursor<'a>: Cursor<'a, Element = Self::Element>
  where
    Self: 'a;
  type Sentinel<'a>: Sentinel<Self::Cursor<'a>>
  where
    Self: 'a;

  fn begin(&self) -> Self::Cursor<'_>;
  fn end(&self) -> Self::Sentinel<'_>;

  /// Length, when it is available without traversal.
  fn known_len(&self) -> Option<usize> {
    None
  }
}

pub trait RangeSize {
  fn range_size(&self) -> usize;
}

pub trait RangeEmpty {
  fn range_is_empty(&self) -> bool;
}

/// Adapts a borrowing iterator to the cursor protocol. The element under the cursor is pulled eagerly.
pub struct IterCursor<I: Iterator> {
  iter: I,
  current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
  pub fn new(mut iter: I) -> Self {
    let current = iter.next();
    IterCursor { iter, current }
  }
}

impl<'a, T: 'a, I> Cursor<'a> for IterCursor<I>
where
  I: Iterator<Item = &'a T>,
{
  type Element = T;

  fn get(&self) -> &'a T {
    self.current.unwrap_or_else(|| panic!("cursor dereferenced past the end of its range"))
  }

  fn advance(&mut self) {
    self.current = self.iter.next();
  }
}

/// End marker for an [`IterCursor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhausted;

impl<I: Iterator> Sentinel<IterCursor<I>> for Exhausted {
  fn is_reached(&self, cursor: &IterCursor<I>) -> bool {
    cursor.current.is_none()
  }
}

macro_rules! std_range {
  ($([$($generics:tt)*] $container:ty => $module:ident::$iter:ident),* $(,)?) => {
    $(
      impl<$($generics)*> Range for $container {
        type Element = T;
        type Cursor<'a> = IterCursor<$module::$iter<'a, T>> where Self: 'a;
        type Sentinel<'a> = Exhausted where Self: 'a;

        fn begin(&self) -> Self::Cursor<'_> {
          IterCursor::new(self.iter())
        }

        fn end(&self) -> Self::Sentinel<'_> {
          Exhausted
        }

        fn known_len(&self) -> Option<usize> {
          Some(self.len())
        }
      }

      std_size!([$($generics)*] $container);
    )*
  };
}

macro_rules! std_size {
  ($([$($generics:tt)*] $container:ty),* $(,)?) => {
    $(
      impl<$($generics)*> RangeSize for $container {
        fn range_size(&self) -> usize {
          self.len()
        }
      }

      impl<$($generics)*> RangeEmpty for $container {
        fn range_is_empty(&self) -> bool {
          self.is_empty()
        }
      }
    )*
  };
}

std_range! {
  [T] [T] => slice::Iter,
  [T, const N: usize] [T; N] => slice::Iter,
  [T] Vec<T> => slice::Iter,
  [T] VecDeque<T> => vec_deque::Iter,
  [T] LinkedList<T> => linked_list::Iter,
  [T] BTreeSet<T> => btree_set::Iter,
  [T, S] HashSet<T, S> => hash_set::Iter,
}

std_size! {
  [K, V] BTreeMap<K, V>,
  [K, V, S] HashMap<K, V, S>,
}

impl<T> Range for Option<T> {
  type Element = T;
  type Cursor<'a>
    = IterCursor<option::Iter<'a, T>>
  where
    Self: 'a;
  type Sentinel<'a>
    = Exhausted
  where
    Self: 'a;

  fn begin(&self) -> Self::Cursor<'_> {
    IterCursor::new(self.iter())
  }

  fn end(&self) -> Self::Sentinel<'_> {
    Exhausted
  }

  fn known_len(&self) -> Option<usize> {
    Some(self.range_size())
  }
}

impl<T> RangeSize for Option<T> {
  fn range_size(&self) -> usize {
    if self.is_some() { 1 } else { 0 }
  }
}

impl<T> RangeEmpty for Option<T> {
  fn range_is_empty(&self) -> bool {
    self.is_none()
  }
}

impl<R: Range + ?Sized> Range for &R {
  type Element = R::Element;
  type Cursor<'a>
    = R::Cursor<'a>
  where
    Self: 'a;
  type Sentinel<'a>
    = R::Sentinel<'a>
  where
    Self: 'a;

  fn begin(&self) -> Self::Cursor<'_> {
    (**self).begin()
  }

  fn end(&self) -> Self::Sentinel<'_> {
    (**self).end()
  }

  fn known_len(&self) -> Option<usize> {
    (**self).known_len()
  }
}

impl<R: RangeSize + ?Sized> RangeSize for &R {
  fn range_size(&self) -> usize {
    (**self).range_size()
  }
}

impl<R: RangeEmpty + ?Sized> RangeEmpty for &R {
  fn range_is_empty(&self) -> bool {
    (**self).range_is_empty()
  }
}

/// Index of the first element satisfying `predicate`, stopping there.
pub fn position<R, F>(range: &R, mut predicate: F) -> Option<usize>
where
  R: Range + ?Sized,
  F: FnMut(&R::Element) -> bool,
{
  let mut cursor = range.begin();
  let end = range.end();
  let mut index = 0;
  while !end.is_reached(&cursor) {
    if predicate(cursor.get()) {
      return Some(index);
    }
    cursor.advance();
    index += 1;
  }
  None
}

/// Counts by traversal, without dereferencing.
pub fn count<R: Range + ?Sized>(range: &R) -> usize {
  let mut cursor = range.begin();
  let end = range.end();
  let mut count = 0;
  while !end.is_reached(&cursor) {
    cursor.advance();
    count += 1;
  }
  count
}

pub fn elements<R: Range + ?Sized>(range: &R) -> Vec<&R::Element> {
  let mut collected = Vec::with_capacity(range.known_len().unwrap_or_default());
  let mut cursor = range.begin();
  let end = range.end();
  while !end.is_reached(&cursor) {
    collected.push(cursor.get());
    cursor.advance();
  }
  collected
}
