use std::fmt::Debug;

use crate::config::RenderConfig;
use crate::range::{Cursor, Range, Sentinel};

pub fn value<T: Debug + ?Sized>(value: &T) -> String {
  format!("<{:?}>", value)
}

/// Renders a range as `[<a>, <b>, ...]`, eliding everything past `config.max_elements`.
pub fn elements<R>(range: &R, config: &RenderConfig) -> String
where
  R: Range + ?Sized,
  R::Element: Debug,
{
  let mut highlighted = Vec::new();
  let mut hidden = 0usize;
  let mut cursor = range.begin();
  let end = range.end();
  while !end.is_reached(&cursor) {
    if highlighted.len() < config.max_elements {
      highlighted.push(value(cursor.get()));
    } else {
      hidden += 1;
    }
    cursor.advance();
  }
  if hidden > 0 {
    highlighted.push(format!("... ({} more)", hidden));
  }
  format!("[{}]", highlighted.join(", "))
}
