use super::{Describe, Matcher};

/// Wraps a closure. `predicate!(|x: &i32| *x > 0)` uses the closure's own source text as description.
#[macro_export]
macro_rules! predicate {
  ($pred:expr) => {{
    let description = stringify!($pred);
    $crate::matchers::predicate::Predicate::new($pred, description)
  }};
}

pub struct Predicate<F> {
  predicate: F,
  description: String,
}

impl<F> Predicate<F> {
  pub fn new(predicate: F, description: &str) -> Self {
    Predicate {
      predicate,
      description: description.to_string(),
    }
  }
}

pub fn predicate<T, F>(predicate: F, description: &str) -> Predicate<F>
where
  T: ?Sized,
  F: Fn(&T) -> bool,
{
  Predicate::new(predicate, description)
}

impl<F> Describe for Predicate<F> {
  fn describe(&self) -> String {
    if self.description.is_empty() {
      "matches undescribed predicate".to_string()
    } else {
      format!("satisfies {}", self.description)
    }
  }
}

impl<T, F> Matcher<T> for Predicate<F>
where
  T: ?Sized,
  F: Fn(&T) -> bool,
{
  fn matches(&self, actual: &T) -> bool {
    (self.predicate)(actual)
  }
}

matcher_ops!(Predicate<F>);

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn compiles_with_different_expectations() {
    assert!(predicate(|x: &i32| *x == 1, "is one").matches(&1));
    assert!(predicate!(|x: &i32| *x == 1).matches(&1));
    assert!(predicate!(|&x: &i32| x == 1).matches(&1));
    assert!(predicate(|s: &str| s.starts_with('a'), "starts with a").matches("abc"));
  }

  #[test]
  fn macro_describes_with_source_text() {
    let description = predicate!(|x: &i32| *x == 2).describe();
    assert!(description.starts_with("satisfies |x"));
    assert!(description.ends_with("*x == 2"));
  }

  #[test]
  fn empty_description() {
    assert_eq!(predicate(|_: &i32| true, "").describe(), "matches undescribed predicate");
  }
}
