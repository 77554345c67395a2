//! Fluent assertions driving the matchers: `expect!(subject).to_satisfy(matcher)`.

use std::fmt::Debug;

use tracing::debug;

use crate::error::MatchFailure;
use crate::matchers::Matcher;
use crate::render;

#[macro_export]
macro_rules! since {
  ($subject:expr) => {
    $crate::assertion::Locatable::at($crate::assertion::since(&$subject), format!("{}:{}", file!(), line!()))
  };
}

#[macro_export]
macro_rules! expect {
  ($subject:expr) => {
    $crate::assertion::Locatable::at($crate::assertion::expect(&$subject), format!("{}:{}", file!(), line!()))
  };
}

pub fn since(description: &str) -> Description {
  Description {
    description: Some(description.to_string()),
    location: None,
  }
}

pub trait Locatable<T> {
  fn at(self, location: T) -> Self;
}

impl<L> Locatable<&str> for L
where
  L: Locatable<String>,
{
  fn at(self, location: &str) -> Self {
    self.at(location.to_string())
  }
}

pub struct Description {
  description: Option<String>,
  location: Option<String>,
}

impl Description {
  pub fn expect<S: ?Sized>(self, subject: &S) -> Subject<'_, S> {
    Subject {
      subject,
      description: self.description,
      location: self.location,
    }
  }
}

impl Locatable<String> for Description {
  fn at(mut self, location: String) -> Self {
    self.location = Some(location);
    self
  }
}

pub fn expect<S: ?Sized>(subject: &S) -> Subject<'_, S> {
  Subject {
    subject,
    description: None,
    location: None,
  }
}

pub struct Subject<'a, S: ?Sized> {
  subject: &'a S,
  description: Option<String>,
  location: Option<String>,
}

impl<'a, S: ?Sized> Subject<'a, S> {
  #[allow(clippy::should_implement_trait)]
  pub fn not(self) -> NegativeConstrainedSubject<'a, S> {
    NegativeConstrainedSubject {
      subject: self.subject,
      description: self.description,
      location: self.location,
    }
  }
}

impl<'a, S: Debug + ?Sized> Subject<'a, S> {
  /// Like [`Subject::to_satisfy`], but hands the mismatch back instead of panicking.
  pub fn check<M: Matcher<S>>(self, matcher: M) -> Result<Self, MatchFailure> {
    if matcher.matches(self.subject) {
      return Ok(self);
    }
    let found = render::value(self.subject);
    Err(Mismatch::from(self).expecting(matcher.describe()).found(found).into_failure())
  }

  pub fn to_satisfy<M: Matcher<S>>(self, matcher: M) -> Self {
    let subject = self.subject;
    if !matcher.matches(subject) {
      Mismatch::from(self).expecting(matcher.describe()).found(render::value(subject)).fail()
    }
    self
  }
}

impl<'a, S: ?Sized> Locatable<String> for Subject<'a, S> {
  fn at(mut self, location: String) -> Self {
    self.location = Some(location);
    self
  }
}

pub struct NegativeConstrainedSubject<'a, S: ?Sized> {
  subject: &'a S,
  description: Option<String>,
  location: Option<String>,
}

impl<'a, S: ?Sized> NegativeConstrainedSubject<'a, S> {
  #[allow(clippy::should_implement_trait)]
  pub fn not(self) -> Subject<'a, S> {
    Subject {
      subject: self.subject,
      description: self.description,
      location: self.location,
    }
  }
}

impl<'a, S: Debug + ?Sized> NegativeConstrainedSubject<'a, S> {
  pub fn check<M: Matcher<S>>(self, matcher: M) -> Result<Self, MatchFailure> {
    if !matcher.matches(self.subject) {
      return Ok(self);
    }
    let found = render::value(self.subject);
    Err(Mismatch::from(self).expecting(format!("not {}", matcher.describe())).found(found).into_failure())
  }

  pub fn to_satisfy<M: Matcher<S>>(self, matcher: M) -> Self {
    let subject = self.subject;
    if matcher.matches(subject) {
      Mismatch::from(self).expecting(format!("not {}", matcher.describe())).found(render::value(subject)).fail()
    }
    self
  }
}

impl<'a, S: ?Sized> Locatable<String> for NegativeConstrainedSubject<'a, S> {
  fn at(mut self, location: String) -> Self {
    self.location = Some(location);
    self
  }
}

pub trait Expecting<T> {
  fn expecting(self, expected: T) -> Self;
}

pub trait Found<T> {
  fn found(self, actual: T) -> Self;
}

pub struct Mismatch {
  description: Option<String>,
  expected: Option<String>,
  actual: Option<String>,
  location: Option<String>,
}

impl<'a, S: ?Sized> From<Subject<'a, S>> for Mismatch {
  fn from(subject: Subject<'a, S>) -> Self {
    Mismatch {
      description: subject.description,
      expected: None,
      actual: None,
      location: subject.location,
    }
  }
}

impl<'a, S: ?Sized> From<NegativeConstrainedSubject<'a, S>> for Mismatch {
  fn from(subject: NegativeConstrainedSubject<'a, S>) -> Self {
    Mismatch {
      description: subject.description,
      expected: None,
      actual: None,
      location: subject.location,
    }
  }
}

impl Mismatch {
  pub fn into_failure(self) -> MatchFailure {
    MatchFailure {
      description: self.description,
      expected: self.expected.unwrap_or_else(|| "<no expectation>".to_string()),
      found: self.actual.unwrap_or_else(|| "<no actual value>".to_string()),
      location: self.location,
    }
  }

  pub fn fail(self) -> ! {
    let failure = self.into_failure();
    debug!(expected = %failure.expected, found = %failure.found, "reporting mismatch");
    panic!("{}", failure)
  }
}

impl Expecting<String> for Mismatch {
  fn expecting(mut self, expected: String) -> Self {
    self.expected = Some(expected);
    self
  }
}

impl Found<String> for Mismatch {
  fn found(mut self, actual: String) -> Self {
    self.actual = Some(actual);
    self
  }
}

#[cfg(test)]
mod tests {

  use tracing_test::traced_test;

  use super::*;
  use crate::matchers::{contains, equal_to, is_empty, range_equals, size_is};

  #[test]
  fn compiles_with_different_subjects() {
    since("vec should compile").expect(&vec![1i8]).to_satisfy(contains(1i8));
    since("slice should compile").expect(&[1i8, 2][..]).to_satisfy(size_is(2));
    since("values should compile").expect(&1).to_satisfy(equal_to(1));
    crate::expect!(Vec::<u8>::new()).to_satisfy(is_empty());
    crate::since!("macro should compile").expect(&[1, 2]).not().to_satisfy(is_empty());
  }

  #[test]
  fn matchers_can_be_reused_by_reference() {
    let matcher = contains(3);
    expect(&vec![1, 2, 3]).to_satisfy(&matcher);
    expect(&[3]).to_satisfy(&matcher);
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: contains element that equals <2>\n\
                             \t   found: <[1]>\n\
                             at location.rs:42\n")]
  fn failure_message() {
    since("description should be displayed").expect(&vec![1i8]).at("location.rs:42").to_satisfy(contains(2i8));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: not is empty\n\
                             \t   found: <[]>\n\
                             at location.rs:42\n")]
  fn inverted_failure_message() {
    since("description should be displayed").expect(&Vec::<i8>::new()).at("location.rs:42").not().to_satisfy(is_empty());
  }

  #[test]
  #[should_panic(expected = "\texpected: elements are [<1>, <2>]\n")]
  fn failure_message_without_description() {
    expect(&[2, 1]).to_satisfy(range_equals([1, 2]));
  }

  #[test]
  fn double_negation_restores_the_subject() {
    expect(&vec![1]).not().not().to_satisfy(contains(1));
  }

  #[test]
  fn check_returns_the_failure() {
    let failure = since("checked").expect(&vec![1, 2]).at("location.rs:7").check(size_is(3)).err();
    assert_eq!(
      failure,
      Some(MatchFailure {
        description: Some("checked".to_string()),
        expected: "has size that equals <3>".to_string(),
        found: "<[1, 2]>".to_string(),
        location: Some("location.rs:7".to_string()),
      })
    );
  }

  #[test]
  fn check_passes_the_subject_on() {
    let values = vec![1, 2];
    let checked = expect(&values).check(size_is(2)).and_then(|subject| subject.check(contains(2)));
    assert!(checked.is_ok());
    assert!(expect(&vec![1, 2]).not().check(contains(2)).is_err());
    assert!(expect(&vec![1, 2]).not().check(contains(5)).is_ok());
  }

  #[test]
  fn macro_records_call_site() {
    let failure = crate::expect!(vec![1]).check(is_empty()).err();
    let location = failure.and_then(|failure| failure.location).unwrap_or_default();
    assert!(location.starts_with(file!()), "{}", location);
  }

  #[test]
  #[traced_test]
  fn logs_reported_mismatches() {
    let result = std::panic::catch_unwind(|| {
      expect(&vec![1]).to_satisfy(is_empty());
    });
    assert!(result.is_err());
    assert!(logs_contain("reporting mismatch"));
  }
}
