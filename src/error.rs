use std::num::ParseIntError;

use thiserror::Error;

/// A matcher rejected its subject. The rendering is the same text a failing assertion panics with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}\n\texpected: {expected}\n\t   found: {found}\n{}", description_line(.description), location_line(.location))]
pub struct MatchFailure {
  pub description: Option<String>,
  pub expected: String,
  pub found: String,
  pub location: Option<String>,
}

fn description_line(description: &Option<String>) -> String {
  description.as_ref().map_or_else(String::new, |description| format!("\n{}:", description))
}

fn location_line(location: &Option<String>) -> String {
  location.as_ref().map_or_else(String::new, |location| format!("at {}\n", location))
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid value {value:?} for {key}")]
  InvalidValue {
    key: &'static str,
    value: String,
    #[source]
    source: ParseIntError,
  },
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn failure_renders_like_an_assertion_message() {
    let failure = MatchFailure {
      description: Some("description should be displayed".to_string()),
      expected: "is empty".to_string(),
      found: "[<1>]".to_string(),
      location: Some("location.rs:42".to_string()),
    };
    assert_eq!(
      failure.to_string(),
      "\n\
       description should be displayed:\n\
       \texpected: is empty\n\
       \t   found: [<1>]\n\
       at location.rs:42\n"
    );
  }

  #[test]
  fn failure_without_description_and_location() {
    let failure = MatchFailure {
      description: None,
      expected: "is empty".to_string(),
      found: "[<1>]".to_string(),
      location: None,
    };
    assert_eq!(failure.to_string(), "\n\texpected: is empty\n\t   found: [<1>]\n");
  }

  #[test]
  fn config_error_keeps_its_source() {
    let source = "many".parse::<usize>().unwrap_err();
    let error = ConfigError::InvalidValue { key: "KEY", value: "many".to_string(), source };
    assert_eq!(error.to_string(), "invalid value \"many\" for KEY");
    assert!(std::error::Error::source(&error).is_some());
  }
}
