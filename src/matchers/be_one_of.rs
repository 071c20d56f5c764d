use super::{FailureMessage, Matcher};
use crate::expression::Expression;
use crate::stringify::{stringify_with, StringifyOptions};
use std::fmt::Debug;
use tracing::trace;

/// Matches subjects equal to any of the allowed values.
#[derive(Debug, Clone)]
pub struct BeOneOf<T> {
  allowed_values: Vec<T>,
  options: StringifyOptions,
}

pub fn be_one_of<T, I>(allowed_values: I) -> BeOneOf<T>
where
  I: IntoIterator<Item = T>,
  T: PartialEq + Debug,
{
  BeOneOf {
    allowed_values: allowed_values.into_iter().collect(),
    options: StringifyOptions::default(),
  }
}

impl<T> BeOneOf<T> {
  pub fn allowed_values(&self) -> &[T] {
    &self.allowed_values
  }

  /// Lists at most `max_elements` of the allowed values in the failure message.
  pub fn abbreviated(mut self, max_elements: usize) -> Self {
    self.options = self.options.abbreviated(max_elements);
    self
  }
}

impl<T> Matcher<T> for BeOneOf<T>
where
  T: PartialEq + Debug,
{
  fn matches(&self, actual: &Expression<'_, T>, failure_message: &mut FailureMessage) -> bool {
    failure_message.postfix_message = format!("be one of: {}", stringify_with(&self.allowed_values, &self.options));
    let actual = actual.evaluate();
    let matched = self.allowed_values.contains(actual);
    trace!(allowed = self.allowed_values.len(), matched, "checked membership");
    matched
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::expect;
  use crate::expectation::*;
  use pretty_assertions::assert_eq;
  use std::cell::Cell;

  #[test]
  fn matches_allowed_value() {
    let result = be_one_of(vec![1, 2, 3]).evaluate(&Expression::value(2));
    assert!(result.matched);
    assert_eq!(result.message.postfix_message, "be one of: [1, 2, 3]");
  }

  #[test]
  fn rejects_value_outside_the_set() {
    let result = be_one_of(vec![1, 2, 3]).evaluate(&Expression::value(5));
    assert!(!result.matched);
    assert_eq!(result.message.postfix_message, "be one of: [1, 2, 3]");
    assert_eq!(result.message.expected_message(), "to be one of: [1, 2, 3]");
  }

  #[test]
  fn empty_set_never_matches() {
    let result = be_one_of(Vec::<&str>::new()).evaluate(&Expression::value("anything"));
    assert!(!result.matched);
    assert_eq!(result.message.postfix_message, "be one of: []");
  }

  #[test]
  fn duplicates_are_ignored() {
    assert!(be_one_of(vec!["a", "a", "b"]).evaluate(&Expression::value("a")).matched);
  }

  #[test]
  fn compares_by_value() {
    let allowed = vec!["left".to_string(), "right".to_string()];
    let actual = String::from("ri") + "ght";
    assert!(be_one_of(allowed).evaluate(&Expression::value(actual)).matched);
  }

  #[test]
  fn forces_subject_once() {
    let calls = Cell::new(0);
    let subject = Expression::new(|| {
      calls.set(calls.get() + 1);
      3
    });
    let matcher = be_one_of(1..=3);
    assert_eq!(calls.get(), 0);

    assert!(matcher.evaluate(&subject).matched);
    assert_eq!(calls.get(), 1);
    assert_eq!(matcher.allowed_values(), &[1, 2, 3]);
  }

  #[test]
  fn abbreviated_message_still_matches_on_all_values() {
    let matcher = be_one_of(1..=8).abbreviated(3);
    let result = matcher.evaluate(&Expression::value(8));
    assert!(result.matched);
    assert_eq!(result.message.postfix_message, "be one of: [1, 2, 3, ... (5 items)]");
  }

  #[test]
  fn compiles_with_different_expectations() {
    since("vec should compile").expect(|| 2).to(be_one_of(vec![1, 2, 3]));
    since("array should compile").expect(|| 'm').to(be_one_of(['n', '\n', 'm', ' ']));
    since("borrowed matcher should compile").expect(|| 1).to(&be_one_of([1]));
    since("negation should compile").expect(|| 4).not().to(be_one_of(vec![1, 2, 3]));
    expect!(2).to(be_one_of(vec![1, 2])).to(be_one_of(vec![2]));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: to be one of: [1, 2, 3]\n\
                             \t   found: <5>\n\
                             at location.rs:42\n")]
  fn failure_message() {
    since("description should be displayed").expect(|| 5).at("location.rs:42").to(be_one_of(vec![1, 2, 3]));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: to be one of: []\n\
                             \t   found: <\"anything\">\n\
                             at location.rs:42\n")]
  fn failure_message_for_empty_set() {
    since("description should be displayed")
      .expect(|| "anything")
      .at("location.rs:42")
      .to(be_one_of(Vec::<&str>::new()));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: to not be one of: [1, 2, 3]\n\
                             \t   found: <2>\n\
                             at location.rs:42\n")]
  fn inverted_failure_message() {
    since("description should be displayed").expect(|| 2).at("location.rs:42").not().to(be_one_of(vec![1, 2, 3]));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: to be one of: [10, 20, ... (2 items)]\n\
                             \t   found: <5>\n\
                             at location.rs:42\n")]
  fn abbreviated_failure_message() {
    since("description should be displayed")
      .expect(|| 5)
      .at("location.rs:42")
      .to(be_one_of(vec![10, 20, 30, 40]).abbreviated(2));
  }
}
