pub mod be_one_of;

use crate::expression::Expression;

/// The message slot a matcher fills in while it runs.
///
/// `to` is owned by the expectation (`"to"` or `"to not"`), `postfix_message` by the matcher.
/// A matcher may also set `actual_value`, otherwise the expectation renders the subject itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessage {
  pub to: String,
  pub postfix_message: String,
  pub actual_value: Option<String>,
}

impl Default for FailureMessage {
  fn default() -> Self {
    FailureMessage {
      to: "to".to_string(),
      postfix_message: String::new(),
      actual_value: None,
    }
  }
}

impl FailureMessage {
  pub fn negated() -> Self {
    FailureMessage {
      to: "to not".to_string(),
      ..FailureMessage::default()
    }
  }

  pub fn expected_message(&self) -> String {
    format!("{} {}", self.to, self.postfix_message)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
  pub matched: bool,
  pub message: FailureMessage,
}

pub trait Matcher<T> {
  fn matches(&self, actual: &Expression<'_, T>, failure_message: &mut FailureMessage) -> bool;

  fn does_not_match(&self, actual: &Expression<'_, T>, failure_message: &mut FailureMessage) -> bool {
    !self.matches(actual, failure_message)
  }

  fn evaluate(&self, actual: &Expression<'_, T>) -> MatchResult {
    let mut message = FailureMessage::default();
    let matched = self.matches(actual, &mut message);
    MatchResult { matched, message }
  }
}

impl<T, M> Matcher<T> for &M
where
  M: Matcher<T> + ?Sized,
{
  fn matches(&self, actual: &Expression<'_, T>, failure_message: &mut FailureMessage) -> bool {
    (**self).matches(actual, failure_message)
  }

  fn does_not_match(&self, actual: &Expression<'_, T>, failure_message: &mut FailureMessage) -> bool {
    (**self).does_not_match(actual, failure_message)
  }
}

/// Turns a closure over the subject and the message slot into a [`Matcher`].
pub struct MatcherFunc<F> {
  matcher: F,
}

impl<F> MatcherFunc<F> {
  pub fn new<T>(matcher: F) -> Self
  where
    F: Fn(&Expression<'_, T>, &mut FailureMessage) -> bool,
  {
    MatcherFunc { matcher }
  }
}

impl<T, F> Matcher<T> for MatcherFunc<F>
where
  F: Fn(&Expression<'_, T>, &mut FailureMessage) -> bool,
{
  fn matches(&self, actual: &Expression<'_, T>, failure_message: &mut FailureMessage) -> bool {
    (self.matcher)(actual, failure_message)
  }
}

#[cfg(test)]
mod tests {

  use super::*;

  fn be_even() -> MatcherFunc<impl Fn(&Expression<'_, i32>, &mut FailureMessage) -> bool> {
    MatcherFunc::new(|actual: &Expression<'_, i32>, failure_message: &mut FailureMessage| {
      failure_message.postfix_message = "be even".to_string();
      actual.evaluate() % 2 == 0
    })
  }

  #[test]
  fn closures_act_as_matchers() {
    let result = be_even().evaluate(&Expression::value(4));
    assert!(result.matched);
    assert_eq!(result.message.expected_message(), "to be even");

    assert!(!be_even().evaluate(&Expression::value(3)).matched);
  }

  #[test]
  fn negation_inverts_by_default() {
    let mut message = FailureMessage::negated();
    assert!(be_even().does_not_match(&Expression::value(3), &mut message));
    assert_eq!(message.expected_message(), "to not be even");
  }

  fn matches_two<M: Matcher<i32>>(matcher: M) -> bool {
    matcher.evaluate(&Expression::value(2)).matched
  }

  #[test]
  fn references_delegate() {
    let matcher = be_even();
    assert!(matches_two(&matcher));
    assert!(matches_two(&matcher));
  }
}
