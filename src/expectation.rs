use crate::expression::Expression;
use crate::matchers::{FailureMessage, Matcher};
use crate::stringify::stringify_value;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, trace};

#[macro_export]
macro_rules! since {
  (&$description:expr) => {
    $crate::since!($description)
  };
  ($description:expr) => {
    $crate::expectation::Locatable::at($crate::expectation::since(&$description), format!("{}:{}", file!(), line!()))
  };
}

/// Starts a lazy expectation located at the call site. The subject expression is not
/// evaluated until a matcher asks for it.
#[macro_export]
macro_rules! expect {
  ($subject:expr) => {
    $crate::expectation::Locatable::at($crate::expectation::expect(|| $subject), format!("{}:{}", file!(), line!()))
  };
}

pub fn since(description: &str) -> Description {
  Description {
    description: Some(description.to_string()),
    location: None,
  }
}

/// Anything that can carry the source location of an expectation.
pub trait Locatable: Sized {
  fn at(self, location: impl Into<String>) -> Self;
}

pub struct Description {
  description: Option<String>,
  location: Option<String>,
}

impl Description {
  pub fn expect<'a, T, F>(self, subject: F) -> Subject<'a, T>
  where
    F: FnOnce() -> T + 'a,
  {
    Subject {
      expression: Expression::new(subject),
      description: self.description,
      location: self.location,
    }
  }
}

impl Locatable for Description {
  fn at(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }
}

pub fn expect<'a, T, F>(subject: F) -> Subject<'a, T>
where
  F: FnOnce() -> T + 'a,
{
  Subject {
    expression: Expression::new(subject),
    description: None,
    location: None,
  }
}

pub struct Subject<'a, T> {
  expression: Expression<'a, T>,
  description: Option<String>,
  location: Option<String>,
}

impl<'a, T> Subject<'a, T> {
  /// Forces the subject if no matcher has done so yet.
  pub fn subject(&self) -> &T {
    self.expression.evaluate()
  }

  #[allow(clippy::should_implement_trait)]
  pub fn not(self) -> NegativeConstrainedSubject<'a, T> {
    NegativeConstrainedSubject {
      expression: self.expression,
      description: self.description,
      location: self.location,
    }
  }

  pub fn try_to<M>(self, matcher: M) -> Result<Self, Mismatch>
  where
    M: Matcher<T>,
    T: Debug,
  {
    trace!(location = self.location.as_deref(), "running expectation");
    let mut failure_message = FailureMessage::default();
    if matcher.matches(&self.expression, &mut failure_message) {
      return Ok(self);
    }
    let found = found(&self.expression, &mut failure_message);
    Err(reject(Mismatch::from(self), failure_message, found))
  }

  pub fn to<M>(self, matcher: M) -> Self
  where
    M: Matcher<T>,
    T: Debug,
  {
    match self.try_to(matcher) {
      Ok(subject) => subject,
      Err(mismatch) => mismatch.fail(),
    }
  }
}

impl<'a, T> Locatable for Subject<'a, T> {
  fn at(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }
}

pub struct NegativeConstrainedSubject<'a, T> {
  expression: Expression<'a, T>,
  description: Option<String>,
  location: Option<String>,
}

impl<'a, T> NegativeConstrainedSubject<'a, T> {
  pub fn subject(&self) -> &T {
    self.expression.evaluate()
  }

  #[allow(clippy::should_implement_trait)]
  pub fn not(self) -> Subject<'a, T> {
    Subject {
      expression: self.expression,
      description: self.description,
      location: self.location,
    }
  }

  pub fn try_to<M>(self, matcher: M) -> Result<Self, Mismatch>
  where
    M: Matcher<T>,
    T: Debug,
  {
    trace!(location = self.location.as_deref(), "running negated expectation");
    let mut failure_message = FailureMessage::negated();
    if matcher.does_not_match(&self.expression, &mut failure_message) {
      return Ok(self);
    }
    let found = found(&self.expression, &mut failure_message);
    Err(reject(Mismatch::from(self), failure_message, found))
  }

  pub fn to<M>(self, matcher: M) -> Self
  where
    M: Matcher<T>,
    T: Debug,
  {
    match self.try_to(matcher) {
      Ok(subject) => subject,
      Err(mismatch) => mismatch.fail(),
    }
  }
}

impl<'a, T> Locatable for NegativeConstrainedSubject<'a, T> {
  fn at(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }
}

fn found<T: Debug>(expression: &Expression<'_, T>, failure_message: &mut FailureMessage) -> String {
  failure_message.actual_value.take().unwrap_or_else(|| stringify_value(expression.evaluate()))
}

fn reject(mismatch: Mismatch, failure_message: FailureMessage, found: String) -> Mismatch {
  let mismatch = mismatch.expecting(failure_message.expected_message()).found(found);
  debug!(expected = mismatch.expected(), found = mismatch.actual(), location = mismatch.location(), "expectation failed");
  mismatch
}

/// A failed expectation, rendered as an expected/found report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", report(.description, .expected, .actual, .location))]
pub struct Mismatch {
  description: Option<String>,
  expected: Option<String>,
  actual: Option<String>,
  location: Option<String>,
}

impl<'a, T> From<Subject<'a, T>> for Mismatch {
  fn from(subject: Subject<'a, T>) -> Self {
    Mismatch {
      description: subject.description,
      expected: None,
      actual: None,
      location: subject.location,
    }
  }
}

impl<'a, T> From<NegativeConstrainedSubject<'a, T>> for Mismatch {
  fn from(subject: NegativeConstrainedSubject<'a, T>) -> Self {
    Mismatch {
      description: subject.description,
      expected: None,
      actual: None,
      location: subject.location,
    }
  }
}

impl Mismatch {
  pub fn description(&self) -> Option<&str> {
    self.description.as_deref()
  }

  pub fn expected(&self) -> Option<&str> {
    self.expected.as_deref()
  }

  pub fn actual(&self) -> Option<&str> {
    self.actual.as_deref()
  }

  pub fn location(&self) -> Option<&str> {
    self.location.as_deref()
  }

  pub fn expecting(mut self, expected: impl Into<String>) -> Self {
    self.expected = Some(expected.into());
    self
  }

  pub fn found(mut self, actual: impl Into<String>) -> Self {
    self.actual = Some(actual.into());
    self
  }

  pub fn fail(self) -> ! {
    panic!("{}", self)
  }
}

fn report(description: &Option<String>, expected: &Option<String>, actual: &Option<String>, location: &Option<String>) -> String {
  let location = location.as_ref().map_or_else(String::new, |location| format!("at {}\n", location));

  let Some(expected) = expected else {
    return format!("\n\tNo expectation \n{}", location);
  };

  let Some(actual) = actual else {
    return format!("\n\tNo actual value \n{}", location);
  };

  let description = description.as_ref().map_or_else(String::new, |description| format!("\n{}:", description));

  format!(
    "{}\n\
     \texpected: {}\n\
     \t   found: {}\n\
     {}",
    description, expected, actual, location
  )
}
