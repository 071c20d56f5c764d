use std::cell::LazyCell;
use std::fmt;

type Thunk<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// The subject of an expectation, evaluated on first access and cached afterwards.
pub struct Expression<'a, T> {
  value: LazyCell<T, Thunk<'a, T>>,
}

impl<'a, T> Expression<'a, T> {
  pub fn new<F>(thunk: F) -> Self
  where
    F: FnOnce() -> T + 'a,
  {
    Expression {
      value: LazyCell::new(Box::new(thunk) as Thunk<'a, T>),
    }
  }

  /// Wraps an already computed value.
  pub fn value(value: T) -> Self
  where
    T: 'a,
  {
    Expression::new(move || value)
  }

  pub fn evaluate(&self) -> &T {
    LazyCell::force(&self.value)
  }
}

impl<'a, T> fmt::Debug for Expression<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Expression { .. }")
  }
}
