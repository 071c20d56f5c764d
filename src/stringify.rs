use std::fmt::Debug;

/// Controls how sequences are rendered into failure messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringifyOptions {
  max_elements: Option<usize>,
}

impl StringifyOptions {
  pub fn new() -> Self {
    StringifyOptions::default()
  }

  /// Renders at most `max_elements` items, followed by a count of the omitted ones.
  pub fn abbreviated(mut self, max_elements: usize) -> Self {
    self.max_elements = Some(max_elements);
    self
  }
}

pub fn stringify<T: Debug>(values: &[T]) -> String {
  stringify_with(values, &StringifyOptions::default())
}

pub fn stringify_with<T: Debug>(values: &[T], options: &StringifyOptions) -> String {
  let limit = options.max_elements.unwrap_or(values.len());
  let mut rendered = String::from("[");
  let mut it = values.iter().take(limit);
  if let Some(element) = it.next() {
    rendered.push_str(&format!("{:?}", element));
    for element in it {
      rendered.push_str(", ");
      rendered.push_str(&format!("{:?}", element));
    }
  }
  if values.len() > limit {
    if limit > 0 {
      rendered.push_str(", ");
    }
    rendered.push_str(&format!("... ({} items)", values.len() - limit));
  }
  rendered.push(']');
  rendered
}

pub fn stringify_value<T: Debug + ?Sized>(value: &T) -> String {
  format!("<{:?}>", value)
}
