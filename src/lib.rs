//! Expectations on lazily evaluated subjects.
//!
//! ```
//! use expectant::{be_one_of, since};
//!
//! since("status codes are known").expect(|| 404).to(be_one_of([200, 404, 500]));
//! ```

pub mod expectation;
pub mod expression;
pub mod matchers;
pub mod stringify;

pub use expectation::{expect, since, Locatable, Mismatch, NegativeConstrainedSubject, Subject};
pub use expression::Expression;
pub use matchers::be_one_of::{be_one_of, BeOneOf};
pub use matchers::{FailureMessage, MatchResult, Matcher, MatcherFunc};
pub use stringify::{stringify, stringify_value, stringify_with, StringifyOptions};
