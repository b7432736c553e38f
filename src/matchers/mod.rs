//! Argument matchers.
//!
//! An expectation checks recorded arguments through [`Arguments`], which is
//! either a positional list of [`ArgumentMatcher`]s or the any-parameters
//! sentinel that accepts every argument list.

pub mod equals;

pub use equals::EqualsMatcher;

use std::fmt;

use serde_json::Value;

/// Predicate over a single argument value.
pub trait ArgumentMatcher: fmt::Debug {
    /// Returns `true` if `value` satisfies this matcher.
    fn matches(&self, value: &Value) -> bool;

    /// Describes the expected value for failure messages.
    fn describe(&self) -> String;
}

/// The argument pattern of an expectation.
#[derive(Debug)]
pub enum Arguments {
    /// One matcher per argument. The call must have exactly as many
    /// arguments as there are matchers.
    Positional(Vec<Box<dyn ArgumentMatcher>>),
    /// Any number of arguments with any values.
    Any,
}

impl Arguments {
    /// Matches only calls made without arguments.
    #[must_use]
    pub fn none() -> Self {
        Self::Positional(Vec::new())
    }

    /// One [`EqualsMatcher`] per value.
    pub fn equal_to<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Positional(
            values
                .into_iter()
                .map(|v| Box::new(EqualsMatcher::new(v)) as Box<dyn ArgumentMatcher>)
                .collect(),
        )
    }

    /// Returns `true` if `arguments` satisfy this pattern.
    #[must_use]
    pub fn matches(&self, arguments: &[Value]) -> bool {
        match self {
            Self::Any => true,
            Self::Positional(matchers) => {
                matchers.len() == arguments.len()
                    && matchers.iter().zip(arguments).all(|(m, value)| m.matches(value))
            }
        }
    }

    /// Comma-separated matcher descriptions. Empty for [`Arguments::Any`].
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Any => String::new(),
            Self::Positional(matchers) => {
                matchers.iter().map(|m| m.describe()).collect::<Vec<_>>().join(", ")
            }
        }
    }
}

impl From<Vec<Box<dyn ArgumentMatcher>>> for Arguments {
    fn from(matchers: Vec<Box<dyn ArgumentMatcher>>) -> Self {
        Self::Positional(matchers)
    }
}
