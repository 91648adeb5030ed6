use std::marker::PhantomData;

use thiserror::Error;

use crate::DualValued;

/// Splits a string at the first occurrence of a delimiter.
///
/// The part before the delimiter is the first value and the part after it is
/// the second. Neither part includes the delimiter, and either may be empty.
/// A splitter built with [`trimmed()`](SplitOnce::trimmed) also strips
/// surrounding whitespace from both parts.
///
/// # Example
///
/// ```
/// use twofold::{DualValued, Function, SplitOnce};
///
/// let split = SplitOnce::new('=');
///
/// let joined = split.apply("key=value", |key, value| format!("{key}:{value}"));
/// assert_eq!(joined.unwrap(), "key:value");
///
/// let rest = split.apply("a=b=c", |_, rest| rest.to_owned());
/// assert_eq!(rest.unwrap(), "b=c");
///
/// let entry = split.trimmed().into_pair().call(" name = Ada ");
/// assert_eq!(entry.unwrap(), ("name", "Ada"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOnce<'a> {
    delimiter: char,
    trim: bool,
    _input: PhantomData<&'a str>,
}

impl SplitOnce<'_> {
    /// Creates a splitter for the given delimiter.
    #[must_use]
    pub const fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            trim: false,
            _input: PhantomData,
        }
    }

    /// Returns a splitter that also trims whitespace around both parts.
    #[must_use]
    pub const fn trimmed(self) -> Self {
        Self { trim: true, ..self }
    }

    /// Returns the delimiter this splitter looks for.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }
}

/// An error returned when a [`SplitOnce`] cannot split its input.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SplitError {
    #[error("delimiter `{delimiter}` not found in input")]
    DelimiterNotFound { delimiter: char },
}

impl<'a> DualValued for SplitOnce<'a> {
    type Input = &'a str;
    type First = &'a str;
    type Second = &'a str;
    type Error = SplitError;

    fn apply<R, Output>(&self, input: Self::Input, output: Output) -> Result<R, Self::Error>
    where
        Output: FnOnce(Self::First, Self::Second) -> R,
    {
        let Some((first, second)) = input.split_once(self.delimiter) else {
            tracing::trace!(delimiter = %self.delimiter, len = input.len(), "delimiter not found");
            return Err(SplitError::DelimiterNotFound {
                delimiter: self.delimiter,
            });
        };
        if self.trim {
            Ok(output(first.trim(), second.trim()))
        } else {
            Ok(output(first, second))
        }
    }
}
