use thiserror::Error;

/// A required argument was absent.
///
/// Returned by [`DualValued::and_then_checked()`](crate::DualValued::and_then_checked)
/// when no combiner is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid argument: missing required value `{name}`")]
pub struct MissingArgument {
    /// Name of the missing argument.
    pub name: &'static str,
}

impl MissingArgument {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name }
    }
}
