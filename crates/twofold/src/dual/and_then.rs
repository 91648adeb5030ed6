use crate::{DualValued, Function};

/// A dual-valued function with its combiner fixed.
///
/// Used by `.and_then()` and `.and_then_checked()`.
pub(crate) struct AndThen<D, After> {
    function: D,
    after: After,
}

impl<D, After> AndThen<D, After> {
    pub(crate) const fn new(function: D, after: After) -> Self {
        Self { function, after }
    }
}

impl<D, After, R> Function for AndThen<D, After>
where
    D: DualValued,
    After: Fn(D::First, D::Second) -> R,
{
    type Input = D::Input;
    type Output = R;
    type Error = D::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.function.apply(input, &self.after)
    }
}
