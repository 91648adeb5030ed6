use crate::{DualValued, Function};

/// Collects both values of a dual-valued function into a tuple.
///
/// Used by `.into_pair()`.
pub(crate) struct Pair<D> {
    function: D,
}

impl<D> Pair<D> {
    pub(crate) const fn new(function: D) -> Self {
        Self { function }
    }
}

impl<D: DualValued> Function for Pair<D> {
    type Input = D::Input;
    type Output = (D::First, D::Second);
    type Error = D::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.function.apply(input, |first, second| (first, second))
    }
}
