use crate::Function;

/// Feeds the result of one function into the next.
///
/// Built by `.chain()`. Typically `function` is a dual-valued function whose
/// combiner has been fixed with `.and_then()`, and `next` post-processes the
/// combined value. A failure in `function` stops the chain before `next`
/// runs.
pub(crate) struct Chain<F, Next> {
    function: F,
    next: Next,
}

impl<F, Next> Chain<F, Next> {
    pub(crate) const fn new(function: F, next: Next) -> Self {
        Self { function, next }
    }
}

impl<F, Next> Function for Chain<F, Next>
where
    F: Function,
    Next: Function<Input = F::Output, Error = F::Error>,
{
    type Input = F::Input;
    type Output = Next::Output;
    type Error = F::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.function
            .call(input)
            .and_then(|combined| self.next.call(combined))
    }
}
