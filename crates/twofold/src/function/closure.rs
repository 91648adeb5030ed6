use std::{error::Error as StdError, marker::PhantomData};

use crate::Function;

/// A [`Function`] backed by a closure.
///
/// Created with [`from_fn()`].
pub struct FromFn<F, I, O, E> {
    function: F,
    _marker: PhantomData<fn(I) -> Result<O, E>>,
}

/// Wraps a fallible closure so it can be used as a [`Function`].
///
/// Closures that cannot fail can return `Result<_, Infallible>`.
pub const fn from_fn<F, I, O, E>(function: F) -> FromFn<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    FromFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O, E> Function for FromFn<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.function)(input)
    }
}
