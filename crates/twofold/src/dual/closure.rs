use std::{error::Error as StdError, marker::PhantomData};

use crate::DualValued;

/// A [`DualValued`] function backed by a closure that returns a pair.
///
/// Created with [`from_fn()`].
pub struct FromFn<F, I, A, B, E> {
    function: F,
    _marker: PhantomData<fn(I) -> Result<(A, B), E>>,
}

/// Wraps a closure returning two values so it can be used as a
/// [`DualValued`] function.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use twofold::{DualValued, dual::from_fn};
///
/// let min_max = from_fn(|values: Vec<i32>| {
///     let min = values.iter().copied().min().unwrap_or_default();
///     let max = values.iter().copied().max().unwrap_or_default();
///     Ok::<_, Infallible>((min, max))
/// });
///
/// let spread = min_max.apply(vec![4, 9, 1, 7], |min, max| max - min).unwrap();
/// assert_eq!(spread, 8);
/// ```
pub const fn from_fn<F, I, A, B, E>(function: F) -> FromFn<F, I, A, B, E>
where
    F: Fn(I) -> Result<(A, B), E>,
{
    FromFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, A, B, E> DualValued for FromFn<F, I, A, B, E>
where
    F: Fn(I) -> Result<(A, B), E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type First = A;
    type Second = B;
    type Error = E;

    fn apply<R, Output>(&self, input: Self::Input, output: Output) -> Result<R, Self::Error>
    where
        Output: FnOnce(Self::First, Self::Second) -> R,
    {
        let (first, second) = (self.function)(input)?;
        Ok(output(first, second))
    }
}
