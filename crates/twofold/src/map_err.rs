//! Error adaptation shared by single- and dual-valued functions.

use std::error::Error as StdError;

use crate::{DualValued, Function};

/// Wraps a function and passes any error it reports through `error_map`.
///
/// Backs both [`Function::map_err()`] and [`DualValued::map_err()`]. Values
/// and combiners go through untouched, so only the failure path changes.
pub(crate) struct MapErr<Inner, ErrorMap> {
    inner: Inner,
    error_map: ErrorMap,
}

impl<Inner, ErrorMap> MapErr<Inner, ErrorMap> {
    pub(crate) const fn new(inner: Inner, error_map: ErrorMap) -> Self {
        Self { inner, error_map }
    }
}

impl<Inner, ErrorMap, E> Function for MapErr<Inner, ErrorMap>
where
    Inner: Function,
    ErrorMap: Fn(Inner::Error) -> E,
    E: StdError + Send + Sync + 'static,
{
    type Input = Inner::Input;
    type Output = Inner::Output;
    type Error = E;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.inner.call(input).map_err(&self.error_map)
    }
}

impl<Inner, ErrorMap, E> DualValued for MapErr<Inner, ErrorMap>
where
    Inner: DualValued,
    ErrorMap: Fn(Inner::Error) -> E,
    E: StdError + Send + Sync + 'static,
{
    type Input = Inner::Input;
    type First = Inner::First;
    type Second = Inner::Second;
    type Error = E;

    fn apply<R, Output>(&self, input: Self::Input, output: Output) -> Result<R, Self::Error>
    where
        Output: FnOnce(Self::First, Self::Second) -> R,
    {
        self.inner.apply(input, output).map_err(&self.error_map)
    }
}
