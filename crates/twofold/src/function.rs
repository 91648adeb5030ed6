//! Single-input functions and their combinators.

mod chain;
mod closure;

pub use closure::{FromFn, from_fn};

use crate::map_err::MapErr;

/// A function that takes one input and produces an output or an error.
///
/// `Function` is what a [`DualValued`](crate::DualValued) function becomes
/// once its combiner is fixed with [`and_then()`](crate::DualValued::and_then).
/// It is also the trait to implement for any other step that should compose
/// with those functions.
///
/// ## Composing Functions
///
/// Functions are combined sequentially using [`Function::chain()`]:
/// - The first function's output type must match the second's input type.
/// - Both functions must use the same error type.
///
/// Error types are adapted with [`Function::map_err()`].
pub trait Function {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the function with the given input.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type and decides what
    /// constitutes a failure.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this function with another.
    ///
    /// The returned function calls `self`, then passes its output to `next`.
    /// An error from either step is returned as is, and `next` is skipped
    /// when `self` fails.
    ///
    /// This is how a composed dual-valued function is post-processed: fix the
    /// combiner with [`and_then()`](crate::DualValued::and_then), then chain
    /// whatever should happen to the combined value.
    ///
    /// # Example
    ///
    /// ```
    /// use twofold::{DualValued, Function, SplitError, SplitOnce, function::from_fn};
    ///
    /// let port = SplitOnce::new(':')
    ///     .and_then(|_host: &str, port: &str| port.len())
    ///     .chain(from_fn(|digits: usize| Ok::<_, SplitError>(digits > 0)));
    ///
    /// assert_eq!(port.call("localhost:8080"), Ok(true));
    /// assert_eq!(port.call("localhost:"), Ok(false));
    /// assert!(port.call("localhost").is_err());
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Function<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Function<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain::new(self, next)
    }

    /// Transforms this function's error into a different type.
    ///
    /// Inputs and outputs are unchanged.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Function<Input = Self::Input, Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: std::error::Error + Send + Sync + 'static,
    {
        MapErr::new(self, error_map)
    }
}

impl<F: Function + ?Sized> Function for &F {
    type Input = F::Input;
    type Output = F::Output;
    type Error = F::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use std::{convert::Infallible, fmt};

    use super::*;

    struct Doubler;

    impl Function for Doubler {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * 2)
        }
    }

    struct Adder {
        increment: i32,
    }

    impl Function for Adder {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input + self.increment)
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Refused(i32);

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "refused {}", self.0)
        }
    }

    impl std::error::Error for Refused {}

    #[test]
    fn chain_functions() {
        let add_one = Adder { increment: 1 };
        let add_ten = Adder { increment: 10 };
        let chain = add_one.chain(Doubler).chain(add_ten);

        assert_eq!(chain.call(2), Ok(16));
        assert_eq!(chain.call(20), Ok(52));
    }

    #[test]
    fn chain_stops_at_first_error() {
        let reject_odd = from_fn(|x: i32| if x % 2 == 0 { Ok(x) } else { Err(Refused(x)) });
        let never_called = from_fn(|_: i32| -> Result<i32, Refused> {
            panic!("second step must not run after a failure")
        });

        let chain = reject_odd.chain(never_called);
        assert_eq!(chain.call(3), Err(Refused(3)));
    }

    #[test]
    fn chain_post_processes_combined_values() {
        use crate::{DualValued, SplitError, SplitOnce};

        let area = SplitOnce::new('x')
            .and_then(|w: &str, h: &str| w.len() * h.len())
            .chain(from_fn(|area: usize| Ok::<_, SplitError>(format!("{area} cells"))));

        assert_eq!(area.call("ab x cd"), Ok("9 cells".to_string()));
        assert_eq!(
            area.call("ab by cd"),
            Err(SplitError::DelimiterNotFound { delimiter: 'x' })
        );
    }

    #[test]
    fn map_err_transforms_error() {
        #[derive(Debug)]
        struct Wrapped(String);

        impl fmt::Display for Wrapped {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::error::Error for Wrapped {}

        let failing = from_fn(|x: i32| Err::<i32, _>(Refused(x)))
            .map_err(|err| Wrapped(format!("step failed with: {err}")));

        assert_eq!(
            failing.call(7).unwrap_err().to_string(),
            "step failed with: refused 7"
        );
    }

    #[test]
    fn references_are_functions() {
        let add_two = Adder { increment: 2 };
        let by_ref = &add_two;

        assert_eq!(by_ref.call(1), Ok(3));
        assert_eq!((&add_two).chain(Doubler).call(1), Ok(6));
        assert_eq!(add_two.call(0), Ok(2));
    }
}
