//! Functions that deliver two values to a combiner.

mod and_then;
mod closure;
mod pair;
mod split;

pub use closure::{FromFn, from_fn};
pub use split::{SplitError, SplitOnce};

use crate::{Function, MissingArgument, map_err::MapErr};

/// A function that computes two values from one input.
///
/// Rather than returning a pair, a `DualValued` function hands both values to
/// a combiner supplied by the caller, and the combiner's return value becomes
/// the result of the call. Both values always come from the same input and
/// are delivered together: the combiner runs exactly once when the values are
/// computed, and not at all when computing them fails.
///
/// ## Implementing `DualValued`
///
/// Only [`apply()`] is required. It must call `output` exactly once with the
/// two computed values and return what `output` returns, unchanged. Failures
/// of the computation itself are reported through `Self::Error`, which is
/// [`Infallible`](std::convert::Infallible) for total functions.
///
/// ```
/// use std::convert::Infallible;
/// use twofold::DualValued;
///
/// /// Splits an integer into its quotient and remainder.
/// struct DivRem {
///     divisor: i64,
/// }
///
/// impl DualValued for DivRem {
///     type Input = i64;
///     type First = i64;
///     type Second = i64;
///     type Error = Infallible;
///
///     fn apply<R, Output>(&self, input: i64, output: Output) -> Result<R, Self::Error>
///     where
///         Output: FnOnce(i64, i64) -> R,
///     {
///         Ok(output(input / self.divisor, input % self.divisor))
///     }
/// }
///
/// let div_rem = DivRem { divisor: 7 };
/// let text = div_rem.apply(45, |q, r| format!("{q} rem {r}")).unwrap();
/// assert_eq!(text, "6 rem 3");
/// ```
///
/// ## Composing
///
/// - [`and_then()`] fixes the combiner and yields a single-input [`Function`].
/// - [`and_then_checked()`] does the same for a combiner that may be absent.
/// - [`into_pair()`] yields a [`Function`] returning both values as a tuple.
/// - [`map_err()`] transforms the error type.
///
/// [`apply()`]: DualValued::apply
/// [`and_then()`]: DualValued::and_then
/// [`and_then_checked()`]: DualValued::and_then_checked
/// [`into_pair()`]: DualValued::into_pair
/// [`map_err()`]: DualValued::map_err
pub trait DualValued {
    type Input;
    type First;
    type Second;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes both values from `input` and passes them to `output`.
    ///
    /// Returns whatever `output` returns. If `output` itself can fail, its
    /// failure is part of `R` and comes back untouched; see
    /// [`try_apply()`](DualValued::try_apply) to flatten it.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the two values cannot be computed, in which
    /// case `output` is never called.
    fn apply<R, Output>(&self, input: Self::Input, output: Output) -> Result<R, Self::Error>
    where
        Output: FnOnce(Self::First, Self::Second) -> R;

    /// Like [`apply()`](DualValued::apply), for a combiner that can fail.
    ///
    /// # Errors
    ///
    /// Returns the combiner's error as is, or the computation's error
    /// converted with `From`. When `E` is `Self::Error` the conversion is the
    /// identity.
    fn try_apply<R, E, Output>(&self, input: Self::Input, output: Output) -> Result<R, E>
    where
        Output: FnOnce(Self::First, Self::Second) -> Result<R, E>,
        E: From<Self::Error>,
    {
        self.apply(input, output)?
    }

    /// Fixes the combiner, producing a single-input [`Function`].
    ///
    /// Calling the returned function with `input` is the same as calling
    /// `self.apply(input, &after)`. Nothing is cached between calls.
    ///
    /// # Example
    ///
    /// ```
    /// use twofold::{DualValued, Function, SplitOnce};
    ///
    /// let total_len = SplitOnce::new('=').and_then(|a: &str, b: &str| a.len() + b.len());
    ///
    /// assert_eq!(total_len.call("ab=cde").unwrap(), 5);
    /// assert_eq!(total_len.call("=").unwrap(), 0);
    /// assert!(total_len.call("no delimiter").is_err());
    /// ```
    fn and_then<After, R>(
        self,
        after: After,
    ) -> impl Function<Input = Self::Input, Output = R, Error = Self::Error>
    where
        Self: Sized,
        After: Fn(Self::First, Self::Second) -> R,
    {
        and_then::AndThen::new(self, after)
    }

    /// Fixes a combiner that may be absent.
    ///
    /// Behaves like [`and_then()`](DualValued::and_then) when `after` is
    /// `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingArgument`] immediately if `after` is `None`.
    fn and_then_checked<After, R>(
        self,
        after: Option<After>,
    ) -> Result<
        impl Function<Input = Self::Input, Output = R, Error = Self::Error>,
        MissingArgument,
    >
    where
        Self: Sized,
        After: Fn(Self::First, Self::Second) -> R,
    {
        match after {
            Some(after) => Ok(and_then::AndThen::new(self, after)),
            None => {
                tracing::debug!(
                    function = std::any::type_name::<Self>(),
                    "rejected composition without a combiner"
                );
                Err(MissingArgument::new("after"))
            }
        }
    }

    /// Produces a [`Function`] that returns both values as a tuple.
    ///
    /// # Example
    ///
    /// ```
    /// use twofold::{DualValued, Function, SplitOnce};
    ///
    /// let pair = SplitOnce::new(':').into_pair();
    /// assert_eq!(pair.call("host:8080").unwrap(), ("host", "8080"));
    /// ```
    fn into_pair(
        self,
    ) -> impl Function<
        Input = Self::Input,
        Output = (Self::First, Self::Second),
        Error = Self::Error,
    >
    where
        Self: Sized,
    {
        pair::Pair::new(self)
    }

    /// Transforms this function's error into a different type.
    ///
    /// The computed values and the combiner contract are unchanged.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl DualValued<
        Input = Self::Input,
        First = Self::First,
        Second = Self::Second,
        Error = NewError,
    >
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: std::error::Error + Send + Sync + 'static,
    {
        MapErr::new(self, error_map)
    }
}

impl<D: DualValued + ?Sized> DualValued for &D {
    type Input = D::Input;
    type First = D::First;
    type Second = D::Second;
    type Error = D::Error;

    fn apply<R, Output>(&self, input: Self::Input, output: Output) -> Result<R, Self::Error>
    where
        Output: FnOnce(Self::First, Self::Second) -> R,
    {
        (**self).apply(input, output)
    }
}
