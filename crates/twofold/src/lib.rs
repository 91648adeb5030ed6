//! Functions that produce two values and hand them to a combiner.
//!
//! A [`DualValued`] function computes a pair of related values from a single
//! input and passes both, together, to a caller-supplied combiner. The
//! combiner decides what the call ultimately returns, so no intermediate pair
//! has to be named or stored.
//!
//! Fixing the combiner ahead of time with [`DualValued::and_then()`] turns a
//! dual-valued function into an ordinary single-input [`Function`], which can
//! itself be chained with other functions.
//!
//! # Example
//!
//! ```
//! use twofold::{DualValued, Function, SplitOnce};
//!
//! let split = SplitOnce::new('=');
//!
//! let joined = split.apply("key=value", |key, value| format!("{key}:{value}"));
//! assert_eq!(joined.unwrap(), "key:value");
//!
//! let total_len = split.and_then(|a: &str, b: &str| a.len() + b.len());
//! assert_eq!(total_len.call("ab=cde").unwrap(), 5);
//! ```

pub mod dual;
mod error;
pub mod function;
mod map_err;

pub use dual::{DualValued, SplitError, SplitOnce};
pub use error::MissingArgument;
pub use function::Function;
