//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! The crate is built around one value type, [Rational]. A rational is always in canonical
//! form, reduced to lowest terms with a positive denominator, and never changes after it is
//! built. Every operation hands back a new rational.
//!
//! ## Constructing rationals
//!
//! There is no single do-everything constructor. Instead each input shape has its own entry
//! point:
//!
//! | Input                               | Entry point                                  |
//! |-------------------------------------|----------------------------------------------|
//! | numerator and denominator           | [Rational::new]                              |
//! | native integer or [BigInt]          | [From], [Rational::from_integer]             |
//! | integral float                      | [TryFrom](std::convert::TryFrom)             |
//! | `"2/3"`, `"2.3"`, `"23"`, or `""`   | [str::parse], [TryFrom](std::convert::TryFrom) |
//! | an existing rational                | [Clone], [From]                              |
//!
//! Construction either returns a canonical rational or a [RatError]; there is no partially
//! built value in between.
//!
//! ```
//! use librat::{Rational, RatError, ONE};
//!
//! let x: Rational = "2.5".parse().unwrap();
//! assert_eq!(x, Rational::new(5, 2).unwrap());
//! assert_eq!(x.mul(&x.inv().unwrap()), Ok(ONE.clone()));
//! assert_eq!(x.add("1/2").unwrap().to_string(), "3/1");
//! assert_eq!(Rational::new(1, 0), Err(RatError::DivisionByZero));
//! ```
//!
//! ## Operations
//!
//! Rationals support [abs](Rational::abs), [neg](Rational::neg), [inv](Rational::inv),
//! [add](Rational::add), [sub](Rational::sub), [mul](Rational::mul), [div](Rational::div),
//! total ordering through [Ord] (and [compare](Rational::compare) for a -1/0/1 result),
//! [floor](Rational::floor), and integer [pow](Rational::pow)ers. [Display](std::fmt::Display)
//! renders `numerator/denominator`, which parses back to the same value.
//!
//! The binary operations and [compare](Rational::compare) accept any rational-like operand
//! through [IntoRational]: another rational, an integer, an integral float, or text. The
//! operand is coerced exactly as construction would, so a malformed operand is an `Err`.
//!
//! The [ZERO] and [ONE] constants are initialized once and shared by every thread.

mod errors;
pub use errors::RatError;

mod math;

#[cfg(feature = "benchmark-internals")]
pub use math::*;

pub mod rational;
pub use rational::{is_rational, IntoBigInt, IntoRational, Rational, ONE, ZERO};

pub use num_bigint::{BigInt, Sign};
