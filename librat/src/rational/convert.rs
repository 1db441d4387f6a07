//! Conversions into [Rational] and into the integer parts of a rational.
//!
//! [IntoBigInt] covers the parts handed to [Rational::new]; [IntoRational] covers whole
//! operands handed to the binary operations.

use super::parse::parse_integer;
use super::Rational;
use crate::errors::RatError;

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::convert::TryFrom;

/// A value that can be read as an arbitrary-precision integer, for use as one part of a
/// [Rational].
///
/// This is the closed set of coercions [Rational::new] accepts: native integers and
/// [BigInt]s always convert, floats convert only if they hold an integral value, and text
/// converts only if it is an optionally signed run of decimal digits. Empty text reads as zero.
pub trait IntoBigInt {
    /// Performs the conversion.
    fn into_bigint(self) -> Result<BigInt, RatError>;
}

/// A rational-like value: a [Rational], or anything [Rational]'s constructors accept.
///
/// The binary operations take their operand through this trait, so `r.add("1/3")` and
/// `r.compare(1)` coerce the operand the same way construction would. Text goes through
/// [FromStr](std::str::FromStr) and floats must be integral.
pub trait IntoRational {
    /// Performs the conversion.
    fn into_rational(self) -> Result<Rational, RatError>;
}

impl IntoRational for Rational {
    fn into_rational(self) -> Result<Rational, RatError> {
        Ok(self)
    }
}

impl IntoRational for &Rational {
    fn into_rational(self) -> Result<Rational, RatError> {
        Ok(self.clone())
    }
}

macro_rules! from_native_int {
    ($($int:ty)*) => {$(
        impl IntoBigInt for $int {
            fn into_bigint(self) -> Result<BigInt, RatError> {
                Ok(BigInt::from(self))
            }
        }

        impl IntoRational for $int {
            fn into_rational(self) -> Result<Rational, RatError> {
                Ok(Rational::from_integer(self))
            }
        }

        impl From<$int> for Rational {
            fn from(n: $int) -> Self {
                Rational::from_integer(n)
            }
        }
    )*};
}

from_native_int! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}

impl IntoBigInt for BigInt {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        Ok(self)
    }
}

impl IntoBigInt for &BigInt {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        Ok(self.clone())
    }
}

impl IntoRational for BigInt {
    fn into_rational(self) -> Result<Rational, RatError> {
        Ok(Rational::from_integer(self))
    }
}

impl IntoRational for &BigInt {
    fn into_rational(self) -> Result<Rational, RatError> {
        Ok(Rational::from_integer(self.clone()))
    }
}

impl IntoRational for f64 {
    fn into_rational(self) -> Result<Rational, RatError> {
        Rational::try_from(self)
    }
}

impl IntoRational for f32 {
    fn into_rational(self) -> Result<Rational, RatError> {
        Rational::try_from(self)
    }
}

impl IntoRational for &str {
    fn into_rational(self) -> Result<Rational, RatError> {
        self.parse()
    }
}

impl IntoRational for String {
    fn into_rational(self) -> Result<Rational, RatError> {
        self.parse()
    }
}

impl IntoRational for &String {
    fn into_rational(self) -> Result<Rational, RatError> {
        self.parse()
    }
}

impl IntoBigInt for f64 {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        integral_float(self)
    }
}

impl IntoBigInt for f32 {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        integral_float(f64::from(self))
    }
}

impl IntoBigInt for &str {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        parse_integer(self)
    }
}

impl IntoBigInt for String {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        parse_integer(&self)
    }
}

impl IntoBigInt for &String {
    fn into_bigint(self) -> Result<BigInt, RatError> {
        parse_integer(self)
    }
}

fn integral_float(value: f64) -> Result<BigInt, RatError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(RatError::invalid(format!("{} is not an integer", value)));
    }
    BigInt::from_f64(value).ok_or_else(|| RatError::invalid(format!("{} is not an integer", value)))
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}

impl From<&BigInt> for Rational {
    fn from(n: &BigInt) -> Self {
        Rational::from_integer(n.clone())
    }
}

impl From<&Rational> for Rational {
    fn from(r: &Rational) -> Self {
        r.clone()
    }
}

impl TryFrom<f64> for Rational {
    type Error = RatError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        integral_float(value).map(Rational::from_integer)
    }
}

impl TryFrom<f32> for Rational {
    type Error = RatError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        integral_float(f64::from(value)).map(Rational::from_integer)
    }
}
