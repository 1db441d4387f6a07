//! Flooring and integer powers.

use super::{IntoBigInt, Rational};
use crate::errors::RatError;

use num_bigint::{BigInt, Sign};
use num_traits::{Pow, Signed, Zero};

impl Rational {
    /// The greatest integer less than or equal to the rational.
    ///
    /// ```
    /// use librat::{BigInt, Rational};
    ///
    /// assert_eq!(Rational::new(8, 3).unwrap().floor(), BigInt::from(2));
    /// assert_eq!(Rational::new(-8, 3).unwrap().floor(), BigInt::from(-3));
    /// ```
    pub fn floor(&self) -> BigInt {
        // BigInt division truncates toward zero, which rounds negative quotients up.
        let quotient = &self.numer / &self.denom;
        if self.numer.is_negative() && !(&self.numer % &self.denom).is_zero() {
            quotient - 1
        } else {
            quotient
        }
    }

    /// Raises the rational to an integer power.
    ///
    /// A non-positive exponent inverts first, so `r.pow(-n)` is `(1/r)^n`. Any rational to the
    /// zeroth power is one, and that includes zero: `0^0 = 1` here. A negative power of zero
    /// fails with [RatError::DivisionByZero].
    ///
    /// The exponent goes through [IntoBigInt], like the parts given to [Rational::new], so
    /// `"3"` and `3.0` are exponents too but `"1/2"` is an [RatError::InvalidArgument].
    pub fn pow<E>(&self, exp: E) -> Result<Rational, RatError>
    where
        E: IntoBigInt,
    {
        let exp = exp.into_bigint()?;
        let magnitude = exp.magnitude();
        match exp.sign() {
            // Powers of coprime integers stay coprime.
            Sign::Plus => Ok(Rational::from_canonical(
                Pow::pow(&self.numer, magnitude),
                Pow::pow(&self.denom, magnitude),
            )),
            Sign::NoSign | Sign::Minus => Rational::canonicalize(
                Pow::pow(&self.denom, magnitude),
                Pow::pow(&self.numer, magnitude),
            ),
        }
    }
}
