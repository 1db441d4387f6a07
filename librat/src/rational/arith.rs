//! Arithmetic on rationals.
//!
//! Each operation builds a fresh rational and reduces it; the receiver is only ever borrowed.
//! Binary operations take any [IntoRational] operand and coerce it the way construction would,
//! so they return a [Result] even when the arithmetic itself cannot fail.

// Named methods rather than `std::ops` impls; operands coerce and can fail.
#![allow(clippy::should_implement_trait)]

use super::{IntoRational, Rational};
use crate::errors::RatError;

use num_traits::Signed;

impl Rational {
    /// The absolute value, `|a|/b`.
    pub fn abs(&self) -> Rational {
        Rational::from_canonical(self.numer.abs(), self.denom.clone())
    }

    /// The additive inverse, `-a/b`.
    pub fn neg(&self) -> Rational {
        Rational::from_canonical(-&self.numer, self.denom.clone())
    }

    /// The reciprocal, `b/a`. Fails on zero.
    pub fn inv(&self) -> Result<Rational, RatError> {
        Rational::canonicalize(self.denom.clone(), self.numer.clone())
    }

    /// `a/b + c/d = (a·d + c·b) / (b·d)`.
    ///
    /// ```
    /// use librat::Rational;
    ///
    /// let two_thirds = Rational::new(2, 3).unwrap();
    /// assert_eq!(two_thirds.add("1/2").unwrap().to_string(), "7/6");
    /// assert_eq!(two_thirds.add(1).unwrap().to_string(), "5/3");
    /// ```
    pub fn add<R: IntoRational>(&self, other: R) -> Result<Rational, RatError> {
        let other = other.into_rational()?;
        Ok(Rational::reduce(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        ))
    }

    /// `a/b - c/d = (a·d - c·b) / (b·d)`.
    pub fn sub<R: IntoRational>(&self, other: R) -> Result<Rational, RatError> {
        let other = other.into_rational()?;
        Ok(Rational::reduce(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        ))
    }

    /// `a/b · c/d = (a·c) / (b·d)`.
    pub fn mul<R: IntoRational>(&self, other: R) -> Result<Rational, RatError> {
        let other = other.into_rational()?;
        Ok(Rational::reduce(
            &self.numer * &other.numer,
            &self.denom * &other.denom,
        ))
    }

    /// `a/b ÷ c/d = (a·d) / (b·c)`. Fails if `other` is zero.
    pub fn div<R: IntoRational>(&self, other: R) -> Result<Rational, RatError> {
        let other = other.into_rational()?;
        Rational::canonicalize(&self.numer * &other.denom, &self.denom * &other.numer)
    }
}
