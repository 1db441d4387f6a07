//! The [Rational] value type and its canonicalizing constructors.

use crate::errors::RatError;
use crate::math::gcd;

use lazy_static::lazy_static;
use log::debug;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use std::any::Any;
use std::fmt;

mod arith;
mod compare;
mod convert;
mod parse;
mod power;
#[cfg(feature = "serde")]
mod serialize;

pub use convert::{IntoBigInt, IntoRational};

/// An exact rational number, `numerator / denominator`.
///
/// A `Rational` is always in canonical form:
///
/// - the denominator is strictly positive, so the sign lives in the numerator, and
/// - the numerator and denominator are coprime. Zero is always `0/1`.
///
/// Since there is exactly one representation of every rational number, structural equality
/// (the derived `PartialEq` and `Hash`) is numeric equality.
///
/// Rationals are immutable. None of the operations take `&mut self`; each one produces a new,
/// independently normalized value.
///
/// ## Examples
///
/// ```
/// use librat::Rational;
///
/// let half = Rational::new(4, 8).unwrap();
/// assert_eq!(half.to_string(), "1/2");
///
/// let seven_sixths = Rational::new(2, 3).unwrap().add(&half).unwrap();
/// assert_eq!(seven_sixths, "7/6".parse::<Rational>().unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

lazy_static! {
    /// The additive identity, `0/1`.
    pub static ref ZERO: Rational = Rational::from_integer(0);
    /// The multiplicative identity, `1/1`.
    pub static ref ONE: Rational = Rational::from_integer(1);
}

impl Rational {
    /// Creates a rational from a numerator and a denominator, reducing it to lowest terms.
    ///
    /// Each part can be anything with an [IntoBigInt] conversion: a native integer, a
    /// [BigInt], a float holding an integral value, or integer text.
    ///
    /// Fails with [RatError::DivisionByZero] if the denominator is zero, and with
    /// [RatError::InvalidArgument] if either part is not an integer.
    pub fn new<N, D>(numer: N, denom: D) -> Result<Rational, RatError>
    where
        N: IntoBigInt,
        D: IntoBigInt,
    {
        let numer = numer.into_bigint()?;
        let denom = denom.into_bigint()?;
        Rational::canonicalize(numer, denom)
    }

    /// Creates the rational `n/1`.
    pub fn from_integer<N>(n: N) -> Rational
    where
        N: Into<BigInt>,
    {
        Rational {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    /// Normalizes `numer / denom`, failing if the denominator is zero.
    pub(crate) fn canonicalize(numer: BigInt, denom: BigInt) -> Result<Rational, RatError> {
        if denom.is_zero() {
            debug!("rejecting rational with numerator {} and zero denominator", numer);
            return Err(RatError::DivisionByZero);
        }
        Ok(Rational::reduce(numer, denom))
    }

    /// Normalizes `numer / denom` for a denominator already known to be nonzero.
    pub(crate) fn reduce(mut numer: BigInt, mut denom: BigInt) -> Rational {
        debug_assert!(!denom.is_zero());
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        let g = gcd(numer.clone(), denom.clone());
        if !g.is_one() {
            numer /= &g;
            denom /= &g;
        }
        Rational { numer, denom }
    }

    /// Wraps a pair that is already in canonical form.
    pub(crate) fn from_canonical(numer: BigInt, denom: BigInt) -> Rational {
        debug_assert!(denom.is_positive());
        debug_assert!(gcd(numer.clone(), denom.clone()).is_one());
        Rational { numer, denom }
    }

    /// The numerator, carrying the sign of the rational.
    pub fn numerator(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator. Always strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denom
    }

    /// The sign of the rational, which is the sign of its numerator.
    ///
    /// [Sign] orders as `Minus < NoSign < Plus`, matching -1, 0, and 1.
    pub fn sign(&self) -> Sign {
        self.numer.sign()
    }

    /// The sign as a number: -1, 0, or 1.
    pub fn signum(&self) -> i8 {
        match self.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Whether the rational is zero.
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Whether the rational is an integer, i.e. its denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }
}

/// Whether an arbitrary value is a [Rational].
pub fn is_rational(value: &dyn Any) -> bool {
    value.is::<Rational>()
}

impl Default for Rational {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that a rational is in canonical form.
    pub(crate) fn assert_canonical(r: &Rational) {
        assert!(r.denominator().is_positive(), "{} has a non-positive denominator", r);
        assert!(
            gcd(r.numerator().clone(), r.denominator().clone()).is_one(),
            "{} is not reduced",
            r
        );
    }

    macro_rules! rational_test_new {
        ($($name:ident: $numer:expr, $denom:expr => $expected_numer:expr, $expected_denom:expr)*) => {
        $(
            #[test]
            fn $name() {
                let r = Rational::new($numer, $denom).unwrap();
                assert_canonical(&r);
                assert_eq!(r.numerator(), &BigInt::from($expected_numer));
                assert_eq!(r.denominator(), &BigInt::from($expected_denom));
            }
        )*
        }
    }

    mod new {
        use super::*;

        rational_test_new! {
            already_reduced:     2, 3      => 2, 3
            reduces:             4, 8      => 1, 2
            negative_numerator:  -4, 8     => -1, 2
            sign_normalization:  1, -4     => -1, 4
            both_negative:       -6, -9    => 2, 3
            zero:                0, 5      => 0, 1
            negative_zero_denom: 0, -5     => 0, 1
            integer:             12, 4     => 3, 1
            strings:             "2", "3"  => 2, 3
            string_reduces:      "-10", "4" => -5, 2
            integral_floats:     6.0, -4.0 => -3, 2
            big_integers:        BigInt::from(1u64 << 40), BigInt::from(1u64 << 42) => 1, 4
            u128_parts:          u128::MAX, u128::MAX => 1, 1
        }
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(RatError::DivisionByZero));
        assert_eq!(Rational::new("2", "0"), Err(RatError::DivisionByZero));
        assert_eq!(Rational::new(0, 0), Err(RatError::DivisionByZero));
        assert_eq!(Rational::new(1, 0.0), Err(RatError::DivisionByZero));
    }

    #[test]
    fn invalid_parts() {
        assert!(matches!(
            Rational::new(std::f64::consts::PI, 1),
            Err(RatError::InvalidArgument(_))
        ));
        assert!(matches!(Rational::new(1, f64::NAN), Err(RatError::InvalidArgument(_))));
        assert!(matches!(Rational::new("1.5", "2"), Err(RatError::InvalidArgument(_))));
        assert!(matches!(Rational::new("x", "2"), Err(RatError::InvalidArgument(_))));
    }

    #[test]
    fn from_integer() {
        let r = Rational::from_integer(-7);
        assert_canonical(&r);
        assert_eq!(r.to_string(), "-7/1");
        assert!(r.is_integer());
    }

    #[test]
    fn sign() {
        assert_eq!(Rational::new(2, 3).unwrap().sign(), Sign::Plus);
        assert_eq!(Rational::new(-2, 3).unwrap().sign(), Sign::Minus);
        assert_eq!(Rational::new(2, -3).unwrap().sign(), Sign::Minus);
        assert_eq!(ZERO.sign(), Sign::NoSign);
    }

    #[test]
    fn signum() {
        assert_eq!(Rational::new(2, 3).unwrap().signum(), 1);
        assert_eq!(Rational::new(-2, 3).unwrap().signum(), -1);
        assert_eq!(Rational::new(2, -3).unwrap().signum(), -1);
        assert_eq!(ZERO.signum(), 0);
        assert_eq!(Rational::new(-8, 3).unwrap().abs().signum(), 1);
    }

    #[test]
    fn constants() {
        assert_eq!(*ZERO, Rational::new(0, 1).unwrap());
        assert_eq!(*ONE, Rational::new(1, 1).unwrap());
        assert!(ZERO.is_zero());
        assert_eq!(Rational::default(), *ZERO);
    }

    #[test]
    fn constants_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (ZERO.clone(), ONE.clone())))
            .collect();
        for handle in handles {
            let (zero, one) = handle.join().unwrap();
            assert_eq!(zero, *ZERO);
            assert_eq!(one, *ONE);
        }
    }

    #[test]
    fn type_test() {
        assert!(is_rational(&*ONE));
        assert!(is_rational(&Rational::new(2, 3).unwrap()));
        assert!(!is_rational(&1));
        assert!(!is_rational(&"1/2"));
        assert!(!is_rational(&BigInt::from(1)));
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(-8, 3).unwrap().to_string(), "-8/3");
        assert_eq!(Rational::new(2, 3).unwrap().to_string(), "2/3");
        assert_eq!(ZERO.to_string(), "0/1");
        assert_eq!(ONE.to_string(), "1/1");
    }
}
