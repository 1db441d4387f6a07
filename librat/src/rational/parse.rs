//! Reading rationals from text.
//!
//! Three forms are understood, after trimming surrounding whitespace:
//!
//! - fractions, `"-2/3"`, where both sides are integer text,
//! - decimals, `"2.3"` or `".23"`, where the digits after the point set a power of ten
//!   denominator, and
//! - integers, `"23"`.
//!
//! Empty integer text reads as zero, so `""` is the zero rational and `"/3"` is `0/1`.

use super::Rational;
use crate::errors::RatError;

use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;
use std::convert::TryFrom;
use std::str::FromStr;

/// Reads an optionally signed run of decimal digits.
pub(crate) fn parse_integer(text: &str) -> Result<BigInt, RatError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(BigInt::zero());
    }

    let (negative, digits) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RatError::invalid(format!("{:?} is not an integer", text)));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| RatError::invalid(format!("{:?} is not an integer", text)))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Reads `whole.frac` as `wholefrac / 10^len(frac)`, or plain integer text if there is no point.
fn parse_decimal(text: &str) -> Result<Rational, RatError> {
    let (whole, frac) = match text.find('.') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => return parse_integer(text).map(Rational::from_integer),
    };
    if frac.contains('.') {
        return Err(RatError::invalid(format!(
            "{:?} has more than one decimal point",
            text
        )));
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RatError::invalid(format!(
            "{:?} has non-digits after the decimal point",
            text
        )));
    }

    let numer = parse_integer(&format!("{}{}", whole, frac))?;
    let denom = num_traits::pow(BigInt::from(10), frac.len());
    Ok(Rational::reduce(numer, denom))
}

impl FromStr for Rational {
    type Err = RatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        trace!("librat::parse(), input: {:?}", text);

        let text = text.trim();
        let mut parts = text.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(numer), Some(denom), None) => Rational::new(numer, denom),
            (Some(decimal), None, None) => parse_decimal(decimal),
            _ => Err(RatError::invalid(format!(
                "{:?} has more than one fraction bar",
                text
            ))),
        }
    }
}

impl TryFrom<&str> for Rational {
    type Error = RatError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}
