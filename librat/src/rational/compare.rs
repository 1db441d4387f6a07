use super::{IntoRational, Rational};
use crate::errors::RatError;
use std::cmp::Ordering;

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        let lhs_sign = self.sign();
        let rhs_sign = other.sign();
        if lhs_sign != rhs_sign {
            return lhs_sign.cmp(&rhs_sign);
        }

        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        // Denominators are positive, so cross-multiplying preserves the order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Rational {
    /// Compares with a rational-like value, returning -1, 0, or 1 as `self` is less than,
    /// equal to, or greater than `other`.
    ///
    /// ```
    /// use librat::Rational;
    ///
    /// let two_thirds = Rational::new(2, 3).unwrap();
    /// assert_eq!(two_thirds.compare("2/3"), Ok(0));
    /// assert_eq!(two_thirds.compare(1), Ok(-1));
    /// ```
    pub fn compare<R: IntoRational>(&self, other: R) -> Result<i8, RatError> {
        let other = other.into_rational()?;
        Ok(match self.cmp(&other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }
}
