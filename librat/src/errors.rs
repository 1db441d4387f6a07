//! Errors produced while constructing a [Rational](crate::Rational).

/// The reason a rational could not be constructed.
///
/// Every fallible entry point of librat fails before any value is built, so an `Err` never
/// carries a partially normalized rational.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatError {
    /// The denominator resolved to zero, either directly or through `inv`, `div`, or a negative
    /// power of zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The input has a shape that cannot be read as an integer or a rational, like a float with
    /// a fractional part or malformed text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RatError {
    pub(crate) fn invalid<M>(msg: M) -> RatError
    where
        M: Into<String>,
    {
        RatError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::RatError;

    #[test]
    fn display() {
        assert_eq!(RatError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            RatError::invalid(r#""1.2.3" has more than one decimal point"#).to_string(),
            r#"invalid argument: "1.2.3" has more than one decimal point"#
        );
    }
}
