//! Integer algorithms the rational type is built on.
//!
//! Arbitrary-precision arithmetic itself comes from [num_bigint]; this module only holds what
//! canonicalization needs on top of it.

mod gcd;
pub use gcd::*;
