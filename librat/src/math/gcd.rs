use num_traits::Signed;

/// Calculates the GCD for (u, v) ∈ (Z, Z).
///
/// The result is always non-negative, and `gcd(0, v) = |v|`. In particular the GCD of zero and
/// a positive denominator is the denominator itself, which is what normalizes `0/d` to `0/1`.
pub fn gcd<N: Signed + Clone>(u: N, v: N) -> N {
    euclidean_gcd(u.abs(), v.abs())
}

/// The [Euclidean GCD] algorithm, expecting non-negative inputs.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd<N: Signed + Clone>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v.clone();
        v = u % v;
        u = t;
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: Signed + Clone>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}
