//! On-demand factor lookups for inspecting a single integer.
//!
//! Independent of sieve progress; each call recomputes by trial division.

use crate::error::SieveError;

fn validate(n: i64) -> Result<u64, SieveError> {
    if n < 1 {
        return Err(SieveError::InvalidInput { n });
    }
    Ok(n as u64)
}

/// Smallest divisor of `n` in `[2, sqrt(n)]`, if any.
fn smallest_divisor(n: u64) -> Option<u64> {
    (2..)
        .take_while(|&d: &u64| d.checked_mul(d).is_some_and(|sq| sq <= n))
        .find(|&d| n % d == 0)
}

/// The factor pair view of `n`.
///
/// - `1` → `[1]`
/// - prime `p` → `[1, p]`
/// - composite `n` with smallest divisor `d` → `{1, d, n/d, n}` ascending,
///   with `d` listed once when `d * d = n`.
pub fn factors_of(n: i64) -> Result<Vec<u64>, SieveError> {
    let n = validate(n)?;
    if n == 1 {
        return Ok(vec![1]);
    }
    Ok(match smallest_divisor(n) {
        Some(d) if d == n / d => vec![1, d, n],
        Some(d) => vec![1, d, n / d, n],
        None => vec![1, n],
    })
}

/// Prime factorization of `n` as ascending `(prime, exponent)` pairs.
///
/// Empty for `n = 1`.
pub fn prime_factorization(n: i64) -> Result<Vec<(u64, u32)>, SieveError> {
    let mut rest = validate(n)?;
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d.checked_mul(d).is_some_and(|sq| sq <= rest) {
        if rest % d == 0 {
            let mut exponent = 0;
            while rest % d == 0 {
                rest /= d;
                exponent += 1;
            }
            factors.push((d, exponent));
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        factors.push((rest, 1));
    }
    Ok(factors)
}
