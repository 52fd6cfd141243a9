//! Prime-family tagging and gap computation over a finished table.
//!
//! Every test here is a membership check against the table's own prime
//! set, so a relation that leaves the range `1..=N` (for example `2p + 1`
//! when `p > N / 2`) never holds.

use crate::table::{Family, NumberTable};
use std::collections::BTreeSet;

/// The five known Fermat primes, `2^(2^k) + 1` for `k` in `0..=4`.
pub const FERMAT_PRIMES: [u64; 5] = [3, 5, 17, 257, 65537];

/// Tag primes with their families and record each prime's gap.
///
/// Value 1 never takes part, whether or not it was seeded as a sentinel
/// prime. The first prime in the table gets no gap.
pub fn classify(table: &mut NumberTable) {
    let primes: BTreeSet<u64> = table.primes().collect();

    let mut previous: Option<u64> = None;
    for &p in &primes {
        let families = families_of(p, &primes);
        if let Some(entry) = table.get_mut(p) {
            for family in families {
                entry.tag(family);
            }
            if let Some(prev) = previous {
                entry.set_gap(p - prev);
            }
        }
        previous = Some(p);
    }

    log::debug!(
        "classified {} primes up to {}",
        primes.len(),
        table.bound()
    );
}

fn families_of(p: u64, primes: &BTreeSet<u64>) -> Vec<Family> {
    let mut families = Vec::new();

    let twin_above = primes.contains(&(p + 2));
    let twin_below = p.checked_sub(2).is_some_and(|q| primes.contains(&q));
    if twin_above || twin_below {
        families.push(Family::Twin);
    }
    if is_mersenne_form(p) {
        families.push(Family::Mersenne);
    }
    if FERMAT_PRIMES.contains(&p) {
        families.push(Family::Fermat);
    }
    if p.checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .is_some_and(|q| primes.contains(&q))
    {
        families.push(Family::SophieGermain);
    }

    families
}

/// `p + 1` is a power of two, i.e. `p = 2^k - 1` for some `k >= 1`.
fn is_mersenne_form(p: u64) -> bool {
    p.checked_add(1).is_some_and(u64::is_power_of_two)
}
