//! Statistics derived from a table and cursor snapshot.
//!
//! [`summarize`] is a pure projection: it can be called after any step,
//! never mutates, and keeps no cache. Callers that want memoization can key
//! on [`SieveEngine::version`](crate::SieveEngine::version).

use crate::engine::Cursor;
use crate::table::{EntryState, NumberTable};
use serde::{Deserialize, Serialize};

/// One sample of the actual-vs-estimated prime count chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub n: u64,
    /// Primes `<= n` if `settled`, otherwise the last settled value held over.
    pub actual: usize,
    /// `n / ln(n)` to two decimal places; 0 for `n <= 1`.
    pub estimated: f64,
    /// Whether the sieve has progressed past `n`.
    pub settled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub bound: u64,
    /// Entries currently marked prime.
    pub prime_count: usize,
    /// `round(N / ln(N))`, or 0 for `N = 1`.
    pub estimated_count: u64,
    pub density: f64,
    /// Consecutive-prime differences, in ascending prime order.
    pub gaps: Vec<u64>,
    pub avg_gap: f64,
    pub max_gap: u64,
    pub series: Vec<SeriesPoint>,
}

/// Prime Number Theorem estimate `n / ln(n)`; 0 for `n <= 1`.
pub fn pnt_estimate(n: u64) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    n / n.ln()
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Derive counts, density, gaps, and the progress series.
///
/// `checkpoints` is the number of evenly spaced samples in the series
/// (before the forced final sample at N).
pub fn summarize(table: &NumberTable, cursor: &Cursor, checkpoints: usize) -> Stats {
    let bound = table.bound();
    let prime_count = table.count_state(EntryState::Prime);

    let gaps: Vec<u64> = table.entries().iter().filter_map(|e| e.gap()).collect();
    let avg_gap = if gaps.is_empty() {
        0.0
    } else {
        gaps.iter().sum::<u64>() as f64 / gaps.len() as f64
    };
    let max_gap = gaps.iter().copied().max().unwrap_or(0);

    let density = if bound == 0 {
        0.0
    } else {
        prime_count as f64 / bound as f64
    };

    Stats {
        bound,
        prime_count,
        estimated_count: pnt_estimate(bound).round() as u64,
        density,
        gaps,
        avg_gap,
        max_gap,
        series: series(table, cursor, checkpoints),
    }
}

/// Highest value whose classification is final.
fn frontier(table: &NumberTable, cursor: &Cursor) -> u64 {
    if cursor.complete {
        table.bound()
    } else if cursor.current_multiple == 0 {
        // current_prime is known but not yet marked.
        cursor.current_prime - 1
    } else {
        cursor.current_prime
    }
}

fn checkpoint_values(bound: u64, checkpoints: usize) -> Vec<u64> {
    let interval = (bound / checkpoints.max(1) as u64).max(1);
    let mut values: Vec<u64> = (1..)
        .map(|i| i * interval)
        .take_while(|&n| n <= bound)
        .collect();
    if values.last() != Some(&bound) {
        values.push(bound);
    }
    values
}

fn series(table: &NumberTable, cursor: &Cursor, checkpoints: usize) -> Vec<SeriesPoint> {
    let frontier = frontier(table, cursor);
    let entries = table.entries();

    let mut scanned = 0usize;
    let mut running = 0usize;
    let mut last = 0usize;
    checkpoint_values(table.bound(), checkpoints)
        .into_iter()
        .map(|n| {
            let settled = n <= frontier;
            if settled {
                while scanned < n as usize {
                    if entries[scanned].is_prime() {
                        running += 1;
                    }
                    scanned += 1;
                }
                last = running;
            }
            SeriesPoint {
                n,
                actual: last,
                estimated: round_to(pnt_estimate(n), 2),
                settled,
            }
        })
        .collect()
}
