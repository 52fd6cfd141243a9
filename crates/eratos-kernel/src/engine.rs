//! The stepwise sieve state machine.
//!
//! One textbook round of the sieve (take a prime, strike all of its
//! multiples) is split into discrete steps so that a driving loop can
//! render every transition:
//!
//! ```text
//! currentMultiple = 0        → mark currentPrime prime, currentMultiple = 2p
//! currentMultiple <= N       → mark currentMultiple composite, advance by p
//! currentMultiple >  N       → move to the next unmarked value, or finish
//! ```
//!
//! Finishing promotes every still-unmarked value to prime and runs
//! [`classify`](crate::classify) exactly once.

use crate::classify::classify;
use crate::config::SieveConfig;
use crate::error::SieveError;
use crate::stats::{self, Stats};
use crate::table::{EntryState, NumberTable};
use serde::{Deserialize, Serialize};

/// Position of the sieve within its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    /// The prime whose multiples are being struck.
    pub current_prime: u64,
    /// Next multiple to strike; 0 until `current_prime` itself is marked.
    pub current_multiple: u64,
    pub complete: bool,
}

impl Cursor {
    fn start() -> Self {
        Self {
            current_prime: 2,
            current_multiple: 0,
            complete: false,
        }
    }
}

/// The unit of work a single [`SieveEngine::step`] performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepEvent {
    /// `current_prime` was marked prime.
    FoundPrime { prime: u64 },
    /// A multiple of `by` was struck. `fresh` is false when it was
    /// already composite from an earlier prime.
    MarkedComposite { value: u64, by: u64, fresh: bool },
    /// The cursor moved to the next unmarked value.
    Advanced { next_prime: u64 },
    /// The run finished; `primes` is the final prime count.
    Completed { primes: usize },
    /// The engine was already complete; nothing changed.
    Idle,
}

/// Owns a [`NumberTable`] and its [`Cursor`] and is the only thing that
/// mutates them.
///
/// The engine is not meant to be shared between concurrent callers;
/// `step` takes `&mut self`, so a driving loop serializes access by
/// owning the engine or holding it behind a single lock.
#[derive(Debug, Clone)]
pub struct SieveEngine {
    table: NumberTable,
    cursor: Cursor,
    one_is_prime: bool,
    checkpoints: usize,
    version: u64,
    steps: u64,
}

impl SieveEngine {
    /// An engine over `1..=bound` with default settings.
    pub fn new(bound: i64) -> Result<Self, SieveError> {
        let config = SieveConfig {
            bound,
            ..SieveConfig::default()
        };
        Self::with_config(&config)
    }

    pub fn with_config(config: &SieveConfig) -> Result<Self, SieveError> {
        let bound = validate_bound(config.bound)?;
        Ok(Self {
            table: NumberTable::new(bound, config.one_is_prime),
            cursor: Cursor::start(),
            one_is_prime: config.one_is_prime,
            checkpoints: config.checkpoints.max(1),
            version: 0,
            steps: 0,
        })
    }

    /// Discard all progress and start over for a new bound.
    ///
    /// On `InvalidBound` the current run is left untouched.
    pub fn reset(&mut self, bound: i64) -> Result<(), SieveError> {
        let bound = validate_bound(bound)?;
        self.table = NumberTable::new(bound, self.one_is_prime);
        self.cursor = Cursor::start();
        self.steps = 0;
        self.version += 1;
        log::debug!("sieve reset to bound {bound}");
        Ok(())
    }

    /// Perform exactly one unit of work. A no-op once complete.
    pub fn step(&mut self) -> StepEvent {
        if self.cursor.complete {
            return StepEvent::Idle;
        }

        let bound = self.table.bound();
        let prime = self.cursor.current_prime;
        let event = if self.cursor.current_multiple == 0 {
            if prime > bound {
                // Only reachable for N = 1: there is no entry for 2.
                self.finish()
            } else {
                self.table.mark(prime, EntryState::Prime);
                self.cursor.current_multiple = prime * 2;
                log::debug!("found prime {prime}");
                StepEvent::FoundPrime { prime }
            }
        } else if self.cursor.current_multiple <= bound {
            let value = self.cursor.current_multiple;
            let fresh = self.table.mark(value, EntryState::Composite);
            self.cursor.current_multiple += prime;
            log::trace!("struck {value} (multiple of {prime})");
            StepEvent::MarkedComposite {
                value,
                by: prime,
                fresh,
            }
        } else {
            match self.table.next_unmarked_after(prime) {
                Some(next_prime) => {
                    self.cursor.current_prime = next_prime;
                    self.cursor.current_multiple = 0;
                    StepEvent::Advanced { next_prime }
                }
                None => self.finish(),
            }
        };

        self.steps += 1;
        self.version += 1;
        event
    }

    /// Step until complete. Returns the number of steps this call took.
    pub fn run_to_completion(&mut self) -> u64 {
        let before = self.steps;
        while !self.cursor.complete {
            self.step();
        }
        self.steps - before
    }

    fn finish(&mut self) -> StepEvent {
        let promoted = self.table.promote_unmarked();
        classify(&mut self.table);
        self.cursor.complete = true;

        let primes = self.table.primes().count();
        log::info!(
            "sieve complete: {primes} primes up to {} ({promoted} promoted, {} steps)",
            self.table.bound(),
            self.steps + 1
        );
        StepEvent::Completed { primes }
    }

    pub fn table(&self) -> &NumberTable {
        &self.table
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn bound(&self) -> u64 {
        self.table.bound()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor.complete
    }

    /// Bumped by every effective step and every reset.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Effective steps since the last reset.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Current statistics. Pure; safe to call at any point in the run.
    pub fn summarize(&self) -> Stats {
        stats::summarize(&self.table, &self.cursor, self.checkpoints)
    }
}

fn validate_bound(bound: i64) -> Result<u64, SieveError> {
    if bound < 1 {
        return Err(SieveError::InvalidBound { bound });
    }
    Ok(bound as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Family;

    fn naive_primes(bound: u64) -> Vec<u64> {
        (2..=bound)
            .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
            .collect()
    }

    #[test]
    fn initial_state() {
        let engine = SieveEngine::new(10).unwrap();
        assert_eq!(
            engine.cursor(),
            Cursor {
                current_prime: 2,
                current_multiple: 0,
                complete: false,
            }
        );
        assert_eq!(engine.table().count_state(EntryState::Unmarked), 9);
        assert_eq!(engine.steps_taken(), 0);
    }

    #[test]
    fn rejects_bound_below_one() {
        assert_eq!(
            SieveEngine::new(0).unwrap_err(),
            SieveError::InvalidBound { bound: 0 }
        );
        assert!(SieveEngine::new(-5).is_err());
    }

    #[test]
    fn first_steps_follow_transition_rules() {
        let mut engine = SieveEngine::new(10).unwrap();

        assert_eq!(engine.step(), StepEvent::FoundPrime { prime: 2 });
        assert_eq!(engine.cursor().current_multiple, 4);
        assert_eq!(engine.table().state_of(2), Some(EntryState::Prime));

        assert_eq!(
            engine.step(),
            StepEvent::MarkedComposite {
                value: 4,
                by: 2,
                fresh: true
            }
        );
        assert_eq!(engine.cursor().current_multiple, 6);

        for _ in 0..3 {
            engine.step();
        }
        assert_eq!(engine.cursor().current_multiple, 12);
        assert_eq!(engine.step(), StepEvent::Advanced { next_prime: 3 });
        assert_eq!(engine.cursor().current_multiple, 0);

        assert_eq!(engine.step(), StepEvent::FoundPrime { prime: 3 });
        assert_eq!(
            engine.step(),
            StepEvent::MarkedComposite {
                value: 6,
                by: 3,
                fresh: false
            }
        );
    }

    #[test]
    fn ten_completes_in_fifteen_steps() {
        let mut engine = SieveEngine::new(10).unwrap();
        assert_eq!(engine.run_to_completion(), 15);
        assert!(engine.is_complete());
        assert_eq!(engine.table().primes().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(
            engine.cursor(),
            Cursor {
                current_prime: 7,
                current_multiple: 14,
                complete: true,
            }
        );
    }

    #[test]
    fn completes_with_correct_primes() {
        for bound in [2u64, 3, 4, 17, 97, 100, 500, 1000] {
            let mut engine = SieveEngine::new(bound as i64).unwrap();
            engine.run_to_completion();
            let primes: Vec<u64> = engine.table().primes().collect();
            assert_eq!(primes, naive_primes(bound), "bound = {bound}");
            assert_eq!(engine.table().count_state(EntryState::Unmarked), 0);
        }
    }

    #[test]
    fn bound_one_completes_immediately() {
        let mut engine = SieveEngine::new(1).unwrap();
        assert_eq!(engine.step(), StepEvent::Completed { primes: 0 });
        assert!(engine.is_complete());
        assert_eq!(engine.table().state_of(1), Some(EntryState::Unit));
    }

    #[test]
    fn step_after_completion_is_idle() {
        let mut engine = SieveEngine::new(30).unwrap();
        engine.run_to_completion();
        let table = engine.table().clone();
        let cursor = engine.cursor();
        let version = engine.version();

        assert_eq!(engine.step(), StepEvent::Idle);
        assert_eq!(engine.table(), &table);
        assert_eq!(engine.cursor(), cursor);
        assert_eq!(engine.version(), version);
        assert_eq!(engine.run_to_completion(), 0);
    }

    #[test]
    fn states_never_revert() {
        let mut engine = SieveEngine::new(60).unwrap();
        let mut previous = engine.table().clone();
        while !engine.is_complete() {
            engine.step();
            for (before, after) in previous.entries().iter().zip(engine.table().entries()) {
                if before.state() != EntryState::Unmarked {
                    assert_eq!(before.state(), after.state(), "value {}", before.value());
                }
            }
            previous = engine.table().clone();
        }
    }

    #[test]
    fn families_appear_only_at_completion() {
        let mut engine = SieveEngine::new(10).unwrap();
        for _ in 0..14 {
            engine.step();
            assert!(
                engine
                    .table()
                    .entries()
                    .iter()
                    .all(|e| e.families().is_empty() && e.gap().is_none())
            );
        }
        engine.step();
        assert!(engine.table().get(3).unwrap().has_family(Family::Twin));
    }

    #[test]
    fn reset_mid_run_discards_progress() {
        let mut engine = SieveEngine::new(50).unwrap();
        for _ in 0..20 {
            engine.step();
        }
        engine.reset(20).unwrap();
        assert_eq!(engine.bound(), 20);
        assert_eq!(engine.cursor(), Cursor::start());
        assert_eq!(engine.steps_taken(), 0);
        assert_eq!(engine.table().count_state(EntryState::Unmarked), 19);
    }

    #[test]
    fn invalid_reset_keeps_current_run() {
        let mut engine = SieveEngine::new(10).unwrap();
        engine.step();
        let version = engine.version();
        assert!(engine.reset(0).is_err());
        assert_eq!(engine.bound(), 10);
        assert_eq!(engine.steps_taken(), 1);
        assert_eq!(engine.version(), version);
    }

    #[test]
    fn reset_then_replay_is_reproducible() {
        let mut engine = SieveEngine::new(10).unwrap();
        let steps = engine.run_to_completion();
        let digest = engine.table().digest();
        let table = engine.table().clone();

        engine.reset(10).unwrap();
        for _ in 0..steps {
            engine.step();
        }
        assert!(engine.is_complete());
        assert_eq!(engine.table(), &table);
        assert_eq!(engine.table().digest(), digest);
    }

    #[test]
    fn sentinel_mode_counts_one_as_prime() {
        let config = SieveConfig {
            bound: 10,
            one_is_prime: true,
            ..SieveConfig::default()
        };
        let mut engine = SieveEngine::with_config(&config).unwrap();
        engine.run_to_completion();
        assert_eq!(engine.table().state_of(1), Some(EntryState::Prime));
        assert_eq!(engine.table().primes().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(engine.summarize().prime_count, 5);
    }
}
