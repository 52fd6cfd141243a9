//! # Eratos Kernel
//!
//! A Sieve of Eratosthenes that advances exactly one unit of work per
//! `step()`, so a driving loop can animate it, plus the analytics derived
//! from the sieve's progress: prime families, gaps, and a comparison of the
//! actual prime count against the Prime Number Theorem estimate `n / ln(n)`.
//!
//! ## Architecture
//!
//! ```text
//! NumberTable           ← One Entry per integer 1..=N (state, families, gap)
//!     │
//! SieveEngine           ← Owns the table + cursor; step / reset / run
//!     │
//! classify              ← Once, at completion: families and gaps
//!     │
//! summarize             ← On demand, never mutates: counts, density, series
//!
//! factors_of            ← Independent of sieve progress
//! ```
//!
//! The engine is a single-owner state machine. Nothing in this crate holds
//! global state; callers pass the engine to whatever drives it.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod factor;
pub mod stats;
pub mod table;

pub use classify::classify;
pub use config::SieveConfig;
pub use engine::{Cursor, SieveEngine, StepEvent};
pub use error::{ConfigError, SieveError};
pub use factor::{factors_of, prime_factorization};
pub use stats::{SeriesPoint, Stats, pnt_estimate, round_to, summarize};
pub use table::{Entry, EntryState, Family, NumberTable, TableDigest};
