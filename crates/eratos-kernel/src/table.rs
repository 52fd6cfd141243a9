//! The per-integer record set the sieve works over.
//!
//! A [`NumberTable`] holds exactly one [`Entry`] per integer `1..=N`, stored
//! so that index `i` holds value `i + 1`. Entries only move forward:
//! `Unmarked` becomes `Prime` or `Composite` and never changes again.
//! Family tags and gaps stay empty until the sieve completes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;

/// Classification of one integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    /// Not yet reached by the sieve.
    Unmarked,
    Prime,
    Composite,
    /// Value 1: neither prime nor composite. Terminal from creation.
    Unit,
}

impl EntryState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unmarked => "unmarked",
            Self::Prime => "prime",
            Self::Composite => "composite",
            Self::Unit => "unit",
        }
    }
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A special family a prime can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// p + 2 or p - 2 is also prime.
    Twin,
    /// p = 2^k - 1.
    Mersenne,
    /// p is one of the five known Fermat primes.
    Fermat,
    /// 2p + 1 is also prime.
    SophieGermain,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::Twin,
        Family::Mersenne,
        Family::Fermat,
        Family::SophieGermain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twin => "twin",
            Self::Mersenne => "mersenne",
            Self::Fermat => "fermat",
            Self::SophieGermain => "sophie-germain",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One integer in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    value: u64,
    state: EntryState,
    families: BTreeSet<Family>,
    gap: Option<u64>,
}

impl Entry {
    fn new(value: u64, state: EntryState) -> Self {
        Self {
            value,
            state,
            families: BTreeSet::new(),
            gap: None,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn families(&self) -> &BTreeSet<Family> {
        &self.families
    }

    pub fn has_family(&self, family: Family) -> bool {
        self.families.contains(&family)
    }

    /// Distance to the previous prime. Only set on primes after completion.
    pub fn gap(&self) -> Option<u64> {
        self.gap
    }

    pub fn is_prime(&self) -> bool {
        self.state == EntryState::Prime
    }

    pub(crate) fn tag(&mut self, family: Family) {
        self.families.insert(family);
    }

    pub(crate) fn set_gap(&mut self, gap: u64) {
        self.gap = Some(gap);
    }
}

/// SHA-256 over the canonical rendering of a table.
///
/// Equal tables always produce equal digests, so two runs can be compared
/// without holding both tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableDigest(pub String);

impl fmt::Display for TableDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered sequence of entries for the integers `1..=N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberTable {
    entries: Vec<Entry>,
}

impl NumberTable {
    /// Build a fresh table for `1..=bound`.
    ///
    /// Value 1 is seeded `Prime` when `one_is_prime` is set (a sentinel
    /// marker that counts it in the statistics), otherwise `Unit`. Every other
    /// value starts `Unmarked`.
    pub(crate) fn new(bound: u64, one_is_prime: bool) -> Self {
        let entries = (1..=bound)
            .map(|value| {
                let state = match value {
                    1 if one_is_prime => EntryState::Prime,
                    1 => EntryState::Unit,
                    _ => EntryState::Unmarked,
                };
                Entry::new(value, state)
            })
            .collect();
        Self { entries }
    }

    /// The bound N, which is also the number of entries.
    pub fn bound(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry for `value`, if `1 <= value <= N`.
    pub fn get(&self, value: u64) -> Option<&Entry> {
        let index = value.checked_sub(1)?;
        self.entries.get(index as usize)
    }

    pub(crate) fn get_mut(&mut self, value: u64) -> Option<&mut Entry> {
        let index = value.checked_sub(1)?;
        self.entries.get_mut(index as usize)
    }

    pub fn state_of(&self, value: u64) -> Option<EntryState> {
        self.get(value).map(Entry::state)
    }

    pub fn is_prime(&self, value: u64) -> bool {
        self.state_of(value) == Some(EntryState::Prime)
    }

    /// Values marked `Prime`, ascending, excluding a sentinel-marked 1.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.value >= 2 && entry.is_prime())
            .map(Entry::value)
    }

    /// Number of entries in `state`.
    pub fn count_state(&self, state: EntryState) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state == state)
            .count()
    }

    /// Move `value` out of `Unmarked`.
    ///
    /// Returns `true` if the entry changed. Entries that are already
    /// classified keep their state.
    pub(crate) fn mark(&mut self, value: u64, state: EntryState) -> bool {
        match self.get_mut(value) {
            Some(entry) if entry.state == EntryState::Unmarked => {
                entry.state = state;
                true
            }
            _ => false,
        }
    }

    /// Smallest value greater than `after` that is still `Unmarked`.
    pub(crate) fn next_unmarked_after(&self, after: u64) -> Option<u64> {
        let start = usize::try_from(after).ok()?;
        self.entries
            .get(start..)?
            .iter()
            .find(|entry| entry.state == EntryState::Unmarked)
            .map(Entry::value)
    }

    /// Reclassify every remaining `Unmarked` entry as `Prime`.
    pub(crate) fn promote_unmarked(&mut self) -> usize {
        let mut promoted = 0;
        for entry in &mut self.entries {
            if entry.state == EntryState::Unmarked {
                entry.state = EntryState::Prime;
                promoted += 1;
            }
        }
        promoted
    }

    /// Deterministic content digest of every entry.
    pub fn digest(&self) -> TableDigest {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            let families: Vec<&str> = entry.families.iter().map(|f| f.as_str()).collect();
            let gap = entry
                .gap
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string());
            hasher.update(
                format!(
                    "{}:{}:{}:{}\n",
                    entry.value,
                    entry.state,
                    families.join(","),
                    gap
                )
                .as_bytes(),
            );
        }
        TableDigest(format!("{:x}", hasher.finalize()))
    }
}
