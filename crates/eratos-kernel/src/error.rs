//! Error types for Eratos kernel operations.

/// Validation failures on the kernel's public operations.
///
/// Both variants are caller-correctable: supply a valid value and retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SieveError {
    /// The sieve bound N was below 1.
    #[error("invalid bound: {bound} (the sieve needs N >= 1)")]
    InvalidBound { bound: i64 },

    /// A factorization query was made for n below 1.
    #[error("invalid input: {n} (factorization needs n >= 1)")]
    InvalidInput { n: i64 },
}

/// Errors loading or validating a [`SieveConfig`](crate::SieveConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Sieve(#[from] SieveError),

    #[error("invalid config: {0}")]
    Invalid(String),
}
