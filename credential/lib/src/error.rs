//! Error types for the credential library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with users, passwords and digests.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A full name did not split into exactly a first and a last name.
    #[error("malformed full name {input:?}: expected \"First Last\" separated by a single space, got {tokens} token(s)")]
    MalformedName {
        /// The rejected input.
        input: String,
        /// How many space-separated tokens the input produced.
        tokens: usize,
    },

    /// More distinct characters were requested than the alphabet holds.
    #[error("cannot draw {requested} distinct characters from an alphabet of {available}")]
    LengthExceedsAlphabet {
        /// The requested length.
        requested: usize,
        /// The size of the alphabet.
        available: usize,
    },

    /// The hash algorithm name is not in the registry.
    #[error("unknown hash algorithm {name:?}, choose from: {}", available.join(", "))]
    UnknownAlgorithm {
        /// The name that failed to resolve.
        name: String,
        /// Every name that would have resolved.
        available: Vec<&'static str>,
    },

    /// Failed to read a configuration file.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
