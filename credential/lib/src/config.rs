//! Defaults for password generation, digesting and email derivation.
//!
//! A [`CredentialConfig`] can be built in code or read from TOML. Every field
//! is optional in the file; missing fields take the values below.
//!
//! ```toml
//! password_length = 10
//! random_string_length = 8
//! hash_algorithm = "sha256"
//! email_domain = "example.com"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CredentialError;
use crate::hashing::HashAlgorithm;
use crate::random::ALPHABET;

/// Default length of a password generated for a [`User`](crate::User).
pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Default length of a free-standing random string.
pub const DEFAULT_RANDOM_STRING_LENGTH: usize = 8;

/// Domain appended to derived email addresses.
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Tunable defaults for the credential operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialConfig {
    /// Length used by [`User::generate_default_password`](crate::User::generate_default_password).
    pub password_length: usize,
    /// Length used when no explicit length is given for a random string.
    pub random_string_length: usize,
    /// Algorithm used when no explicit algorithm is given.
    pub hash_algorithm: HashAlgorithm,
    /// Domain part of derived email addresses.
    pub email_domain: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            password_length: DEFAULT_PASSWORD_LENGTH,
            random_string_length: DEFAULT_RANDOM_STRING_LENGTH,
            hash_algorithm: HashAlgorithm::default(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl CredentialConfig {
    /// Parses and validates a TOML document.
    ///
    /// ## Errors
    ///
    /// Returns [`CredentialError::ConfigParse`] for malformed TOML, unknown
    /// keys or unknown algorithm names, and [`CredentialError::InvalidConfig`]
    /// when [`validate`](Self::validate) fails.
    pub fn from_toml_str(content: &str) -> Result<Self, CredentialError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CredentialError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks that the lengths fit the alphabet and the domain is usable.
    pub fn validate(&self) -> Result<(), CredentialError> {
        for (field, value) in [
            ("password_length", self.password_length),
            ("random_string_length", self.random_string_length),
        ] {
            if value > ALPHABET.len() {
                return Err(CredentialError::InvalidConfig(format!(
                    "{field} is {value}, the alphabet only has {} characters",
                    ALPHABET.len()
                )));
            }
        }

        if self.email_domain.trim().is_empty() {
            return Err(CredentialError::InvalidConfig(
                "email_domain must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
