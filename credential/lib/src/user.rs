//! The user record: names, derived email, and a generated password.

use rand::Rng;
use tracing::info;

use crate::config::CredentialConfig;
use crate::error::CredentialError;
use crate::hashing::{self, HashAlgorithm};
use crate::random;

/// Password held by a freshly constructed [`User`].
pub const PLACEHOLDER_PASSWORD: &str = "0";

/// A person with a first and last name and a mutable password.
///
/// The email address and full name are derived from the name fields on
/// every read; neither is stored.
///
/// ## Examples
///
/// ```rust
/// use credential::{HashAlgorithm, User};
///
/// let mut user = User::new("Jim", "Duncan");
/// assert_eq!(user.email(), "jim.duncan@example.com");
///
/// user.set_full_name("Frank Miller").unwrap();
/// assert_eq!(user.email(), "frank.miller@example.com");
///
/// let password = user.generate_password(20).unwrap().to_string();
/// assert_eq!(password.len(), 20);
/// assert_eq!(user.generate_hash(HashAlgorithm::Sha256).len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    first: String,
    last: String,
    password: String,
    email_domain: String,
    password_length: usize,
    hash_algorithm: HashAlgorithm,
}

impl User {
    /// Creates a user with the default configuration. No validation is done.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self::from_parts(first.into(), last.into(), &CredentialConfig::default())
    }

    /// Creates a user whose defaults come from `config`.
    ///
    /// The names are taken as given; only the config is checked.
    ///
    /// ## Errors
    ///
    /// Returns [`CredentialError::InvalidConfig`] when
    /// [`CredentialConfig::validate`] rejects `config`.
    pub fn with_config(
        first: impl Into<String>,
        last: impl Into<String>,
        config: &CredentialConfig,
    ) -> Result<Self, CredentialError> {
        config.validate()?;
        Ok(Self::from_parts(first.into(), last.into(), config))
    }

    fn from_parts(first: String, last: String, config: &CredentialConfig) -> Self {
        Self {
            first,
            last,
            password: PLACEHOLDER_PASSWORD.to_string(),
            email_domain: config.email_domain.clone(),
            password_length: config.password_length,
            hash_algorithm: config.hash_algorithm,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replaces the password verbatim.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// `first.last@domain`, both names lowercased.
    pub fn email(&self) -> String {
        format!(
            "{}.{}@{}",
            self.first.to_lowercase(),
            self.last.to_lowercase(),
            self.email_domain
        )
    }

    /// `first last`, exactly as stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Splits `name` on a single space into first and last name.
    ///
    /// The input must contain exactly one space with a non-empty name on
    /// either side. Middle names, runs of spaces and single words are all
    /// rejected, and the record is left unchanged.
    ///
    /// ## Errors
    ///
    /// Returns [`CredentialError::MalformedName`] for any other shape.
    pub fn set_full_name(&mut self, name: &str) -> Result<(), CredentialError> {
        let tokens: Vec<&str> = name.split(' ').collect();
        let [first, last] = tokens.as_slice() else {
            return Err(CredentialError::MalformedName {
                input: name.to_string(),
                tokens: tokens.len(),
            });
        };
        if first.is_empty() || last.is_empty() {
            return Err(CredentialError::MalformedName {
                input: name.to_string(),
                tokens: tokens.iter().filter(|t| !t.is_empty()).count(),
            });
        }

        self.first = (*first).to_string();
        self.last = (*last).to_string();
        info!(full_name = %name, "updated full name");
        Ok(())
    }

    /// Replaces the password with `length` distinct random alphanumerics.
    ///
    /// ## Errors
    ///
    /// Returns [`CredentialError::LengthExceedsAlphabet`] when `length` is
    /// over 62; the previous password is kept.
    pub fn generate_password(&mut self, length: usize) -> Result<&str, CredentialError> {
        self.generate_password_with(&mut rand::thread_rng(), length)
    }

    /// [`generate_password`](Self::generate_password) with the configured length.
    pub fn generate_default_password(&mut self) -> Result<&str, CredentialError> {
        self.generate_password(self.password_length)
    }

    /// [`generate_password`](Self::generate_password) drawing from `rng`.
    pub fn generate_password_with<R>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<&str, CredentialError>
    where
        R: Rng + ?Sized,
    {
        self.password = random::generate_random_string_with(rng, length)?;
        info!(length, user = %self.full_name(), "generated password");
        Ok(&self.password)
    }

    /// Hex digest of the current password.
    pub fn generate_hash(&self, algo: HashAlgorithm) -> String {
        hashing::hex_digest(algo, &self.password)
    }

    /// Hex digest of the current password under the configured algorithm.
    pub fn generate_default_hash(&self) -> String {
        self.generate_hash(self.hash_algorithm)
    }

    /// Hex digest of the current password under the algorithm called `hash_type`.
    ///
    /// ## Errors
    ///
    /// Returns [`CredentialError::UnknownAlgorithm`] when the name does not
    /// resolve. The password is never touched.
    pub fn generate_hash_named(&self, hash_type: &str) -> Result<String, CredentialError> {
        hashing::generate_hash(&self.password, hash_type)
    }
}
