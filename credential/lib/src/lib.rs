//! Credential utilities: a user record with a derived email, random
//! passwords, and hex digests under a selectable algorithm.
//!
//! Nothing in this crate is suitable for storing real passwords. There is no
//! salt, no key stretching and the random source is not claimed to be
//! cryptographically secure.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `sha3` | Yes | SHA3-224/256/384/512 |
//! | `blake` | Yes | BLAKE2b-512, BLAKE2s-256 and BLAKE3 |
//!
//! MD5, SHA-1 and the SHA-2 family are always compiled in.
//!
//! ## Examples
//!
//! ```rust
//! use credential::{User, generate_hash, generate_random_string};
//!
//! let mut user = User::new("Jim", "Duncan");
//! assert_eq!(user.full_name(), "Jim Duncan");
//!
//! user.generate_password(20).unwrap();
//! let digest = user.generate_hash_named("sha256").unwrap();
//! assert_eq!(digest, generate_hash(user.password(), "sha256").unwrap());
//!
//! let token = generate_random_string(8).unwrap();
//! assert_eq!(token.len(), 8);
//! ```

mod config;
mod error;
mod hashing;
mod random;
mod user;

pub use config::{
    CredentialConfig, DEFAULT_EMAIL_DOMAIN, DEFAULT_PASSWORD_LENGTH, DEFAULT_RANDOM_STRING_LENGTH,
};
pub use error::CredentialError;
pub use hashing::{HashAlgorithm, generate_hash, hex_digest, resolve_algorithm};
pub use random::{ALPHABET, generate_random_string, generate_random_string_with};
pub use user::{PLACEHOLDER_PASSWORD, User};
