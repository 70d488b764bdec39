//! Named digest algorithms and hex digesting.
//!
//! [`HashAlgorithm`] is the registry of every digest this crate can compute.
//! Names are resolved once, at the boundary, via [`resolve_algorithm`] or
//! [`str::parse`]; after that
//! everything is dispatched on the enum.
//!
//! ## Examples
//!
//! ```rust
//! use credential::{HashAlgorithm, generate_hash};
//!
//! let algo: HashAlgorithm = "SHA-256".parse().unwrap();
//! assert_eq!(algo, HashAlgorithm::Sha256);
//!
//! let hex = generate_hash("abc", "sha256").unwrap();
//! assert_eq!(hex.len(), 64);
//! ```

use std::fmt;
use std::str::FromStr;

use digest::Digest;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CredentialError;

/// A digest algorithm that can be selected by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    #[cfg(feature = "sha3")]
    Sha3_224,
    #[cfg(feature = "sha3")]
    Sha3_256,
    #[cfg(feature = "sha3")]
    Sha3_384,
    #[cfg(feature = "sha3")]
    Sha3_512,
    /// BLAKE2b with a 512-bit output.
    #[cfg(feature = "blake")]
    Blake2b,
    /// BLAKE2s with a 256-bit output.
    #[cfg(feature = "blake")]
    Blake2s,
    #[cfg(feature = "blake")]
    Blake3,
}

impl HashAlgorithm {
    /// Every algorithm compiled into this build, in listing order.
    pub const ALL: &'static [HashAlgorithm] = &[
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        #[cfg(feature = "sha3")]
        HashAlgorithm::Sha3_224,
        #[cfg(feature = "sha3")]
        HashAlgorithm::Sha3_256,
        #[cfg(feature = "sha3")]
        HashAlgorithm::Sha3_384,
        #[cfg(feature = "sha3")]
        HashAlgorithm::Sha3_512,
        #[cfg(feature = "blake")]
        HashAlgorithm::Blake2b,
        #[cfg(feature = "blake")]
        HashAlgorithm::Blake2s,
        #[cfg(feature = "blake")]
        HashAlgorithm::Blake3,
    ];

    /// The canonical (lowercase) name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha512_224 => "sha512_224",
            HashAlgorithm::Sha512_256 => "sha512_256",
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_224 => "sha3_224",
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_256 => "sha3_256",
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_384 => "sha3_384",
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_512 => "sha3_512",
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake2b => "blake2b",
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake2s => "blake2s",
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Canonical names of every available algorithm.
    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(|algo| algo.name()).collect()
    }

    /// Size of the digest in bytes. The hex form is twice as long.
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 => 28,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_224 => 28,
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_256 => 32,
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_384 => 48,
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_512 => 64,
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake2b => 64,
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake2s | HashAlgorithm::Blake3 => 32,
        }
    }

    /// Computes the lowercase hex digest of `data`.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use credential::HashAlgorithm;
    ///
    /// assert_eq!(
    ///     HashAlgorithm::Md5.hex_digest(b""),
    ///     "d41d8cd98f00b204e9800998ecf8427e"
    /// );
    /// ```
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => hex_of::<md5::Md5>(data),
            HashAlgorithm::Sha1 => hex_of::<sha1::Sha1>(data),
            HashAlgorithm::Sha224 => hex_of::<sha2::Sha224>(data),
            HashAlgorithm::Sha256 => hex_of::<sha2::Sha256>(data),
            HashAlgorithm::Sha384 => hex_of::<sha2::Sha384>(data),
            HashAlgorithm::Sha512 => hex_of::<sha2::Sha512>(data),
            HashAlgorithm::Sha512_224 => hex_of::<sha2::Sha512_224>(data),
            HashAlgorithm::Sha512_256 => hex_of::<sha2::Sha512_256>(data),
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_224 => hex_of::<sha3::Sha3_224>(data),
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_256 => hex_of::<sha3::Sha3_256>(data),
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_384 => hex_of::<sha3::Sha3_384>(data),
            #[cfg(feature = "sha3")]
            HashAlgorithm::Sha3_512 => hex_of::<sha3::Sha3_512>(data),
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake2b => hex_of::<blake2::Blake2b512>(data),
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake2s => hex_of::<blake2::Blake2s256>(data),
            #[cfg(feature = "blake")]
            HashAlgorithm::Blake3 => blake3::hash(data).to_hex().to_string(),
        }
    }
}

#[inline]
fn hex_of<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Lowercases and drops `-`/`_` so `SHA-256`, `sha_256` and `sha256` agree.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for HashAlgorithm {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        Self::ALL
            .iter()
            .copied()
            .find(|algo| normalize(algo.name()) == wanted)
            .ok_or_else(|| CredentialError::UnknownAlgorithm {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(algo: HashAlgorithm) -> Self {
        algo.name().to_string()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves `name` against the registry, logging a diagnostic when it is unknown.
///
/// Prefer this over [`str::parse`] at user-facing boundaries: both fail the
/// same way, but only this emits the `warn` event listing the choices.
pub fn resolve_algorithm(name: &str) -> Result<HashAlgorithm, CredentialError> {
    name.parse().inspect_err(|_| {
        warn!(
            algorithm = name,
            available = ?HashAlgorithm::available(),
            "incorrect hash type"
        );
    })
}

/// Computes the hex digest of `password` under the algorithm called `hash_type`.
///
/// ## Errors
///
/// Returns [`CredentialError::UnknownAlgorithm`] when `hash_type` is not in
/// [`HashAlgorithm::ALL`]. A `warn` event listing the available names is
/// emitted first.
///
/// ## Examples
///
/// ```rust
/// use credential::generate_hash;
///
/// assert_eq!(
///     generate_hash("abc", "sha256").unwrap(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// assert!(generate_hash("abc", "not-a-real-algo").is_err());
/// ```
pub fn generate_hash(password: &str, hash_type: &str) -> Result<String, CredentialError> {
    let algo = resolve_algorithm(hash_type)?;
    Ok(hex_digest(algo, password))
}

/// Computes the hex digest of the UTF-8 bytes of `password`.
pub fn hex_digest(algo: HashAlgorithm, password: &str) -> String {
    debug!(algorithm = %algo, "computing digest");
    algo.hex_digest(password.as_bytes())
}
