//! Random alphanumeric strings sampled without replacement.
//!
//! Every character of a generated string is distinct: characters are drawn
//! from [`ALPHABET`] the way a hand of cards is dealt, so no more than
//! [`ALPHABET.len()`](ALPHABET) characters can ever be requested.
//!
//! The randomness is general purpose (`rand::thread_rng`). Nothing here makes
//! a cryptographic-strength claim.

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::error::CredentialError;

/// ASCII letters followed by digits.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random string of `length` distinct characters from [`ALPHABET`].
///
/// ## Examples
///
/// ```rust
/// use credential::generate_random_string;
///
/// let s = generate_random_string(8).unwrap();
/// assert_eq!(s.len(), 8);
/// assert!(generate_random_string(63).is_err());
/// ```
///
/// ## Errors
///
/// Returns [`CredentialError::LengthExceedsAlphabet`] when `length` is larger
/// than the alphabet.
pub fn generate_random_string(length: usize) -> Result<String, CredentialError> {
    generate_random_string_with(&mut rand::thread_rng(), length)
}

/// Same as [`generate_random_string`], drawing from the supplied generator.
pub fn generate_random_string_with<R>(rng: &mut R, length: usize) -> Result<String, CredentialError>
where
    R: Rng + ?Sized,
{
    if length > ALPHABET.len() {
        return Err(CredentialError::LengthExceedsAlphabet {
            requested: length,
            available: ALPHABET.len(),
        });
    }

    // `index::sample` returns distinct indices in shuffled order.
    let sampled: String = index::sample(rng, ALPHABET.len(), length)
        .into_iter()
        .map(|i| char::from(ALPHABET[i]))
        .collect();

    debug!(length, "generated random string");
    Ok(sampled)
}


#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any length up to the alphabet size yields that many distinct alphanumerics
        #[test]
        fn fits_alphabet_yields_distinct_chars(length in 0usize..=62) {
            let s = generate_random_string(length).unwrap();
            prop_assert_eq!(s.chars().count(), length);
            prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
            let unique: HashSet<char> = s.chars().collect();
            prop_assert_eq!(unique.len(), length);
        }

        /// Property: any length past the alphabet size is refused, never clamped
        #[test]
        fn past_alphabet_is_rejected(length in 63usize..=usize::MAX) {
            let result = generate_random_string(length);
            prop_assert!(
                matches!(
                    result,
                    Err(CredentialError::LengthExceedsAlphabet { requested, available: 62 })
                        if requested == length
                ),
                "length {} was accepted",
                length
            );
        }
    }
}
