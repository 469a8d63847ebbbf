//! Arbitrary-base encoding with caller-supplied alphabets.
//!
//! An [`Alphabet`] turns any string of distinct symbols into a positional
//! numeral system. Bytes are read as one big-endian number and rewritten in
//! that radix, with leading zero bytes kept as leading zero symbols.
//!
//! ```
//! use basex::{Alphabet, decode, encode};
//!
//! let bech32 = Alphabet::new("qpzry9x8gf2tvdw0s3jn54khce6mua7l");
//! let bytes = decode("andtheexcludedcharacters", &bech32).unwrap();
//! assert_eq!(encode(&bytes, &bech32), "andtheexcludedcharacters");
//! ```

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{Alphabet, Digit};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, Settings};
pub use crate::encoders::errors::{AlphabetNotFoundError, DecodeError, find_closest_alphabet};

/// Encodes binary data as text in the given alphabet.
///
/// # Example
///
/// ```
/// use basex::{Alphabet, encode};
///
/// let base58 = Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
/// assert_eq!(encode(&[0, 0, 1], &base58), "112");
/// ```
///
/// # Panics
///
/// Panics if `data` is non-empty and the alphabet has fewer than two symbols.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    alphabet.encode(data)
}

/// Decodes text in the given alphabet back to binary data.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] for the first character that is
/// not part of the alphabet.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    alphabet.decode(encoded)
}
