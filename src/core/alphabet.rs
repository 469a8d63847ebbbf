use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::encoders::errors::DecodeError;
use crate::encoders::radix;

/// A single digit value in the alphabet's numeral system, in `0..base`.
pub type Digit = u32;

/// An ordered set of symbols defining a positional numeral system.
///
/// Each `char` of the source string is one symbol; its index is the digit
/// value it stands for. The alphabet length is the radix used for encoding.
///
/// Construction never fails. Alphabets with repeated symbols are accepted,
/// in which case the later occurrence wins in the decode lookup, so callers
/// that need a faithful round trip must supply distinct symbols.
///
/// # Example
///
/// ```
/// use basex::Alphabet;
///
/// let base58 = Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
/// let encoded = base58.encode(b"hello world");
/// assert_eq!(encoded, "StV1DL6CwTryKyV");
/// assert_eq!(base58.decode(&encoded).unwrap(), b"hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    raw: String,
    symbols: Vec<char>,
    symbol_to_digit: HashMap<char, Digit>,
}

impl Alphabet {
    /// Builds the symbol table and reverse lookup for `raw`.
    pub fn new(raw: &str) -> Self {
        let symbols: Vec<char> = raw.chars().collect();

        let mut symbol_to_digit = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            symbol_to_digit.insert(c, i as Digit);
        }

        Alphabet {
            raw: raw.to_string(),
            symbols,
            symbol_to_digit,
        }
    }

    /// Returns the alphabet string this alphabet was built from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the base (radix) of the alphabet, i.e. its symbol count.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol for `digit`, or `None` if it is out of range.
    pub fn symbol(&self, digit: Digit) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Returns the digit value of `c`, or `None` if `c` is not in the alphabet.
    pub fn digit(&self, c: char) -> Option<Digit> {
        self.symbol_to_digit.get(&c).copied()
    }

    /// The symbol used for zero and for leading-zero padding.
    pub fn zero_symbol(&self) -> Option<char> {
        self.symbols.first().copied()
    }

    /// Encodes `data` as text in this alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `data` is non-empty and the alphabet has fewer than two symbols.
    pub fn encode(&self, data: &[u8]) -> String {
        radix::render(&self.encode_to_digits(data), self)
    }

    /// Decodes text produced by [`Alphabet::encode`] back into bytes.
    ///
    /// Fails on the first character that is not part of the alphabet; no
    /// partial output is returned.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        if encoded.is_empty() {
            return Ok(Vec::new());
        }

        let digits = radix::parse(encoded, self)?;
        Ok(self.decode_from_digits(&digits))
    }

    /// Converts `data` into most-significant-first digit values in `0..base`
    /// without mapping them to symbols.
    ///
    /// # Panics
    ///
    /// Panics if `data` is non-empty and the alphabet has fewer than two symbols.
    pub fn encode_to_digits(&self, data: &[u8]) -> Vec<Digit> {
        radix::encode_to_digits(data, self.base())
    }

    /// Inverse of [`Alphabet::encode_to_digits`].
    pub fn decode_from_digits(&self, digits: &[Digit]) -> Vec<u8> {
        radix::decode_from_digits(digits, self.base())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Alphabet {
    fn from(raw: &str) -> Self {
        Alphabet::new(raw)
    }
}

impl From<String> for Alphabet {
    fn from(raw: String) -> Self {
        Alphabet::new(&raw)
    }
}

impl FromStr for Alphabet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Alphabet::new(s))
    }
}
