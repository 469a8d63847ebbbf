//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use basex::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let base62 = registry.build_alphabet("base62").unwrap();
//! assert_eq!(decode(&encode(b"Hello", &base62), &base62).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Core encoding/decoding
    Alphabet,
    // Config
    AlphabetRegistry,
    DecodeError,
    Digit,
    decode,
    encode,
};
