pub mod errors;
pub(crate) mod radix;
