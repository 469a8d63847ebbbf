use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode binary data as text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// List available alphabets
    List,
}

/// Where the alphabet comes from
#[derive(Args, Debug)]
pub struct AlphabetArgs {
    /// Named alphabet from the registry (see `basex list`)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Literal alphabet string, one symbol per character
    #[arg(long, conflicts_with = "alphabet")]
    pub chars: Option<String>,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Treat input as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Print digit values instead of symbols
    #[arg(long)]
    pub digits: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Print decoded bytes as hex
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
