mod args;
mod commands;
mod config;
mod global;
mod handlers;

use args::Command;
use basex::AlphabetRegistry;
use clap::Parser;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "basex")]
#[command(version)]
#[command(about = "Arbitrary-base encoder: encode binary data with base58, base62, bech32 or any custom alphabet", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabets configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Command::List => handlers::list::handle(&config),
    }
}
