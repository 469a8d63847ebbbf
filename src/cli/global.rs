use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "1048576")]
    pub max_size: usize,

    /// Process inputs exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
