use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::{Commands, LoginArgs, ProfileCommands, ProfileEditArgs};
pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `lct` binary.
#[derive(Debug, Parser)]
#[command(name = "lct", version, about = "Lectern - learning platform profile client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress alerts and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
