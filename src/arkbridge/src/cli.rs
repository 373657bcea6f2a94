use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub mod helpers;

pub mod io;
pub use io::*;

mod processor;
pub use processor::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the arkbridge application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: ArkbridgeCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by arkbridge.
#[derive(Debug, Subcommand)]
pub enum ArkbridgeCommand {
    De(de::De),
    Ser(ser::Ser),
}

impl Command for ArkbridgeCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::De(de) => de.handle(),
            Self::Ser(ser) => ser.handle(),
        }
    }
}
