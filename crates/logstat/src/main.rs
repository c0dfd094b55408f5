use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    extract::{self, BidirArgs, ExtractArgs, ParseArgs},
    manifest::{self, ManifestArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "logstat", about = "Batched averages of search experiment log statistics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report a log with `Iter:` and `Max O + C:` lines.
    Parse(ParseArgs),
    /// Report a log whose counts follow `COMMON` marker lines.
    Bidir(BidirArgs),
    /// Report a log under an explicitly named convention.
    Extract(ExtractArgs),
    /// Report every log listed in a YAML manifest.
    Manifest(ManifestArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::Parse(args) => extract::run_parse(&args),
        Command::Bidir(args) => extract::run_bidir(&args),
        Command::Extract(args) => extract::run(&args),
        Command::Manifest(args) => manifest::run(&args),
    }
}
