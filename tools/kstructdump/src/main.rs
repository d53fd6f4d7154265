mod commands;
mod schema_spec;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{decode::DecodeArgs, encode::EncodeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kstructdump", about = "Encode and decode schema-defined binary records")]
struct Cli {
    /// Trace record encoding/decoding (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a record from name=value pairs and print its bytes as hex
    Encode(EncodeArgs),
    /// Decode hex bytes into a record and print it
    Decode(DecodeArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "kstruct_core=trace,kstructdump=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode(args) => args.run(),
        Commands::Decode(args) => args.run(),
    }
}
