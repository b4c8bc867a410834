use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "bootstrap")]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Materialize the full-stack project skeleton, then remove this tool", long_about = None)]
struct Cli {
    /// Target directory (defaults to the current working directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Artifact to remove after emission (defaults to the running executable)
    #[arg(long)]
    artifact: Option<PathBuf>,

    /// Keep the bootstrap artifact, skip cleanup
    #[arg(long)]
    keep: bool,

    /// Only list the files that would be written
    #[arg(long)]
    dry_run: bool,

    /// Output results as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::bootstrap::execute(cli.root, cli.artifact, cli.keep, cli.dry_run, cli.json)
}
