//! Templar — declarative index template management CLI.
//!
//! # Usage
//!
//! ```text
//! templar sync <template> [--dry-run] [--manifest <path>]
//! templar sync --all [--dry-run] [--manifest <path>]
//! templar status [--json] [--manifest <path>]
//! templar diff [<template>] [--manifest <path>]
//! templar list [--json] [--manifest <path>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, list::ListArgs, status::StatusArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "templar",
    version,
    about = "Converge declared index templates against a remote index service",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Converge declared templates onto the remote store.
    Sync(SyncArgs),

    /// Show convergence status for every declared template.
    Status(StatusArgs),

    /// Show unified diff of what sync would write.
    Diff(DiffArgs),

    /// List the remote template store as normalized records.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
