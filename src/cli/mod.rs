//! Command-line interface for ref-remap.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reconcile**: Check an alignment header against the transcript catalog and write the remap file
//! - **inspect**: Show the translation stored in a remap file
//! - **program-id**: Print the `@PG` ID of an alignment file
//!
//! ## Usage
//!
//! ```text
//! # Reconcile and write the remap
//! ref-remap reconcile sample.bam ref.transcripts.ti sample.remap
//!
//! # Inspect it later as TSV
//! ref-remap inspect sample.remap --format tsv
//!
//! # Which aligner produced the file?
//! ref-remap program-id sample.bam
//! ```

use clap::{Parser, Subcommand};

pub mod inspect;
pub mod program_id;
pub mod reconcile;

#[derive(Parser)]
#[command(name = "ref-remap")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Reconcile BAM/SAM sequence dictionaries against a transcript catalog")]
#[command(
    long_about = "ref-remap checks that every reference sequence in an alignment file exists in the transcript catalog with the same length.\n\nIt writes a remap file translating alignment sequence ids to catalog ids, which later stages load instead of repeating the check."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile an alignment header with the catalog and write the remap file
    Reconcile(reconcile::ReconcileArgs),

    /// Show the translation stored in a remap file
    Inspect(inspect::InspectArgs),

    /// Print the program ID from the first @PG header line
    ProgramId(program_id::ProgramIdArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
