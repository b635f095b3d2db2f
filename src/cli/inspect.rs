use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::remap::store::Remap;

#[derive(Args)]
pub struct InspectArgs {
    /// Remap file written by `reconcile`
    #[arg(required = true)]
    pub remap: PathBuf,
}

/// Execute inspect subcommand
///
/// # Errors
///
/// Returns an error if the remap file cannot be read or is malformed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InspectArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let remap = Remap::load(&args.remap)?;

    match format {
        OutputFormat::Text => {
            if remap.is_identity() {
                println!("{}: no remap (alignment ids are catalog ids)", args.remap.display());
            } else {
                println!("{}: {} alignment sequences", args.remap.display(), remap.len());
                print_pairs(&remap);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&remap)?);
        }
        OutputFormat::Tsv => {
            println!("alignment_id\tcatalog_id");
            print_pairs(&remap);
        }
    }

    Ok(())
}

fn print_pairs(remap: &Remap) {
    for alignment_id in 0..remap.len() {
        if let Some(catalog_id) = remap.translate(alignment_id) {
            println!("{alignment_id}\t{catalog_id}");
        }
    }
}
