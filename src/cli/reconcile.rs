use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::parsing::catalog::load_catalog;
use crate::parsing::sam::read_alignment_header;
use crate::remap::reconcile::{reconcile, Reconciliation};
use crate::remap::store::write_remap;

#[derive(Args)]
pub struct ReconcileArgs {
    /// Alignment file whose header dictionary is reconciled (SAM, BAM, or CRAM)
    #[arg(required = true)]
    pub alignments: PathBuf,

    /// Transcript catalog: a count line followed by `name<TAB>length` lines
    #[arg(required = true)]
    pub catalog: PathBuf,

    /// Remap file to write (overwritten if present)
    #[arg(required = true)]
    pub output: PathBuf,
}

/// Execute reconcile subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be read, the dictionaries do not
/// reconcile, or the remap file cannot be written. Nothing is written on failure.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let header = read_alignment_header(&args.alignments)?;
    debug!(
        path = %args.alignments.display(),
        sequences = header.dictionary.len(),
        "Read alignment header"
    );

    let catalog = load_catalog(&args.catalog)?;

    let result = reconcile(&catalog, &header.dictionary)?;
    write_remap(&args.output, &result)?;

    info!(
        output = %args.output.display(),
        remap = result.needs_remap(),
        "Reconciled alignment header against catalog"
    );

    match format {
        OutputFormat::Text => print_text_result(&args, &result, verbose),
        OutputFormat::Json => print_json_result(&args, &result)?,
        OutputFormat::Tsv => print_tsv_result(&args, &result),
    }

    Ok(())
}

fn print_text_result(args: &ReconcileArgs, result: &Reconciliation, verbose: bool) {
    println!(
        "\nReconciled: {} vs {}",
        args.alignments.display(),
        args.catalog.display()
    );
    println!(
        "\n   Alignment sequences: {} (all found in catalog)",
        result.alignment_len()
    );
    println!(
        "   Catalog sequences: {} total, {} not referenced",
        result.catalog_len(),
        result.omitted_count()
    );

    if result.needs_remap() {
        println!("   Remap: REQUIRED (order or size differs from catalog)");
    } else {
        println!("   Remap: not required (identical order and size)");
    }

    if verbose && result.omitted_count() > 0 {
        // 1-based, as written to the remap file
        let ids: Vec<String> = result
            .omissions()
            .iter()
            .map(|id| (id + 1).to_string())
            .collect();
        println!("   Unreferenced catalog ids: {}", ids.join(" "));
    }

    println!("\n   Written to {}", args.output.display());
}

fn print_json_result(args: &ReconcileArgs, result: &Reconciliation) -> anyhow::Result<()> {
    let mut output = serde_json::to_value(result)?;
    output["alignments"] = args.alignments.display().to_string().into();
    output["catalog"] = args.catalog.display().to_string().into();
    output["output"] = args.output.display().to_string().into();
    output["alignment_sequences"] = result.alignment_len().into();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(args: &ReconcileArgs, result: &Reconciliation) {
    println!("alignments\tcatalog\toutput\talignment_sequences\tcatalog_sequences\tomitted\tremap");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        args.alignments.display(),
        args.catalog.display(),
        args.output.display(),
        result.alignment_len(),
        result.catalog_len(),
        result.omitted_count(),
        result.needs_remap(),
    );
}
