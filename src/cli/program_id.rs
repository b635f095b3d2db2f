use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::sam::read_alignment_header;
use crate::parsing::tag::HeaderTags;

#[derive(Args)]
pub struct ProgramIdArgs {
    /// Alignment file (SAM, BAM, or CRAM)
    #[arg(required = true)]
    pub alignments: PathBuf,
}

/// Execute program-id subcommand
///
/// # Errors
///
/// Returns an error if the header cannot be read or has no `@PG` ID.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ProgramIdArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let header = read_alignment_header(&args.alignments)?;
    let tags = HeaderTags::new(header.text);
    let program_id = tags.program_id()?;

    match format {
        OutputFormat::Text | OutputFormat::Tsv => println!("{program_id}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "alignments": args.alignments.display().to_string(),
                "program_id": program_id,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
