//! # ref-remap
//!
//! Reconciles the reference sequence dictionary of a BAM/SAM/CRAM file against
//! a pipeline's own transcript catalog.
//!
//! Alignment files produced outside the pipeline list their reference sequences
//! in whatever order the aligner chose, and may only cover part of the catalog.
//! Before any quantification, every alignment sequence id has to be translated
//! to the catalog id of the same transcript. A wrong join silently corrupts
//! everything downstream, so any unknown name or length disagreement is an error.
//!
//! ## Features
//!
//! - **Catalog loading**: reads the `n` + `name\tlength` transcript list
//! - **Reconciliation**: exact name join with length check and omission tracking
//! - **Remap persistence**: compact text file consumed by later pipeline stages
//! - **Header tags**: cached lookup of the `@PG` program id
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_remap::{reconcile, HeaderTags, Remap};
//! use ref_remap::parsing::catalog::load_catalog;
//! use ref_remap::parsing::sam::parse_header_text;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("ref.transcripts.ti")).unwrap();
//!
//! let text = "@SQ\tSN:ENST2\tLN:200\n@SQ\tSN:ENST1\tLN:100\n@PG\tID:rsem\n";
//! let header = parse_header_text(text).unwrap();
//!
//! let result = reconcile(&catalog, &header.dictionary).unwrap();
//! let remap: Remap = result.to_remap();
//! println!("alignment id 0 -> catalog id {:?}", remap.translate(0));
//!
//! let tags = HeaderTags::new(header.text);
//! println!("written by {}", tags.program_id().unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Contigs, sequence dictionaries and id types
//! - [`parsing`]: Catalog loader, alignment header reader and tag scanner
//! - [`remap`]: Reconciler and remap file store
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod remap;

// Re-export commonly used types for convenience
pub use core::contig::Contig;
pub use core::dictionary::SequenceDictionary;
pub use core::types::*;
pub use parsing::tag::HeaderTags;
pub use remap::reconcile::{reconcile, Reconciliation};
pub use remap::store::{write_remap, Remap};
