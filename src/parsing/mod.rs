//! Readers for the two sequence dictionaries and the header text.
//!
//! - **Transcript catalog**: the pipeline's own `n` + `name\tlength` list
//! - **SAM/BAM/CRAM files**: `@SQ` lines from alignment file headers
//! - **Header tags**: tagged fields such as the `@PG` program id
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_remap::parsing::catalog::load_catalog;
//! use ref_remap::parsing::sam::read_alignment_header;
//! use ref_remap::parsing::tag::HeaderTags;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("ref.transcripts.ti")).unwrap();
//! let header = read_alignment_header(Path::new("sample.bam")).unwrap();
//! let tags = HeaderTags::new(header.text.clone());
//! println!("{} sequences, written by {}", header.dictionary.len(), tags.program_id().unwrap());
//! # let _ = catalog;
//! ```

pub mod catalog;
pub mod sam;
pub mod tag;
