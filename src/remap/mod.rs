//! Reconciliation of an alignment header against the transcript catalog.
//!
//! [`reconcile`](reconcile::reconcile) joins the two dictionaries by name,
//! rejecting unknown sequences and length disagreements.
//! [`write_remap`](store::write_remap) persists the result and
//! [`Remap::load`](store::Remap::load) reads it back in a later stage.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_remap::parsing::catalog::load_catalog;
//! use ref_remap::parsing::sam::read_alignment_header;
//! use ref_remap::remap::{reconcile::reconcile, store::{write_remap, Remap}};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("ref.transcripts.ti")).unwrap();
//! let header = read_alignment_header(Path::new("sample.bam")).unwrap();
//!
//! let result = reconcile(&catalog, &header.dictionary).unwrap();
//! write_remap(Path::new("sample.remap"), &result).unwrap();
//!
//! // Later, in another process
//! let remap = Remap::load(Path::new("sample.remap")).unwrap();
//! assert_eq!(remap.translate(0), result.translation().first().copied());
//! ```

pub mod reconcile;
pub mod store;
