//! Core data types shared by the catalog loader, reconciler and remap store.
//!
//! - [`Contig`]: a single sequence with name and length
//! - [`SequenceDictionary`]: an ordered list of contigs where position is the id
//! - [`AlignmentId`], [`CatalogId`]: the two id spaces joined by reconciliation
//!
//! [`Contig`]: contig::Contig
//! [`SequenceDictionary`]: dictionary::SequenceDictionary
//! [`AlignmentId`]: types::AlignmentId
//! [`CatalogId`]: types::CatalogId
//!
//! Names are compared **exactly**; there is no alias or case folding between an
//! alignment header and the catalog.

pub mod contig;
pub mod dictionary;
pub mod types;
