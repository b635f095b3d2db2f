//! Persistence of the alignment-to-catalog id translation.
//!
//! ```text
//! <0|1>
//! <alignment size> <t0> <t1> ...      (only when line 1 is 1)
//! <omitted count>                     (only when line 1 is 1)
//! <id> <id> ...                       (only when line 1 is 1; 1-based, may be empty)
//! ```
//!
//! Omission ids are written 1-based while every other id in the file is 0-based.
//! Downstream stages rely on this, so it must not change.
//!
//! The omission line is written as ids joined by single spaces (`2 5`). Older
//! writers emitted a space before every id (` 2 5`). Readers that split on
//! whitespace see the same values; byte-for-byte comparisons against files from
//! those writers will differ on that line.
//!
//! The record is written to a temporary file next to the target and renamed into
//! place, so a failed write leaves any existing remap file untouched.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::core::types::{AlignmentId, CatalogId};
use crate::remap::reconcile::Reconciliation;

#[derive(Error, Debug)]
pub enum RemapError {
    #[error("Cannot open remap file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write remap file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed remap file {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Translation from alignment ids to catalog ids, loaded once and then only read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "table", rename_all = "snake_case")]
pub enum Remap {
    /// Alignment ids already are catalog ids
    Identity,
    /// Catalog id for each alignment id
    Table(Vec<CatalogId>),
}

impl Remap {
    /// Read a remap file written by [`write_remap`]. Omission lines are not read.
    ///
    /// # Errors
    ///
    /// Returns `RemapError::Open` if the file cannot be read, or
    /// `RemapError::Malformed` if the flag or the translation line is invalid.
    pub fn load(path: &Path) -> Result<Self, RemapError> {
        let content = std::fs::read_to_string(path).map_err(|source| RemapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let remap = Self::parse(&content).map_err(|(line, reason)| RemapError::Malformed {
            path: path.to_path_buf(),
            line,
            reason,
        })?;

        debug!(
            path = %path.display(),
            identity = remap.is_identity(),
            sequences = remap.len(),
            "Loaded remap file"
        );

        Ok(remap)
    }

    fn parse(text: &str) -> Result<Self, (usize, String)> {
        let mut lines = text.lines();

        let flag = lines.next().map(str::trim).unwrap_or_default();
        match flag {
            "0" => return Ok(Self::Identity),
            "1" => {}
            "" => return Err((1, "missing remap flag".to_string())),
            other => return Err((1, format!("remap flag must be 0 or 1, found '{other}'"))),
        }

        let line = lines
            .next()
            .ok_or_else(|| (2, "missing translation table".to_string()))?;
        let mut fields = line.split_whitespace();

        let count_field = fields
            .next()
            .ok_or_else(|| (2, "missing translation table size".to_string()))?;
        let count: usize = count_field
            .parse()
            .map_err(|_| (2, format!("invalid translation table size '{count_field}'")))?;

        let table = fields
            .map(|f| {
                f.parse::<CatalogId>()
                    .map_err(|_| (2, format!("invalid catalog id '{f}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if table.len() != count {
            return Err((
                2,
                format!(
                    "translation table declares {count} entries but has {}",
                    table.len()
                ),
            ));
        }

        Ok(Self::Table(table))
    }

    /// Catalog id for an alignment id. `None` if the id is outside the table.
    #[must_use]
    pub fn translate(&self, alignment_id: AlignmentId) -> Option<CatalogId> {
        match self {
            Self::Identity => Some(alignment_id),
            Self::Table(table) => table.get(alignment_id).copied(),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Number of entries in the table; zero for the identity
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Identity => 0,
            Self::Table(table) => table.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write a reconciliation to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `RemapError::Open` if the file cannot be created in the target
/// directory, or `RemapError::Write` if writing or renaming it fails.
pub fn write_remap(path: &Path, reconciliation: &Reconciliation) -> Result<(), RemapError> {
    let to_error = |source| RemapError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = NamedTempFile::new_in(dir).map_err(|source| RemapError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    write_record(&mut out, reconciliation).map_err(to_error)?;
    let file = out.into_inner().map_err(|e| to_error(e.into_error()))?;
    file.persist(path).map_err(|e| to_error(e.error))?;

    debug!(
        path = %path.display(),
        remap = reconciliation.needs_remap(),
        omitted = reconciliation.omitted_count(),
        "Wrote remap file"
    );

    Ok(())
}

fn write_record<W: Write>(out: &mut W, reconciliation: &Reconciliation) -> std::io::Result<()> {
    writeln!(out, "{}", u8::from(reconciliation.needs_remap()))?;
    if !reconciliation.needs_remap() {
        return Ok(());
    }

    write!(out, "{}", reconciliation.alignment_len())?;
    for catalog_id in reconciliation.translation() {
        write!(out, " {catalog_id}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", reconciliation.omitted_count())?;
    let omissions: Vec<String> = reconciliation
        .omissions()
        .iter()
        .map(|id| (id + 1).to_string())
        .collect();
    writeln!(out, "{}", omissions.join(" "))
}
