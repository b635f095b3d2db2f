//! Loader for the pipeline's transcript catalog.
//!
//! Format: a count `n` on the first line, then `n` lines of `name\tlength`.
//! Anything after the declared entries is ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::contig::Contig;
use crate::core::dictionary::{DictionaryError, SequenceDictionary};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot open catalog {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Load a transcript catalog from disk
///
/// # Errors
///
/// Returns `CatalogError::Open` if the file cannot be read, or
/// `CatalogError::Malformed` if the content does not follow the catalog format.
pub fn load_catalog(path: &Path) -> Result<SequenceDictionary, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = parse_catalog_text(&content).map_err(|(line, reason)| CatalogError::Malformed {
        path: path.to_path_buf(),
        line,
        reason,
    })?;

    debug!(
        path = %path.display(),
        sequences = dict.len(),
        "Loaded transcript catalog"
    );

    Ok(dict)
}

/// Parse catalog text. Errors carry the 1-based line number and a reason.
pub(crate) fn parse_catalog_text(text: &str) -> Result<SequenceDictionary, (usize, String)> {
    let mut lines = text.lines();

    let count_field = lines
        .next()
        .and_then(|l| l.split_whitespace().next())
        .ok_or_else(|| (1, "missing sequence count".to_string()))?;
    let count: usize = count_field
        .parse()
        .map_err(|_| (1, format!("invalid sequence count '{count_field}'")))?;

    // The declared count is untrusted; grow as lines are actually read
    let mut contigs = Vec::new();

    for i in 0..count {
        // Entries start on line 2
        let line_num = i + 2;
        let line = lines.next().ok_or_else(|| {
            (
                line_num,
                format!("expected {count} sequences but found only {i}"),
            )
        })?;

        let (name, rest) = line
            .split_once('\t')
            .ok_or_else(|| (line_num, "missing tab between name and length".to_string()))?;

        let length_field = rest
            .split_whitespace()
            .next()
            .ok_or_else(|| (line_num, format!("missing length for sequence '{name}'")))?;
        let length: u64 = length_field.parse().map_err(|_| {
            (
                line_num,
                format!("invalid length for sequence '{name}': '{length_field}'"),
            )
        })?;

        contigs.push(Contig::new(name, length));
    }

    SequenceDictionary::new(contigs).map_err(|e| match e {
        DictionaryError::DuplicateName { second, .. } => (second + 2, e.to_string()),
    })
}
