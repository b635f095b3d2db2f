//! Extraction of tagged fields from SAM header text.
//!
//! A record starts at the first occurrence of a fixed marker (e.g. `@PG\t`) and
//! runs to the next newline or the end of the text. Fields inside it are
//! separated by tabs; the first field starting with the requested tag wins.

use std::cell::OnceCell;

use thiserror::Error;

use crate::core::types::{PROGRAM_ID_TAG, PROGRAM_MARKER};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("No {tag} field found in {marker:?} record of the header")]
    NotFound { marker: String, tag: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningForMarker,
    ScanningFields { field_start: usize, pos: usize },
    Found { start: usize, end: usize },
}

/// Find the value of `tag` in the first record opened by `marker`
///
/// Returns `None` if the marker never occurs or no field of that record
/// carries the tag.
#[must_use]
pub fn scan_record<'a>(text: &'a str, marker: &str, tag: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let mut state = ScanState::ScanningForMarker;

    loop {
        state = match state {
            ScanState::ScanningForMarker => {
                let pos = text.find(marker)? + marker.len();
                ScanState::ScanningFields {
                    field_start: pos,
                    pos,
                }
            }
            ScanState::ScanningFields { field_start, pos } => {
                let at_end = pos >= bytes.len() || bytes[pos] == b'\n';
                if !at_end && bytes[pos] != b'\t' {
                    ScanState::ScanningFields {
                        field_start,
                        pos: pos + 1,
                    }
                } else if text[field_start..pos].starts_with(tag) {
                    ScanState::Found {
                        start: field_start + tag.len(),
                        end: pos,
                    }
                } else if at_end {
                    return None;
                } else {
                    ScanState::ScanningFields {
                        field_start: pos + 1,
                        pos: pos + 1,
                    }
                }
            }
            ScanState::Found { start, end } => return Some(&text[start..end]),
        };
    }
}

/// Header text with a lazily extracted, cached program id.
///
/// Construct once per process and pass it to whatever needs the id; the scan
/// runs at most once.
#[derive(Debug)]
pub struct HeaderTags {
    text: String,
    program_id: OnceCell<String>,
}

impl HeaderTags {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            program_id: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `ID` of the first `@PG` record
    ///
    /// # Errors
    ///
    /// Returns `TagError::NotFound` if the header has no `@PG` record or that
    /// record has no `ID` field.
    pub fn program_id(&self) -> Result<&str, TagError> {
        if let Some(id) = self.program_id.get() {
            return Ok(id.as_str());
        }

        let id = scan_record(&self.text, PROGRAM_MARKER, PROGRAM_ID_TAG).ok_or_else(|| {
            TagError::NotFound {
                marker: PROGRAM_MARKER.to_string(),
                tag: PROGRAM_ID_TAG.to_string(),
            }
        })?;

        Ok(self.program_id.get_or_init(|| id.to_string()).as_str())
    }
}
