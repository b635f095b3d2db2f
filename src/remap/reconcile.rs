use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::dictionary::SequenceDictionary;
use crate::core::types::CatalogId;
use crate::remap::store::Remap;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Sequence {name} is not included in the transcript catalog")]
    UnknownSequence { name: String },

    #[error(
        "Sequence {name}'s length ({alignment_length}) in the alignment file is not consistent \
         with the transcript catalog ({catalog_length})"
    )]
    LengthMismatch {
        name: String,
        alignment_length: u64,
        catalog_length: u64,
    },
}

/// Result of joining an alignment header's dictionary against the catalog
///
/// Serializes with omissions as 1-based ids, matching the remap file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Catalog id for every alignment id, in alignment order
    translation: Vec<CatalogId>,

    /// Catalog ids never referenced by the alignment header, ascending
    #[serde(rename = "omitted", serialize_with = "serialize_one_based")]
    omissions: Vec<CatalogId>,

    #[serde(rename = "catalog_sequences")]
    catalog_len: usize,

    #[serde(rename = "remap")]
    needs_remap: bool,
}

fn serialize_one_based<S: Serializer>(ids: &[CatalogId], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(ids.iter().map(|id| id + 1))
}

impl Reconciliation {
    /// Catalog id for each alignment dictionary position
    #[must_use]
    pub fn translation(&self) -> &[CatalogId] {
        &self.translation
    }

    /// Unreferenced catalog ids (0-based)
    #[must_use]
    pub fn omissions(&self) -> &[CatalogId] {
        &self.omissions
    }

    #[must_use]
    pub fn omitted_count(&self) -> usize {
        self.omissions.len()
    }

    #[must_use]
    pub fn alignment_len(&self) -> usize {
        self.translation.len()
    }

    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    /// True unless the translation is the identity over equally sized dictionaries
    #[must_use]
    pub fn needs_remap(&self) -> bool {
        self.needs_remap
    }

    /// In-memory remap for downstream id translation
    #[must_use]
    pub fn to_remap(&self) -> Remap {
        if self.needs_remap {
            Remap::Table(self.translation.clone())
        } else {
            Remap::Identity
        }
    }
}

/// Match every alignment sequence to the catalog by exact name and check lengths.
///
/// Entries are visited in alignment order and the first failure aborts, so the
/// reported sequence is always the earliest offender. A missing name is checked
/// before the length.
///
/// # Errors
///
/// Returns `ReconcileError::UnknownSequence` if an alignment sequence has no
/// catalog entry, or `ReconcileError::LengthMismatch` if the lengths differ.
pub fn reconcile(
    catalog: &SequenceDictionary,
    alignment: &SequenceDictionary,
) -> Result<Reconciliation, ReconcileError> {
    let mut appeared = vec![false; catalog.len()];
    let mut omitted = catalog.len();
    let mut translation = Vec::with_capacity(alignment.len());

    for contig in alignment {
        let catalog_id = catalog
            .id_of(&contig.name)
            .ok_or_else(|| ReconcileError::UnknownSequence {
                name: contig.name.clone(),
            })?;

        // id_of only hands back ids that exist
        let expected = &catalog.contigs()[catalog_id];
        if expected.length != contig.length {
            return Err(ReconcileError::LengthMismatch {
                name: contig.name.clone(),
                alignment_length: contig.length,
                catalog_length: expected.length,
            });
        }

        translation.push(catalog_id);
        if !appeared[catalog_id] {
            appeared[catalog_id] = true;
            omitted -= 1;
        }
    }

    let needs_remap = alignment.len() != catalog.len()
        || translation
            .iter()
            .enumerate()
            .any(|(alignment_id, &catalog_id)| alignment_id != catalog_id);

    let omissions: Vec<CatalogId> = appeared
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(id, _)| id)
        .collect();
    debug_assert_eq!(omissions.len(), omitted);

    Ok(Reconciliation {
        translation,
        omissions,
        catalog_len: catalog.len(),
        needs_remap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contig::Contig;

    fn dict(entries: &[(&str, u64)]) -> SequenceDictionary {
        SequenceDictionary::new(
            entries
                .iter()
                .map(|&(name, length)| Contig::new(name, length))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_reordered_dictionary() {
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200)]);
        let alignment = dict(&[("ENST2", 200), ("ENST1", 100)]);

        let result = reconcile(&catalog, &alignment).unwrap();
        assert_eq!(result.translation(), &[1, 0]);
        assert!(result.needs_remap());
        assert!(result.omissions().is_empty());
    }

    #[test]
    fn test_subset_dictionary() {
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200), ("ENST3", 300)]);
        let alignment = dict(&[("ENST1", 100), ("ENST3", 300)]);

        let result = reconcile(&catalog, &alignment).unwrap();
        assert_eq!(result.translation(), &[0, 2]);
        assert_eq!(result.omissions(), &[1]);
        assert_eq!(result.omitted_count(), 1);
        assert!(result.needs_remap());
    }

    #[test]
    fn test_identity_dictionary() {
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200)]);
        let alignment = dict(&[("ENST1", 100), ("ENST2", 200)]);

        let result = reconcile(&catalog, &alignment).unwrap();
        assert_eq!(result.translation(), &[0, 1]);
        assert!(!result.needs_remap());
        assert_eq!(result.to_remap(), Remap::Identity);
    }

    #[test]
    fn test_identity_prefix_still_needs_remap() {
        // Same order, but the catalog is larger
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200)]);
        let alignment = dict(&[("ENST1", 100)]);

        let result = reconcile(&catalog, &alignment).unwrap();
        assert_eq!(result.translation(), &[0]);
        assert!(result.needs_remap());
        assert_eq!(result.to_remap(), Remap::Table(vec![0]));
    }

    #[test]
    fn test_empty_alignment_omits_everything() {
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200)]);
        let alignment = dict(&[]);

        let result = reconcile(&catalog, &alignment).unwrap();
        assert!(result.translation().is_empty());
        assert_eq!(result.omissions(), &[0, 1]);
        assert!(result.needs_remap());
    }

    #[test]
    fn test_serialized_omissions_are_one_based() {
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200), ("ENST3", 300)]);
        let alignment = dict(&[("ENST3", 300), ("ENST1", 100)]);

        let result = reconcile(&catalog, &alignment).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["translation"], serde_json::json!([2, 0]));
        assert_eq!(json["omitted"], serde_json::json!([2]));
        assert_eq!(json["catalog_sequences"], 3);
        assert_eq!(json["remap"], true);
    }

    #[test]
    fn test_both_empty() {
        let result = reconcile(&dict(&[]), &dict(&[])).unwrap();
        assert!(!result.needs_remap());
        assert_eq!(result.catalog_len(), 0);
    }

    #[test]
    fn test_unknown_sequence() {
        let catalog = dict(&[("ENST1", 100)]);
        let alignment = dict(&[("ENST1", 100), ("ENST9", 50), ("ENST8", 60)]);

        let err = reconcile(&catalog, &alignment).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::UnknownSequence {
                name: "ENST9".to_string()
            }
        );
        assert!(err.to_string().contains("ENST9"));
    }

    #[test]
    fn test_length_mismatch() {
        let catalog = dict(&[("ENST1", 100), ("ENST2", 200)]);
        let alignment = dict(&[("ENST2", 250), ("ENST1", 100)]);

        let err = reconcile(&catalog, &alignment).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::LengthMismatch {
                name: "ENST2".to_string(),
                alignment_length: 250,
                catalog_length: 200,
            }
        );
        let message = err.to_string();
        assert!(message.contains("250"));
        assert!(message.contains("200"));
    }

    #[test]
    fn test_first_offender_in_alignment_order() {
        // Length mismatch at position 0 is reported before the unknown name at 1
        let catalog = dict(&[("ENST1", 100)]);
        let alignment = dict(&[("ENST1", 101), ("ENST9", 50)]);

        let err = reconcile(&catalog, &alignment).unwrap_err();
        assert!(matches!(err, ReconcileError::LengthMismatch { .. }));
    }

    #[test]
    fn test_omissions_complement_translation() {
        let catalog = dict(&[
            ("ENST1", 1),
            ("ENST2", 2),
            ("ENST3", 3),
            ("ENST4", 4),
            ("ENST5", 5),
        ]);
        let alignment = dict(&[("ENST5", 5), ("ENST2", 2), ("ENST4", 4)]);

        let result = reconcile(&catalog, &alignment).unwrap();
        assert_eq!(result.translation(), &[4, 1, 3]);
        assert_eq!(result.omissions(), &[0, 2]);

        let distinct: std::collections::HashSet<_> = result.translation().iter().collect();
        assert_eq!(
            result.omitted_count() + distinct.len(),
            result.catalog_len()
        );
        for id in result.omissions() {
            assert!(!result.translation().contains(id));
        }
    }
}
