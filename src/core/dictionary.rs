use std::collections::HashMap;

use thiserror::Error;

use crate::core::contig::Contig;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Sequence {name} appears more than once (positions {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}

/// An ordered, immutable list of sequences where position is the sequence id.
///
/// The name index is built once at construction; there is no way to mutate the
/// dictionary afterwards, so the index can never drift from the contigs.
#[derive(Debug, Clone, Default)]
pub struct SequenceDictionary {
    contigs: Vec<Contig>,
    name_to_id: HashMap<String, usize>,
}

impl SequenceDictionary {
    /// Build a dictionary, rejecting repeated names
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::DuplicateName` if two contigs share a name.
    pub fn new(contigs: Vec<Contig>) -> Result<Self, DictionaryError> {
        let mut name_to_id = HashMap::with_capacity(contigs.len());

        for (id, contig) in contigs.iter().enumerate() {
            if let Some(first) = name_to_id.insert(contig.name.clone(), id) {
                return Err(DictionaryError::DuplicateName {
                    name: contig.name.clone(),
                    first,
                    second: id,
                });
            }
        }

        Ok(Self {
            contigs,
            name_to_id,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Contig> {
        self.contigs.get(id)
    }

    /// Look up the id of a sequence by exact name
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.name_to_id.get(name).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contig> {
        self.contigs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contigs.iter().map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn contigs(&self) -> &[Contig] {
        &self.contigs
    }
}

impl<'a> IntoIterator for &'a SequenceDictionary {
    type Item = &'a Contig;
    type IntoIter = std::slice::Iter<'a, Contig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
