use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single FASTA record: free-text header plus raw sequence data.
///
/// The header is never empty for a stored record; the sequence may be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub header: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Ordered collection of records, insertion order preserved.
///
/// Loads append rather than replace; the collection is owned by the caller
/// and mutated only through the operations below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCollection {
    records: Vec<SequenceRecord>,
}

impl SequenceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SequenceRecord) {
        self.records.push(record);
    }

    /// Append another collection's records, preserving their order.
    pub fn append(&mut self, mut other: SequenceCollection) {
        self.records.append(&mut other.records);
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SequenceRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Drop records whose (header, sequence) pair was already seen,
    /// keeping first occurrences.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.records
            .retain(|r| seen.insert((r.header.clone(), r.sequence.clone())));
    }

    /// Strip non-alphabetic characters from every sequence.
    pub fn cleanup(&mut self) {
        for record in &mut self.records {
            record.sequence.retain(|c| c.is_ascii_alphabetic());
        }
    }

    /// Remove leading and trailing runs of N/n from every sequence.
    pub fn trim(&mut self) {
        for record in &mut self.records {
            record.sequence = record
                .sequence
                .trim_matches(|c| c == 'N' || c == 'n')
                .to_string();
        }
    }

    /// Replace every header with `prefix_1`, `prefix_2`, ... in order.
    pub fn rename(&mut self, prefix: &str) {
        for (i, record) in self.records.iter_mut().enumerate() {
            record.header = format!("{}_{}", prefix, i + 1);
        }
    }

    pub fn sort_by_header(&mut self) {
        self.records.sort_by(|a, b| a.header.cmp(&b.header));
    }

    pub fn sort_by_length(&mut self) {
        self.records.sort_by_key(|r| r.sequence.len());
    }
}

impl From<Vec<SequenceRecord>> for SequenceCollection {
    fn from(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a SequenceCollection {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
