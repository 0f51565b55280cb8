use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::codon::CodonTable;
use crate::record::SequenceCollection;
use crate::EngineError;

/// Count occurrences of each character, case-normalized to uppercase.
pub fn composition(seq: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in seq.chars() {
        *counts.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
    }
    counts
}

/// GC content as a percentage (0.0 to 100.0); 0.0 for an empty sequence.
pub fn gc_percent(seq: &str) -> f64 {
    let len = seq.chars().count();
    if len == 0 {
        return 0.0;
    }
    let gc = seq
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
        .count();
    gc as f64 * 100.0 / len as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Dna,
    Protein,
}

impl std::fmt::Display for SequenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceType::Dna => write!(f, "DNA"),
            SequenceType::Protein => write!(f, "Protein"),
        }
    }
}

/// Classify a sequence as DNA or protein.
///
/// DNA iff at least 90% of the characters are in {A,T,G,C,N}. An empty
/// sequence classifies as Protein (the 0/0 ratio does not reach the
/// threshold), matching the original heuristic's boundary behavior.
pub fn sequence_type(seq: &str) -> SequenceType {
    let mut total = 0usize;
    let mut dna = 0usize;
    for c in seq.chars() {
        total += 1;
        if matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C' | 'N') {
            dna += 1;
        }
    }
    if total > 0 && dna as f64 / total as f64 >= 0.9 {
        SequenceType::Dna
    } else {
        SequenceType::Protein
    }
}

/// Complement a single base, preserving case. N maps to itself and anything
/// outside the DNA alphabet passes through unchanged.
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        other => other,
    }
}

/// Reverse complement of a DNA sequence. An involution over the defined
/// alphabet: applying it twice returns the input.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Transcribe DNA to RNA: uppercase, then T becomes U.
pub fn transcribe(seq: &str) -> String {
    seq.to_uppercase().replace('T', "U")
}

/// Translate a nucleotide sequence (DNA or RNA) to amino acids.
///
/// Consumes non-overlapping triplets from offset 0, dropping a trailing
/// partial codon. Stop codons map to '*' and do not terminate the output.
pub fn translate(seq: &str, table: &CodonTable) -> String {
    let bases: Vec<char> = seq.to_uppercase().chars().collect();
    let mut protein = String::with_capacity(bases.len() / 3);

    for chunk in bases.chunks(3) {
        if chunk.len() == 3 {
            let codon: String = chunk.iter().collect();
            protein.push(table.translate_codon(&codon));
        }
    }

    protein
}

/// Global codon counts over a whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodonUsage {
    counts: HashMap<String, usize>,
    total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodonCount {
    pub codon: String,
    pub count: usize,
    pub percent: f64,
}

impl CodonUsage {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, codon: &str) -> usize {
        self.counts.get(codon).copied().unwrap_or(0)
    }

    pub fn percent(&self, codon: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(codon) as f64 * 100.0 / self.total as f64
    }

    /// Codons ordered by count descending, then codon ascending.
    pub fn ranked(&self) -> Vec<CodonCount> {
        let mut entries: Vec<CodonCount> = self
            .counts
            .iter()
            .map(|(codon, &count)| CodonCount {
                codon: codon.clone(),
                count,
                percent: self.percent(codon),
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.codon.cmp(&b.codon)));
        entries
    }
}

/// Tally every record's codons (non-overlapping triplets, trailing partial
/// codon dropped) and express each as a percentage of the grand total.
pub fn codon_usage(collection: &SequenceCollection) -> CodonUsage {
    let mut usage = CodonUsage::default();
    for record in collection {
        let bases: Vec<char> = record.sequence.to_uppercase().chars().collect();
        for chunk in bases.chunks(3) {
            if chunk.len() == 3 {
                let codon: String = chunk.iter().collect();
                *usage.counts.entry(codon).or_insert(0) += 1;
                usage.total += 1;
            }
        }
    }
    usage
}

/// Position-wise identity over the shorter sequence's length, in [0, 1].
///
/// Positions beyond the shorter length are not counted, which understates
/// divergence for length-mismatched pairs; this is not alignment-aware.
pub fn similarity(a: &str, b: &str) -> f64 {
    let min_len = a.chars().count().min(b.chars().count());
    if min_len == 0 {
        return 0.0;
    }
    let matches = a
        .chars()
        .zip(b.chars())
        .filter(|(x, y)| x.eq_ignore_ascii_case(y))
        .count();
    matches as f64 / min_len as f64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSimilarity {
    pub header_a: String,
    pub header_b: String,
    pub score: f64,
}

/// All-pairs similarity over a collection.
pub fn similarity_matrix(
    collection: &SequenceCollection,
) -> Result<Vec<PairSimilarity>, EngineError> {
    if collection.len() < 2 {
        return Err(EngineError::InsufficientInput(
            "at least two sequences are required for pairwise comparison".to_string(),
        ));
    }

    let records = collection.records();
    let mut pairs = Vec::new();
    for i in 0..records.len() {
        for j in i + 1..records.len() {
            pairs.push(PairSimilarity {
                header_a: records[i].header.clone(),
                header_b: records[j].header.clone(),
                score: similarity(&records[i].sequence, &records[j].sequence),
            });
        }
    }
    Ok(pairs)
}

/// Wallace-rule melting temperature for short oligos (2*AT + 4*GC).
/// Only defined for sequences of 14 nt or fewer; returns None otherwise.
pub fn melting_temp(seq: &str) -> Option<f64> {
    let upper = seq.to_uppercase();
    let len = upper.chars().count();
    if len > 14 {
        return None;
    }
    let at = upper.chars().filter(|c| matches!(c, 'A' | 'T')).count();
    let gc = upper.chars().filter(|c| matches!(c, 'G' | 'C')).count();
    Some(2.0 * at as f64 + 4.0 * gc as f64)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceStats {
    pub length: usize,
    pub composition: BTreeMap<char, usize>,
    pub kind: SequenceType,
}

/// Length, composition and classified type for one sequence.
pub fn stats(seq: &str) -> SequenceStats {
    SequenceStats {
        length: seq.chars().count(),
        composition: composition(seq),
        kind: sequence_type(seq),
    }
}
