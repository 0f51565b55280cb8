use std::collections::HashMap;

/// Count every k-mer over all overlapping windows of the sequence.
///
/// Returns an empty map when k is 0 or exceeds the sequence length.
pub fn kmer_frequency(seq: &str, k: usize) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    if k == 0 {
        return freq;
    }
    let bases: Vec<char> = seq.chars().collect();
    if bases.len() < k {
        return freq;
    }

    for window in bases.windows(k) {
        let kmer: String = window.iter().collect();
        *freq.entry(kmer).or_insert(0) += 1;
    }
    freq
}

/// K-mers ordered by count descending, ties by k-mer ascending.
///
/// The tie-break is arbitrary but stable, chosen for deterministic display.
pub fn ranked_kmers(freq: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = freq
        .iter()
        .map(|(kmer, &count)| (kmer.clone(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
