//! Turns engine outputs into display-ready text, one `>header` block per
//! record, in the style of the original analysis panes.

use seqlab_core::codon::CodonTable;
use seqlab_core::ops::{self, PairSimilarity};
use seqlab_core::orf::Orf;
use seqlab_core::search::{MotifMatch, Palindrome, RestrictionHits};
use seqlab_core::{kmer, orf, search, SequenceCollection};

const NO_SEQUENCES: &str = "No sequences loaded.";

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build one `>header` block per record from a per-record body.
fn per_record(collection: &SequenceCollection, body: impl Fn(&str) -> String) -> String {
    if collection.is_empty() {
        return NO_SEQUENCES.to_string();
    }
    let mut out = String::new();
    for record in collection {
        out.push_str(&format!(">{}\n", record.header));
        out.push_str(&body(&record.sequence));
        out.push('\n');
    }
    out.trim_end().to_string()
}

pub fn show(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| format!("{}\n", seq))
}

pub fn gc(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| {
        format!("GC%: {:.2}%\n", ops::gc_percent(seq))
    })
}

pub fn revcomp(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| {
        format!("{}\n", ops::reverse_complement(seq))
    })
}

pub fn transcribe(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| format!("{}\n", ops::transcribe(seq)))
}

pub fn translate(collection: &SequenceCollection) -> String {
    let table = CodonTable::standard();
    per_record(collection, |seq| {
        format!("{}\n", ops::translate(seq, &table))
    })
}

pub fn codon_usage(collection: &SequenceCollection) -> String {
    if collection.is_empty() {
        return NO_SEQUENCES.to_string();
    }
    let usage = ops::codon_usage(collection);
    if usage.total() == 0 {
        return "No complete codons found.".to_string();
    }
    let mut out = format!("Total codons: {}\n", usage.total());
    for entry in usage.ranked() {
        out.push_str(&format!(
            "  {}: {} ({:.2}%)\n",
            entry.codon, entry.count, entry.percent
        ));
    }
    out.trim_end().to_string()
}

fn orf_block(orfs: &[Orf]) -> String {
    if orfs.is_empty() {
        return "  No ORFs found.\n".to_string();
    }
    let mut out = String::new();
    for orf in orfs {
        // frames displayed 1-based, like the positions
        out.push_str(&format!(
            "  Frame {}, Start:{}, Stop:{}, Length:{} nt\n",
            orf.frame + 1,
            orf.start,
            orf.stop,
            orf.length_nt
        ));
        out.push_str(&format!("    Protein: {}\n", orf.protein));
    }
    out
}

pub fn orfs(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| orf_block(&orf::find_orfs(seq)))
}

pub fn motif(collection: &SequenceCollection, matches: &[Vec<MotifMatch>]) -> String {
    if collection.is_empty() {
        return NO_SEQUENCES.to_string();
    }
    let mut out = String::new();
    for (record, matches) in collection.iter().zip(matches) {
        out.push_str(&format!(">{}\n", record.header));
        if matches.is_empty() {
            out.push_str("  No match found.\n");
        }
        for (i, m) in matches.iter().enumerate() {
            out.push_str(&format!(
                "  Match #{} at position {}: {}\n",
                i + 1,
                m.position,
                m.matched
            ));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

pub fn motif_count(collection: &SequenceCollection, pattern: &str, counts: &[usize]) -> String {
    if collection.is_empty() {
        return NO_SEQUENCES.to_string();
    }
    let mut out = String::new();
    for (record, count) in collection.iter().zip(counts) {
        out.push_str(&format!(">{}\n", record.header));
        out.push_str(&format!(
            "  Total occurrences of \"{}\": {}\n",
            pattern, count
        ));
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn palindrome_block(palindromes: &[Palindrome]) -> String {
    if palindromes.is_empty() {
        return "  No palindromes found.\n".to_string();
    }
    let mut out = String::new();
    for p in palindromes {
        out.push_str(&format!("  [{}-{}]: {}\n", p.start, p.end, p.text));
    }
    out
}

pub fn palindromes(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| {
        palindrome_block(&search::find_palindromes(seq))
    })
}

fn restriction_block(hits: &[RestrictionHits]) -> String {
    if hits.is_empty() {
        return "  No sites found.\n".to_string();
    }
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!(
            "  {} ({}): {}\n",
            hit.enzyme,
            hit.site,
            join_positions(&hit.positions)
        ));
    }
    out
}

pub fn restriction_sites(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| {
        restriction_block(&search::find_restriction_sites(seq))
    })
}

pub fn kmers(collection: &SequenceCollection, k: usize) -> String {
    per_record(collection, |seq| {
        let freq = kmer::kmer_frequency(seq, k);
        let mut out = String::new();
        for (kmer, count) in kmer::ranked_kmers(&freq) {
            out.push_str(&format!("  {}: {}\n", kmer, count));
        }
        out
    })
}

pub fn similarity(pairs: &[PairSimilarity]) -> String {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(&format!(
            "{} vs {}: {:.4}\n",
            pair.header_a, pair.header_b, pair.score
        ));
    }
    out.trim_end().to_string()
}

pub fn stats(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| {
        let s = ops::stats(seq);
        let mut out = format!("  Length: {}\n", s.length);
        for (c, count) in &s.composition {
            out.push_str(&format!("  {}: {}\n", c, count));
        }
        out.push_str(&format!("  Type: {}\n", s.kind));
        out
    })
}

pub fn melting_temp(collection: &SequenceCollection) -> String {
    per_record(collection, |seq| match ops::melting_temp(seq) {
        Some(tm) => format!("  Tm (short DNA): ~{}\u{b0}C\n", tm),
        None => "  Length > 14 nt, Wallace rule not applied.\n".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqlab_core::SequenceRecord;

    fn sample() -> SequenceCollection {
        vec![SequenceRecord::new("s1", "ATGAAATAG")].into()
    }

    #[test]
    fn test_gc_block_format() {
        assert_eq!(gc(&sample()), ">s1\nGC%: 22.22%");
    }

    #[test]
    fn test_empty_collection_message() {
        let empty = SequenceCollection::new();
        assert_eq!(gc(&empty), "No sequences loaded.");
        assert_eq!(orfs(&empty), "No sequences loaded.");
    }

    #[test]
    fn test_orf_block() {
        let out = orfs(&sample());
        assert!(out.contains("Frame 1, Start:1, Stop:9, Length:9 nt"));
        assert!(out.contains("Protein: MK*"));
    }

    #[test]
    fn test_palindrome_block() {
        let collection: SequenceCollection = vec![SequenceRecord::new("a", "GAATTC")].into();
        let out = palindromes(&collection);
        assert!(out.contains("[1-6]: GAATTC"));
    }

    #[test]
    fn test_restriction_block() {
        let collection: SequenceCollection = vec![SequenceRecord::new("a", "GAATTC")].into();
        let out = restriction_sites(&collection);
        assert!(out.contains("EcoRI (GAATTC): 1"));
    }

    #[test]
    fn test_translate_block() {
        assert_eq!(translate(&sample()), ">s1\nMK*");
    }

    #[test]
    fn test_motif_no_match_message() {
        let out = motif(&sample(), &[Vec::new()]);
        assert!(out.contains("No match found."));
    }

    #[test]
    fn test_tm_long_sequence_message() {
        let collection: SequenceCollection =
            vec![SequenceRecord::new("a", "ATGATGATGATGATG")].into();
        let out = melting_temp(&collection);
        assert!(out.contains("Wallace rule not applied"));
    }
}
