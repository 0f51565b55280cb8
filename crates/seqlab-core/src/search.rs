use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ops::reverse_complement;
use crate::EngineError;

/// A motif match; position is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifMatch {
    pub position: usize,
    pub matched: String,
}

/// Find every non-overlapping match of a user-supplied regex,
/// case-insensitively, scanning left to right.
///
/// A pattern that fails to compile is reported as an error, never a panic.
pub fn find_motif(seq: &str, pattern: &str) -> Result<Vec<MotifMatch>, EngineError> {
    let re = Regex::new(&format!("(?i){}", pattern))?;

    // find_iter advances past zero-length matches on its own
    let matches = re
        .find_iter(seq)
        .map(|m| MotifMatch {
            position: m.start() + 1,
            matched: m.as_str().to_string(),
        })
        .collect();
    Ok(matches)
}

/// Count motif matches with the same semantics as [`find_motif`].
pub fn count_motif(seq: &str, pattern: &str) -> Result<usize, EngineError> {
    let re = Regex::new(&format!("(?i){}", pattern))?;
    Ok(re.find_iter(seq).count())
}

/// Recognition sites for common restriction enzymes.
pub const RESTRICTION_ENZYMES: &[(&str, &str)] = &[
    ("EcoRI", "GAATTC"),
    ("HindIII", "AAGCTT"),
    ("BamHI", "GGATCC"),
    ("NotI", "GCGGCCGC"),
    ("EcoRV", "GATATC"),
    ("PstI", "CTGCAG"),
    ("XhoI", "CTCGAG"),
    ("SmaI", "CCCGGG"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionHits {
    pub enzyme: String,
    pub site: String,
    pub positions: Vec<usize>,
}

/// Literal search for each enzyme's site on the uppercased sequence,
/// resuming one past each match so adjacent occurrences are found.
/// Enzymes with no hits are omitted. Positions are 1-based.
pub fn find_restriction_sites(seq: &str) -> Vec<RestrictionHits> {
    let upper = seq.to_uppercase();
    let mut results = Vec::new();

    for (enzyme, site) in RESTRICTION_ENZYMES {
        let mut positions = Vec::new();
        let mut pos = 0;
        while let Some(idx) = upper[pos..].find(site) {
            let abs_pos = pos + idx;
            positions.push(abs_pos + 1);
            pos = abs_pos + 1;
        }
        if !positions.is_empty() {
            results.push(RestrictionHits {
                enzyme: enzyme.to_string(),
                site: site.to_string(),
                positions,
            });
        }
    }

    results
}

/// A reverse-complement palindrome; 1-based inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palindrome {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Find every substring of length >= 4 that equals its own reverse
/// complement, on the uppercased sequence.
///
/// Brute force over all start/end pairs, ordered by start then end.
/// Worst case is cubic in the sequence length; intended for the small
/// interactive inputs this toolkit targets.
pub fn find_palindromes(seq: &str) -> Vec<Palindrome> {
    let bases: Vec<char> = seq.to_uppercase().chars().collect();
    let n = bases.len();
    let mut results = Vec::new();

    for start in 0..n {
        for end in start + 3..n {
            let sub: String = bases[start..=end].iter().collect();
            if sub == reverse_complement(&sub) {
                results.push(Palindrome {
                    start: start + 1,
                    end: end + 1,
                    text: sub,
                });
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_motif_positions_one_based() {
        let matches = find_motif("ATGATG", "ATG").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].position, 1);
        assert_eq!(matches[1].position, 4);
    }

    #[test]
    fn test_find_motif_case_insensitive() {
        let matches = find_motif("atgATG", "ATG").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched, "atg");
    }

    #[test]
    fn test_find_motif_regex_syntax() {
        let matches = find_motif("ATGAAAGGG", "ATG[ACGT]{3}").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, "ATGAAA");
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(matches!(
            find_motif("ATG", "["),
            Err(EngineError::InvalidPattern(_))
        ));
        assert!(count_motif("ATG", "(").is_err());
    }

    #[test]
    fn test_count_motif() {
        assert_eq!(count_motif("ATGATGATG", "ATG").unwrap(), 3);
        assert_eq!(count_motif("ATG", "TTT").unwrap(), 0);
    }

    #[test]
    fn test_ecori_at_position_one() {
        let hits = find_restriction_sites("GAATTC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].enzyme, "EcoRI");
        assert_eq!(hits[0].positions, vec![1]);
    }

    #[test]
    fn test_restriction_sites_lowercase_and_repeat() {
        let hits = find_restriction_sites("gaattcgaattc");
        assert_eq!(hits[0].positions, vec![1, 7]);
    }

    #[test]
    fn test_restriction_sites_none() {
        assert!(find_restriction_sites("AAAAAA").is_empty());
    }

    #[test]
    fn test_palindrome_gaattc() {
        let pals = find_palindromes("GAATTC");
        // GAATTC itself plus its central AATT
        assert!(pals.contains(&Palindrome {
            start: 1,
            end: 6,
            text: "GAATTC".to_string()
        }));
        assert!(pals.contains(&Palindrome {
            start: 2,
            end: 5,
            text: "AATT".to_string()
        }));
    }

    #[test]
    fn test_palindrome_ordering_and_min_length() {
        let pals = find_palindromes("AATTAATT");
        for w in pals.windows(2) {
            assert!(w[0].start < w[1].start || (w[0].start == w[1].start && w[0].end < w[1].end));
        }
        for p in &pals {
            assert!(p.end - p.start + 1 >= 4);
        }
    }

    #[test]
    fn test_no_palindromes_in_short_input() {
        assert!(find_palindromes("ATG").is_empty());
        assert!(find_palindromes("").is_empty());
    }
}
