use serde::{Deserialize, Serialize};

use crate::codon::CodonTable;
use crate::ops::translate;

/// An open reading frame: ATG start through an in-frame stop codon.
///
/// Positions are 1-based; `stop` is the last base of the stop codon and the
/// span includes it, so `length_nt` is always a multiple of 3. The protein
/// carries the trailing '*'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orf {
    pub frame: u8,
    pub start: usize,
    pub stop: usize,
    pub length_nt: usize,
    pub protein: String,
}

const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Find ORFs in the three forward reading frames.
///
/// Results are ordered frame 0, then 1, then 2; left to right within a
/// frame. After an ORF is emitted the scan resumes past its stop codon, so
/// ORFs in the same frame never overlap. A start codon with no in-frame
/// stop is skipped and the scan continues with the next codon.
pub fn find_orfs(seq: &str) -> Vec<Orf> {
    let table = CodonTable::standard();
    let upper = seq.to_uppercase();
    let bases: Vec<char> = upper.chars().collect();
    let mut orfs = Vec::new();

    for frame in 0u8..3 {
        let mut i = frame as usize;
        while i + 3 <= bases.len() {
            let codon: String = bases[i..i + 3].iter().collect();
            if codon != "ATG" {
                i += 3;
                continue;
            }

            let mut j = i + 3;
            let mut stop_at = None;
            while j + 3 <= bases.len() {
                let candidate: String = bases[j..j + 3].iter().collect();
                if STOP_CODONS.contains(&candidate.as_str()) {
                    stop_at = Some(j);
                    break;
                }
                j += 3;
            }

            match stop_at {
                Some(j) => {
                    let span: String = bases[i..j + 3].iter().collect();
                    orfs.push(Orf {
                        frame,
                        start: i + 1,
                        stop: j + 3,
                        length_nt: j + 3 - i,
                        protein: translate(&span, &table),
                    });
                    i = j + 3;
                }
                None => {
                    // unterminated start: skip it, keep scanning the frame
                    i += 3;
                }
            }
        }
    }

    orfs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_orf() {
        let orfs = find_orfs("ATGAAATAG");
        assert_eq!(orfs.len(), 1);
        let orf = &orfs[0];
        assert_eq!(orf.frame, 0);
        assert_eq!(orf.start, 1);
        assert_eq!(orf.stop, 9);
        assert_eq!(orf.length_nt, 9);
        assert_eq!(orf.protein, "MK*");
    }

    #[test]
    fn test_orf_in_offset_frame() {
        // frame 1: G | ATG AAA TGA
        let orfs = find_orfs("GATGAAATGA");
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].frame, 1);
        assert_eq!(orfs[0].start, 2);
        assert_eq!(orfs[0].stop, 10);
    }

    #[test]
    fn test_scan_resumes_after_stop() {
        // two ORFs back to back in frame 0
        let orfs = find_orfs("ATGAAATAGATGTGCTAA");
        let frame0: Vec<_> = orfs.iter().filter(|o| o.frame == 0).collect();
        assert_eq!(frame0.len(), 2);
        assert_eq!(frame0[0].protein, "MK*");
        assert_eq!(frame0[1].start, 10);
        assert_eq!(frame0[1].protein, "MC*");
    }

    #[test]
    fn test_unterminated_start_yields_nothing() {
        assert!(find_orfs("ATGAAA").is_empty());
        assert!(find_orfs("").is_empty());
    }

    #[test]
    fn test_frame_ordering() {
        // frame 0: ATG GCT TAA; frame 2: starts at index 2, AT|G GCT TAA...
        let orfs = find_orfs("ATGGCTTAAATGTAA");
        assert!(!orfs.is_empty());
        let frames: Vec<u8> = orfs.iter().map(|o| o.frame).collect();
        let mut sorted = frames.clone();
        sorted.sort_unstable();
        assert_eq!(frames, sorted);
    }

    #[test]
    fn test_orf_span_properties() {
        let seq = "CCATGAAATAGGGATGTTTTGAAT";
        for orf in find_orfs(seq) {
            assert_eq!(orf.length_nt % 3, 0);
            let chars: Vec<char> = seq.to_uppercase().chars().collect();
            let span: String = chars[orf.start - 1..orf.stop].iter().collect();
            assert!(span.starts_with("ATG"));
            let tail = &span[span.len() - 3..];
            assert!(["TAA", "TAG", "TGA"].contains(&tail));
        }
    }

    #[test]
    fn test_protein_includes_trailing_stop() {
        let orfs = find_orfs("ATGTAA");
        assert_eq!(orfs[0].protein, "M*");
    }
}
