use std::collections::HashMap;

/// Standard genetic code, keyed by DNA codons.
///
/// RNA codons are handled by normalizing U to T before lookup, so a single
/// canonical table serves both alphabets.
pub struct CodonTable {
    table: HashMap<String, char>,
    stop_codons: Vec<String>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        let mut table = HashMap::new();
        let codons = [
            ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
            ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
            ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
            ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
            ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
            ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
            ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
            ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
            ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
            ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
            ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
            ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
            ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
            ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
            ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
            ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
        ];

        for (codon, aa) in &codons {
            table.insert(codon.to_string(), *aa);
        }

        CodonTable {
            table,
            stop_codons: vec!["TAA".to_string(), "TAG".to_string(), "TGA".to_string()],
        }
    }

    /// Translate a single codon to an amino acid.
    ///
    /// Accepts DNA or RNA spelling; anything outside the canonical alphabet
    /// (ambiguity codes, short codons) yields 'X'.
    pub fn translate_codon(&self, codon: &str) -> char {
        self.table
            .get(&codon.to_uppercase().replace('U', "T"))
            .copied()
            .unwrap_or('X')
    }

    pub fn is_start_codon(&self, codon: &str) -> bool {
        codon.to_uppercase().replace('U', "T") == "ATG"
    }

    pub fn is_stop_codon(&self, codon: &str) -> bool {
        self.stop_codons
            .contains(&codon.to_uppercase().replace('U', "T"))
    }
}
