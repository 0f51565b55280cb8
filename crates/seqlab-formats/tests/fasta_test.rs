use std::io::Write;

use pretty_assertions::assert_eq;

use seqlab_formats::fasta::{self, FastaParser};

const SAMPLE: &str = ">s1 first\r\nATCGatcg\nNNGGCC\r\n\r\n>s2\nTT AA\n>empty\n>s3\nGAATTC";

fn parse_chunked(text: &str, chunk_len: usize) -> seqlab_core::SequenceCollection {
    let mut parser = FastaParser::new();
    let chars: Vec<char> = text.chars().collect();
    for chunk in chars.chunks(chunk_len) {
        let chunk: String = chunk.iter().collect();
        parser.feed(&chunk);
    }
    parser.finish()
}

#[test]
fn chunk_invariance_for_every_chunk_size() {
    let whole = fasta::parse(SAMPLE);
    for chunk_len in 1..=SAMPLE.len() {
        assert_eq!(whole, parse_chunked(SAMPLE, chunk_len), "chunk_len={}", chunk_len);
    }
}

#[test]
fn chunk_invariance_at_every_split_point() {
    let whole = fasta::parse(SAMPLE);
    for split in 0..=SAMPLE.len() {
        if !SAMPLE.is_char_boundary(split) {
            continue;
        }
        let mut parser = FastaParser::new();
        parser.feed(&SAMPLE[..split]);
        parser.feed(&SAMPLE[split..]);
        assert_eq!(whole, parser.finish(), "split={}", split);
    }
}

#[test]
fn sample_parses_as_expected() {
    let collection = fasta::parse(SAMPLE);
    assert_eq!(collection.len(), 4);
    assert_eq!(collection.get(0).unwrap().header, "s1 first");
    assert_eq!(collection.get(0).unwrap().sequence, "ATCGatcgNNGGCC");
    // interior whitespace on a line is not stripped, only the ends are
    assert_eq!(collection.get(1).unwrap().sequence, "TT AA");
    // a header with no sequence lines still stores a record
    assert_eq!(collection.get(2).unwrap().header, "empty");
    assert_eq!(collection.get(2).unwrap().sequence, "");
    assert_eq!(collection.get(3).unwrap().header, "s3");
}

#[test]
fn load_path_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "junk before header\n>s1\nATG\nAAA\n").unwrap();

    let parsed = fasta::load_path(file.path()).unwrap();
    assert_eq!(parsed.discarded_lines, 1);
    assert_eq!(parsed.collection.len(), 1);
    assert_eq!(parsed.collection.get(0).unwrap().sequence, "ATGAAA");
}

#[test]
fn load_path_missing_file_is_io_error() {
    assert!(fasta::load_path("/nonexistent/path.fasta").is_err());
}
