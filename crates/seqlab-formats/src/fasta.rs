use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use seqlab_core::{SequenceCollection, SequenceRecord};

use crate::LoadError;

/// Resumable FASTA parser.
///
/// Input may arrive in arbitrary chunks; a chunk boundary can fall anywhere,
/// including mid-line or between the `\r` and `\n` of a CRLF ending. Feeding
/// any chunking of a text yields the same collection as parsing it whole.
///
/// The parser is deliberately lenient: sequence data before the first `>`
/// (or under an empty header) is dropped, not rejected. Dropped lines are
/// counted so callers can surface a warning.
#[derive(Debug, Default)]
pub struct FastaParser {
    collection: SequenceCollection,
    current_header: Option<String>,
    current_seq: String,
    pending: String,
    discarded_lines: usize,
}

impl FastaParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of input text.
    pub fn feed(&mut self, chunk: &str) {
        self.pending.push_str(chunk);
        while let Some(pos) = self.pending.find('\n') {
            let line: String = self.pending[..pos].to_string();
            self.pending.drain(..=pos);
            self.process_line(&line);
        }
    }

    /// Lines of sequence data dropped because no header was open.
    pub fn discarded_lines(&self) -> usize {
        self.discarded_lines
    }

    /// Consume the parser, finalizing any open record.
    pub fn finish(mut self) -> SequenceCollection {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.process_line(&line);
        }
        self.finalize_record();
        self.collection
    }

    fn process_line(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix('>') {
            self.finalize_record();
            let header = rest.trim();
            // an empty header opens nothing; its block is discarded
            self.current_header = if header.is_empty() {
                None
            } else {
                Some(header.to_string())
            };
            self.current_seq.clear();
        } else {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return;
            }
            if self.current_header.is_some() {
                self.current_seq.push_str(trimmed);
            } else {
                self.discarded_lines += 1;
            }
        }
    }

    fn finalize_record(&mut self) {
        if let Some(header) = self.current_header.take() {
            self.collection
                .push(SequenceRecord::new(header, std::mem::take(&mut self.current_seq)));
        }
    }
}

/// Parse a complete FASTA text into a collection.
pub fn parse(text: &str) -> SequenceCollection {
    let mut parser = FastaParser::new();
    parser.feed(text);
    parser.finish()
}

/// A parsed collection plus the lenient parser's warning count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedFasta {
    pub collection: SequenceCollection,
    pub discarded_lines: usize,
}

/// Read FASTA from any buffered reader, feeding the chunked parser line
/// by line.
pub fn load_reader<R: BufRead>(mut reader: R) -> Result<ParsedFasta, LoadError> {
    let mut parser = FastaParser::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        parser.feed(&line);
    }
    let discarded_lines = parser.discarded_lines();
    Ok(ParsedFasta {
        collection: parser.finish(),
        discarded_lines,
    })
}

/// Read FASTA from a file path.
pub fn load_path(path: impl AsRef<Path>) -> Result<ParsedFasta, LoadError> {
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

/// Serialize a collection back to FASTA text, wrapping sequences at 80
/// characters.
pub fn serialize(collection: &SequenceCollection) -> String {
    let mut out = String::new();

    for record in collection {
        out.push('>');
        out.push_str(&record.header);
        out.push('\n');

        for chunk in record.sequence.as_bytes().chunks(80) {
            out.push_str(&String::from_utf8_lossy(chunk));
            out.push('\n');
        }
    }

    out
}
