//! seqlab - FASTA sequence analysis toolkit
//!
//! Reads FASTA from a file or stdin and runs one analysis per invocation:
//!
//! ```bash
//! seqlab gc sequences.fasta
//! cat sequences.fasta | seqlab orfs
//! seqlab motif 'ATG[ACGT]{3}' sequences.fasta --json
//! ```
//!
//! Maintenance commands (dedup, cleanup, trim, rename, sort) write the
//! transformed collection back out as FASTA.

mod report;

use std::io::{self, BufReader};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use seqlab_core::codon::CodonTable;
use seqlab_core::{kmer, ops, orf, search, SequenceCollection};
use seqlab_formats::fasta;

#[derive(Parser, Debug)]
#[command(name = "seqlab", version, about = "FASTA sequence analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// FASTA input file, or "-" for stdin
    #[arg(short, long, global = true, default_value = "-")]
    input: String,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the loaded records
    Show,
    /// GC content per record
    Gc,
    /// Reverse complement per record
    Revcomp,
    /// Transcribe DNA to RNA per record
    Transcribe,
    /// Translate every record to protein (all codons, stops included)
    Translate,
    /// Codon usage over the whole collection
    CodonUsage,
    /// Open reading frames in the three forward frames
    Orfs,
    /// Motif positions matching a regular expression
    Motif {
        /// Regular expression, applied case-insensitively
        pattern: String,
    },
    /// Count motif occurrences per record
    MotifCount {
        /// Regular expression, applied case-insensitively
        pattern: String,
    },
    /// Reverse-complement palindromes of length 4 or more
    Palindromes,
    /// Restriction enzyme recognition sites
    RestrictionSites,
    /// K-mer frequencies per record
    Kmer {
        /// Window length
        #[arg(short)]
        k: usize,
    },
    /// Pairwise similarity over all record pairs
    Similarity,
    /// Length, composition and type per record
    Stats,
    /// Wallace-rule melting temperature for short sequences
    Tm,
    /// Remove duplicate (header, sequence) records
    Dedup,
    /// Strip non-alphabetic characters from sequences
    Cleanup,
    /// Trim leading/trailing N runs from sequences
    Trim,
    /// Renumber headers as prefix_1, prefix_2, ...
    Rename {
        #[arg(long, default_value = "seq")]
        prefix: String,
    },
    /// Sort records by header (or by length)
    Sort {
        #[arg(long)]
        by_length: bool,
    },
}

fn load_input(input: &str) -> Result<SequenceCollection> {
    let parsed = if input == "-" {
        let stdin = io::stdin();
        fasta::load_reader(BufReader::new(stdin.lock()))
            .context("failed to read FASTA from stdin")?
    } else {
        fasta::load_path(input).with_context(|| format!("failed to read {}", input))?
    };

    if parsed.discarded_lines > 0 {
        eprintln!(
            "Warning: ignored {} line(s) of sequence data with no header",
            parsed.discarded_lines
        );
    }
    Ok(parsed.collection)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut collection = load_input(&cli.input)?;

    match cli.command {
        Command::Show => {
            if cli.json {
                print_json(&collection)?;
            } else {
                println!("{}", report::show(&collection));
            }
        }
        Command::Gc => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "gc_percent": ops::gc_percent(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::gc(&collection));
            }
        }
        Command::Revcomp => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "reverse_complement": ops::reverse_complement(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::revcomp(&collection));
            }
        }
        Command::Transcribe => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "rna": ops::transcribe(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::transcribe(&collection));
            }
        }
        Command::Translate => {
            if cli.json {
                let table = CodonTable::standard();
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "protein": ops::translate(&r.sequence, &table),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::translate(&collection));
            }
        }
        Command::CodonUsage => {
            if cli.json {
                print_json(&ops::codon_usage(&collection).ranked())?;
            } else {
                println!("{}", report::codon_usage(&collection));
            }
        }
        Command::Orfs => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "orfs": orf::find_orfs(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::orfs(&collection));
            }
        }
        Command::Motif { pattern } => {
            let matches = collection
                .iter()
                .map(|r| search::find_motif(&r.sequence, &pattern))
                .collect::<Result<Vec<_>, _>>()
                .context("invalid motif pattern")?;
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .zip(&matches)
                    .map(|(r, m)| {
                        serde_json::json!({
                            "header": r.header,
                            "matches": m,
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::motif(&collection, &matches));
            }
        }
        Command::MotifCount { pattern } => {
            let counts = collection
                .iter()
                .map(|r| search::count_motif(&r.sequence, &pattern))
                .collect::<Result<Vec<_>, _>>()
                .context("invalid motif pattern")?;
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .zip(&counts)
                    .map(|(r, c)| {
                        serde_json::json!({
                            "header": r.header,
                            "count": c,
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::motif_count(&collection, &pattern, &counts));
            }
        }
        Command::Palindromes => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "palindromes": search::find_palindromes(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::palindromes(&collection));
            }
        }
        Command::RestrictionSites => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "sites": search::find_restriction_sites(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::restriction_sites(&collection));
            }
        }
        Command::Kmer { k } => {
            if k == 0 {
                bail!("k must be at least 1");
            }
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        let freq = kmer::kmer_frequency(&r.sequence, k);
                        serde_json::json!({
                            "header": r.header,
                            "kmers": kmer::ranked_kmers(&freq),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::kmers(&collection, k));
            }
        }
        Command::Similarity => {
            let pairs = ops::similarity_matrix(&collection)
                .context("cannot compute pairwise similarity")?;
            if cli.json {
                print_json(&pairs)?;
            } else {
                println!("{}", report::similarity(&pairs));
            }
        }
        Command::Stats => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "stats": ops::stats(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::stats(&collection));
            }
        }
        Command::Tm => {
            if cli.json {
                let rows: Vec<_> = collection
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "header": r.header,
                            "tm": ops::melting_temp(&r.sequence),
                        })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                println!("{}", report::melting_temp(&collection));
            }
        }
        Command::Dedup => {
            collection.dedup();
            emit_collection(&collection, cli.json)?;
        }
        Command::Cleanup => {
            collection.cleanup();
            emit_collection(&collection, cli.json)?;
        }
        Command::Trim => {
            collection.trim();
            emit_collection(&collection, cli.json)?;
        }
        Command::Rename { prefix } => {
            collection.rename(&prefix);
            emit_collection(&collection, cli.json)?;
        }
        Command::Sort { by_length } => {
            if by_length {
                collection.sort_by_length();
            } else {
                collection.sort_by_header();
            }
            emit_collection(&collection, cli.json)?;
        }
    }

    Ok(())
}

fn emit_collection(collection: &SequenceCollection, json: bool) -> Result<()> {
    if json {
        print_json(collection)?;
    } else {
        print!("{}", fasta::serialize(collection));
    }
    Ok(())
}
