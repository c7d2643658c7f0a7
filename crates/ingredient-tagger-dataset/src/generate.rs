//! Training data generation: labelled CSV in, tagged token blocks out.

use std::fmt;
use std::io::{self, Write};

use ingredient_tagger_core::{Tag, TaggedPhrase, Translator};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::labelled_data::{Reader, Writer};

/// Output format of the generated training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// CRF++ blocks: one tab-separated line per token, blank line per record.
    #[default]
    Crf,
    /// One JSON object per record with `tokens` and `ner_tags` arrays.
    Jsonl,
}

#[derive(Serialize)]
struct BioSample<'a> {
    tokens: Vec<&'a str>,
    ner_tags: Vec<String>,
}

/// Counters collected while generating training data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub records: usize,
    pub tokens: usize,
    /// Tokens that received a field tag rather than `OTHER`.
    pub tagged_tokens: usize,
    /// Emitted tags, indexed by `Tag::index`.
    pub tag_counts: [usize; Tag::NUM_TAGS],
}

impl GenerateStats {
    /// Fraction of tokens carrying a field tag.
    pub fn coverage(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.tagged_tokens as f64 / self.tokens as f64
        }
    }

    /// How many tokens were given `tag`.
    pub fn count(&self, tag: Tag) -> usize {
        self.tag_counts[tag.index()]
    }

    /// Per-tag totals in vocabulary order, skipping tags never emitted.
    pub fn tag_breakdown(&self) -> impl Iterator<Item = (Tag, usize)> {
        self.tag_counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .filter_map(|(idx, &n)| Tag::from_index(idx).map(|tag| (tag, n)))
    }
}

impl fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} tokens, {:.2}% tagged",
            self.records,
            self.tokens,
            self.coverage() * 100.0
        )
    }
}

/// Write one tagged phrase in the given format.
pub fn write_phrase<W: Write>(out: &mut W, phrase: &TaggedPhrase, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Crf => write!(out, "{phrase}")?,
        OutputFormat::Jsonl => {
            let sample = BioSample {
                tokens: phrase.texts(),
                ner_tags: phrase.tags().iter().map(|t| t.to_string()).collect(),
            };
            serde_json::to_writer(&mut *out, &sample)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Translate every record of `reader` and write the result to `out`, in
/// input order.
///
/// Stops at the first reader error (bad header or malformed number).
pub fn generate<R, W>(
    reader: Reader<R>,
    translator: &Translator,
    format: OutputFormat,
    mut out: W,
) -> Result<GenerateStats>
where
    R: io::Read,
    W: Write,
{
    let mut stats = GenerateStats::default();

    for record in reader {
        let record = record?;
        let phrase = translator.translate(&record);
        debug!(input = %record.input, tokens = phrase.len(), "translated record");

        write_phrase(&mut out, &phrase, format)?;

        stats.records += 1;
        stats.tokens += phrase.len();
        stats.tagged_tokens += phrase.tagged_count();
        for tag in phrase.tags() {
            stats.tag_counts[tag.index()] += 1;
        }
    }

    for (tag, count) in stats.tag_breakdown() {
        debug!(%tag, count, "tag total");
    }

    out.flush()?;
    info!(%stats, "training data generated");
    Ok(stats)
}

/// Re-emit a labelled data file in canonical form (fixed columns, no
/// index, numbers with a decimal point). Returns the number of rows.
pub fn normalize<R, W>(reader: Reader<R>, writer: &mut Writer<W>) -> Result<usize>
where
    R: io::Read,
    W: Write,
{
    let mut rows = 0;
    for record in reader {
        writer.write_row(&record?)?;
        rows += 1;
    }
    writer.flush()?;
    info!(rows, "labelled data normalized");
    Ok(rows)
}
