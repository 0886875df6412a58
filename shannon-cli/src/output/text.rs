//! Plain text output formatter

use super::{word_list, OutputFormatter};
use anyhow::Result;
use shannon_core::{DocumentReport, Statistics};
use std::io::Write;

/// Plain text formatter - one block per document
pub struct TextFormatter<W: Write> {
    writer: W,
    blocks: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, blocks: 0 }
    }

    fn separator(&mut self) -> Result<()> {
        if self.blocks > 0 {
            writeln!(self.writer)?;
        }
        self.blocks += 1;
        Ok(())
    }

    fn write_statistics(&mut self, statistics: &Statistics) -> Result<()> {
        writeln!(self.writer, "Characters: {}", statistics.total_characters)?;
        writeln!(self.writer, "Words: {}", statistics.total_words)?;
        writeln!(self.writer, "Sentences: {}", statistics.total_sentences)?;
        writeln!(self.writer, "Average word length: {:.2}", statistics.avg_word_length)?;
        writeln!(
            self.writer,
            "Average sentence length: {:.2}",
            statistics.avg_sentence_length
        )?;
        writeln!(self.writer, "Most common words: {}", word_list(statistics))?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &DocumentReport) -> Result<()> {
        self.separator()?;
        writeln!(self.writer, "== {source}")?;
        self.write_statistics(&report.statistics)?;
        writeln!(self.writer, "Summary: {}", report.summary)?;
        writeln!(self.writer, "Cleaned text: {}", report.cleaned_text)?;
        Ok(())
    }

    fn format_statistics(&mut self, source: &str, statistics: &Statistics) -> Result<()> {
        self.separator()?;
        writeln!(self.writer, "== {source}")?;
        self.write_statistics(statistics)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
