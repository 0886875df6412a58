//! Markdown output formatter

use super::{word_list, OutputFormatter};
use anyhow::Result;
use shannon_core::{DocumentReport, Statistics};
use std::io::Write;

/// Markdown formatter - one section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }

    fn write_statistics(&mut self, statistics: &Statistics) -> Result<()> {
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Characters | {} |", statistics.total_characters)?;
        writeln!(self.writer, "| Words | {} |", statistics.total_words)?;
        writeln!(self.writer, "| Sentences | {} |", statistics.total_sentences)?;
        writeln!(
            self.writer,
            "| Average word length | {:.2} |",
            statistics.avg_word_length
        )?;
        writeln!(
            self.writer,
            "| Average sentence length | {:.2} |",
            statistics.avg_sentence_length
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Most common words:** {}", word_list(statistics))?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &DocumentReport) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.write_statistics(&report.statistics)?;
        writeln!(self.writer, "**Summary:** {}", report.summary)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.cleaned_text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_statistics(&mut self, source: &str, statistics: &Statistics) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.write_statistics(statistics)
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_report, SharedBuffer};

    #[test]
    fn test_markdown_report() {
        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(buffer.clone());
        formatter.format_report("book.txt", &sample_report()).unwrap();
        formatter.finish().unwrap();

        let out = buffer.contents();
        assert!(out.starts_with("## book.txt\n"));
        assert!(out.contains("| Words | 5 |"));
        assert!(out.contains("**Summary:** hello world hello again bye"));
        assert!(out.ends_with("*Total documents: 1*\n"));
    }
}
