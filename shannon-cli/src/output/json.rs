//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use shannon_core::{DocumentReport, Statistics};
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<Entry>,
}

/// One element of the JSON array
#[derive(Debug, Serialize)]
struct Entry {
    source: String,
    #[serde(flatten)]
    body: EntryBody,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum EntryBody {
    Report(DocumentReport),
    Statistics { statistics: Statistics },
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &DocumentReport) -> Result<()> {
        self.entries.push(Entry {
            source: source.to_string(),
            body: EntryBody::Report(report.clone()),
        });
        Ok(())
    }

    fn format_statistics(&mut self, source: &str, statistics: &Statistics) -> Result<()> {
        self.entries.push(Entry {
            source: source.to_string(),
            body: EntryBody::Statistics {
                statistics: statistics.clone(),
            },
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_report, SharedBuffer};

    #[test]
    fn test_json_report_layout() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter.format_report("book.txt", &sample_report()).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let entry = &value[0];
        assert_eq!(entry["source"], "book.txt");
        assert_eq!(entry["summary"], "hello world hello again bye");
        assert_eq!(entry["statistics"]["total_words"], 5);
        assert_eq!(entry["statistics"]["most_common_words"][0][0], "hello");
        assert_eq!(entry["statistics"]["most_common_words"][0][1], 2);
    }

    #[test]
    fn test_json_statistics_layout() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        formatter
            .format_statistics("inline", &sample_report().statistics)
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(value[0]["source"], "inline");
        assert_eq!(value[0]["statistics"]["total_sentences"], 3);
        assert!(value[0].get("summary").is_none());
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents(), "[]\n");
    }
}
