//! Text cleaning and canonicalization
//!
//! Two stages:
//! - [`Normalizer::clean`] strips source boilerplate and tidies blank lines
//!   and space runs while keeping the text readable.
//! - [`Normalizer::normalize`] lowercases, canonicalizes quotes and dashes,
//!   replaces punctuation with spaces and collapses all whitespace.

pub mod boilerplate;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub use boilerplate::{extract_body, find_body_bounds, BodyBounds, BoilerplateMarkers, ScanState};

static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
static SPACE_RUNS: OnceLock<Regex> = OnceLock::new();

fn blank_lines() -> &'static Regex {
    BLANK_LINES.get_or_init(|| Regex::new(r"\n{3,}").expect("blank-line pattern is valid"))
}

fn space_runs() -> &'static Regex {
    SPACE_RUNS.get_or_init(|| Regex::new(r" {2,}").expect("space-run pattern is valid"))
}

/// Normalization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Keep `.`, `!`, `?`, `'` and `-` so sentences can still be split
    pub preserve_sentences: bool,
    /// Markers delimiting the body of a document
    pub markers: BoilerplateMarkers,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            preserve_sentences: true,
            markers: BoilerplateMarkers::default(),
        }
    }
}

/// Stateless text normalizer
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a normalizer with the given settings
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Remove boilerplate, collapse 3+ newlines to 2 and 2+ spaces to 1, trim.
    pub fn clean(&self, raw: &str) -> String {
        let body = extract_body(raw, &self.config.markers).join("\n");
        let body = blank_lines().replace_all(&body, "\n\n");
        let body = space_runs().replace_all(&body, " ");
        let cleaned = body.trim().to_string();
        log::debug!(
            "cleaned {} chars of raw text down to {} chars",
            raw.len(),
            cleaned.len()
        );
        cleaned
    }

    /// Canonicalize `text` using the configured `preserve_sentences` flag
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, self.config.preserve_sentences)
    }

    /// [`clean`](Self::clean) followed by [`normalize`](Self::normalize)
    pub fn clean_and_normalize(&self, raw: &str) -> String {
        self.normalize(&self.clean(raw))
    }
}

/// Remove Gutenberg boilerplate with the default markers
pub fn clean(raw: &str) -> String {
    Normalizer::default().clean(raw)
}

/// Lowercase and canonicalize `text`.
///
/// With `preserve_sentences`, alphanumerics, whitespace and `.!?'-` survive;
/// without it only alphanumerics and whitespace do. Everything else becomes a
/// space, then whitespace runs collapse to one space and the ends are trimmed.
pub fn normalize(text: &str, preserve_sentences: bool) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(canonical_char)
        .map(|c| {
            if keep_char(c, preserve_sentences) {
                c
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map typographic quotes and dashes to their ASCII forms
fn canonical_char(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{02BC}' => '\'',
        '\u{2014}' | '\u{2013}' => '-',
        other => other,
    }
}

fn keep_char(c: char, preserve_sentences: bool) -> bool {
    if c.is_alphanumeric() || c.is_whitespace() {
        return true;
    }
    preserve_sentences && matches!(c, '.' | '!' | '?' | '\'' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(
            normalize("Hello, World!  How ARE you?", true),
            "hello world! how are you?"
        );
    }

    #[test]
    fn test_normalize_quotes_and_dashes() {
        let text = "\u{201C}It\u{2019}s here\u{201D} \u{2014} she said\u{2013}twice.";
        assert_eq!(normalize(text, true), "it's here - she said-twice.");
    }

    #[test]
    fn test_normalize_without_sentences() {
        assert_eq!(
            normalize("Don't stop. Well-known!", false),
            "don t stop well known"
        );
    }

    #[test]
    fn test_normalize_underscore_is_punctuation() {
        assert_eq!(normalize("_emphasis_ here", true), "emphasis here");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("", true), "");
        assert_eq!(normalize("   \n\t ", false), "");
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        assert_eq!(normalize("Café NAÏVE", true), "café naïve");
    }

    #[test]
    fn test_clean_strips_markers_and_whitespace() {
        let raw = "Title page\n*** START OF THE PROJECT GUTENBERG EBOOK ***\n\n\n\n\nChapter  1\n\n\n\nIt   was dark.\n*** END OF THE PROJECT GUTENBERG EBOOK ***\nLicence text";
        assert_eq!(clean(raw), "Chapter 1\n\nIt was dark.");
    }

    #[test]
    fn test_clean_without_markers_keeps_content() {
        let raw = "  Just some   text.\nAnother line.  ";
        assert_eq!(clean(raw), "Just some text.\nAnother line.");
    }

    #[test]
    fn test_clean_and_normalize() {
        let normalizer = Normalizer::default();
        let raw = "*** START OF THIS PROJECT GUTENBERG ***\nHello World.\n*** END OF THIS PROJECT GUTENBERG ***";
        assert_eq!(normalizer.clean_and_normalize(raw), "hello world.");
    }

    #[test]
    fn test_custom_markers() {
        let config = NormalizeConfig {
            preserve_sentences: false,
            markers: BoilerplateMarkers {
                start: vec!["BEGIN".to_string()],
                end: vec!["FINISH".to_string()],
            },
        };
        let normalizer = Normalizer::new(config);
        assert_eq!(
            normalizer.clean_and_normalize("x\nBEGIN\nKeep me.\nFINISH\ny"),
            "keep me"
        );
    }
}
