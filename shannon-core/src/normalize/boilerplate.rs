//! Header/footer boilerplate detection
//!
//! Plain-text e-books wrap the actual work in licence front matter and back
//! matter. The body is delimited with weak textual signals: a line containing
//! a start marker opens it, a line containing an end marker closes it.
//!
//! The scan is a small state machine over the line sequence:
//!
//! ```text
//! SeekingStart --start marker--> InBody --end marker--> Done
//!      |                                                 ^
//!      +------------------end marker---------------------+
//! ```
//!
//! Missing markers are not an error: without a start marker the body begins at
//! the first line, without an end marker it runs to the end of the text.

use serde::{Deserialize, Serialize};

/// Marker substrings used to locate the body of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoilerplateMarkers {
    /// A line containing any of these opens the body (on the following line)
    pub start: Vec<String>,
    /// A line containing any of these closes the body (the line itself is excluded)
    pub end: Vec<String>,
}

impl Default for BoilerplateMarkers {
    fn default() -> Self {
        Self::gutenberg()
    }
}

impl BoilerplateMarkers {
    /// Project Gutenberg start/end markers
    pub fn gutenberg() -> Self {
        Self {
            start: vec![
                "*** START OF THIS PROJECT GUTENBERG".to_string(),
                "*** START OF THE PROJECT GUTENBERG".to_string(),
            ],
            end: vec![
                "*** END OF THIS PROJECT GUTENBERG".to_string(),
                "*** END OF THE PROJECT GUTENBERG".to_string(),
            ],
        }
    }

    /// Markers that never match, so the whole text is body
    pub fn none() -> Self {
        Self {
            start: Vec::new(),
            end: Vec::new(),
        }
    }

    fn is_start(&self, line: &str) -> bool {
        self.start.iter().any(|m| line.contains(m.as_str()))
    }

    fn is_end(&self, line: &str) -> bool {
        self.end.iter().any(|m| line.contains(m.as_str()))
    }
}

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No start marker seen yet
    SeekingStart,
    /// Inside the body, looking for an end marker
    InBody,
    /// End marker found, scan finished
    Done,
}

/// Line range `[start, end)` of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyBounds {
    /// First body line
    pub start: usize,
    /// One past the last body line
    pub end: usize,
}

impl BodyBounds {
    /// Number of lines inside the bounds
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the body holds no lines
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locate the body within `lines`.
///
/// The first start-marker line wins; later start markers are body content.
/// A start-marker check takes precedence over an end-marker check on the same
/// line.
pub fn find_body_bounds<S: AsRef<str>>(lines: &[S], markers: &BoilerplateMarkers) -> BodyBounds {
    let mut state = ScanState::SeekingStart;
    let mut bounds = BodyBounds {
        start: 0,
        end: lines.len(),
    };

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        state = match state {
            ScanState::SeekingStart if markers.is_start(line) => {
                bounds.start = i + 1;
                ScanState::InBody
            }
            ScanState::SeekingStart | ScanState::InBody if markers.is_end(line) => {
                bounds.end = i;
                ScanState::Done
            }
            other => other,
        };

        if state == ScanState::Done {
            break;
        }
    }

    log::trace!(
        "boilerplate scan finished in {:?}: body lines {}..{}",
        state,
        bounds.start,
        bounds.end
    );
    bounds
}

/// Return the body of `raw` with the marker lines and everything outside them removed.
///
/// Lines are split on `\n` only, so `\r` of CRLF input stays attached to its
/// line and is handled by the later whitespace cleanup.
pub fn extract_body<'a>(raw: &'a str, markers: &BoilerplateMarkers) -> Vec<&'a str> {
    let lines: Vec<&str> = raw.split('\n').collect();
    let bounds = find_body_bounds(&lines, markers);
    lines[bounds.start..bounds.end].to_vec()
}
