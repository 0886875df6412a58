//! Sentence, word and character tokenization
//!
//! All functions are pure: the same input always yields the same tokens.

/// Sentence-terminal punctuation
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Split on runs of `.`, `!` or `?`, trimming each fragment and dropping empty ones.
pub fn sentences(text: &str) -> Vec<String> {
    text.split(is_terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Remove sentence-terminal punctuation, then split on whitespace runs.
pub fn words(text: &str) -> Vec<String> {
    let stripped: String = text.chars().filter(|c| !is_terminator(*c)).collect();
    stripped.split_whitespace().map(str::to_owned).collect()
}

/// Split `text` into code points.
///
/// With `include_space`, whitespace runs are first collapsed to a single
/// space and every code point is emitted. Without it, space characters are
/// dropped and nothing else is touched.
pub fn characters(text: &str, include_space: bool) -> Vec<char> {
    if include_space {
        let mut chars = Vec::with_capacity(text.len());
        let mut in_space = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_space {
                    chars.push(' ');
                }
                in_space = true;
            } else {
                chars.push(c);
                in_space = false;
            }
        }
        chars
    } else {
        text.chars().filter(|c| *c != ' ').collect()
    }
}

/// Characters as single-character string tokens, ready for n-gram counting
pub fn character_tokens(text: &str, include_space: bool) -> Vec<String> {
    characters(text, include_space)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Word count of each sentence, in order
pub fn sentence_lengths<S: AsRef<str>>(sentences: &[S]) -> Vec<usize> {
    sentences.iter().map(|s| words(s.as_ref()).len()).collect()
}
