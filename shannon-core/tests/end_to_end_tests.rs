//! End-to-end scenarios over the full text pipeline

use shannon_core::{
    analyze_text, count_ngrams, normalize, process_document, stats, summarize, tokenize,
    NGram, PipelineConfig, TextError,
};

const BOOK: &str = "The Project Gutenberg eBook of A Tiny Tale\r
\r
This eBook is for the use of anyone anywhere.\r
\r
*** START OF THE PROJECT GUTENBERG EBOOK A TINY TALE ***\r
\r
\r
\r
CHAPTER I.\r
\r
\u{201C}Where is the cat?\u{201D} asked Alice. The cat was\u{2014}as usual\u{2014}asleep!\r
It didn\u{2019}t care.   Nobody cared.\r
\r
*** END OF THE PROJECT GUTENBERG EBOOK A TINY TALE ***\r
\r
Updated editions will replace the previous one.\r
";

#[test]
fn test_hello_world_scenario() {
    let text = normalize::normalize("Hello world. Hello again!", true);
    assert_eq!(
        tokenize::words(&text),
        vec!["hello", "world", "hello", "again"]
    );

    let statistics = stats::compute(&text).unwrap();
    assert_eq!(statistics.total_words, 4);
    assert_eq!(statistics.total_sentences, 2);
    assert_eq!(statistics.most_common_words[0], ("hello".to_string(), 2));
}

#[test]
fn test_blank_text_fails_statistics() {
    assert!(matches!(stats::compute("   "), Err(TextError::InvalidInput(_))));
    assert!(matches!(analyze_text("   "), Err(TextError::InvalidInput(_))));
}

#[test]
fn test_book_body_extraction() {
    let cleaned = normalize::clean(BOOK);
    assert!(cleaned.starts_with("CHAPTER I."));
    assert!(cleaned.ends_with("Nobody cared."));
    assert!(!cleaned.contains("Project Gutenberg eBook"));
    assert!(!cleaned.contains("Updated editions"));
}

#[test]
fn test_book_report() {
    let report = process_document(BOOK, &PipelineConfig::default()).unwrap();
    assert_eq!(
        report.cleaned_text,
        "chapter i. where is the cat? asked alice. the cat was-as usual-asleep! it didn't care. nobody cared."
    );
    assert_eq!(report.summary, "chapter i where is the cat asked alice");
    assert_eq!(report.statistics.total_sentences, 6);
    assert_eq!(report.statistics.most_common_words[0], ("the".to_string(), 2));
    assert_eq!(report.statistics.most_common_words[1], ("cat".to_string(), 2));
}

#[test]
fn test_text_without_markers_is_not_dropped() {
    let raw = "First line here.\nSecond line there!";
    let direct = normalize::normalize(raw, true);
    let via_clean = normalize::normalize(&normalize::clean(raw), true);
    assert_eq!(direct, via_clean);
    assert_eq!(via_clean, "first line here. second line there!");
}

#[test]
fn test_word_count_agrees_with_statistics() {
    let text = "One fish, two fish. Red fish; blue fish!";
    let normalized = normalize::normalize(text, true);
    let statistics = stats::compute(&normalized).unwrap();
    assert_eq!(tokenize::words(&normalized).len(), statistics.total_words);
}

#[test]
fn test_summary_lengths() {
    let text = "a. b. c. d.";
    for k in 0..6 {
        let summary = summarize(text, k);
        let expected = k.min(4);
        assert_eq!(tokenize::words(&summary).len(), expected);
    }
}

#[test]
fn test_bigram_scenario() {
    let table = count_ngrams(&["a", "b", "a", "b"], 2).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&NGram::from(["a", "b"])), Some(2));
    assert_eq!(table.get(&NGram::from(["b", "a"])), Some(1));
}

#[test]
fn test_character_trigrams_from_sample() {
    let text = normalize::normalize("This is a test. This is only a test!", true);
    let chars = tokenize::character_tokens(&text, true);
    let table = count_ngrams(&chars, 3).unwrap();
    assert_eq!(table.get_tokens(&["t", "h", "i"]), Some(2));
    assert_eq!(table.total() as usize, chars.len() - 2);
}
