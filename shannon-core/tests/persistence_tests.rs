//! Frequency-table persistence through the filesystem

use shannon_core::ngram::{self, persist};
use shannon_core::{count_ngrams, to_probabilities, CountTable, ProbabilityTable, TextError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load_counts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bigrams.json");

    let tokens = ["it", "was", "the", "best", "of", "times", "it", "was"];
    let table = count_ngrams(&tokens, 2).unwrap();
    ngram::save(&table, &path).unwrap();

    let loaded: CountTable = ngram::load(&path).unwrap();
    assert_eq!(loaded, table);
    assert_eq!(loaded.get_tokens(&["it", "was"]), Some(2));
}

#[test]
fn test_save_and_load_probabilities() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("unigrams.json");

    let counts = count_ngrams(&["a", "b", "a"], 1).unwrap();
    let probs = to_probabilities(&counts, 0.0).unwrap();
    ngram::save(&probs, &path).unwrap();

    let loaded: ProbabilityTable = ngram::load(&path).unwrap();
    assert_eq!(loaded, probs);
}

#[test]
fn test_file_layout_is_flat_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("table.json");

    let table = count_ngrams(&["x", "y", "z"], 2).unwrap();
    ngram::save(&table, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["x||y"], 1);
    assert_eq!(object["y||z"], 1);
}

#[test]
fn test_load_missing_file() {
    let result: Result<CountTable, _> = ngram::load("/nonexistent/table.json");
    assert!(matches!(result, Err(TextError::Io(_))));
}

#[test]
fn test_load_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{\"a\": 1,").unwrap();

    let err = ngram::load::<u64, _>(&path).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_save_rejects_delimiter_token() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("never.json");

    let table = count_ngrams(&["a||b", "c"], 1).unwrap();
    let err = ngram::save(&table, &path).unwrap_err();
    assert!(matches!(err, TextError::DelimiterCollision { .. }));
    assert!(!path.exists());
}

#[test]
fn test_handwritten_record() {
    let table: CountTable = persist::from_json(r#"{"the||end": 3, "the||cat": 1}"#).unwrap();
    assert_eq!(table.order(), Some(2));
    assert_eq!(table.get_tokens(&["the", "end"]), Some(3));
}

#[test]
fn test_zero_count_record_has_no_mle() {
    let counts: CountTable = persist::from_json(r#"{"a": 0, "b": 0}"#).unwrap();
    assert_eq!(counts.total(), 0.0);

    let err = to_probabilities(&counts, 0.0).unwrap_err();
    assert!(matches!(err, TextError::InvalidInput(_)));

    let smoothed = to_probabilities(&counts, 0.5).unwrap();
    let back: ProbabilityTable = persist::from_json(&persist::to_json(&smoothed).unwrap()).unwrap();
    assert_eq!(back, smoothed);
}
