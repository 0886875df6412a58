//! Flat key-value persistence for frequency tables
//!
//! A record is a one-level map from string keys to numbers. Multi-token keys
//! are joined with [`KEY_DELIMITER`]; single tokens are written as-is. On the
//! way back any key containing the delimiter becomes a sequence again.
//!
//! Tokens that contain the delimiter (or border it inside a multi-token key)
//! cannot round-trip, so [`serialize`] refuses them instead of writing an
//! ambiguous record.
//!
//! Writers to the same path are not coordinated here; callers that share a
//! location must serialize access themselves.

use super::{FrequencyTable, FrequencyValue, NGram};
use crate::error::{Result, TextError};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Separator between tokens of a multi-token key
pub const KEY_DELIMITER: &str = "||";

/// Encode one n-gram as a record key.
///
/// # Errors
/// [`TextError::DelimiterCollision`] when a token contains the delimiter, or
/// when a token of a multi-token key starts or ends with `|` (the joined key
/// would split at the wrong place).
pub fn encode_key(ngram: &NGram) -> Result<String> {
    let tokens = ngram.tokens();
    let multi = tokens.len() > 1;
    let collides = |t: &str| {
        t.contains(KEY_DELIMITER) || (multi && (t.starts_with('|') || t.ends_with('|')))
    };
    if let Some(token) = tokens.iter().find(|t| collides(**t)) {
        return Err(TextError::DelimiterCollision {
            token: (*token).to_owned(),
        });
    }
    Ok(tokens.join(KEY_DELIMITER))
}

/// Decode a record key into an n-gram
pub fn decode_key(key: &str) -> NGram {
    if key.contains(KEY_DELIMITER) {
        NGram::Sequence(key.split(KEY_DELIMITER).map(str::to_owned).collect())
    } else {
        NGram::Unigram(key.to_owned())
    }
}

/// Turn a table into a flat record with string keys, sorted for stable output.
///
/// # Errors
/// [`TextError::DelimiterCollision`] when a key cannot be encoded
/// unambiguously (see [`encode_key`]).
pub fn serialize<V: FrequencyValue>(table: &FrequencyTable<V>) -> Result<BTreeMap<String, V>> {
    table
        .iter()
        .map(|(ngram, value)| encode_key(ngram).map(|key| (key, *value)))
        .collect()
}

/// Rebuild a table from a flat record.
///
/// # Errors
/// [`TextError::SerializationFormat`] when keys disagree on the n-gram order
/// or a value is not a valid frequency.
pub fn deserialize<V: FrequencyValue>(record: BTreeMap<String, V>) -> Result<FrequencyTable<V>> {
    let mut table = FrequencyTable::new();
    for (key, value) in record {
        table
            .insert(decode_key(&key), value)
            .map_err(|e| TextError::SerializationFormat(format!("key {key:?}: {e}")))?;
    }
    Ok(table)
}

/// Pretty-printed JSON document for `table`
pub fn to_json<V: FrequencyValue>(table: &FrequencyTable<V>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&serialize(table)?)?)
}

/// Parse a JSON document produced by [`to_json`]
pub fn from_json<V: FrequencyValue>(json: &str) -> Result<FrequencyTable<V>> {
    let record: BTreeMap<String, V> = serde_json::from_str(json)?;
    deserialize(record)
}

/// Write `table` as JSON to `path`
pub fn save<V: FrequencyValue, P: AsRef<Path>>(table: &FrequencyTable<V>, path: P) -> Result<()> {
    let json = to_json(table)?;
    fs::write(path.as_ref(), json)?;
    log::debug!(
        "saved {} n-grams to {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read a table previously written with [`save`]
pub fn load<V: FrequencyValue, P: AsRef<Path>>(path: P) -> Result<FrequencyTable<V>> {
    let json = fs::read_to_string(path.as_ref())?;
    let table = from_json(&json)?;
    log::debug!(
        "loaded {} n-grams from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::{count_ngrams, to_probabilities, CountTable, ProbabilityTable};

    #[test]
    fn test_encode_keys() {
        assert_eq!(encode_key(&NGram::from("word")).unwrap(), "word");
        assert_eq!(encode_key(&NGram::from(["a", "b", "c"])).unwrap(), "a||b||c");
    }

    #[test]
    fn test_encode_rejects_delimiter() {
        let err = encode_key(&NGram::from("x||y")).unwrap_err();
        assert!(matches!(err, TextError::DelimiterCollision { token } if token == "x||y"));
    }

    #[test]
    fn test_encode_rejects_edge_pipes_in_sequences() {
        assert!(encode_key(&NGram::from(["a|", "b"])).is_err());
        assert!(encode_key(&NGram::from(["a", "|b"])).is_err());
        assert_eq!(encode_key(&NGram::from("a|")).unwrap(), "a|");
        assert_eq!(encode_key(&NGram::from(["a|b", "c"])).unwrap(), "a|b||c");
    }

    #[test]
    fn test_decode_keys() {
        assert_eq!(decode_key("word"), NGram::from("word"));
        assert_eq!(decode_key("a||b"), NGram::from(["a", "b"]));
        assert_eq!(decode_key("||"), NGram::from(["", ""]));
    }

    #[test]
    fn test_serialize_record() {
        let table = count_ngrams(&["a", "b", "a", "b"], 2).unwrap();
        let record = serialize(&table).unwrap();
        assert_eq!(record.get("a||b"), Some(&2));
        assert_eq!(record.get("b||a"), Some(&1));
    }

    #[test]
    fn test_roundtrip_counts() {
        let table = count_ngrams(&["to", "be", "or", "not", "to", "be"], 2).unwrap();
        let back = deserialize(serialize(&table).unwrap()).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_roundtrip_probabilities_json() {
        let counts = count_ngrams(&["x", "y", "x"], 1).unwrap();
        let probs = to_probabilities(&counts, 0.5).unwrap();
        let json = to_json(&probs).unwrap();
        let back: ProbabilityTable = from_json(&json).unwrap();
        assert_eq!(back, probs);
    }

    #[test]
    fn test_json_layout() {
        let table = count_ngrams(&["b", "a"], 1).unwrap();
        assert_eq!(to_json(&table).unwrap(), "{\n  \"a\": 1,\n  \"b\": 1\n}");
    }

    #[test]
    fn test_json_keeps_unicode() {
        let table = count_ngrams(&["é"], 1).unwrap();
        assert!(to_json(&table).unwrap().contains("\"é\""));
    }

    #[test]
    fn test_mixed_orders_rejected() {
        let err = from_json::<u64>(r#"{"a": 1, "a||b": 2}"#).unwrap_err();
        assert!(matches!(err, TextError::SerializationFormat(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(from_json::<u64>("[1, 2]").unwrap_err().is_format_error());
        assert!(from_json::<u64>("{\"a\": \"x\"}").unwrap_err().is_format_error());
        assert!(from_json::<u64>("{\"a\": -1}").unwrap_err().is_format_error());
        assert!(from_json::<f64>("{\"a\": -0.5}").unwrap_err().is_format_error());
    }

    #[test]
    fn test_empty_record() {
        let table: CountTable = from_json("{}").unwrap();
        assert!(table.is_empty());
    }
}
