//! Listing of frequency tables

use anyhow::Result;
use shannon_core::ngram::FrequencyValue;
use shannon_core::FrequencyTable;
use std::io::Write;

/// Print a header line and the `top` highest-valued entries of `table`.
///
/// `value` renders one table value; counts and probabilities print differently.
pub fn write_table<V, W, F>(
    writer: &mut W,
    table: &FrequencyTable<V>,
    top: usize,
    value: F,
) -> Result<()>
where
    V: FrequencyValue,
    W: Write,
    F: Fn(V) -> String,
{
    match table.order() {
        Some(n) => writeln!(writer, "Order: {n}")?,
        None => writeln!(writer, "Order: -")?,
    }
    writeln!(writer, "Entries: {}", table.len())?;
    writeln!(writer, "Total: {}", trim_float(table.total()))?;

    let entries = table.top(top);
    if !entries.is_empty() {
        writeln!(writer)?;
    }
    for (ngram, v) in entries {
        writeln!(writer, "{}\t{}", value(v), ngram)?;
    }
    writer.flush()?;
    Ok(())
}

/// Fixed six-digit rendering for probabilities
pub fn probability(value: f64) -> String {
    format!("{value:.6}")
}

/// Integer rendering for counts
pub fn count(value: u64) -> String {
    value.to_string()
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.6}")
    }
}
