//! Inspect command implementation.

use serde::Serialize;
use std::path::Path;

use wordbank_core::{PackConfig, Segmenter, WordRecord};

use crate::words;

/// Layout inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Word list path.
    pub path: String,
    /// Configured bank capacity.
    pub capacity: usize,
    /// Number of banks in the layout.
    pub bank_count: usize,
    /// Total number of packed records.
    pub record_count: usize,
    /// Total serialized size across all banks, in bytes.
    pub serialized_size: usize,
    /// Number of banks whose serialized size exceeds the nominal capacity.
    pub oversize_banks: usize,
    /// Per-bank statistics.
    pub banks: Vec<BankStats>,
}

/// Statistics for a single bank.
#[derive(Debug, Serialize)]
pub struct BankStats {
    /// Bank id.
    pub id: u32,
    /// Number of records in the bank.
    pub record_count: usize,
    /// Serialized size in bytes, terminators included.
    pub serialized_size: usize,
    /// Whether the serialized size exceeds the nominal capacity.
    pub oversize: bool,
}

/// Runs the inspect command.
pub fn run(input: &Path, capacity: usize, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = analyze(input, capacity)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn analyze(input: &Path, capacity: usize) -> Result<InspectResult, Box<dyn std::error::Error>> {
    let config = PackConfig::new().capacity(capacity);
    let mut segmenter = Segmenter::new(&config)?;
    for word in words::read_words(input)? {
        segmenter.push(WordRecord::new(word?));
    }
    let layout = segmenter.finish();

    let banks: Vec<BankStats> = layout
        .iter()
        .map(|segment| BankStats {
            id: segment.id().as_u32(),
            record_count: segment.record_count(),
            serialized_size: segment.serialized_len(),
            oversize: segment.serialized_len() > capacity,
        })
        .collect();

    Ok(InspectResult {
        path: input.display().to_string(),
        capacity,
        bank_count: layout.segment_count(),
        record_count: layout.record_count(),
        serialized_size: banks.iter().map(|b| b.serialized_size).sum(),
        oversize_banks: banks.iter().filter(|b| b.oversize).count(),
        banks,
    })
}

fn print_text_output(result: &InspectResult) {
    println!("Wordbank Layout Inspection");
    println!("==========================");
    println!();
    println!("Word list: {}", result.path);
    println!("Capacity:  {} bytes per bank", result.capacity);
    println!();
    println!("Layout:");
    println!("  Banks:           {}", result.bank_count);
    println!("  Records:         {}", result.record_count);
    println!("  Serialized size: {} bytes", result.serialized_size);
    println!("  Oversize banks:  {}", result.oversize_banks);
    println!();
    println!("Banks:");
    for bank in &result.banks {
        println!(
            "  [{}] {} records, {} bytes{}",
            bank.id,
            bank.record_count,
            bank.serialized_size,
            if bank.oversize { " (oversize)" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use wordbank_testkit::fixtures;

    fn write_words(words: &[String]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    #[test]
    fn analyze_counts_banks_and_records() {
        let input = write_words(&fixtures::short_words());
        let result = analyze(input.path(), 5).unwrap();

        assert_eq!(result.bank_count, 2);
        assert_eq!(result.record_count, 3);
        assert_eq!(result.banks.len(), 2);
        assert_eq!(result.banks[0].record_count, 2);
        assert_eq!(result.banks[1].record_count, 1);
    }

    #[test]
    fn analyze_flags_oversize_banks() {
        let input = write_words(&[fixtures::long_word(100)]);
        let result = analyze(input.path(), 8).unwrap();

        // the empty leading bank plus one over-budget bank
        assert_eq!(result.bank_count, 2);
        assert_eq!(result.oversize_banks, 1);
        assert!(result.banks[1].oversize);
    }

    #[test]
    fn analyze_rejects_zero_capacity() {
        let input = write_words(&fixtures::short_words());
        assert!(analyze(input.path(), 0).is_err());
    }

    #[test]
    fn result_serializes_to_json() {
        let input = write_words(&fixtures::sample_words());
        let result = analyze(input.path(), 64).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"bank_count\""));
    }
}
