//! Word-list reading and normalization.
//!
//! The upstream collaborator of the packing core: turns a word-list file into
//! the ordered record sequence the segmenter consumes. Each line is trimmed
//! of surrounding whitespace and lowercased; nothing is deduplicated or
//! dropped. An empty line becomes an empty record, which packs as a bare
//! terminator byte.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Normalizes one raw line into record text.
#[must_use]
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Opens a word list as a forward-only iterator of normalized records.
///
/// The file is streamed, never fully buffered; lines are yielded in file
/// order and the iterator is consumed exactly once by the packer.
pub fn read_words(path: &Path) -> io::Result<impl Iterator<Item = io::Result<String>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.lines().map(|line| line.map(|l| normalize(&l))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Hello \t"), "hello");
        assert_eq!(normalize("WORLD"), "world");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn read_words_streams_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Alpha").unwrap();
        writeln!(file, "  beta  ").unwrap();
        writeln!(file, "GAMMA").unwrap();

        let words: Vec<String> = read_words(file.path())
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn empty_lines_become_empty_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "one").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "two").unwrap();

        let words: Vec<String> = read_words(file.path())
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(words, ["one", "", "two"]);
    }
}
