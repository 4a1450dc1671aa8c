//! Pack command implementation.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use wordbank_core::{Layout, PackConfig, Segmenter, WordRecord};
use wordbank_emit::{AsmEmitter, ImageConfig, ImageEmitter};

use crate::words;

/// Runs the pack command.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    capacity: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = PackConfig::new().capacity(capacity);
    let mut segmenter = Segmenter::new(&config)?;
    for word in words::read_words(input)? {
        segmenter.push(WordRecord::new(word?));
    }
    let layout = segmenter.finish();
    tracing::info!(
        banks = layout.segment_count(),
        records = layout.record_count(),
        "packed word list"
    );

    match format {
        "image" => {
            let dir = output.unwrap_or_else(|| Path::new("."));
            emit_image(&layout, dir)?;
        }
        "asm" => match output {
            Some(path) => {
                let mut out = BufWriter::new(File::create(path)?);
                AsmEmitter::new().emit(&layout, &mut out)?;
                out.flush()?;
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                AsmEmitter::new().emit(&layout, &mut out)?;
            }
        },
        other => {
            return Err(format!("unknown output format: {other}").into());
        }
    }

    Ok(())
}

fn emit_image(layout: &Layout, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let emitter = ImageEmitter::new(ImageConfig::default())?;

    for image in emitter.emit(layout)? {
        let path = dir.join(format!("bank_{:03}.bin", image.entry.bank));
        fs::write(&path, &image.data)?;
    }
    fs::write(dir.join("index.bin"), emitter.build_index(layout)?)?;

    Ok(())
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
    fn pack_asm_writes_sections_and_index() {
        let input = write_words(&fixtures::sample_words());
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("words.asm");

        run(input.path(), Some(&output), 64, "asm").unwrap();

        let asm = fs::read_to_string(&output).unwrap();
        assert!(asm.starts_with("SECTION \"Words [0]\", ROMX"));
        assert!(asm.contains("SECTION \"Words Index\", ROM0"));
        assert!(asm.trim_end().ends_with("db 0, 0, 0"));
    }

    #[test]
    fn pack_image_writes_bank_files_and_index() {
        let input = write_words(&fixtures::short_words());
        let dir = tempfile::tempdir().unwrap();

        run(input.path(), Some(dir.path()), 5, "image").unwrap();

        assert!(dir.path().join("bank_001.bin").exists());
        assert!(dir.path().join("bank_002.bin").exists());
        let index = fs::read(dir.path().join("index.bin")).unwrap();
        // two descriptors plus the terminator
        assert_eq!(index.len(), 9);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let input = write_words(&fixtures::short_words());
        let result = run(input.path(), None, 64, "elf");
        assert!(result.is_err());
    }
}
