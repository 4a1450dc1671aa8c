//! RGBDS assembly emission.

use std::io::Write;

use wordbank_core::{Layout, Segment};

use crate::error::EmitResult;

/// Emits a layout as RGBDS assembly for the downstream linker.
///
/// Each bank becomes one `ROMX` section holding zero-terminated records; the
/// index becomes a `ROM0` section of `BANK`/`HIGH`/`LOW` descriptors the
/// linker resolves to physical locations, closed by an all-zero terminator
/// descriptor. Records are emitted verbatim; the upstream source is assumed
/// to be plain dictionary words with nothing to escape.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmEmitter;

impl AsmEmitter {
    /// Creates an assembly emitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Writes one bank's section: header, records, trailing sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn emit_segment(&self, segment: &Segment, out: &mut dyn Write) -> EmitResult<()> {
        let id = segment.id().as_u32();
        writeln!(out, "SECTION \"Words [{id}]\", ROMX")?;
        writeln!(out, "words_{id}:")?;
        for record in segment.records() {
            writeln!(out, "    db \"{}\", 0", record.as_str())?;
        }
        writeln!(out, "    db 0")?;
        Ok(())
    }

    /// Writes the index section: one descriptor per bank in id order, then
    /// the all-zero terminator descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn emit_index(&self, layout: &Layout, out: &mut dyn Write) -> EmitResult<()> {
        writeln!(out, "SECTION \"Words Index\", ROM0")?;
        writeln!(out, "words_index::")?;
        for segment in layout {
            let label = format!("words_{}", segment.id().as_u32());
            writeln!(out, "    db BANK({label}), HIGH({label}), LOW({label})")?;
        }
        writeln!(out, "    db 0, 0, 0")?;
        Ok(())
    }

    /// Writes the complete assembly: every bank section in id order, then the
    /// index.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn emit(&self, layout: &Layout, out: &mut dyn Write) -> EmitResult<()> {
        for segment in layout {
            self.emit_segment(segment, out)?;
            writeln!(out)?;
        }
        self.emit_index(layout, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordbank_core::{pack, PackConfig};

    fn emit_to_string(layout: &Layout) -> String {
        let mut buf = Vec::new();
        AsmEmitter::new().emit(layout, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn two_bank_layout_emits_sections_and_index() {
        let layout = pack(["ab", "cd", "ef"], &PackConfig::new().capacity(5)).unwrap();
        let expected = "\
SECTION \"Words [0]\", ROMX
words_0:
    db \"ab\", 0
    db \"cd\", 0
    db 0

SECTION \"Words [1]\", ROMX
words_1:
    db \"ef\", 0
    db 0

SECTION \"Words Index\", ROM0
words_index::
    db BANK(words_0), HIGH(words_0), LOW(words_0)
    db BANK(words_1), HIGH(words_1), LOW(words_1)
    db 0, 0, 0
";
        assert_eq!(emit_to_string(&layout), expected);
    }

    #[test]
    fn empty_input_emits_one_empty_section() {
        let layout = pack(Vec::<String>::new(), &PackConfig::default()).unwrap();
        let expected = "\
SECTION \"Words [0]\", ROMX
words_0:
    db 0

SECTION \"Words Index\", ROM0
words_index::
    db BANK(words_0), HIGH(words_0), LOW(words_0)
    db 0, 0, 0
";
        assert_eq!(emit_to_string(&layout), expected);
    }

    #[test]
    fn index_lists_every_bank() {
        let words: Vec<String> = (0..40).map(|i| format!("word{i:02}")).collect();
        let layout = pack(words, &PackConfig::new().capacity(32)).unwrap();
        assert!(layout.segment_count() > 2);

        let asm = emit_to_string(&layout);
        let descriptor_lines = asm.lines().filter(|l| l.contains("db BANK(")).count();
        assert_eq!(descriptor_lines, layout.segment_count());
    }
}
