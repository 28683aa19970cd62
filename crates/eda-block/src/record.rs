//! Header, trailer and data block records.
//!
//! # Structure
//!
//! Every record is exactly [`BLOCK_LEN`] characters wide.
//!
//! | Record  | Offset | Length | Field                            |
//! |---------|--------|--------|----------------------------------|
//! | header  | 0-1    | 2      | `AA`                             |
//! | header  | 2-16   | 15     | procedure tag (`MAHNV.EDA`)      |
//! | header  | 17-19  | 3      | version tag (`V04`)              |
//! | header  | 20-21  | 2      | sequence tag (`01`)              |
//! | header  | 22-127 | 106    | blanks                           |
//! | data    | 0-127  | 128    | payload text, last block padded  |
//! | trailer | 0-1    | 2      | `BB`                             |
//! | trailer | 2-127  | 126    | `Ende der Datei`, blank padded   |
//!
//! Offsets count Unicode scalar values, not bytes. Data blocks are not
//! escaped, so a block may itself begin with `AA` or `BB`; only the position
//! of a record identifies it.

use crate::error::{BlockError, Result};
use crate::options::FrameOptions;

/// Width of every record in characters.
pub const BLOCK_LEN: usize = 128;

/// Prefix of the header record.
pub const HEADER_PREFIX: &str = "AA";

/// Prefix of the trailer record.
pub const TRAILER_PREFIX: &str = "BB";

/// Text of the trailer record.
pub const TRAILER_TEXT: &str = "Ende der Datei";

const PROCEDURE_LEN: usize = 15;
const VERSION_LEN: usize = 3;
const SEQUENCE_LEN: usize = 2;

/// Fields parsed from a header record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub procedure: String,
    pub version: String,
    pub sequence: String,
}

impl From<&FrameOptions> for HeaderInfo {
    fn from(opts: &FrameOptions) -> Self {
        Self {
            procedure: opts.procedure.clone(),
            version: opts.version.clone(),
            sequence: opts.sequence.clone(),
        }
    }
}

/// Build the `AA` header record.
#[must_use]
pub fn build_header_record(options: &FrameOptions) -> String {
    let mut record = String::with_capacity(BLOCK_LEN);
    record.push_str(HEADER_PREFIX);
    push_field(&mut record, &options.procedure, PROCEDURE_LEN);
    push_field(&mut record, &options.version, VERSION_LEN);
    push_field(&mut record, &options.sequence, SEQUENCE_LEN);
    pad_record(record)
}

/// Build the `BB` trailer record.
#[must_use]
pub fn build_trailer_record() -> String {
    let mut record = String::with_capacity(BLOCK_LEN);
    record.push_str(TRAILER_PREFIX);
    record.push_str(TRAILER_TEXT);
    pad_record(record)
}

/// Parse a header record.
pub fn parse_header_record(record: &str) -> Result<HeaderInfo> {
    validate_record_len(record, 1)?;
    if !record.starts_with(HEADER_PREFIX) {
        return Err(BlockError::MissingHeader {
            expected: HEADER_PREFIX,
        });
    }
    let chars: Vec<char> = record.chars().collect();
    let mut offset = HEADER_PREFIX.len();
    let mut field = |len: usize| {
        let value: String = chars[offset..offset + len].iter().collect();
        offset += len;
        value.trim_end().to_string()
    };
    Ok(HeaderInfo {
        procedure: field(PROCEDURE_LEN),
        version: field(VERSION_LEN),
        sequence: field(SEQUENCE_LEN),
    })
}

/// Check that a trailer record starts with `BB`.
pub fn validate_trailer_record(record: &str, line: usize) -> Result<()> {
    validate_record_len(record, line)?;
    if !record.starts_with(TRAILER_PREFIX) {
        return Err(BlockError::MissingTrailer {
            expected: TRAILER_PREFIX,
        });
    }
    Ok(())
}

/// Check that a record is exactly one block wide. `line` is 1-based.
pub fn validate_record_len(record: &str, line: usize) -> Result<()> {
    let length = record.chars().count();
    if length != BLOCK_LEN {
        return Err(BlockError::invalid_line_length(line, length));
    }
    Ok(())
}

/// Split text into consecutive data blocks, right-padding the last one.
///
/// Empty text yields no blocks.
pub fn split_blocks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(BLOCK_LEN)
        .map(|chunk| pad_record(chunk.iter().collect()))
        .collect()
}

/// Left-justify `value` in a slot of `len` characters.
fn push_field(record: &mut String, value: &str, len: usize) {
    let mut written = 0;
    for ch in value.chars().take(len) {
        record.push(ch);
        written += 1;
    }
    record.extend(std::iter::repeat_n(' ', len - written));
}

/// Right-pad with spaces to [`BLOCK_LEN`] characters.
fn pad_record(mut record: String) -> String {
    let len = record.chars().count();
    if len < BLOCK_LEN {
        record.extend(std::iter::repeat_n(' ', BLOCK_LEN - len));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = build_header_record(&FrameOptions::default());
        assert_eq!(header.chars().count(), BLOCK_LEN);
        assert_eq!(&header[..22], "AAMAHNV.EDA      V0401");
        assert!(header[22..].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_trailer_layout() {
        let trailer = build_trailer_record();
        assert_eq!(trailer.chars().count(), BLOCK_LEN);
        assert!(trailer.starts_with("BBEnde der Datei "));
        assert_eq!(trailer.trim_end(), "BBEnde der Datei");
    }

    #[test]
    fn test_build_and_parse_header() {
        let opts = FrameOptions::new()
            .with_procedure("MAHNV.EDA")
            .with_version("V05")
            .with_sequence("07");
        let parsed = parse_header_record(&build_header_record(&opts)).unwrap();
        assert_eq!(parsed, HeaderInfo::from(&opts));
    }

    #[test]
    fn test_long_fields_are_truncated() {
        let opts = FrameOptions::new().with_version("V0400").with_sequence("123");
        let header = build_header_record(&opts);
        assert_eq!(header.chars().count(), BLOCK_LEN);
        let parsed = parse_header_record(&header).unwrap();
        assert_eq!(parsed.version, "V04");
        assert_eq!(parsed.sequence, "12");
    }

    #[test]
    fn test_split_blocks() {
        assert!(split_blocks("").is_empty());

        let text = "x".repeat(BLOCK_LEN + 5);
        let blocks = split_blocks(&text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "x".repeat(BLOCK_LEN));
        assert_eq!(blocks[1].trim_end(), "xxxxx");
        assert_eq!(blocks[1].chars().count(), BLOCK_LEN);
    }

    #[test]
    fn test_split_counts_characters_not_bytes() {
        let text = "ü".repeat(BLOCK_LEN);
        let blocks = split_blocks(&text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].chars().count(), BLOCK_LEN);
        assert_eq!(blocks[0].len(), BLOCK_LEN * 2);
    }

    #[test]
    fn test_validate_records() {
        assert!(validate_record_len("short", 4).is_err());
        let header = build_header_record(&FrameOptions::default());
        assert!(matches!(
            validate_trailer_record(&header, 2),
            Err(BlockError::MissingTrailer { .. })
        ));
        assert!(matches!(
            parse_header_record(&build_trailer_record()),
            Err(BlockError::MissingHeader { .. })
        ));
    }
}
