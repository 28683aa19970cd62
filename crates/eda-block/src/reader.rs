//! `.eda` container reader.
//!
//! Records are identified by position: the first line must be the `AA`
//! header and the last the `BB` trailer. Everything between is payload.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{BlockError, Result};
use crate::record::{
    HEADER_PREFIX, HeaderInfo, TRAILER_PREFIX, parse_header_record, validate_record_len,
    validate_trailer_record,
};

/// A parsed `.eda` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdaContainer {
    pub header: HeaderInfo,
    /// Data blocks in file order, each [`crate::BLOCK_LEN`] characters.
    pub blocks: Vec<String>,
}

impl EdaContainer {
    /// Concatenated data blocks with the trailing padding removed.
    pub fn payload(&self) -> String {
        let joined = self.blocks.concat();
        joined.trim_end_matches(' ').to_string()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// `.eda` container reader.
pub struct EdaReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> EdaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read and validate the whole container.
    pub fn read_container(mut self) -> Result<EdaContainer> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        parse_eda(&text)
    }
}

impl EdaReader<File> {
    /// Open an `.eda` file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlockError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                BlockError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read an `.eda` file from a path.
pub fn read_eda(path: &Path) -> Result<EdaContainer> {
    EdaReader::open(path)?.read_container()
}

/// Parse container text.
///
/// Accepts `\n` or `\r\n` separators and an optional final line break.
pub fn parse_eda(text: &str) -> Result<EdaContainer> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(first) = lines.first() else {
        return Err(BlockError::MissingHeader {
            expected: HEADER_PREFIX,
        });
    };
    let header = parse_header_record(first)?;

    if lines.len() < 2 {
        return Err(BlockError::MissingTrailer {
            expected: TRAILER_PREFIX,
        });
    }

    let last = lines.len() - 1;
    let mut blocks = Vec::with_capacity(lines.len() - 2);
    for (idx, line) in lines[1..last].iter().enumerate() {
        // idx 0 is file line 2
        validate_record_len(line, idx + 2)?;
        blocks.push((*line).to_string());
    }
    validate_trailer_record(lines[last], last + 1)?;

    Ok(EdaContainer { header, blocks })
}
