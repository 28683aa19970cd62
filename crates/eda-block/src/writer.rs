//! `.eda` container writer.
//!
//! A container is the header record, the payload split into data blocks and
//! the trailer record, joined by `\n` without a final line break.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::options::FrameOptions;
use crate::record::{BLOCK_LEN, build_header_record, build_trailer_record, split_blocks};

/// Line separator between records.
pub const LINE_SEPARATOR: &str = "\n";

/// Frame a payload into container lines.
///
/// The first line is the header, the last the trailer. Every line is
/// exactly [`BLOCK_LEN`] characters.
#[must_use]
pub fn frame(payload: &str, options: &FrameOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(payload.chars().count() / BLOCK_LEN + 3);
    lines.push(build_header_record(options));
    lines.extend(split_blocks(payload));
    lines.push(build_trailer_record());
    lines
}

/// Frame a payload and join the lines.
#[must_use]
pub fn frame_to_string(payload: &str, options: &FrameOptions) -> String {
    frame(payload, options).join(LINE_SEPARATOR)
}

/// `.eda` container writer.
pub struct EdaWriter<W: Write> {
    writer: BufWriter<W>,
    options: FrameOptions,
}

impl<W: Write> EdaWriter<W> {
    /// Create a new writer with default header options.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options: FrameOptions::default(),
        }
    }

    /// Create a new writer with options.
    pub fn with_options(writer: W, options: FrameOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
        }
    }

    /// Write a complete container around `payload`.
    pub fn write_payload(mut self, payload: &str) -> Result<()> {
        self.writer
            .write_all(build_header_record(&self.options).as_bytes())?;

        let mut block_writer = BlockWriter::new(&mut self.writer);
        block_writer.write_str(payload)?;
        let blocks = block_writer.finish()?;

        self.writer.write_all(LINE_SEPARATOR.as_bytes())?;
        self.writer.write_all(build_trailer_record().as_bytes())?;
        self.writer.flush()?;

        tracing::debug!(blocks, "wrote eda container");
        Ok(())
    }
}

impl EdaWriter<File> {
    /// Create an `.eda` file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }

    /// Create an `.eda` file with options.
    pub fn create_with_options(path: &Path, options: FrameOptions) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_options(file, options))
    }
}

/// Write a payload to an `.eda` file.
pub fn write_eda(path: &Path, payload: &str) -> Result<()> {
    EdaWriter::create(path)?.write_payload(payload)
}

/// Write a payload to an `.eda` file with options.
pub fn write_eda_with_options(path: &Path, payload: &str, options: &FrameOptions) -> Result<()> {
    EdaWriter::create_with_options(path, options.clone())?.write_payload(payload)
}

/// Streams characters into data blocks, each preceded by a line separator.
struct BlockWriter<'a, W: Write> {
    writer: &'a mut W,
    record: String,
    pos: usize,
    blocks: usize,
}

impl<'a, W: Write> BlockWriter<'a, W> {
    fn new(writer: &'a mut W) -> Self {
        Self {
            writer,
            record: String::with_capacity(BLOCK_LEN),
            pos: 0,
            blocks: 0,
        }
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.record.push(ch);
            self.pos += 1;
            if self.pos == BLOCK_LEN {
                self.flush_record()?;
            }
        }
        Ok(())
    }

    /// Pad and emit the partial block. Returns the number of blocks written.
    fn finish(mut self) -> Result<usize> {
        if self.pos > 0 {
            self.record
                .extend(std::iter::repeat_n(' ', BLOCK_LEN - self.pos));
            self.flush_record()?;
        }
        Ok(self.blocks)
    }

    fn flush_record(&mut self) -> Result<()> {
        self.writer.write_all(LINE_SEPARATOR.as_bytes())?;
        self.writer.write_all(self.record.as_bytes())?;
        self.record.clear();
        self.pos = 0;
        self.blocks += 1;
        Ok(())
    }
}
