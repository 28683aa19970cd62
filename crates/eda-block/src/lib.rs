//! Fixed-block `.eda` container format reader and writer.
//!
//! A container frames a text payload (the XML dunning application) between
//! an `AA` header record and a `BB` trailer record. Every line is exactly
//! 128 characters; the payload is cut into consecutive blocks and the last
//! block is padded with spaces.
//!
//! # Example
//!
//! ```
//! use eda_block::{FrameOptions, frame_to_string, parse_eda};
//!
//! let text = frame_to_string("<Mahnantrag/>", &FrameOptions::default());
//! let container = parse_eda(&text).unwrap();
//! assert_eq!(container.payload(), "<Mahnantrag/>");
//! assert_eq!(container.header.procedure, "MAHNV.EDA");
//! ```

mod error;
mod options;
mod reader;
pub mod record;
mod writer;

pub use error::{BlockError, Result};

pub use options::{DEFAULT_PROCEDURE, DEFAULT_SEQUENCE, DEFAULT_VERSION, FrameOptions};

pub use record::{
    BLOCK_LEN, HEADER_PREFIX, HeaderInfo, TRAILER_PREFIX, TRAILER_TEXT, build_header_record,
    build_trailer_record, split_blocks,
};

pub use reader::{EdaContainer, EdaReader, parse_eda, read_eda};

pub use writer::{
    EdaWriter, LINE_SEPARATOR, frame, frame_to_string, write_eda, write_eda_with_options,
};
