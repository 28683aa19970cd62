//! Fixed-block `.eda` artifact output.

use std::path::{Path, PathBuf};

use eda_block::{EdaWriter, FrameOptions};
use eda_xml::{EdaDocument, to_xml_string};

use crate::common::{ensure_output_dir, persist, staging_file, validate_base_name};
use crate::error::Result;

/// Write `<output_dir>/<base_name>.eda` with default header options.
pub fn write_eda_file(doc: &EdaDocument, base_name: &str, output_dir: &Path) -> Result<PathBuf> {
    write_eda_file_with_options(doc, base_name, output_dir, &FrameOptions::default())
}

/// Write `<output_dir>/<base_name>.eda`.
///
/// The payload is the XML without declaration.
pub fn write_eda_file_with_options(
    doc: &EdaDocument,
    base_name: &str,
    output_dir: &Path,
    options: &FrameOptions,
) -> Result<PathBuf> {
    validate_base_name(base_name)?;
    ensure_output_dir(output_dir)?;

    let payload = to_xml_string(doc)?;
    let target = output_dir.join(format!("{base_name}.eda"));
    let mut staged = staging_file(output_dir, &target)?;
    EdaWriter::with_options(staged.as_file_mut(), options.clone()).write_payload(&payload)?;

    let path = persist(staged, &target)?;
    tracing::info!(path = %path.display(), file_id = %doc.file_id, "wrote EDA container");
    Ok(path)
}
