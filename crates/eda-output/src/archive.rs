//! ZIP package output: `<base>.xml` plus `EDA-INF/manifest.xml`.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use eda_xml::{EdaDocument, MANIFEST_PATH, compose_manifest, to_xml_document};

use crate::common::{ensure_output_dir, persist, staging_file, validate_base_name};
use crate::error::{OutputError, Result};

/// Options for ZIP package output.
#[derive(Debug, Clone, Default)]
pub struct ZipPackageOptions {
    /// Parent directory of the per-call working area. Defaults to the
    /// system temp directory.
    pub work_dir: Option<PathBuf>,
}

impl ZipPackageOptions {
    #[must_use]
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    fn working_area(&self) -> io::Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("eda-package-");
        match &self.work_dir {
            Some(dir) => builder.tempdir_in(dir),
            None => builder.tempdir(),
        }
    }
}

/// Write `<output_dir>/<base_name>.zip` with default options.
pub fn write_zip_package(doc: &EdaDocument, base_name: &str, output_dir: &Path) -> Result<PathBuf> {
    write_zip_package_with_options(doc, base_name, output_dir, &ZipPackageOptions::default())
}

/// Write `<output_dir>/<base_name>.zip`.
///
/// The archive holds exactly two deflated entries. It is built in a
/// temporary file beside the target and only renamed into place once
/// complete, so a failure never leaves a partial `<base_name>.zip`.
pub fn write_zip_package_with_options(
    doc: &EdaDocument,
    base_name: &str,
    output_dir: &Path,
    options: &ZipPackageOptions,
) -> Result<PathBuf> {
    validate_base_name(base_name)?;
    ensure_output_dir(output_dir)?;

    let work_parent = options
        .work_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    let work = options
        .working_area()
        .map_err(|e| OutputError::io(&work_parent, e))?;

    let xml_name = format!("{base_name}.xml");
    let xml_path = work.path().join(&xml_name);
    write_text(&xml_path, &to_xml_document(doc)?)?;

    let manifest_path = work.path().join(MANIFEST_PATH);
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    write_text(&manifest_path, &compose_manifest(&xml_name))?;

    let target = output_dir.join(format!("{base_name}.zip"));
    let mut staged = staging_file(output_dir, &target)?;
    {
        let mut archive = ZipWriter::new(staged.as_file_mut());
        add_entry(&mut archive, &xml_name, &xml_path, &target)?;
        add_entry(&mut archive, MANIFEST_PATH, &manifest_path, &target)?;

        let file = archive.finish().map_err(|e| OutputError::zip(&target, e))?;
        file.flush().map_err(|e| OutputError::io(&target, e))?;
    }

    let path = persist(staged, &target)?;
    tracing::info!(path = %path.display(), file_id = %doc.file_id, "wrote ZIP package");
    Ok(path)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| OutputError::io(path, e))
}

fn add_entry<W: Write + io::Seek>(
    archive: &mut ZipWriter<W>,
    name: &str,
    source: &Path,
    target: &Path,
) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    archive
        .start_file(name, options)
        .map_err(|e| OutputError::zip(target, e))?;
    let file = File::open(source).map_err(|e| OutputError::io(source, e))?;
    io::copy(&mut BufReader::new(file), archive).map_err(|e| OutputError::io(target, e))?;
    tracing::debug!(entry = name, "added archive entry");
    Ok(())
}
