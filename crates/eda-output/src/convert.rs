//! Input file to output artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use eda_block::FrameOptions;
use eda_ingest::{InputFormat, normalize, read_input, read_input_as};
use eda_model::ClaimRecord;
use eda_xml::{Clock, DocumentBuilder, EdaDocument, IdSource};

use crate::archive::{ZipPackageOptions, write_zip_package_with_options};
use crate::eda::write_eda_file_with_options;
use crate::error::{ConvertError, OutputError};

/// Which artifacts a conversion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTargets {
    Zip,
    Eda,
    #[default]
    Both,
}

impl OutputTargets {
    pub fn includes_zip(self) -> bool {
        matches!(self, Self::Zip | Self::Both)
    }

    pub fn includes_eda(self) -> bool {
        matches!(self, Self::Eda | Self::Both)
    }
}

/// How the artifact base name is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaseName {
    /// File stem of the input path.
    #[default]
    InputStem,
    /// The generated document identifier (`dateiID`).
    DocumentId,
    /// A caller-supplied name.
    Fixed(String),
}

/// Options for [`convert_file`].
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub output_dir: PathBuf,
    pub base_name: BaseName,
    pub targets: OutputTargets,
    /// Parent of the ZIP working area.
    pub work_dir: Option<PathBuf>,
    /// Overrides extension-based format detection.
    pub input_format: Option<InputFormat>,
    pub frame: FrameOptions,
}

impl ConvertOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_name(mut self, base_name: BaseName) -> Self {
        self.base_name = base_name;
        self
    }

    #[must_use]
    pub fn with_targets(mut self, targets: OutputTargets) -> Self {
        self.targets = targets;
        self
    }

    #[must_use]
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_input_format(mut self, format: InputFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: FrameOptions) -> Self {
        self.frame = frame;
        self
    }

    fn resolve_base_name(&self, input: &Path, doc: &EdaDocument) -> Result<String, OutputError> {
        match &self.base_name {
            BaseName::Fixed(name) => Ok(name.clone()),
            BaseName::DocumentId => Ok(doc.file_id.clone()),
            BaseName::InputStem => input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .ok_or_else(|| OutputError::invalid_base_name(input.display().to_string())),
        }
    }
}

/// Paths of the artifacts produced by one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutputs {
    pub base_name: String,
    pub document_id: String,
    /// Creation time written into the document header.
    pub created: NaiveDateTime,
    pub zip: Option<PathBuf>,
    pub eda: Option<PathBuf>,
}

impl ConversionOutputs {
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.zip.iter().chain(self.eda.iter())
    }
}

/// Read, normalize and render `input`, then write the requested artifacts.
pub fn convert_file(
    input: &Path,
    options: &ConvertOptions,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<ConversionOutputs, ConvertError> {
    let raw = match options.input_format {
        Some(format) => read_input_as(input, format)?,
        None => read_input(input)?,
    };
    let record = normalize(&raw)?;
    tracing::debug!(input = %input.display(), format = %raw.format(), "normalized claim input");
    convert_record(&record, input, options, ids, clock)
}

/// Render an already normalized record and write the requested artifacts.
///
/// `source` is the input path the record came from; it only names the
/// artifacts when [`BaseName::InputStem`] is selected.
pub fn convert_record(
    record: &ClaimRecord,
    source: &Path,
    options: &ConvertOptions,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<ConversionOutputs, ConvertError> {
    let doc = DocumentBuilder::new(ids, clock).build(record);
    let base_name = options.resolve_base_name(source, &doc)?;
    Ok(write_artifacts(&doc, &base_name, options)?)
}

/// Write the artifacts of one document. On failure, artifacts already
/// written by this call are removed.
pub fn write_artifacts(
    doc: &EdaDocument,
    base_name: &str,
    options: &ConvertOptions,
) -> Result<ConversionOutputs, OutputError> {
    let mut outputs = ConversionOutputs {
        base_name: base_name.to_string(),
        document_id: doc.file_id.clone(),
        created: doc.created,
        zip: None,
        eda: None,
    };

    if options.targets.includes_zip() {
        let zip_options = ZipPackageOptions {
            work_dir: options.work_dir.clone(),
        };
        outputs.zip = Some(write_zip_package_with_options(
            doc,
            base_name,
            &options.output_dir,
            &zip_options,
        )?);
    }

    if options.targets.includes_eda() {
        match write_eda_file_with_options(doc, base_name, &options.output_dir, &options.frame) {
            Ok(path) => outputs.eda = Some(path),
            Err(err) => {
                discard(&outputs);
                return Err(err);
            }
        }
    }

    Ok(outputs)
}

fn discard(outputs: &ConversionOutputs) {
    for path in outputs.paths() {
        if let Err(err) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %err, "failed to remove partial output");
        }
    }
}
