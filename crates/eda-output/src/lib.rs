//! EDA artifact generation.
//!
//! This crate writes an [`EdaDocument`](eda_xml::EdaDocument) as one or both
//! of its transport artifacts:
//!
//! - **ZIP package**: `<base>.xml` with declaration plus `EDA-INF/manifest.xml`
//! - **Fixed-block container**: `<base>.eda`, 128-character `AA`/`BB` framed lines
//!
//! Both writers stage into a temporary file in the output directory and
//! rename on success, so a failed write never leaves a partial artifact.

mod archive;
mod common;
mod convert;
mod eda;
mod error;

pub use archive::{ZipPackageOptions, write_zip_package, write_zip_package_with_options};
pub use common::validate_base_name;
pub use convert::{
    BaseName, ConversionOutputs, ConvertOptions, OutputTargets, convert_file, convert_record,
    write_artifacts,
};
pub use eda::{write_eda_file, write_eda_file_with_options};
pub use error::{ConvertError, OutputError, Result};
