use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use eda_block::{EdaContainer, FrameOptions, read_eda};
use eda_ingest::{normalize, read_input, read_input_as};
use eda_model::{ClaimRecord, PartyRole};
use eda_output::{BaseName, ConversionOutputs, ConvertOptions, convert_record};
use eda_xml::{SystemClock, UuidIdSource};

use crate::cli::{ConvertArgs, InspectArgs};
use crate::logging::redact_value;

/// Outcome of `eda convert`.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub amount: String,
    pub outputs: ConversionOutputs,
}

/// Outcome of `eda inspect`.
#[derive(Debug)]
pub struct InspectResult {
    pub file: PathBuf,
    pub container: EdaContainer,
    pub show_payload: bool,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let input = &args.input;
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let options = convert_options(args);
    let record = load_record(input, args)?;
    log_record(&record);

    let outputs = convert_record(&record, input, &options, &UuidIdSource, &SystemClock)
        .with_context(|| format!("convert {}", input.display()))?;
    info!(
        document_id = %outputs.document_id,
        artifacts = outputs.paths().count(),
        "conversion complete"
    );

    Ok(ConvertResult {
        input: input.clone(),
        output_dir: options.output_dir,
        amount: record.claim.amount_text(),
        outputs,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let container =
        read_eda(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    debug!(
        file = %args.file.display(),
        blocks = container.block_count(),
        "container validated"
    );
    Ok(InspectResult {
        file: args.file.clone(),
        container,
        show_payload: args.payload,
    })
}

/// Build conversion options from CLI flags.
pub fn convert_options(args: &ConvertArgs) -> ConvertOptions {
    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let base_name = match (&args.base_name, args.unique_name) {
        (Some(name), _) => BaseName::Fixed(name.clone()),
        (None, true) => BaseName::DocumentId,
        (None, false) => BaseName::InputStem,
    };
    let mut options = ConvertOptions::new(output_dir)
        .with_base_name(base_name)
        .with_targets(args.format.into())
        .with_frame(frame_options(args));
    if let Some(dir) = &args.work_dir {
        options = options.with_work_dir(dir);
    }
    if let Some(format) = args.input_format {
        options = options.with_input_format(format.into());
    }
    options
}

fn frame_options(args: &ConvertArgs) -> FrameOptions {
    let mut frame = FrameOptions::new();
    if let Some(procedure) = &args.eda_procedure {
        frame = frame.with_procedure(procedure);
    }
    if let Some(version) = &args.eda_version {
        frame = frame.with_version(version);
    }
    if let Some(sequence) = &args.eda_sequence {
        frame = frame.with_sequence(sequence);
    }
    frame
}

fn load_record(input: &Path, args: &ConvertArgs) -> Result<ClaimRecord> {
    let raw = match args.input_format {
        Some(format) => read_input_as(input, format.into()),
        None => read_input(input),
    }
    .with_context(|| format!("read {}", input.display()))?;
    normalize(&raw).with_context(|| format!("normalize {}", input.display()))
}

fn log_record(record: &ClaimRecord) {
    for role in [PartyRole::Creditor, PartyRole::Debtor] {
        let party = record.party(role);
        debug!(
            role = role.party_number(),
            name = redact_value(&party.name),
            city = redact_value(&party.city),
            "party"
        );
    }
    info!(
        amount = %record.claim.amount_text(),
        court = %record.context.competent_court,
        "claim loaded"
    );
}
