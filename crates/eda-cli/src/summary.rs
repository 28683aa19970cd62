use std::fs;
use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eda_block::BLOCK_LEN;
use eda_xml::TIMESTAMP_FORMAT;

use crate::commands::{ConvertResult, InspectResult};

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!("Document ID: {}", result.outputs.document_id);
    println!(
        "Created: {}",
        result.outputs.created.format(TIMESTAMP_FORMAT)
    );
    println!("Amount: {} EUR", result.amount);
    println!("{}", convert_table(result));
}

pub fn print_inspect_summary(result: &InspectResult) {
    println!("File: {}", result.file.display());
    println!("{}", inspect_table(result));
    if result.show_payload {
        println!("{}", result.container.payload());
    }
}

/// Table of produced artifacts.
pub fn convert_table(result: &ConvertResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Artifact"),
        header_cell("Path"),
        header_cell("Bytes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    let outputs = &result.outputs;
    for (label, path) in [("ZIP", outputs.zip.as_ref()), ("EDA", outputs.eda.as_ref())] {
        match path {
            Some(path) => table.add_row(vec![
                Cell::new(label).add_attribute(Attribute::Bold),
                Cell::new(path.display()),
                size_cell(path),
            ]),
            None => table.add_row(vec![dim_cell(label), dim_cell("-"), dim_cell("-")]),
        };
    }
    table
}

/// Table of header fields and block statistics.
pub fn inspect_table(result: &InspectResult) -> Table {
    let container = &result.container;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Procedure"), Cell::new(&container.header.procedure)]);
    table.add_row(vec![Cell::new("Version"), Cell::new(&container.header.version)]);
    table.add_row(vec![Cell::new("Sequence"), Cell::new(&container.header.sequence)]);
    table.add_row(vec![Cell::new("Data blocks"), Cell::new(container.block_count())]);
    table.add_row(vec![Cell::new("Block length"), Cell::new(BLOCK_LEN)]);
    table.add_row(vec![
        Cell::new("Payload characters"),
        Cell::new(container.payload().chars().count()),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn size_cell(path: &Path) -> Cell {
    match fs::metadata(path) {
        Ok(meta) => Cell::new(meta.len()),
        Err(_) => Cell::new("?").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
