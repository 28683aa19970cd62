//! Row-oriented (CSV) input.

mod row;

pub use row::{RowInput, read_first_row};
