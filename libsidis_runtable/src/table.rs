//! Output-table assembly and writing.

use std::fmt;
use std::path::Path;

use fxhash::FxHashMap;

use super::constants::SENTINEL;
use super::error::TableWriteError;

/// Every column of the unified run-information table, in emission order.
/// Variables extracted for derivation but not listed here (trigger counts,
/// raw electron-trigger scalers) are dropped silently at assembly.
pub static OUTPUT_COLUMNS: &[&str] = &[
    "run",
    "ebeam",
    "target",
    "arm_a_p",
    "arm_a_th",
    "arm_b_p",
    "arm_b_th",
    "run_type",
    "x",
    "Q2",
    "z",
    "thpq",
    "BCM1_Q",
    "BCM1_I",
    "BCM2_Q",
    "BCM2_I",
    "BCM4A_Q",
    "BCM4A_I",
    "BCM4B_Q",
    "BCM4B_I",
    "BCM4C_Q",
    "BCM4C_I",
    "a_esing_eff",
    "a_hadron_eff",
    "b_esing_eff",
    "b_hadron_eff",
    "ps1",
    "ps2",
    "ps3",
    "ps4",
    "ps5",
    "ps6",
    "comp_livetime",
    "electr_deadtime",
    "coin",
    "randoms",
    "ransubcoin",
    "normyield",
    "normyield_err",
    "ctmean",
    "ctsigma",
    "fan_mean",
    "fan_stdev",
    "boil_corr",
    "ihwp",
    "start_time",
    "stop_time",
];

/// One output cell: a numeric measurement or verbatim catalog/side-table text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Num(f64),
    Text(String),
}

impl Cell {
    pub fn sentinel() -> Self {
        Cell::Num(SENTINEL)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Num(value) => write!(f, "{value}"),
            Cell::Text(text) => write!(f, "{text}"),
        }
    }
}

/// One output row under construction, keyed by column name.
///
/// Rows are built fresh per run and consumed on emission; nothing is mutated
/// after assembly.
#[derive(Debug, Default)]
pub struct OutputRow {
    cells: FxHashMap<&'static str, Cell>,
}

impl OutputRow {
    /// Store a cell. Variables outside the declared column schema are dropped
    /// silently; this is the expected path for derivation-only variables.
    pub fn set(&mut self, column: &'static str, cell: Cell) {
        if OUTPUT_COLUMNS.contains(&column) {
            self.cells.insert(column, cell);
        }
    }

    /// Finish the row: emit every declared column in order, with sentinel in
    /// place of anything unset or empty.
    pub fn into_record(mut self) -> Vec<String> {
        OUTPUT_COLUMNS
            .iter()
            .map(|column| match self.cells.remove(column) {
                Some(Cell::Text(text)) if text.is_empty() => Cell::sentinel().to_string(),
                Some(cell) => cell.to_string(),
                None => Cell::sentinel().to_string(),
            })
            .collect()
    }
}

/// Write the assembled table with the fixed column order.
pub fn write_table(output_path: &Path, rows: Vec<OutputRow>) -> Result<(), TableWriteError> {
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.into_record())?;
    }
    writer.flush()?;
    Ok(())
}
