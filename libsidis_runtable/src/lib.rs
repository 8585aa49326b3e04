//! # sidis_runtable
//!
//! sidis_runtable builds the unified run-information table for a SIDIS
//! data-taking campaign. It walks the primary run catalog and, for every run,
//! merges the fixed-offset replay report, the per-run coincidence statistics,
//! the cooling-fan telemetry, and the half-wave-plate log into one CSV row,
//! computing the derived quantities (computational livetime, kinematic-bin
//! assignment, target-boiling correction) along the way.
//!
//! ## Usage
//!
//! The CLI is installed with `cargo install --path ./sidis_runtable_cli` from
//! the top level of the repository. `sidis_runtable_cli -p config.yaml new`
//! writes a template configuration; `sidis_runtable_cli -p config.yaml` builds
//! the table.
//!
//! ## Configuration
//!
//! The YAML format of a configuration file is as follows:
//!
//! ```yml
//! catalog_path: None
//! coin_report_dir: None
//! arm_a_report_dir: None
//! arm_b_report_dir: None
//! coin_stats_dir: None
//! fan_table_path: None
//! polarization_table_path: None
//! output_path: None
//! ```
//!
//! - `catalog_path`: the primary run catalog CSV. This is the root input; if
//!   it is missing or empty the build aborts with no output.
//! - `coin_report_dir` / `arm_a_report_dir` / `arm_b_report_dir`: directories
//!   holding the replay reports, named `<prefix>_<run>.report` with prefixes
//!   `coin`, `arm_a`, and `arm_b`.
//! - `coin_stats_dir`: directory of per-run `coin_stats_<run>.csv` files.
//! - `fan_table_path` / `polarization_table_path`: campaign-wide side tables
//!   keyed by run number.
//! - `output_path`: where the unified CSV is written.
//!
//! ## Input formats
//!
//! The catalog needs at least the columns
//! `run, ebeam, target, arm_a_p, arm_a_th, arm_b_p, arm_b_th, run_type`;
//! anything else (beam current, prescales, date, shift comments) is ignored.
//! Report files are fixed-width text read only at the declared
//! (line, column-range) windows; see [`schema`].
//!
//! ## Output
//!
//! One CSV, one row per catalog run, with a fixed and fully enumerated column
//! order. Every value that could not be measured, extracted, or joined is
//! written as the sentinel `-999`. A missing report or side table degrades the
//! affected fields and logs a diagnostic; it never aborts the batch.
pub mod aux_tables;
pub mod boiling;
pub mod config;
pub mod constants;
pub mod error;
pub mod kinematics;
pub mod livetime;
pub mod process;
pub mod report;
pub mod run;
pub mod schema;
pub mod table;
