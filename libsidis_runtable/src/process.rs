//! Per-run aggregation and the batch loop.

use super::aux_tables::{load_coin_stats, FanTable, PolarizationTable};
use super::boiling::boiling_correction;
use super::config::Config;
use super::constants::SENTINEL;
use super::error::ProcessorError;
use super::kinematics::find_kinematics;
use super::livetime::compute_livetime;
use super::report;
use super::run::{load_catalog, resolve_configuration, RunIdentity};
use super::schema::schema_for;
use super::table::{write_table, Cell, OutputRow};

/// Build one output row for a single catalog run.
///
/// Every per-field and per-source failure has already been converted to None
/// or sentinel by the time it reaches the row, so assembly itself cannot fail.
fn build_row(
    config: &Config,
    identity: &RunIdentity,
    fan_table: &FanTable,
    polarization: &PolarizationTable,
) -> OutputRow {
    let mut row = OutputRow::default();

    // Catalog identity, carried through verbatim
    row.set("run", Cell::Text(identity.run.clone()));
    row.set("ebeam", Cell::Num(identity.ebeam));
    row.set("target", Cell::Text(identity.target.clone()));
    row.set("arm_a_p", Cell::Num(identity.arm_a_p));
    row.set("arm_a_th", Cell::Num(identity.arm_a_th));
    row.set("arm_b_p", Cell::Num(identity.arm_b_p));
    row.set("arm_b_th", Cell::Num(identity.arm_b_th));
    row.set("run_type", Cell::Text(identity.run_type.as_str().to_string()));

    // Report extraction under the resolved configuration
    let configuration = resolve_configuration(config, &identity.run, &identity.run_type);
    let report_path = config.report_path(&identity.run, configuration);
    let schema = schema_for(configuration);
    let report_exists = report_path.exists();
    let record = if report_exists {
        report::extract(&report_path, schema)
    } else {
        log::warn!("Report file not found: {report_path:?}");
        report::all_none(schema)
    };
    for (&name, &value) in &record {
        row.set(name, value.map(Cell::Num).unwrap_or_else(Cell::sentinel));
    }

    // Livetime is report-derived: without a report it stays sentinel
    if report_exists {
        if let Some(livetime) = compute_livetime(configuration, &record) {
            row.set("comp_livetime", Cell::Num(livetime));
        }
    }

    // Kinematic-bin assignment from the nominal settings
    let bin = find_kinematics(
        identity.ebeam,
        identity.arm_a_p,
        identity.arm_a_th,
        identity.arm_b_p,
        identity.arm_b_th,
    );
    row.set("x", Cell::Num(bin.x));
    row.set("Q2", Cell::Num(bin.q2));
    row.set("z", Cell::Num(bin.z));
    row.set("thpq", Cell::Num(bin.thpq));

    // Coincidence event/yield statistics
    let stats = load_coin_stats(&config.coin_stats_path(&identity.run), &identity.run);
    row.set("coin", Cell::Num(stats.coin));
    row.set("randoms", Cell::Num(stats.randoms));
    row.set("ransubcoin", Cell::Num(stats.ransubcoin));
    row.set("normyield", Cell::Num(stats.normyield));
    row.set("normyield_err", Cell::Num(stats.normyield_err));
    row.set("ctmean", Cell::Num(stats.ctmean));
    row.set("ctsigma", Cell::Num(stats.ctsigma));

    // Fan telemetry
    let fan = fan_table.get(&identity.run);
    row.set("fan_mean", Cell::Num(fan.mean));
    row.set("fan_stdev", Cell::Num(fan.stdev));

    // Polarization-device window
    if let Some(window) = polarization.get(&identity.run) {
        row.set("ihwp", Cell::Text(window.ihwp.clone()));
        row.set("start_time", Cell::Text(window.start_time.clone()));
        row.set("stop_time", Cell::Text(window.stop_time.clone()));
    }

    // Boiling correction from the target tag, the extracted BCM2 current, and
    // the fan-speed mean
    let current = record.get("BCM2_I").copied().flatten();
    let fan_mean = (fan.mean != SENTINEL).then_some(fan.mean);
    row.set(
        "boil_corr",
        Cell::Num(boiling_correction(&identity.target, current, fan_mean)),
    );

    row
}

/// Build the unified run-information table.
///
/// The only unrecoverable condition is loss of the primary catalog; every
/// secondary input degrades its fields to sentinel and the batch continues.
pub fn process(config: &Config) -> Result<(), ProcessorError> {
    let runs = load_catalog(&config.catalog_path)?;
    log::info!(
        "Loaded {} runs from catalog {:?}",
        runs.len(),
        config.catalog_path
    );

    let fan_table = FanTable::load(&config.fan_table_path);
    let polarization = PolarizationTable::load(&config.polarization_table_path);

    let mut rows = Vec::with_capacity(runs.len());
    for identity in &runs {
        log::info!("Processing run {}...", identity.run);
        rows.push(build_row(config, identity, &fan_table, &polarization));
    }

    write_table(&config.output_path, rows)?;
    log::info!("Wrote {} rows to {:?}", runs.len(), config.output_path);
    Ok(())
}
