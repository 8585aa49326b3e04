//! The three auxiliary per-run side tables.
//!
//! Each joiner is an independent lookup keyed by run number with an explicit
//! sentinel default; a missing file, a missing row, or a malformed numeric
//! field degrades only that source for that run and never aborts the batch.

use std::path::Path;

use fxhash::FxHashMap;
use serde::Deserialize;

use super::constants::SENTINEL;

/// Coincidence event/yield statistics for one run, from the per-run
/// single-row CSV produced by the good-event selector.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoinStats {
    pub coin: f64,
    pub randoms: f64,
    pub ransubcoin: f64,
    pub normyield: f64,
    pub normyield_err: f64,
    pub ctmean: f64,
    pub ctsigma: f64,
}

impl CoinStats {
    pub fn sentinel() -> Self {
        Self {
            coin: SENTINEL,
            randoms: SENTINEL,
            ransubcoin: SENTINEL,
            normyield: SENTINEL,
            normyield_err: SENTINEL,
            ctmean: SENTINEL,
            ctsigma: SENTINEL,
        }
    }
}

/// Load the coincidence statistics for one run. The file holds a single data
/// row; anything short of that degrades the whole record to sentinel.
pub fn load_coin_stats(path: &Path, run: &str) -> CoinStats {
    if !path.exists() {
        log::warn!("Coincidence statistics not found for run {run}: {path:?}");
        return CoinStats::sentinel();
    }
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("Could not read coincidence statistics for run {run}: {e}");
            return CoinStats::sentinel();
        }
    };
    match reader.deserialize::<CoinStats>().next() {
        Some(Ok(stats)) => stats,
        Some(Err(e)) => {
            log::warn!("Malformed coincidence statistics for run {run}: {e}");
            CoinStats::sentinel()
        }
        None => {
            log::warn!("Empty coincidence statistics for run {run}");
            CoinStats::sentinel()
        }
    }
}

/// Cooling-fan frequency telemetry for one run.
#[derive(Debug, Clone, Copy)]
pub struct FanReading {
    pub mean: f64,
    pub stdev: f64,
}

impl FanReading {
    pub fn sentinel() -> Self {
        Self {
            mean: SENTINEL,
            stdev: SENTINEL,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FanRow {
    run: String,
    mean: f64,
    stdev: f64,
}

/// The campaign-wide fan telemetry table, loaded once and queried per run.
#[derive(Debug, Default)]
pub struct FanTable {
    readings: FxHashMap<String, FanReading>,
}

impl FanTable {
    pub fn load(path: &Path) -> Self {
        let mut table = FanTable::default();
        if !path.exists() {
            log::warn!("Fan telemetry table not found: {path:?}");
            return table;
        }
        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!("Could not read fan telemetry table: {e}");
                return table;
            }
        };
        for record in reader.deserialize::<FanRow>() {
            match record {
                Ok(row) => {
                    table.readings.insert(
                        row.run,
                        FanReading {
                            mean: row.mean,
                            stdev: row.stdev,
                        },
                    );
                }
                Err(e) => log::warn!("Malformed fan telemetry row: {e}"),
            }
        }
        table
    }

    /// Fan reading for a run, sentinel when the run is absent from the table
    pub fn get(&self, run: &str) -> FanReading {
        self.readings
            .get(run)
            .copied()
            .unwrap_or_else(FanReading::sentinel)
    }
}

/// Polarization-device state and active time window for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct PolarizationWindow {
    pub ihwp: String,
    pub start_time: String,
    pub stop_time: String,
}

#[derive(Debug, Deserialize)]
struct PolarizationRow {
    run: String,
    ihwp: String,
    start_time: String,
    stop_time: String,
}

/// The half-wave-plate log, loaded once and queried per run.
#[derive(Debug, Default)]
pub struct PolarizationTable {
    windows: FxHashMap<String, PolarizationWindow>,
}

impl PolarizationTable {
    pub fn load(path: &Path) -> Self {
        let mut table = PolarizationTable::default();
        if !path.exists() {
            log::warn!("Polarization table not found: {path:?}");
            return table;
        }
        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!("Could not read polarization table: {e}");
                return table;
            }
        };
        for record in reader.deserialize::<PolarizationRow>() {
            match record {
                Ok(row) => {
                    table.windows.insert(
                        row.run,
                        PolarizationWindow {
                            ihwp: row.ihwp,
                            start_time: row.start_time,
                            stop_time: row.stop_time,
                        },
                    );
                }
                Err(e) => log::warn!("Malformed polarization row: {e}"),
            }
        }
        table
    }

    pub fn get(&self, run: &str) -> Option<&PolarizationWindow> {
        self.windows.get(run)
    }
}
