/// Reserved value meaning "measurement unavailable" in every output column.
/// Never a valid physical measurement.
pub const SENTINEL: f64 = -999.0;

/// Decimal places kept for the computational livetime.
pub const LIVETIME_DECIMALS: i32 = 5;

/// Decimal places kept for the boiling-correction coefficient.
pub const BOIL_CORR_DECIMALS: i32 = 6;

/// Round a value to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10.0_f64.powi(decimals);
    (value * scale).round() / scale
}
