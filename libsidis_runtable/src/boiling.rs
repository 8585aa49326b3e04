//! Target-boiling correction.
//!
//! Beam heating thins the cryogenic targets, reducing their effective density.
//! The correction coefficient rescales yields back to the zero-heating point;
//! its form depends on the target material.

use super::constants::{round_to, BOIL_CORR_DECIMALS, SENTINEL};

// LH2 fit coefficients: three quadratics in beam current, multiplying powers
// of the cooling-fan frequency. Y(f, I) = alpha(I) f^2 + beta(I) f + gamma(I).
const ALPHA: [f64; 3] = [-4.63644107e-06, 1.30424412e-04, 7.98013139e-05];
const BETA: [f64; 3] = [4.37559009e-04, -1.09899399e-02, -5.56375520e-03];
const GAMMA: [f64; 3] = [-9.31940585e-03, 1.15703945e-01, 1.43953881e+02];

/// Slope of the LD2 linear correction, per 100 uA of beam current.
const LD2_SLOPE: f64 = 0.03493;

/// Compute the boiling-correction coefficient for a run.
///
/// LH2 evaluates the empirical response surface at the operating point and
/// takes the ratio of the zero-fan-speed baseline to it; an undefined current
/// or fan speed (or a zero at-operating-point response) yields sentinel. LD2
/// is linear in current, defaulting to 1.0 when the current is undefined. Any
/// other target is exactly 1.0.
pub fn boiling_correction(target: &str, current: Option<f64>, fan_mean: Option<f64>) -> f64 {
    match target {
        "LH2" => lh2_correction(current, fan_mean),
        "LD2" => match defined(current) {
            Some(current) => round_to(1.0 + LD2_SLOPE * (current / 100.0), BOIL_CORR_DECIMALS),
            None => 1.0,
        },
        _ => 1.0,
    }
}

fn lh2_correction(current: Option<f64>, fan_mean: Option<f64>) -> f64 {
    let (Some(current), Some(fan)) = (defined(current), defined(fan_mean)) else {
        return SENTINEL;
    };
    let quad = |c: &[f64; 3]| (c[0] * current + c[1]) * current + c[2];
    let at_operating_point = (quad(&ALPHA) * fan + quad(&BETA)) * fan + quad(&GAMMA);
    let zero_fan_baseline = (ALPHA[2] * fan + BETA[2]) * fan + GAMMA[2];
    if at_operating_point == 0.0 {
        return SENTINEL;
    }
    round_to(zero_fan_baseline / at_operating_point, BOIL_CORR_DECIMALS)
}

fn defined(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ld2_linear_in_current() {
        assert_eq!(boiling_correction("LD2", Some(100.0), None), 1.03493);
        assert_eq!(boiling_correction("LD2", Some(50.0), Some(60.0)), 1.017465);
    }

    #[test]
    fn test_ld2_without_current_defaults_to_unity() {
        assert_eq!(boiling_correction("LD2", None, None), 1.0);
        assert_eq!(boiling_correction("LD2", Some(SENTINEL), None), 1.0);
    }

    #[test]
    fn test_other_targets_are_unity() {
        assert_eq!(boiling_correction("C", Some(70.0), Some(60.0)), 1.0);
        assert_eq!(boiling_correction("DUMMY", None, None), 1.0);
    }

    #[test]
    fn test_lh2_zero_current_zero_fan_is_unity() {
        // At I = 0 and f = 0 both responses collapse to gamma0
        assert_eq!(boiling_correction("LH2", Some(0.0), Some(0.0)), 1.0);
    }

    #[test]
    fn test_lh2_needs_current_and_fan_speed() {
        assert_eq!(boiling_correction("LH2", None, Some(60.0)), SENTINEL);
        assert_eq!(boiling_correction("LH2", Some(70.0), None), SENTINEL);
        assert_eq!(
            boiling_correction("LH2", Some(70.0), Some(SENTINEL)),
            SENTINEL
        );
    }

    #[test]
    fn test_lh2_correction_exceeds_unity_under_beam() {
        // Heating lowers the at-operating-point response, so the ratio > 1
        let corr = boiling_correction("LH2", Some(70.0), Some(60.0));
        assert!(corr > 1.0, "got {corr}");
        assert!(corr < 1.2, "got {corr}");
    }
}
