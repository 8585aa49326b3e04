//! Nominal spectrometer settings and the kinematic-bin matcher.

use super::constants::SENTINEL;

/// Absolute tolerance when comparing a run's settings to the nominal table.
pub const MATCH_TOLERANCE: f64 = 0.01;

/// One nominal spectrometer setting and the analysis bin it samples.
#[derive(Debug, Clone, Copy)]
pub struct KinematicSetting {
    pub ebeam: f64,
    pub x: f64,
    pub q2: f64,
    pub z: f64,
    pub thpq: f64,
    pub arm_a_p: f64,
    pub arm_a_th: f64,
    pub arm_b_p: f64,
    pub arm_b_th: f64,
}

/// The analysis bin a run resolved to, or all-sentinel when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBin {
    pub x: f64,
    pub q2: f64,
    pub z: f64,
    pub thpq: f64,
}

impl KinematicBin {
    pub fn sentinel() -> Self {
        Self {
            x: SENTINEL,
            q2: SENTINEL,
            z: SENTINEL,
            thpq: SENTINEL,
        }
    }
}

const fn setting(
    ebeam: f64,
    x: f64,
    q2: f64,
    z: f64,
    thpq: f64,
    arm_a_p: f64,
    arm_a_th: f64,
    arm_b_p: f64,
    arm_b_th: f64,
) -> KinematicSetting {
    KinematicSetting {
        ebeam,
        x,
        q2,
        z,
        thpq,
        arm_a_p,
        arm_a_th,
        arm_b_p,
        arm_b_th,
    }
}

/// The nominal settings of the campaign. Scanned in declared order with a
/// first-match rule, so neighboring rows with overlapping tolerance windows
/// resolve to the earlier entry; do not reorder.
pub static KINEMATIC_TABLE: &[KinematicSetting] = &[
    setting(8.5831, 0.25, 3.3, 0.9, 2.0, 1.531, 29.045, 6.538, 7.865),
    setting(8.5831, 0.25, 3.3, 0.67, 2.0, 1.531, 29.045, 4.868, 7.865),
    setting(8.5831, 0.25, 3.3, 0.67, 5.2, 1.531, 29.045, 4.868, 11.075),
    setting(8.5831, 0.25, 3.3, 0.67, 8.5, 1.531, 29.045, 4.868, 14.375),
    setting(8.5831, 0.25, 3.3, 0.5, 2.0, 1.531, 29.045, 3.632, 7.865),
    setting(8.5831, 0.25, 3.3, 0.5, 5.2, 1.531, 29.045, 3.632, 11.075),
    setting(8.5831, 0.25, 3.3, 0.5, 8.5, 1.531, 29.045, 3.632, 14.375),
    setting(8.5831, 0.25, 3.3, 0.36, 2.0, 1.531, 29.045, 2.615, 7.865),
    setting(10.6716, 0.25, 3.3, 0.9, -0.8, 3.642, 16.75, 6.538, 7.51),
    setting(10.6716, 0.25, 3.3, 0.9, 2.0, 3.642, 16.75, 6.538, 10.305),
    setting(10.6716, 0.25, 3.3, 0.67, 2.0, 3.642, 16.75, 4.868, 10.305),
    setting(10.6716, 0.25, 3.3, 0.67, -0.8, 3.642, 16.75, 4.868, 7.51),
    setting(10.6716, 0.25, 3.3, 0.5, -0.8, 3.642, 16.75, 3.632, 7.51),
    setting(10.6716, 0.25, 3.3, 0.5, 2.0, 3.642, 16.75, 3.632, 10.305),
    setting(10.6716, 0.25, 3.3, 0.5, 5.2, 3.642, 16.75, 3.632, 13.505),
    setting(10.6716, 0.25, 3.3, 0.5, 8.5, 3.642, 16.75, 3.632, 16.81),
    setting(10.6716, 0.25, 3.3, 0.36, 2.0, 3.642, 16.75, 2.615, 10.305),
    setting(10.6716, 0.25, 3.3, 0.36, -0.2, 3.642, 16.75, 3.632, 8.11),
];

/// Resolve a run's analysis bin from its spectrometer settings.
///
/// Signs are ignored: spectrometer polarities flip between run periods, so the
/// comparison is against the absolute value of each query field.
pub fn find_kinematics(
    ebeam: f64,
    arm_a_p: f64,
    arm_a_th: f64,
    arm_b_p: f64,
    arm_b_th: f64,
) -> KinematicBin {
    for row in KINEMATIC_TABLE {
        if within(row.ebeam, ebeam)
            && within(row.arm_a_p, arm_a_p)
            && within(row.arm_a_th, arm_a_th)
            && within(row.arm_b_p, arm_b_p)
            && within(row.arm_b_th, arm_b_th)
        {
            return KinematicBin {
                x: row.x,
                q2: row.q2,
                z: row.z,
                thpq: row.thpq,
            };
        }
    }
    KinematicBin::sentinel()
}

fn within(nominal: f64, measured: f64) -> bool {
    (nominal - measured.abs()).abs() < MATCH_TOLERANCE
}
