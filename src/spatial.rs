//! Galactic spatial density field: a 4-arm logarithmic spiral with radial
//! falloff and a thin vertical disk, used to decide how many star systems
//! a given sector holds.

use crate::constants::PI;
use crate::prng::Rng;
use crate::vec3::{SectorCoord, Vec3};

const NUM_ARMS: i32 = 4;
const ARM_PITCH: f64 = 0.22;
const ARM_SIGMA_RAD: f64 = 0.4;
const CORE_RADIUS_LY: f64 = 100.0;
const RADIAL_SCALE_LY: f64 = 40_000.0;
const DISK_SCALE_HEIGHT_LY: f64 = 500.0;

/// Wraps an angle difference into `(-pi, pi]`.
fn wrap_angle(mut theta: f64) -> f64 {
    while theta > PI {
        theta -= 2.0 * PI;
    }
    while theta <= -PI {
        theta += 2.0 * PI;
    }
    theta
}

/// Density of the galaxy at a galactic-coordinate point, in `[0, 1]`.
pub fn density(gx: f64, gy: f64, gz: f64) -> f64 {
    let r = Vec3::new(gx, gy, 0.0).radial_distance_xy();

    let arm_density = if r < CORE_RADIUS_LY {
        1.0
    } else {
        let theta = gy.atan2(gx);
        let mut arm_best = 0.0_f64;
        for arm in 0..NUM_ARMS {
            let arm_theta = ARM_PITCH * (r / 1000.0).ln() + arm as f64 * PI / 2.0;
            let delta = wrap_angle(theta - arm_theta);
            let falloff = (-delta * delta / (2.0 * ARM_SIGMA_RAD * ARM_SIGMA_RAD)).exp();
            arm_best = arm_best.max(falloff);
        }
        0.15 + 0.85 * arm_best
    };

    let radial_falloff = (-r / RADIAL_SCALE_LY).exp();
    let z_density = (-(gz * gz) / (2.0 * DISK_SCALE_HEIGHT_LY * DISK_SCALE_HEIGHT_LY)).exp();

    arm_density * radial_falloff * z_density
}

/// Density sampled at the center of a sector cube.
pub fn sector_density(coord: SectorCoord) -> f64 {
    let center = coord.corner();
    let half = crate::constants::SECTOR_SIDE_LY / 2.0;
    density(center.x + half, center.y + half, center.z + half)
}

/// Number of star systems a sector should hold, before the caller's
/// `max_systems` cap.
pub fn sector_star_count(rng: &mut Rng, coord: SectorCoord) -> u32 {
    let d = sector_density(coord);
    let base = (d * 12.0).floor() as i64;
    let jitter_bound = (base / 2 + 1).max(0) as u64;
    let jitter = rng.range(jitter_bound) as i64;
    (base + jitter).clamp(0, 30) as u32
}
