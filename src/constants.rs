//! Physical, astronomical, and simulation-tuning constants.

/// Mathematical constants re-exported for readability at call sites.
pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;

/// Width of one sector cube, in light-years.
pub const SECTOR_SIDE_LY: f64 = 100.0;

/// Julian year, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Bounds on generated age, in Gyr.
pub const STAR_AGE_MIN_GYR: f64 = 0.1;
pub const STAR_AGE_MAX_GYR: f64 = 13.0;

/// Standard deviation of the Gaussian metallicity distribution.
pub const METALLICITY_SIGMA: f64 = 0.3;

/// Upper bound on eccentricity for the common (non-extreme) branch.
pub const ECCENTRICITY_COMMON_MAX: f64 = 0.3;
/// Probability of drawing an eccentricity from the extreme branch instead.
pub const ECCENTRICITY_EXTREME_CHANCE: f64 = 0.05;

/// Probability of drawing an extreme axial tilt.
pub const AXIAL_TILT_EXTREME_CHANCE: f64 = 0.10;
pub const AXIAL_TILT_EXTREME_MIN_DEG: f64 = 45.0;
pub const AXIAL_TILT_EXTREME_MAX_DEG: f64 = 180.0;

/// Chance that any given planet rolls exotic matter regardless of type.
pub const EXOTIC_MATTER_CHANCE: f64 = 0.005;

/// Fixed-capacity limits (overflow policy: silent drop in insertion order,
/// see `error::GenError::RegistryFull`). Implementers may grow these
/// dynamically; they are a policy knob, not a hard architectural limit.
pub const MAX_PLANETS: usize = 12;
pub const MAX_MOONS: usize = 10;
pub const MAX_EVENT_LOG: usize = 512;
pub const MAX_ANOMALIES: usize = 256;
pub const MAX_CIVILIZATIONS: usize = 128;
pub const MAX_EVENTS_PER_TICK: usize = 4;
pub const MAX_ARTIFACTS: usize = 6;
pub const MAX_CULTURAL_TRAITS: usize = 6;

/// Event roll frequencies, one per tick, per probe, per event type.
pub const FREQ_DISCOVERY: f64 = 0.08;
pub const FREQ_ANOMALY: f64 = 0.03;
pub const FREQ_HAZARD: f64 = 0.05;
pub const FREQ_ENCOUNTER: f64 = 0.02;
pub const FREQ_CRISIS: f64 = 0.01;
pub const FREQ_WONDER: f64 = 0.015;

/// Personality drift magnitudes applied per event category.
pub const DRIFT_DISCOVERY: f64 = 0.02;
pub const DRIFT_ANOMALY: f64 = 0.03;
pub const DRIFT_DAMAGE: f64 = 0.04;
pub const DRIFT_BEAUTIFUL_SYSTEM: f64 = 0.03;

/// Event/anomaly description strings are truncated (never panicking) to
/// this many bytes before being stored, the idiomatic stand-in for the
/// source's fixed-length NUL-terminated buffers.
pub const MAX_DESCRIPTION_LEN: usize = 160;

/// Number of resource channels tracked per planet (`Planet::resources`).
pub const RES_COUNT: usize = 7;
/// Number of tracked probe tech fields (`Probe::tech_levels`).
pub const TECH_COUNT: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_are_probabilities() {
        for f in [
            FREQ_DISCOVERY,
            FREQ_ANOMALY,
            FREQ_HAZARD,
            FREQ_ENCOUNTER,
            FREQ_CRISIS,
            FREQ_WONDER,
        ] {
            assert!((0.0..=1.0).contains(&f));
        }
    }

    #[test]
    fn age_bounds_ordered() {
        assert!(STAR_AGE_MIN_GYR < STAR_AGE_MAX_GYR);
    }
}
