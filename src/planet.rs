//! Planet generator. §4.4 is the most order-sensitive part of the whole
//! crate: every RNG draw below happens in a fixed sequence, and that
//! sequence — not just the formulas — is the determinism contract.
//! Reordering anything here changes every planet generated downstream of
//! it for a given seed.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::prng::Rng;
use crate::uid::Uid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetType {
    Rocky,
    SuperEarth,
    Ocean,
    Desert,
    Lava,
    Iron,
    Carbon,
    Ice,
    GasGiant,
    IceGiant,
    Rogue,
}

/// Resource channels tracked per planet. `RES_COUNT` in `constants.rs`
/// must match the number of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Metals,
    Silicates,
    RareEarths,
    Water,
    Hydrocarbons,
    Ice,
    ExoticMatter,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; RES_COUNT] = [
        ResourceKind::Metals,
        ResourceKind::Silicates,
        ResourceKind::RareEarths,
        ResourceKind::Water,
        ResourceKind::Hydrocarbons,
        ResourceKind::Ice,
        ResourceKind::ExoticMatter,
    ];

    pub fn index(self) -> usize {
        ResourceKind::ALL.iter().position(|k| *k == self).unwrap()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub id: Uid,
    pub name: String,
    pub planet_type: PlanetType,
    pub orbital_radius_au: f64,
    pub orbital_period_days: f64,
    pub eccentricity: f64,
    pub axial_tilt_deg: f64,
    pub rotation_period_hours: f64,
    pub mass_earth: f64,
    pub radius_earth: f64,
    pub surface_temp_k: f64,
    pub atmosphere_pressure_atm: f64,
    pub water_coverage: f64,
    pub magnetic_field: f64,
    pub habitability_index: f64,
    pub rings: bool,
    pub moon_count: u32,
    pub resources: [f32; RES_COUNT],
    pub surveyed: bool,
    pub discovered_by: Uid,
    pub discovery_tick: u64,
}

/// Habitable-zone bounds for a star of the given luminosity (solar units).
pub fn habitable_zone(luminosity_solar: f64) -> (f64, f64) {
    let sqrt_l = luminosity_solar.max(0.0).sqrt();
    (sqrt_l * 0.95, sqrt_l * 1.37)
}

/// Frost line per the equilibrium-temperature approximation used for gap
/// filling in system architectures; grounded on
/// `Slatibartfas-Helios-Ascension/src/astronomy/procedural.rs::calculate_frost_line`.
fn frost_line_au(luminosity_solar: f64) -> f64 {
    4.85 * luminosity_solar.max(0.0).sqrt()
}

enum Zone {
    InnerHot,
    Warm,
    Hz,
    Cold,
    FarOuter,
}

fn classify_zone(orbital_radius_au: f64, inner: f64, outer: f64, luminosity_solar: f64) -> Zone {
    let frost = frost_line_au(luminosity_solar).max(outer * 1.01);
    if orbital_radius_au < inner * 0.5 {
        Zone::InnerHot
    } else if orbital_radius_au < inner {
        Zone::Warm
    } else if orbital_radius_au <= outer {
        Zone::Hz
    } else if orbital_radius_au <= frost {
        Zone::Cold
    } else {
        Zone::FarOuter
    }
}

/// `(type, cumulative_threshold)` walked in order, first match wins.
fn pick_type(rng: &mut Rng, zone: Zone) -> PlanetType {
    let table: &[(PlanetType, f64)] = match zone {
        Zone::InnerHot => &[
            (PlanetType::Lava, 0.55),
            (PlanetType::Iron, 0.85),
            (PlanetType::Rocky, 1.0),
        ],
        Zone::Warm => &[
            (PlanetType::Rocky, 0.45),
            (PlanetType::Desert, 0.75),
            (PlanetType::SuperEarth, 0.90),
            (PlanetType::Iron, 1.0),
        ],
        Zone::Hz => &[
            (PlanetType::Rocky, 0.30),
            (PlanetType::Ocean, 0.60),
            (PlanetType::SuperEarth, 0.85),
            (PlanetType::Desert, 1.0),
        ],
        Zone::Cold => &[
            (PlanetType::Ice, 0.35),
            (PlanetType::SuperEarth, 0.50),
            (PlanetType::Desert, 0.60),
            (PlanetType::GasGiant, 0.80),
            (PlanetType::IceGiant, 1.0),
        ],
        Zone::FarOuter => &[
            (PlanetType::GasGiant, 0.45),
            (PlanetType::IceGiant, 0.80),
            (PlanetType::Ice, 0.90),
            (PlanetType::Rogue, 1.0),
        ],
    };
    let roll = rng.double();
    for (ty, cum) in table {
        if roll <= *cum {
            return *ty;
        }
    }
    table.last().unwrap().0
}

fn mass_range_earth(ty: PlanetType) -> (f64, f64) {
    match ty {
        PlanetType::Rocky => (0.1, 2.0),
        PlanetType::SuperEarth => (2.0, 10.0),
        PlanetType::Ocean => (0.5, 5.0),
        PlanetType::Desert => (0.1, 1.5),
        PlanetType::Lava => (0.1, 3.0),
        PlanetType::Iron => (0.3, 2.5),
        PlanetType::Carbon => (0.2, 3.0),
        PlanetType::Ice => (0.05, 2.0),
        PlanetType::GasGiant => (50.0, 500.0),
        PlanetType::IceGiant => (10.0, 50.0),
        PlanetType::Rogue => (0.01, 5.0),
    }
}

fn atmosphere_range_atm(ty: PlanetType) -> (f64, f64) {
    match ty {
        PlanetType::Rocky => (0.0, 1.2),
        PlanetType::SuperEarth => (0.5, 3.0),
        PlanetType::Ocean => (0.8, 2.0),
        PlanetType::Desert => (0.0, 0.5),
        PlanetType::Lava => (0.0, 5.0),
        PlanetType::Iron => (0.0, 0.3),
        PlanetType::Carbon => (0.1, 2.0),
        PlanetType::Ice => (0.0, 0.1),
        PlanetType::GasGiant => (100.0, 1000.0),
        PlanetType::IceGiant => (50.0, 500.0),
        PlanetType::Rogue => (0.0, 0.05),
    }
}

fn is_giant(ty: PlanetType) -> bool {
    matches!(ty, PlanetType::GasGiant | PlanetType::IceGiant)
}

fn is_terrestrial(ty: PlanetType) -> bool {
    matches!(
        ty,
        PlanetType::Rocky
            | PlanetType::SuperEarth
            | PlanetType::Ocean
            | PlanetType::Desert
            | PlanetType::Lava
            | PlanetType::Iron
            | PlanetType::Carbon
            | PlanetType::Ice
    )
}

/// Per-type resource gating: which channels get a `base + k * roll`
/// addition, one fresh roll per listed channel, in this order.
fn resource_gates(ty: PlanetType) -> &'static [(ResourceKind, f32, f32)] {
    match ty {
        PlanetType::Rocky => &[(ResourceKind::Metals, 0.1, 0.3), (ResourceKind::Silicates, 0.1, 0.4)],
        PlanetType::SuperEarth => &[
            (ResourceKind::Metals, 0.2, 0.3),
            (ResourceKind::Silicates, 0.1, 0.3),
            (ResourceKind::RareEarths, 0.05, 0.2),
        ],
        PlanetType::Ocean => &[(ResourceKind::Water, 0.3, 0.4), (ResourceKind::Hydrocarbons, 0.05, 0.2)],
        PlanetType::Desert => &[(ResourceKind::Silicates, 0.2, 0.3), (ResourceKind::RareEarths, 0.05, 0.25)],
        PlanetType::Lava => &[(ResourceKind::Metals, 0.2, 0.4), (ResourceKind::RareEarths, 0.1, 0.3)],
        PlanetType::Iron => &[(ResourceKind::Metals, 0.4, 0.5), (ResourceKind::RareEarths, 0.05, 0.15)],
        PlanetType::Carbon => &[(ResourceKind::Hydrocarbons, 0.2, 0.4), (ResourceKind::Silicates, 0.1, 0.2)],
        PlanetType::Ice => &[(ResourceKind::Water, 0.1, 0.3), (ResourceKind::Ice, 0.3, 0.5)],
        PlanetType::GasGiant => &[(ResourceKind::Hydrocarbons, 0.1, 0.3)],
        PlanetType::IceGiant => &[(ResourceKind::Ice, 0.2, 0.4), (ResourceKind::Water, 0.05, 0.15)],
        PlanetType::Rogue => &[(ResourceKind::Metals, 0.05, 0.1), (ResourceKind::Ice, 0.05, 0.1)],
    }
}

fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + (hi - lo) * t
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn roman(n: u32) -> String {
    const DIGITS: [(u32, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];
    let mut n = n;
    let mut s = String::new();
    for (value, sym) in DIGITS.iter() {
        while n >= *value {
            s.push_str(sym);
            n -= value;
        }
    }
    s
}

/// Generates planet `index` (0-based) around a primary of the given mass
/// and luminosity (solar units). `index` alone determines orbital spacing:
/// the first planet's `base_au` is drawn directly from `[0.1, 0.4)`, and
/// every later one multiplies a fresh `[0.2, 0.4)` draw by a `[1.4, 2.2)`
/// spacing ratio raised to `index`, a Titius-Bode-like progression. Each
/// call only needs its own `index`; no state carries over between calls.
pub fn generate_planet(
    rng: &mut Rng,
    star_name: &str,
    mass_star_solar: f64,
    luminosity_solar: f64,
    index: u32,
    id: Uid,
    config: &GeneratorConfig,
) -> Planet {
    let base_au = if index == 0 {
        0.1 + 0.3 * rng.double()
    } else {
        (0.2 + 0.2 * rng.double()) * (1.4 + 0.8 * rng.double()).powi(index as i32)
    };
    let orbital_radius_au = base_au * luminosity_solar.max(0.01).sqrt();

    let (inner, outer) = habitable_zone(luminosity_solar);
    let zone = classify_zone(orbital_radius_au, inner, outer, luminosity_solar);
    let planet_type = pick_type(rng, zone);

    let (m_lo, m_hi) = mass_range_earth(planet_type);
    let mass_earth = lerp(m_lo, m_hi, rng.double());

    let radius_earth = match planet_type {
        PlanetType::GasGiant => mass_earth.powf(0.06) * 11.0,
        PlanetType::IceGiant => mass_earth.powf(0.06) * 4.0,
        _ => mass_earth.powf(0.27),
    };

    let period_years = (orbital_radius_au.powi(3) / mass_star_solar.max(0.01)).sqrt();
    let orbital_period_days = period_years * DAYS_PER_YEAR;

    let ecc_roll = rng.double();
    let eccentricity = if ecc_roll < ECCENTRICITY_EXTREME_CHANCE {
        ECCENTRICITY_COMMON_MAX + rng.double() * 0.5
    } else {
        ecc_roll * ECCENTRICITY_COMMON_MAX
    };

    let tilt_roll = rng.double();
    let axial_tilt_deg = if tilt_roll < AXIAL_TILT_EXTREME_CHANCE {
        lerp(AXIAL_TILT_EXTREME_MIN_DEG, AXIAL_TILT_EXTREME_MAX_DEG, rng.double())
    } else {
        tilt_roll * AXIAL_TILT_EXTREME_MIN_DEG
    };

    let rotation_period_hours = if is_giant(planet_type) {
        8.0 + rng.double() * 20.0
    } else {
        5.0 + rng.double() * 200.0
    };

    let (p_lo, p_hi) = atmosphere_range_atm(planet_type);
    let atmosphere_pressure_atm = lerp(p_lo, p_hi, rng.double());

    let flux = luminosity_solar.max(0.0) / (orbital_radius_au * orbital_radius_au).max(1e-9);
    let mut surface_temp_k = 278.0 * flux.powf(0.25);
    if atmosphere_pressure_atm > 0.1 && !is_giant(planet_type) {
        surface_temp_k *= 1.0 + 0.1 * (1.0 + atmosphere_pressure_atm).ln();
    }

    let water_coverage = match planet_type {
        PlanetType::Ocean => {
            let r = rng.double();
            0.6 + 0.4 * r
        }
        PlanetType::SuperEarth | PlanetType::Rocky => {
            let r = rng.double();
            if surface_temp_k > 200.0 && surface_temp_k < 400.0 && atmosphere_pressure_atm > 0.01 {
                r * 0.8
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    let mag_roll = rng.double();
    let magnetic_field = if planet_type == PlanetType::GasGiant {
        5.0 + 15.0 * mag_roll
    } else if mass_earth > 0.5 && rotation_period_hours < 48.0 {
        0.1 + 2.0 * mag_roll
    } else {
        0.1 * mag_roll
    };

    let habitability_index = if surface_temp_k > 200.0 && surface_temp_k < 340.0 {
        let temp_score = clamp01(1.0 - ((surface_temp_k - 288.0).abs() / 70.0));
        let atm_score = clamp01(1.0 - ((atmosphere_pressure_atm - 1.0).abs() / 2.0));
        let water_score = clamp01(water_coverage);
        let mag_score = clamp01(magnetic_field / 2.0);
        let mass_score = clamp01(1.0 - ((mass_earth - 1.0).abs() / 5.0));
        clamp01(0.3 * temp_score + 0.2 * atm_score + 0.2 * water_score + 0.15 * mag_score + 0.15 * mass_score)
    } else {
        0.0
    };

    let rings = match planet_type {
        PlanetType::GasGiant => rng.double() < 0.40,
        PlanetType::IceGiant => rng.double() < 0.20,
        _ => false,
    };

    let moon_count = match planet_type {
        PlanetType::GasGiant => rng.range(8) as u32 + 2,
        PlanetType::IceGiant => rng.range(5) as u32 + 1,
        _ if is_terrestrial(planet_type) && mass_earth > 0.1 => rng.range(3) as u32,
        _ => 0,
    }
    .min(config.max_moons as u32);

    let mut resources = [0.0f32; RES_COUNT];
    for (kind, base, k) in resource_gates(planet_type) {
        let r = rng.double() as f32;
        resources[kind.index()] += base + k * r;
    }
    if rng.double() < EXOTIC_MATTER_CHANCE {
        resources[ResourceKind::ExoticMatter.index()] = 1.0;
    }

    let name = format!("{star_name} {}", roman(index + 1));

    log::trace!("generated planet {name} type={planet_type:?} a={orbital_radius_au:.3}AU");

    Planet {
        id,
        name,
        planet_type,
        orbital_radius_au,
        orbital_period_days,
        eccentricity,
        axial_tilt_deg,
        rotation_period_hours,
        mass_earth,
        radius_earth,
        surface_temp_k,
        atmosphere_pressure_atm,
        water_coverage,
        magnetic_field,
        habitability_index,
        rings,
        moon_count,
        resources,
        surveyed: false,
        discovered_by: Uid::NULL,
        discovery_tick: 0,
    }
}
