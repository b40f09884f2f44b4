//! Physical and structural invariants that must hold for every generated
//! system/planet, independent of seed.

use sectorforge::config::GeneratorConfig;
use sectorforge::constants::{DAYS_PER_YEAR, MAX_PLANETS};
use sectorforge::planet::habitable_zone;
use sectorforge::sector::generate_sector;
use sectorforge::vec3::SectorCoord;

#[test]
fn every_planet_obeys_keplers_third_law() {
    let config = GeneratorConfig::default();
    for seed in 0..20u64 {
        let systems = generate_sector(seed, SectorCoord::new(0, 0, 0), 30, &config);
        for system in &systems {
            let star = &system.stars[0];
            for planet in &system.planets {
                let expected = DAYS_PER_YEAR * (planet.orbital_radius_au.powi(3) / star.mass_solar.max(0.01)).sqrt();
                let rel_err = (planet.orbital_period_days - expected).abs() / expected.max(1e-9);
                assert!(rel_err < 1e-6, "seed {seed}: relative error {rel_err}");
            }
        }
    }
}

#[test]
fn habitability_index_always_in_unit_interval() {
    let config = GeneratorConfig::default();
    for seed in 0..20u64 {
        let systems = generate_sector(seed, SectorCoord::new(1, 1, 1), 30, &config);
        for system in &systems {
            for planet in &system.planets {
                assert!((0.0..=1.0).contains(&planet.habitability_index));
                if !(planet.surface_temp_k > 200.0 && planet.surface_temp_k < 340.0) {
                    assert_eq!(planet.habitability_index, 0.0);
                }
            }
        }
    }
}

#[test]
fn habitable_zone_bounds_scale_with_sqrt_luminosity() {
    let (inner, outer) = habitable_zone(4.0);
    assert!((inner - 0.95 * 2.0).abs() < 1e-9);
    assert!((outer - 1.37 * 2.0).abs() < 1e-9);
}

#[test]
fn planet_counts_never_exceed_registry_cap() {
    let config = GeneratorConfig::default();
    for seed in 0..50u64 {
        let systems = generate_sector(seed, SectorCoord::new(-2, 0, 3), 30, &config);
        for system in &systems {
            assert!(system.planet_count as usize <= MAX_PLANETS);
            assert_eq!(system.planets.len(), system.planet_count as usize);
        }
    }
}

#[test]
fn uids_are_never_null() {
    let config = GeneratorConfig::default();
    let systems = generate_sector(99, SectorCoord::new(0, 0, 0), 30, &config);
    for system in &systems {
        assert!(!system.id.is_null());
        for star in &system.stars {
            assert!(!star.id.is_null());
        }
        for planet in &system.planets {
            assert!(!planet.id.is_null());
        }
    }
}
