//! System generator: assembles 1-3 stars and the primary's planets.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::planet::{generate_planet, Planet};
use crate::prng::Rng;
use crate::star::{generate_star, Star, StarClass};
use crate::uid::Uid;
use crate::vec3::{SectorCoord, Vec3};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct System {
    pub id: Uid,
    pub position: Vec3,
    pub sector_coord: SectorCoord,
    pub star_count: u8,
    pub stars: Vec<Star>,
    pub name: String,
    pub planet_count: u32,
    pub planets: Vec<Planet>,
    pub visited: bool,
    pub first_visit_tick: u64,
}

/// Companion-star positional offset, in the same galactic light-year
/// units as `Vec3`. Each companion sits a fixed `±COMPANION_OFFSET` from
/// the primary, alternating sign, rather than scaling with its index.
const COMPANION_OFFSET: f64 = 0.0005;

fn star_count(rng: &mut Rng) -> u8 {
    let r = rng.double();
    if r < 0.70 {
        1
    } else if r < 0.95 {
        2
    } else {
        3
    }
}

fn planet_count_baseline(rng: &mut Rng, class: StarClass) -> u32 {
    match class {
        StarClass::Neutron | StarClass::BlackHole => rng.range(3) as u32,
        StarClass::O | StarClass::B => 1 + rng.range(4) as u32,
        _ => 2 + rng.range(10) as u32,
    }
}

/// Generates a system at `position` within `sector_coord`. `rng` must
/// already be positioned for this system (i.e. the sector generator
/// drives consumption order across systems).
pub fn generate_system(
    rng: &mut Rng,
    position: Vec3,
    sector_coord: SectorCoord,
    uid_seed: u64,
    config: &GeneratorConfig,
) -> System {
    let system_id = Uid::derive(rng, uid_seed);
    let n_stars = star_count(rng);

    let mut stars = Vec::with_capacity(n_stars as usize);
    let primary_id = Uid::derive(rng, uid_seed.wrapping_add(1));
    let primary = generate_star(rng, position, primary_id);
    stars.push(primary);

    for i in 1..n_stars {
        let sign = if i % 2 == 1 { 1.0 } else { -1.0 };
        let offset = Vec3::new(position.x + sign * COMPANION_OFFSET, position.y + sign * COMPANION_OFFSET, position.z);
        let companion_id = Uid::derive(rng, uid_seed.wrapping_add(1 + i as u64));
        stars.push(generate_star(rng, offset, companion_id));
    }

    let primary = &stars[0];
    let mut planet_count = planet_count_baseline(rng, primary.class);
    if primary.metallicity > 0.1 {
        planet_count += 1 + rng.range(2) as u32;
    }
    if n_stars > 1 {
        planet_count = planet_count * 2 / 3;
    }
    planet_count = planet_count.clamp(0, config.max_planets as u32);

    let mut planets = Vec::with_capacity(planet_count as usize);
    for i in 0..planet_count {
        let planet_id = Uid::derive(rng, uid_seed.wrapping_add(100 + i as u64));
        planets.push(generate_planet(
            rng,
            &primary.name,
            primary.mass_solar,
            primary.luminosity_solar,
            i,
            planet_id,
            config,
        ));
    }

    log::debug!(
        "generated system {} with {n_stars} star(s) and {} planet(s)",
        primary.name,
        planets.len()
    );

    System {
        id: system_id,
        position,
        sector_coord,
        star_count: n_stars,
        name: primary.name.clone(),
        stars,
        planet_count,
        planets,
        visited: false,
        first_visit_tick: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_count_is_in_range() {
        let mut rng = Rng::seed(1);
        for _ in 0..1000 {
            let c = star_count(&mut rng);
            assert!((1..=3).contains(&c));
        }
    }

    #[test]
    fn system_generation_is_deterministic() {
        let mut a = Rng::derive(5, 1, 2, 3);
        let mut b = Rng::derive(5, 1, 2, 3);
        let config = GeneratorConfig::default();
        let sys_a = generate_system(&mut a, Vec3::ZERO, SectorCoord::new(1, 2, 3), 7, &config);
        let sys_b = generate_system(&mut b, Vec3::ZERO, SectorCoord::new(1, 2, 3), 7, &config);
        assert_eq!(sys_a.star_count, sys_b.star_count);
        assert_eq!(sys_a.planet_count, sys_b.planet_count);
        assert_eq!(sys_a.name, sys_b.name);
    }

    #[test]
    fn planet_count_never_exceeds_cap() {
        let mut rng = Rng::seed(2);
        let config = GeneratorConfig::default();
        for i in 0..200 {
            let sys = generate_system(&mut rng, Vec3::ZERO, SectorCoord::new(0, 0, 0), i, &config);
            assert!(sys.planet_count <= config.max_planets as u32);
            assert_eq!(sys.planets.len() as u32, sys.planet_count);
        }
    }

    #[test]
    fn companion_offset_is_fixed_and_alternates_sign() {
        let mut rng = Rng::seed(42);
        let config = GeneratorConfig::default();
        for i in 0..2000 {
            let sys = generate_system(&mut rng, Vec3::ZERO, SectorCoord::new(0, 0, 0), i, &config);
            for (j, star) in sys.stars.iter().enumerate().skip(1) {
                let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
                assert!((star.position.x - sign * COMPANION_OFFSET).abs() < 1e-12);
                assert!((star.position.y - sign * COMPANION_OFFSET).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn planets_orbit_primary_only() {
        let mut rng = Rng::seed(3);
        let config = GeneratorConfig::default();
        let sys = generate_system(&mut rng, Vec3::ZERO, SectorCoord::new(0, 0, 0), 1, &config);
        assert_eq!(sys.name, sys.stars[0].name);
    }
}
