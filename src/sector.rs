//! Sector generator: given a galaxy seed and integer sector coordinate,
//! derives a star count and scatters systems through the sector cube.

use crate::config::GeneratorConfig;
use crate::constants::SECTOR_SIDE_LY;
use crate::prng::Rng;
use crate::spatial::sector_star_count;
use crate::system::{generate_system, System};
use crate::vec3::{SectorCoord, Vec3};

/// Generates up to `max_systems` star systems for `coord`, deterministic
/// in `(seed, coord)`. `config` carries the event-frequency and
/// fixed-capacity knobs threaded down into every generated system.
pub fn generate_sector(seed: u64, coord: SectorCoord, max_systems: usize, config: &GeneratorConfig) -> Vec<System> {
    let mut rng = Rng::derive(seed, coord.x, coord.y, coord.z);
    let count = (sector_star_count(&mut rng, coord) as usize).min(max_systems);
    let corner = coord.corner();

    log::debug!("generating sector ({},{},{}): {count} system(s)", coord.x, coord.y, coord.z);

    let mut systems = Vec::with_capacity(count);
    for i in 0..count {
        let position = Vec3::new(
            corner.x + rng.double() * SECTOR_SIDE_LY,
            corner.y + rng.double() * SECTOR_SIDE_LY,
            corner.z + rng.double() * SECTOR_SIDE_LY,
        );
        let uid_seed = seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(i as u64);
        systems.push(generate_system(&mut rng, position, coord, uid_seed, config));
    }
    systems
}
