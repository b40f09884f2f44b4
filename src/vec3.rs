//! Galactic light-year coordinates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn radial_distance_xy(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Integer sector coordinate; each sector is a `SECTOR_SIDE_LY`-wide cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl SectorCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The galactic-coordinate corner of this sector (the `(0,0,0)` corner
    /// of the cube, not its center).
    pub fn corner(&self) -> Vec3 {
        Vec3::new(
            self.x as f64 * crate::constants::SECTOR_SIDE_LY,
            self.y as f64 * crate::constants::SECTOR_SIDE_LY,
            self.z as f64 * crate::constants::SECTOR_SIDE_LY,
        )
    }
}
