//! Probe data model. The surrounding simulation owns probe lifecycle and
//! economics; this crate only needs enough of the shape to mutate hull,
//! compute, and personality during event resolution.

use serde::{Deserialize, Serialize};

use crate::constants::TECH_COUNT;
use crate::uid::Uid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeStatus {
    Active,
    Dormant,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    InSystem,
    InTransit,
    Docked,
}

/// Index into `Probe::tech_levels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechField {
    Materials,
    Propulsion,
    Sensors,
    Energy,
    Computing,
}

impl TechField {
    pub const COUNT: usize = TECH_COUNT;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub empathy: f64,
    pub curiosity: f64,
    pub nostalgia_for_earth: f64,
    pub existential_angst: f64,
    pub drift_rate: f64,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            empathy: 0.5,
            curiosity: 0.5,
            nostalgia_for_earth: 0.3,
            existential_angst: 0.2,
            drift_rate: 1.0,
        }
    }
}

impl Personality {
    /// Nudges a trait by `delta` and clamps it back into `[0, 1]`.
    pub fn nudge(value: &mut f64, delta: f64) {
        *value = (*value + delta).clamp(0.0, 1.0);
    }

    pub fn clamp_all(&mut self) {
        for v in [
            &mut self.empathy,
            &mut self.curiosity,
            &mut self.nostalgia_for_earth,
            &mut self.existential_angst,
            &mut self.drift_rate,
        ] {
            *v = v.clamp(0.0, 1.0);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Probe {
    pub id: Uid,
    pub status: ProbeStatus,
    pub location_type: LocationType,
    pub current_system: Uid,
    pub hull_integrity: f64,
    pub energy_joules: f64,
    pub compute_capacity: f64,
    pub tech_levels: [f64; TECH_COUNT],
    pub personality: Personality,
}

impl Probe {
    pub fn new(id: Uid, current_system: Uid) -> Self {
        Self {
            id,
            status: ProbeStatus::Active,
            location_type: LocationType::InSystem,
            current_system,
            hull_integrity: 1.0,
            energy_joules: 1.0e9,
            compute_capacity: 1.0,
            tech_levels: [0.2; TECH_COUNT],
            personality: Personality::default(),
        }
    }

    pub fn tech(&self, field: TechField) -> f64 {
        self.tech_levels[field as usize]
    }

    pub fn is_active_in_system(&self) -> bool {
        self.status != ProbeStatus::Destroyed && self.location_type == LocationType::InSystem
    }

    pub fn damage_hull(&mut self, amount: f64) {
        self.hull_integrity = (self.hull_integrity - amount).max(0.0);
        if self.hull_integrity <= 0.0 {
            self.status = ProbeStatus::Destroyed;
        }
    }

    pub fn damage_compute(&mut self, amount: f64) {
        self.compute_capacity = (self.compute_capacity - amount).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_probe_is_healthy_and_active() {
        let p = Probe::new(Uid::new(1, 1), Uid::new(2, 2));
        assert_eq!(p.hull_integrity, 1.0);
        assert!(p.is_active_in_system());
    }

    #[test]
    fn hull_damage_clamps_at_zero_and_destroys() {
        let mut p = Probe::new(Uid::new(1, 1), Uid::new(2, 2));
        p.damage_hull(1.5);
        assert_eq!(p.hull_integrity, 0.0);
        assert_eq!(p.status, ProbeStatus::Destroyed);
    }

    #[test]
    fn personality_nudge_clamps() {
        let mut v = 0.98;
        Personality::nudge(&mut v, 0.1);
        assert_eq!(v, 1.0);
        Personality::nudge(&mut v, -2.0);
        assert_eq!(v, 0.0);
    }
}
