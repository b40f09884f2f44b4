//! Environment/config knobs (spec §6): event frequencies and registry
//! capacities, overridable by an external layer via a RON document.

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub freq_discovery: f64,
    pub freq_anomaly: f64,
    pub freq_hazard: f64,
    pub freq_encounter: f64,
    pub freq_crisis: f64,
    pub freq_wonder: f64,
    pub max_event_log: usize,
    pub max_anomalies: usize,
    pub max_civilizations: usize,
    pub max_events_per_tick: usize,
    pub max_planets: usize,
    pub max_moons: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            freq_discovery: FREQ_DISCOVERY,
            freq_anomaly: FREQ_ANOMALY,
            freq_hazard: FREQ_HAZARD,
            freq_encounter: FREQ_ENCOUNTER,
            freq_crisis: FREQ_CRISIS,
            freq_wonder: FREQ_WONDER,
            max_event_log: MAX_EVENT_LOG,
            max_anomalies: MAX_ANOMALIES,
            max_civilizations: MAX_CIVILIZATIONS,
            max_events_per_tick: MAX_EVENTS_PER_TICK,
            max_planets: MAX_PLANETS,
            max_moons: MAX_MOONS,
        }
    }
}

impl GeneratorConfig {
    /// Parses a RON document into a config, falling back to documented
    /// defaults for any field the document omits.
    pub fn from_ron_str(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_constants() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.max_planets, MAX_PLANETS);
        assert_eq!(cfg.freq_crisis, FREQ_CRISIS);
    }

    #[test]
    fn round_trips_through_ron() {
        let cfg = GeneratorConfig::default();
        let text = cfg.to_ron_string().unwrap();
        let parsed = GeneratorConfig::from_ron_str(&text).unwrap();
        assert_eq!(cfg, parsed);
    }
}
