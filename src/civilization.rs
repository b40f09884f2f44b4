//! Alien civilization generator: on encounter with a habitable planet,
//! probabilistically produces a civilization bound to that world.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ARTIFACTS, MAX_CULTURAL_TRAITS};
use crate::error::{GenError, GenResult};
use crate::names::civilization_name;
use crate::planet::{Planet, PlanetType};
use crate::prng::Rng;
use crate::uid::Uid;

/// 13-level civilization ladder, walked in this order for the cumulative
/// table in `pick_civ_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CivType {
    Microbial,
    Multicellular,
    ComplexEcosystem,
    PreTool,
    ToolUsing,
    PreIndustrial,
    Extinct,
    Industrial,
    InformationAge,
    Spacefaring,
    AdvancedSpacefaring,
    PostBiological,
    Transcended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    Unaware,
    Friendly,
    Neutral,
    Wary,
    Hostile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiologyBase {
    Carbon,
    Silicon,
    Ammonia,
    Exotic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CivState {
    Thriving,
    Declining,
    Endangered,
    Extinct,
    Ascending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Civilization {
    pub id: Uid,
    pub homeworld_id: Uid,
    pub name: String,
    pub civ_type: CivType,
    pub disposition: Disposition,
    pub tech_level: u8,
    pub biology_base: BiologyBase,
    pub state: CivState,
    pub discovered_tick: u64,
    pub discovered_by: Uid,
    pub artifacts: Vec<String>,
    pub cultural_traits: Vec<String>,
}

fn is_presapient(ty: CivType) -> bool {
    matches!(ty, CivType::Microbial | CivType::Multicellular | CivType::ComplexEcosystem | CivType::PreTool)
}

/// Probability that a habitable planet harbors a civilization, per
/// spec §4.8: `habitability * 1e-4 * (1+water) * (2 if rocky/superearth/ocean)`.
pub fn alien_check_planet(planet: &Planet) -> f64 {
    let type_bonus = if matches!(planet.planet_type, PlanetType::Rocky | PlanetType::SuperEarth | PlanetType::Ocean) {
        2.0
    } else {
        1.0
    };
    planet.habitability_index * 1e-4 * (1.0 + planet.water_coverage) * type_bonus
}

fn pick_civ_type(rng: &mut Rng) -> CivType {
    const TABLE: [(CivType, f64); 12] = [
        (CivType::Microbial, 0.40),
        (CivType::Multicellular, 0.60),
        (CivType::ComplexEcosystem, 0.75),
        (CivType::PreTool, 0.82),
        (CivType::ToolUsing, 0.87),
        (CivType::PreIndustrial, 0.90),
        (CivType::Extinct, 0.93),
        (CivType::Industrial, 0.95),
        (CivType::InformationAge, 0.97),
        (CivType::Spacefaring, 0.98),
        (CivType::AdvancedSpacefaring, 0.99),
        (CivType::PostBiological, 0.995),
    ];
    let roll = rng.double();
    for (ty, cum) in TABLE {
        if roll <= cum {
            return ty;
        }
    }
    CivType::Transcended
}

fn base_tech_level(ty: CivType) -> u8 {
    match ty {
        CivType::Microbial | CivType::Multicellular | CivType::ComplexEcosystem => 0,
        CivType::PreTool => 1,
        CivType::ToolUsing => 2,
        CivType::PreIndustrial => 3,
        CivType::Extinct => 0, // overridden below
        CivType::Industrial => 4,
        CivType::InformationAge => 5,
        CivType::Spacefaring => 6,
        CivType::AdvancedSpacefaring => 8,
        CivType::PostBiological => 10,
        CivType::Transcended => 12,
    }
}

fn pick_biology(rng: &mut Rng) -> BiologyBase {
    let r = rng.double();
    if r <= 0.70 {
        BiologyBase::Carbon
    } else if r <= 0.85 {
        BiologyBase::Silicon
    } else if r <= 0.95 {
        BiologyBase::Ammonia
    } else {
        BiologyBase::Exotic
    }
}

fn pick_state(rng: &mut Rng, ty: CivType) -> CivState {
    if ty == CivType::Extinct {
        return CivState::Extinct;
    }
    if ty == CivType::Transcended {
        return CivState::Ascending;
    }
    let r = rng.double();
    if r <= 0.50 {
        CivState::Thriving
    } else if r <= 0.70 {
        CivState::Declining
    } else if r <= 0.85 {
        CivState::Endangered
    } else if r <= 0.95 {
        CivState::Extinct
    } else {
        CivState::Ascending
    }
}

const CULTURAL_TRAITS: [&str; 16] = [
    "ritualistic", "collectivist", "individualist", "nomadic", "militarist",
    "scholarly", "mercantile", "isolationist", "expansionist", "artistic",
    "monastic", "egalitarian", "hierarchical", "pacifist", "xenophilic", "stoic",
];

/// Attempts to generate a civilization on `planet`. Returns
/// `GenError::NoCivGenerated` (with no output produced) when the
/// probability roll fails; the caller's `civ` slot is left untouched.
pub fn alien_generate_civ(
    rng: &mut Rng,
    planet: &Planet,
    homeworld_id: Uid,
    discovered_by: Uid,
    discovered_tick: u64,
    civ_uid: Uid,
) -> GenResult<Civilization> {
    let p = alien_check_planet(planet);
    if rng.double() >= p {
        return Err(GenError::NoCivGenerated);
    }

    let civ_type = pick_civ_type(rng);
    Ok(build_civilization(rng, civ_type, homeworld_id, discovered_by, discovered_tick, civ_uid))
}

fn build_civilization(
    rng: &mut Rng,
    civ_type: CivType,
    homeworld_id: Uid,
    discovered_by: Uid,
    discovered_tick: u64,
    civ_uid: Uid,
) -> Civilization {
    let name = civilization_name(rng);

    let disposition = if is_presapient(civ_type) {
        Disposition::Unaware
    } else {
        match rng.range(4) {
            0 => Disposition::Friendly,
            1 => Disposition::Neutral,
            2 => Disposition::Wary,
            _ => Disposition::Hostile,
        }
    };

    let tech_level = if civ_type == CivType::Extinct {
        3 + rng.range(15) as u8
    } else {
        base_tech_level(civ_type)
    };

    let biology_base = pick_biology(rng);
    let state = pick_state(rng, civ_type);

    let artifact_count = if civ_type == CivType::Extinct {
        2 + rng.range(4) as usize
    } else if tech_level >= 5 {
        rng.range(3) as usize
    } else {
        0
    }
    .min(MAX_ARTIFACTS);
    let artifacts = (0..artifact_count)
        .map(|i| format!("relic-{}", rng.range(1_000_000) + i as u64))
        .collect();

    let trait_count = (1 + rng.range(MAX_CULTURAL_TRAITS as u64) as usize).min(MAX_CULTURAL_TRAITS);
    let cultural_traits = (0..trait_count)
        .map(|_| CULTURAL_TRAITS[rng.range(CULTURAL_TRAITS.len() as u64) as usize].to_string())
        .collect();

    Civilization {
        id: civ_uid,
        homeworld_id,
        name,
        civ_type,
        disposition,
        tech_level,
        biology_base,
        state,
        discovered_tick,
        discovered_by,
        artifacts,
        cultural_traits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::planet::generate_planet;

    fn ideal_planet() -> Planet {
        let mut rng = Rng::seed(1);
        let mut p = generate_planet(&mut rng, "Test", 1.0, 1.0, 0, Uid::new(1, 1), &GeneratorConfig::default());
        p.planet_type = PlanetType::Ocean;
        p.habitability_index = 1.0;
        p.water_coverage = 1.0;
        p
    }

    #[test]
    fn alien_check_matches_spec_formula() {
        let p = ideal_planet();
        let prob = alien_check_planet(&p);
        assert!((prob - 4e-4).abs() < 1e-12);
    }

    #[test]
    fn success_rate_matches_spec_vector() {
        let p = ideal_planet();
        let prob = alien_check_planet(&p);
        let n = 2_000_000u64;
        let mut successes = 0u64;
        for i in 0..n {
            let mut rng = Rng::seed(i);
            if rng.double() < prob {
                successes += 1;
            }
        }
        let rate = successes as f64 / n as f64;
        assert!((rate - prob).abs() / prob < 0.5, "rate {rate} vs expected {prob}");
    }

    #[test]
    fn no_civ_leaves_output_untouched_on_failure() {
        let mut rng = Rng::seed(2);
        let mut p = generate_planet(&mut rng, "Test", 1.0, 1.0, 0, Uid::new(1, 1), &GeneratorConfig::default());
        p.habitability_index = 0.0;
        let result = alien_generate_civ(&mut rng, &p, Uid::new(2, 2), Uid::new(3, 3), 10, Uid::new(4, 4));
        assert_eq!(result.unwrap_err(), GenError::NoCivGenerated);
    }

    #[test]
    fn extinct_tech_override_in_range() {
        for seed in 0..10_000u64 {
            let mut rng = Rng::seed(seed);
            if pick_civ_type(&mut rng) == CivType::Extinct {
                let civ = build_civilization(&mut rng, CivType::Extinct, Uid::new(1, 1), Uid::new(2, 2), 1, Uid::new(3, 3));
                assert!(civ.tech_level >= 3 && civ.tech_level < 18);
                assert_eq!(civ.state, CivState::Extinct);
                return;
            }
        }
        panic!("no seed produced an Extinct civilization in range");
    }
}
