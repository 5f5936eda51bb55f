use rand::{Rng, RngCore};
use tracing::debug;

use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{CosmicCreator, EntityType, Era, EventKind, Geography, MortalRace, RaceKind};
use crate::names::{self, peoples};
use crate::tables;

pub const STAGE: &str = "mortal_races";

/// Awaken one mortal race per requested race kind.
///
/// Default races are parented by a creator of an affine element; custom
/// races take creators round-robin. When no creators exist but demi-gods
/// do, demi-gods take the creator role.
pub fn generate_races(
    ctx: &mut GenerationContext,
    races: &[RaceKind],
    rng: &mut dyn RngCore,
) -> Result<Vec<MortalRace>> {
    require(!ctx.geography.is_empty(), "mortal races", "geography")?;
    require(
        !ctx.cosmic_creators.is_empty() || !ctx.demi_gods.is_empty(),
        "mortal races",
        "cosmic creators",
    )?;

    let land: Vec<&Geography> = ctx.geography.iter().filter(|g| !g.kind.is_water()).collect();
    let homelands: Vec<&Geography> = if land.is_empty() {
        ctx.geography.iter().collect()
    } else {
        land
    };

    let mut round_robin = 0usize;
    let mut out = Vec::with_capacity(races.len());

    for race in races {
        let (parent_id, parent_name) = if ctx.cosmic_creators.is_empty() {
            let demi = &ctx.demi_gods[round_robin % ctx.demi_gods.len()];
            round_robin += 1;
            debug!(race = %race, parent = %demi.base.id, "no cosmic creators, demi-god parent");
            (demi.base.id.clone(), demi.base.name.clone())
        } else {
            let creator = pick_creator(&ctx.cosmic_creators, race, &mut round_robin, rng);
            (creator.base.id.clone(), creator.base.name.clone())
        };

        let homeland = homelands[rng.random_range(0..homelands.len())];
        let (lo, hi) = peoples::population_range(race);
        let population = rng.random_range(lo..=hi);
        let name = peoples::race_display_name(race);
        let description = names::fill(
            names::pick(peoples::RACE_DESCRIPTIONS, rng),
            &[
                ("race", name.as_str()),
                ("creator", parent_name.as_str()),
                ("homeland", homeland.base.name.as_str()),
            ],
        );
        let created_at = moment(Era::AgeOfAwakening, rng);
        let base = ctx.factory.base(
            EntityType::MortalRace,
            race.as_str(),
            name,
            description,
            Some(parent_id.clone()),
            created_at,
        );

        ctx.events.record(
            STAGE,
            EventKind::RaceAwakened,
            format!("The {} awoke in {}.", base.name, homeland.base.name),
            vec![base.id.clone(), parent_id, homeland.base.id.clone()],
            created_at,
        );
        out.push(MortalRace {
            base,
            race: race.clone(),
            homeland_id: homeland.base.id.clone(),
            lifespan: peoples::lifespan(race),
            population,
        });
    }

    Ok(out)
}

fn pick_creator<'a>(
    creators: &'a [CosmicCreator],
    race: &RaceKind,
    round_robin: &mut usize,
    rng: &mut dyn RngCore,
) -> &'a CosmicCreator {
    let preferred = tables::race_elements(race);
    let matching: Vec<&CosmicCreator> = creators
        .iter()
        .filter(|c| preferred.contains(&c.element))
        .collect();
    if matching.is_empty() {
        let creator = &creators[*round_robin % creators.len()];
        *round_robin += 1;
        debug!(race = %race, creator = %creator.base.id, "unmapped race, round-robin creator");
        creator
    } else {
        matching[rng.random_range(0..matching.len())]
    }
}

pub struct RaceStage {
    pub races: Vec<RaceKind>,
}

impl StageGenerator for RaceStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::MortalRace
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let races = generate_races(ctx, &self.races, rng)?;
        let count = races.len();
        ctx.mortal_races.extend(races);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;
    use crate::worldgen::seeded_context;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn shaped() -> GenerationContext {
        seeded_context(
            "races",
            &[
                WorldLevel::Primordial,
                WorldLevel::Cosmic,
                WorldLevel::Geography,
            ],
        )
    }

    #[test]
    fn requires_geography() {
        let mut ctx = seeded_context("races", &[WorldLevel::Primordial, WorldLevel::Cosmic]);
        let mut rng = SmallRng::seed_from_u64(1);
        let err = generate_races(&mut ctx, RaceKind::DEFAULTS, &mut rng).unwrap_err();
        assert!(err.to_string().contains("geography"));
    }

    #[test]
    fn default_races_follow_affinity() {
        let mut ctx = shaped();
        let mut rng = SmallRng::seed_from_u64(1);
        let races = generate_races(&mut ctx, RaceKind::DEFAULTS, &mut rng).unwrap();
        assert_eq!(races.len(), RaceKind::DEFAULTS.len());
        for race in &races {
            let creator = ctx
                .cosmic_creators
                .iter()
                .find(|c| Some(&c.base.id) == race.base.parent_id.as_ref())
                .unwrap();
            assert!(tables::race_elements(&race.race).contains(&creator.element), "{}", race.race);
            let homeland = ctx.geography_by_id(&race.homeland_id).unwrap();
            assert!(!homeland.kind.is_water());
        }
        let dwarves = races.iter().find(|r| r.race == RaceKind::Dwarf).unwrap();
        assert_eq!(dwarves.base.id.as_str(), "mortal_race_dwarf_0");
    }

    #[test]
    fn custom_races_round_robin() {
        let mut ctx = shaped();
        let mut rng = SmallRng::seed_from_u64(1);
        let custom = [
            RaceKind::Custom("Sea Elf".to_string()),
            RaceKind::Custom("Moth Folk".to_string()),
        ];
        let races = generate_races(&mut ctx, &custom, &mut rng).unwrap();
        assert_eq!(races[0].base.parent_id.as_ref(), Some(&ctx.cosmic_creators[0].base.id));
        assert_eq!(races[1].base.parent_id.as_ref(), Some(&ctx.cosmic_creators[1].base.id));
        assert_eq!(races[0].base.id.as_str(), "mortal_race_sea_elf_0");
        assert_eq!(races[0].base.name, "Sea Elf");
    }

    #[test]
    fn missing_element_falls_back() {
        let mut ctx = shaped();
        ctx.cosmic_creators.retain(|c| c.element == Element::Water);
        let mut rng = SmallRng::seed_from_u64(1);
        let races = generate_races(&mut ctx, &[RaceKind::Dwarf], &mut rng).unwrap();
        assert_eq!(races[0].base.parent_id.as_ref(), Some(&ctx.cosmic_creators[0].base.id));
    }
}
