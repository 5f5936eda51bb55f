use std::collections::{BTreeSet, HashSet};

use rand::{Rng, RngCore};
use tracing::debug;

use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::id::EntityId;
use crate::model::{DemiGod, DemiGodKind, DemiGodOrigin, EntityType, Era, EventKind, MortalRace};
use crate::names::{self, divine};
use crate::tables;

pub const STAGE: &str = "demi_gods";

/// Parent chosen for one demi-god, with the name used in its description.
struct Parent {
    id: EntityId,
    name: String,
}

/// Creator pool for divine experiments: each creator parents at most one
/// experiment until every creator has been used.
struct ExperimentPool {
    used: BTreeSet<EntityId>,
}

impl ExperimentPool {
    fn draw(&mut self, ctx: &GenerationContext, rng: &mut dyn RngCore) -> Parent {
        let available: Vec<_> = ctx
            .cosmic_creators
            .iter()
            .filter(|c| !self.used.contains(&c.base.id))
            .collect();
        if !available.is_empty() {
            let creator = available[rng.random_range(0..available.len())];
            self.used.insert(creator.base.id.clone());
            return Parent {
                id: creator.base.id.clone(),
                name: creator.base.name.clone(),
            };
        }
        debug!("every creator already parents an experiment, falling back");
        if !ctx.conceptual_beings.is_empty() {
            let being = &ctx.conceptual_beings[rng.random_range(0..ctx.conceptual_beings.len())];
            return Parent {
                id: being.base.id.clone(),
                name: being.base.name.clone(),
            };
        }
        any_creator(ctx, rng)
    }
}

fn any_creator(ctx: &GenerationContext, rng: &mut dyn RngCore) -> Parent {
    let creator = &ctx.cosmic_creators[rng.random_range(0..ctx.cosmic_creators.len())];
    Parent {
        id: creator.base.id.clone(),
        name: creator.base.name.clone(),
    }
}

/// A conceptual being, or a cosmic creator when no concepts exist.
fn divine_patron(
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> (Parent, Option<EntityId>, Option<String>) {
    if ctx.conceptual_beings.is_empty() {
        return (any_creator(ctx, rng), None, None);
    }
    let being = &ctx.conceptual_beings[rng.random_range(0..ctx.conceptual_beings.len())];
    (
        Parent {
            id: being.base.id.clone(),
            name: being.base.name.clone(),
        },
        Some(being.race_id.clone()),
        Some(being.concept.clone()),
    )
}

fn pick_race<'a>(
    ctx: &'a GenerationContext,
    preferred: Option<&EntityId>,
    rng: &mut dyn RngCore,
) -> &'a MortalRace {
    preferred
        .and_then(|id| ctx.race(id))
        .unwrap_or_else(|| &ctx.mortal_races[rng.random_range(0..ctx.mortal_races.len())])
}

/// Build the archetype payload, its parent, and the description detail.
/// Returns `None` when the archetype needs races and none exist.
fn origin_for(
    kind: DemiGodKind,
    ctx: &GenerationContext,
    pool: &mut ExperimentPool,
    name: &str,
    rng: &mut dyn RngCore,
) -> Option<(DemiGodOrigin, Parent, String)> {
    let needs_race = matches!(kind, DemiGodKind::HalfGod | DemiGodKind::AscendedMortal);
    if needs_race && ctx.mortal_races.is_empty() {
        return None;
    }

    let built = match kind {
        DemiGodKind::HalfGod => {
            let (parent, race_id, _) = divine_patron(ctx, rng);
            let race = pick_race(ctx, race_id.as_ref(), rng);
            let detail = race.base.name.clone();
            let origin = DemiGodOrigin::HalfGod {
                race_id: race.base.id.clone(),
                divine_parent_id: parent.id.clone(),
            };
            (origin, parent, detail)
        }
        DemiGodKind::AncientCreature => {
            let creature = names::pick(divine::ANCIENT_CREATURES, rng);
            let element = divine::creature_element(creature);
            let kin: Vec<_> = ctx
                .cosmic_creators
                .iter()
                .filter(|c| Some(c.element) == element)
                .collect();
            let parent = match kin.as_slice() {
                [] => any_creator(ctx, rng),
                many => {
                    let c = many[rng.random_range(0..many.len())];
                    Parent {
                        id: c.base.id.clone(),
                        name: c.base.name.clone(),
                    }
                }
            };
            let lairs: Vec<_> = ctx
                .geography
                .iter()
                .filter(|g| {
                    element.is_some_and(|e| tables::geography_elements(g.kind).contains(&e))
                })
                .collect();
            let lair_id = if lairs.is_empty() {
                None
            } else {
                Some(lairs[rng.random_range(0..lairs.len())].base.id.clone())
            };
            let origin = DemiGodOrigin::AncientCreature {
                creature: creature.to_string(),
                lair_id,
            };
            (origin, parent, creature.to_string())
        }
        DemiGodKind::DivineExperiment => {
            let parent = pool.draw(ctx, rng);
            let count = rng.random_range(1..=6usize);
            let features: Vec<String> =
                names::pick_distinct(divine::EXPERIMENT_FEATURES, count, rng)
                    .into_iter()
                    .map(String::from)
                    .collect();
            let detail = divine::experiment_description(name, &parent.name, &features);
            let origin = DemiGodOrigin::DivineExperiment {
                creator_id: parent.id.clone(),
                features,
            };
            (origin, parent, detail)
        }
        DemiGodKind::FallenDivine => {
            let (parent, _, concept) = divine_patron(ctx, rng);
            let former_domain =
                concept.unwrap_or_else(|| names::pick(divine::FALLEN_DOMAINS, rng).to_string());
            let origin = DemiGodOrigin::FallenDivine {
                former_domain: former_domain.clone(),
            };
            (origin, parent, former_domain)
        }
        DemiGodKind::AscendedMortal => {
            let (parent, _, _) = divine_patron(ctx, rng);
            let race = pick_race(ctx, None, rng);
            let former_calling = names::pick(divine::MORTAL_CALLINGS, rng).to_string();
            let detail = format!("{} {former_calling}", race.base.name);
            let origin = DemiGodOrigin::AscendedMortal {
                race_id: race.base.id.clone(),
                former_calling,
            };
            (origin, parent, detail)
        }
        DemiGodKind::PrimordialSpawn => {
            let primordial = &ctx.primordials[rng.random_range(0..ctx.primordials.len())];
            let essence = names::pick(divine::SPAWN_ESSENCES, rng).to_string();
            let parent = Parent {
                id: primordial.base.id.clone(),
                name: primordial.base.name.clone(),
            };
            let origin = DemiGodOrigin::PrimordialSpawn {
                essence: essence.clone(),
            };
            (origin, parent, essence)
        }
    };
    Some(built)
}

/// One or two demi-gods of every archetype.
pub fn generate_demi_gods(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Vec<DemiGod>> {
    require(!ctx.primordials.is_empty(), "demi-gods", "primordial beings")?;
    require(!ctx.cosmic_creators.is_empty(), "demi-gods", "cosmic creators")?;

    let mut used_names = HashSet::new();
    let mut pool = ExperimentPool {
        used: BTreeSet::new(),
    };
    let mut out = Vec::new();

    for kind in DemiGodKind::ALL.iter().copied() {
        let count = rng.random_range(1..=2u32);
        for _ in 0..count {
            let name = names::select_name(
                &format!("demigod:{kind}"),
                divine::demigod_names(kind),
                Some(&mut used_names),
                rng,
            )?;
            let Some((origin, parent, detail)) = origin_for(kind, ctx, &mut pool, &name, rng) else {
                debug!(kind = %kind, "no mortal races, skipping archetype");
                used_names.remove(&name);
                break;
            };

            let alignment = tables::demigod_leaning(kind).roll(rng);
            let power_count = rng.random_range(2..=3);
            let powers = names::pick_distinct(divine::demigod_powers(kind), power_count, rng)
                .into_iter()
                .map(String::from)
                .collect();
            let description = divine::demigod_description(kind, &name, &parent.name, &detail);
            let created_at = moment(Era::AgeOfLegends, rng);
            let base = ctx.factory.base(
                EntityType::DemiGod,
                kind.as_str(),
                name,
                description,
                Some(parent.id.clone()),
                created_at,
            );

            ctx.events.record(
                STAGE,
                EventKind::DemiGodRose,
                format!(
                    "{} rose, a {} of {} bearing.",
                    base.name,
                    kind.as_str().replace('_', " "),
                    alignment
                ),
                vec![base.id.clone(), parent.id],
                created_at,
            );
            out.push(DemiGod::new(base, origin, alignment, powers));
        }
    }

    Ok(out)
}

pub struct DemiGodStage;

impl StageGenerator for DemiGodStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::DemiGod
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let demi_gods = generate_demi_gods(ctx, rng)?;
        let count = demi_gods.len();
        ctx.demi_gods.extend(demi_gods);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worldgen::seeded_context;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn upstream(seed: &str) -> GenerationContext {
        seeded_context(
            seed,
            &[
                WorldLevel::Primordial,
                WorldLevel::Cosmic,
                WorldLevel::Geography,
                WorldLevel::MortalRace,
                WorldLevel::Conceptual,
            ],
        )
    }

    #[test]
    fn every_archetype_present_and_boss_flag_derived() {
        let mut ctx = upstream("demi");
        let mut rng = SmallRng::seed_from_u64(1);
        let gods = generate_demi_gods(&mut ctx, &mut rng).unwrap();
        for kind in DemiGodKind::ALL {
            assert!(gods.iter().any(|g| g.kind() == *kind), "{kind}");
        }
        for g in &gods {
            assert_eq!(g.is_boss, g.alignment.is_boss());
        }
        let names: HashSet<_> = gods.iter().map(|g| &g.base.name).collect();
        assert_eq!(names.len(), gods.len());
    }

    #[test]
    fn experiments_use_distinct_creators() {
        for seed in 0..20 {
            let mut ctx = upstream("demi");
            let mut rng = SmallRng::seed_from_u64(seed);
            let gods = generate_demi_gods(&mut ctx, &mut rng).unwrap();
            let creators: Vec<_> = gods
                .iter()
                .filter_map(|g| match &g.origin {
                    DemiGodOrigin::DivineExperiment { creator_id, .. } => Some(creator_id),
                    _ => None,
                })
                .collect();
            let unique: HashSet<_> = creators.iter().collect();
            assert_eq!(unique.len(), creators.len());
        }
    }

    #[test]
    fn pool_falls_back_after_exhaustion() {
        let ctx = upstream("demi");
        let mut pool = ExperimentPool {
            used: ctx.cosmic_creators.iter().map(|c| c.base.id.clone()).collect(),
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let parent = pool.draw(&ctx, &mut rng);
        assert!(ctx.conceptual_beings.iter().any(|b| b.base.id == parent.id));
    }

    #[test]
    fn exhausted_pool_without_concepts_reuses_a_creator() {
        let mut ctx = upstream("demi");
        ctx.conceptual_beings.clear();
        let mut pool = ExperimentPool {
            used: ctx.cosmic_creators.iter().map(|c| c.base.id.clone()).collect(),
        };
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..10 {
            let parent = pool.draw(&ctx, &mut rng);
            assert!(ctx.cosmic_creators.iter().any(|c| c.base.id == parent.id));
        }
    }

    #[test]
    fn race_archetypes_skipped_without_races() {
        let mut ctx = seeded_context(
            "demi",
            &[
                WorldLevel::Primordial,
                WorldLevel::Cosmic,
                WorldLevel::Geography,
            ],
        );
        let mut rng = SmallRng::seed_from_u64(1);
        let gods = generate_demi_gods(&mut ctx, &mut rng).unwrap();
        assert!(gods.iter().all(|g| g.origin.race_id().is_none()));
        assert!(gods.iter().any(|g| g.kind() == DemiGodKind::PrimordialSpawn));
    }

    #[test]
    fn spawn_parent_is_primordial() {
        let mut ctx = upstream("demi");
        let mut rng = SmallRng::seed_from_u64(2);
        let gods = generate_demi_gods(&mut ctx, &mut rng).unwrap();
        for g in gods.iter().filter(|g| g.kind() == DemiGodKind::PrimordialSpawn) {
            let parent = g.base.parent_id.as_ref().unwrap();
            assert!(ctx.primordials.iter().any(|p| &p.base.id == parent));
        }
    }
}
