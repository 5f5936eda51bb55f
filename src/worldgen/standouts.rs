use std::collections::{BTreeSet, HashSet};

use rand::{Rng, RngCore};

use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::registration::{self, register_leader};
use super::stage::StageGenerator;
use crate::error::{Result, WorldGenError};
use crate::id::EntityId;
use crate::model::{
    Archetype, EntityType, Era, EventKind, Geography, MortalRace, Organization, StandoutMortal,
};
use crate::tables;

pub const STAGE: &str = "standout_mortals";

/// Archetypes that may raise a tower, which later themes their dungeon.
const TOWER_BUILDERS: &[Archetype] = &[
    Archetype::Wizard,
    Archetype::Archmage,
    Archetype::Sorcerer,
    Archetype::Necromancer,
    Archetype::Lich,
];

/// Birthplace for a mortal: an organization of their race, then any
/// organization, then a random geography.
fn birthplace<'a>(
    organizations: &'a [Organization],
    geography: &[Geography],
    race: &MortalRace,
    rng: &mut dyn RngCore,
) -> Result<(Option<&'a Organization>, EntityId, String)> {
    let own: Vec<&Organization> = organizations
        .iter()
        .filter(|o| o.race_id == race.base.id)
        .collect();
    let org = if !own.is_empty() {
        Some(own[rng.random_range(0..own.len())])
    } else if !organizations.is_empty() {
        Some(&organizations[rng.random_range(0..organizations.len())])
    } else {
        None
    };
    if let Some(org) = org {
        return Ok((Some(org), org.base.id.clone(), org.base.name.clone()));
    }
    if geography.is_empty() {
        return Err(WorldGenError::NoGeography {
            stage: "standout mortals",
        });
    }
    let geo = &geography[rng.random_range(0..geography.len())];
    Ok((None, geo.base.id.clone(), geo.base.name.clone()))
}

/// Generate 2-4 named mortals per race, then register a leader for every
/// organization that no born ruler took charge of.
pub fn generate_standout_mortals(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Vec<StandoutMortal>> {
    require(!ctx.mortal_races.is_empty(), "standout mortals", "mortal races")?;

    let mut used: HashSet<String> = ctx
        .standout_mortals
        .iter()
        .map(|m| m.base.name.clone())
        .collect();
    let mut led: BTreeSet<EntityId> = BTreeSet::new();
    let mut out = Vec::new();

    for race in &ctx.mortal_races {
        let count = rng.random_range(2..=4);
        for _ in 0..count {
            let archetype = Archetype::ALL[rng.random_range(0..Archetype::ALL.len())];
            let alignment = tables::alignment_leaning(archetype).roll(rng);
            let (org, birthplace_id, birthplace_name) =
                birthplace(&ctx.organizations, &ctx.geography, race, rng)?;
            let name = registration::mortal_name(&race.race, &mut used, rng)?;
            let history = registration::synthesize_history(
                archetype,
                &race.base.name,
                &birthplace_name,
                rng,
            );
            let powers = registration::powers(archetype, rng);
            let description = format!(
                "{} {name} of the {}, born in {birthplace_name}.",
                archetype.title(),
                race.base.name
            );
            let parent = org.map_or_else(|| race.base.id.clone(), |o| o.base.id.clone());
            let created_at = moment(Era::AgeOfHeroes, rng);
            let base = ctx.factory.base(
                EntityType::StandoutMortal,
                archetype.as_str(),
                name,
                description,
                Some(parent),
                created_at,
            );
            let mut mortal = StandoutMortal::new(
                base,
                archetype,
                race.base.id.clone(),
                org.map(|o| o.base.id.clone()),
                birthplace_id,
                alignment,
                powers,
                history,
            );

            if let Some(org) = org {
                if archetype.can_rule()
                    && org.race_id == race.base.id
                    && led.insert(org.base.id.clone())
                {
                    mortal.leads = Some(org.base.id.clone());
                    ctx.events.record(
                        STAGE,
                        EventKind::LeaderRose,
                        format!("{} rose to lead {}.", mortal.base.name, org.base.name),
                        vec![mortal.base.id.clone(), org.base.id.clone()],
                        created_at,
                    );
                }
            }

            ctx.events.record(
                STAGE,
                EventKind::MortalBorn,
                format!("{} was born in {birthplace_name}.", mortal.base.name),
                vec![mortal.base.id.clone(), mortal.birthplace_id.clone()],
                created_at,
            );
            if TOWER_BUILDERS.contains(&archetype) && rng.random_bool(0.5) {
                ctx.events.record(
                    STAGE,
                    EventKind::TowerRaised,
                    format!(
                        "The {} {} raised a tower near {birthplace_name}.",
                        archetype.as_str().replace('_', " "),
                        mortal.base.name
                    ),
                    vec![mortal.base.id.clone()],
                    created_at,
                );
            }
            out.push(mortal);
        }
    }

    for org in &ctx.organizations {
        if led.contains(&org.base.id) {
            continue;
        }
        let Some(race) = ctx.mortal_races.iter().find(|r| r.base.id == org.race_id) else {
            continue;
        };
        let leader = register_leader(
            &mut ctx.factory,
            &mut ctx.events,
            STAGE,
            org,
            race,
            &mut used,
            rng,
        )?;
        led.insert(org.base.id.clone());
        out.push(leader);
    }

    Ok(out)
}

pub struct StandoutStage;

impl StageGenerator for StandoutStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::StandoutMortal
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let mortals = generate_standout_mortals(ctx, rng)?;
        let count = mortals.len();
        ctx.standout_mortals.extend(mortals);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worldgen::seeded_context;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn upstream(with_orgs: bool) -> GenerationContext {
        let mut levels = vec![
            WorldLevel::Primordial,
            WorldLevel::Cosmic,
            WorldLevel::Geography,
            WorldLevel::MortalRace,
        ];
        if with_orgs {
            levels.push(WorldLevel::Organization);
        }
        seeded_context("mortals", &levels)
    }

    #[test]
    fn born_into_own_race_organizations() {
        let mut ctx = upstream(true);
        let mut rng = SmallRng::seed_from_u64(1);
        let mortals = generate_standout_mortals(&mut ctx, &mut rng).unwrap();
        for m in &mortals {
            assert_eq!(m.is_boss, m.alignment.is_boss());
            let org = ctx.organization(m.organization_id.as_ref().unwrap()).unwrap();
            assert_eq!(org.race_id, m.race_id, "{}", m.base.name);
            assert!((1..=4).contains(&m.history.len()));
        }
        let names: HashSet<_> = mortals.iter().map(|m| &m.base.name).collect();
        assert_eq!(names.len(), mortals.len());
    }

    #[test]
    fn every_organization_gets_exactly_one_leader() {
        let mut ctx = upstream(true);
        let mut rng = SmallRng::seed_from_u64(2);
        let mortals = generate_standout_mortals(&mut ctx, &mut rng).unwrap();
        for org in &ctx.organizations {
            let leaders = mortals
                .iter()
                .filter(|m| m.leads.as_ref() == Some(&org.base.id))
                .count();
            assert_eq!(leaders, 1, "{}", org.base.name);
        }
    }

    #[test]
    fn without_organizations_born_in_geography() {
        let mut ctx = upstream(false);
        let mut rng = SmallRng::seed_from_u64(3);
        let mortals = generate_standout_mortals(&mut ctx, &mut rng).unwrap();
        for m in &mortals {
            assert!(m.organization_id.is_none());
            assert!(ctx.geography_by_id(&m.birthplace_id).is_some());
            assert_eq!(m.base.parent_id.as_ref(), Some(&m.race_id));
        }
    }

    #[test]
    fn race_without_organizations_born_into_another() {
        let ctx = upstream(true);
        let race = &ctx.mortal_races[0];
        let others: Vec<Organization> = ctx
            .organizations
            .iter()
            .filter(|o| o.race_id != race.base.id)
            .cloned()
            .collect();
        assert!(!others.is_empty());
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..20 {
            let (org, birthplace_id, name) =
                birthplace(&others, &ctx.geography, race, &mut rng).unwrap();
            let org = org.expect("falls back to any organization");
            assert_ne!(org.race_id, race.base.id);
            assert_eq!(birthplace_id, org.base.id);
            assert_eq!(name, org.base.name);
        }
    }
}
