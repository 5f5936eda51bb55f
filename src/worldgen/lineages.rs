use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::warn;

use super::config::WorldLevel;
use super::context::GenerationContext;
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{EntityType, Era, EventKind, FamilyLineage, FamilyMember};
use crate::names::{self, peoples};

pub const STAGE: &str = "family_lineages";

/// Family name carried by a founder's descendants: the last word of their
/// name, ignoring any title or epithet.
pub fn surname_of(founder_name: &str) -> String {
    let mut name = founder_name.split(',').next().unwrap_or(founder_name);
    for marker in [" the ", " of "] {
        if let Some(idx) = name.find(marker) {
            name = &name[..idx];
        }
    }
    name.split_whitespace()
        .last()
        .unwrap_or(founder_name)
        .to_string()
}

#[derive(Debug, Default)]
pub struct LineageOutput {
    pub lineages: Vec<FamilyLineage>,
    pub members: Vec<FamilyMember>,
}

/// One lineage per standout mortal, each with 2-5 ordinary relatives.
pub fn generate_lineages(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<LineageOutput> {
    if ctx.standout_mortals.is_empty() {
        warn!("no standout mortals; skipping family lineages");
        return Ok(LineageOutput::default());
    }

    let mut out = LineageOutput::default();

    for founder in &ctx.standout_mortals {
        let Some(race) = ctx.mortal_races.iter().find(|r| r.base.id == founder.race_id) else {
            continue;
        };
        let surname = surname_of(&founder.base.name);
        let created_at = moment(Era::AgeOfHeroes, rng);
        let lineage_base = ctx.factory.base(
            EntityType::FamilyLineage,
            race.race.as_str(),
            format!("House {surname}"),
            format!("Kin of {} among the {}.", founder.base.name, race.base.name),
            Some(founder.base.id.clone()),
            created_at,
        );

        let pool: Vec<String> = peoples::given_names(&race.race)
            .iter()
            .map(|given| format!("{given} {surname}"))
            .collect();
        let mut used: HashSet<String> = HashSet::from([founder.base.name.clone()]);
        let count = rng.random_range(2..=5);
        let mut member_ids = Vec::with_capacity(count);

        for i in 0..count {
            let name =
                names::select_name(&format!("family:{surname}"), &pool, Some(&mut used), rng)?;
            let role = names::pick(peoples::FAMILY_ROLES, rng).to_string();
            let generation = 1 + (i / 2) as u32;
            let base = ctx.factory.base(
                EntityType::FamilyMember,
                "member",
                name,
                format!("A {role} of {}, generation {generation}.", lineage_base.name),
                Some(founder.base.id.clone()),
                moment(Era::AgeOfHeroes, rng),
            );
            member_ids.push(base.id.clone());
            out.members.push(FamilyMember {
                base,
                lineage_id: lineage_base.id.clone(),
                role,
                generation,
            });
        }

        ctx.events.record(
            STAGE,
            EventKind::LineageFounded,
            format!("{} founded {}.", founder.base.name, lineage_base.name),
            vec![lineage_base.id.clone(), founder.base.id.clone()],
            created_at,
        );
        out.lineages.push(FamilyLineage {
            base: lineage_base,
            founder_id: founder.base.id.clone(),
            race_id: race.base.id.clone(),
            surname,
            member_ids,
        });
    }

    Ok(out)
}

/// Runs after dungeons so that registered leaders and bosses found
/// lineages too.
pub struct LineageStage;

impl StageGenerator for LineageStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::StandoutMortal
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let output = generate_lineages(ctx, rng)?;
        let count = output.lineages.len() + output.members.len();
        ctx.family_lineages.extend(output.lineages);
        ctx.family_members.extend(output.members);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worldgen::{seeded_context, test_context};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn surname_strips_titles_and_epithets() {
        assert_eq!(surname_of("Aldric Ashford"), "Ashford");
        assert_eq!(surname_of("Gruk, Tyrant of the Deep"), "Gruk");
        assert_eq!(surname_of("Morwen the Pale"), "Morwen");
        assert_eq!(surname_of("Thalia of Greymoor"), "Thalia");
        assert_eq!(surname_of("Solo"), "Solo");
    }

    #[test]
    fn members_hang_off_the_founder() {
        let mut ctx = seeded_context(
            "kin",
            &[
                WorldLevel::Primordial,
                WorldLevel::Cosmic,
                WorldLevel::Geography,
                WorldLevel::MortalRace,
                WorldLevel::StandoutMortal,
            ],
        );
        ctx.family_lineages.clear();
        ctx.family_members.clear();
        let mut rng = SmallRng::seed_from_u64(1);
        let out = generate_lineages(&mut ctx, &mut rng).unwrap();
        assert_eq!(out.lineages.len(), ctx.standout_mortals.len());
        for lineage in &out.lineages {
            assert!((2..=5).contains(&lineage.member_ids.len()));
            assert_eq!(lineage.base.parent_id.as_ref(), Some(&lineage.founder_id));
            let members: Vec<&FamilyMember> = out
                .members
                .iter()
                .filter(|m| m.lineage_id == lineage.base.id)
                .collect();
            assert_eq!(members.len(), lineage.member_ids.len());
            let names: HashSet<_> = members.iter().map(|m| &m.base.name).collect();
            assert_eq!(names.len(), members.len());
            for m in members {
                assert_eq!(m.base.parent_id.as_ref(), Some(&lineage.founder_id));
                assert!(m.base.name.ends_with(&lineage.surname));
                assert!(m.generation >= 1);
            }
        }
    }

    #[test]
    fn no_mortals_no_lineages() {
        let mut ctx = test_context();
        let mut rng = SmallRng::seed_from_u64(2);
        let out = generate_lineages(&mut ctx, &mut rng).unwrap();
        assert!(out.lineages.is_empty());
        assert!(out.members.is_empty());
    }
}
