use std::collections::HashSet;

use rand::{Rng, RngCore};

use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{ConceptualBeing, EntityType, Era, EventKind, MortalRace};
use crate::names::{self, divine};
use crate::tables;

pub const STAGE: &str = "conceptual_beings";

/// Draw 2-4 concepts for a race: its preferred pool first, then the global
/// pool, never repeating a concept within the race.
pub fn draw_concepts(race: &MortalRace, rng: &mut dyn RngCore) -> Vec<&'static str> {
    let count = rng.random_range(2..=4usize);
    let preferred = tables::race_concepts(&race.race);
    let mut concepts = names::pick_distinct(preferred, count, rng);
    if concepts.len() < count {
        let rest: Vec<&'static str> = divine::CONCEPTS
            .iter()
            .copied()
            .filter(|c| !concepts.contains(c))
            .collect();
        concepts.extend(names::pick_distinct(&rest, count - concepts.len(), rng));
    }
    concepts
}

/// Conceptual beings arise from mortal worship, so the only hard
/// dependency is mortal races.
pub fn generate_conceptual_beings(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Vec<ConceptualBeing>> {
    require(!ctx.mortal_races.is_empty(), "conceptual beings", "mortal races")?;

    let mut beings = Vec::new();

    for race in &ctx.mortal_races {
        let mut used = HashSet::new();
        for concept in draw_concepts(race, rng) {
            let name = names::select_name(
                &format!("concept:{}:{concept}", race.race),
                &divine::concept_names(&race.race, concept),
                Some(&mut used),
                rng,
            )?;
            let description = names::fill(
                names::pick(divine::CONCEPT_DESCRIPTIONS, rng),
                &[
                    ("race", race.base.name.as_str()),
                    ("name", name.as_str()),
                    ("concept", concept),
                ],
            );
            let worshiped_by = std::iter::once(race.base.id.clone())
                .chain(
                    ctx.mortal_races
                        .iter()
                        .filter(|other| other.base.id != race.base.id)
                        .filter(|other| tables::race_concepts(&other.race).contains(&concept))
                        .map(|other| other.base.id.clone()),
                )
                .collect();
            let created_at = moment(Era::AgeOfFaith, rng);
            let base = ctx.factory.base(
                EntityType::ConceptualBeing,
                concept,
                name,
                description,
                Some(race.base.id.clone()),
                created_at,
            );

            ctx.events.record(
                STAGE,
                EventKind::ConceptBorn,
                format!("The prayers of the {} gave form to {}.", race.base.name, base.name),
                vec![base.id.clone(), race.base.id.clone()],
                created_at,
            );
            beings.push(ConceptualBeing {
                base,
                concept: concept.to_string(),
                race_id: race.base.id.clone(),
                worshiped_by,
            });
        }
    }

    Ok(beings)
}

pub struct ConceptualStage;

impl StageGenerator for ConceptualStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::Conceptual
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let beings = generate_conceptual_beings(ctx, rng)?;
        let count = beings.len();
        ctx.conceptual_beings.extend(beings);
        Ok(count)
    }
}
