use std::collections::HashSet;

use rand::RngCore;

use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{CosmicCreator, Element, EntityType, Era, EventKind};
use crate::names::{self, cosmic};
use crate::tables;

pub const STAGE: &str = "cosmic_creators";

/// One creator per element. The parent is the primordial the element
/// favors, or the next primordial round-robin when that force is absent.
pub fn generate_cosmic_creators(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Vec<CosmicCreator>> {
    require(!ctx.primordials.is_empty(), "cosmic creators", "primordial beings")?;

    let mut used = HashSet::new();
    let mut creators = Vec::with_capacity(Element::ALL.len());

    for (i, element) in Element::ALL.iter().copied().enumerate() {
        let preferred = tables::element_primordial(element);
        let parent = ctx
            .primordials
            .iter()
            .find(|p| p.kind == preferred)
            .unwrap_or(&ctx.primordials[i % ctx.primordials.len()]);

        let name = names::select_name(
            &format!("creator:{element}"),
            cosmic::creator_names(element),
            Some(&mut used),
            rng,
        )?;
        let description = names::fill(
            names::pick(cosmic::CREATOR_DESCRIPTIONS, rng),
            &[
                ("name", name.as_str()),
                ("parent", parent.base.name.as_str()),
                ("verb", cosmic::element_verb(element)),
                ("element", element.as_str()),
            ],
        );
        let created_at = moment(Era::AgeOfCreation, rng);
        let base = ctx.factory.base(
            EntityType::CosmicCreator,
            element.as_str(),
            name,
            description,
            Some(parent.base.id.clone()),
            created_at,
        );

        ctx.events.record(
            STAGE,
            EventKind::Forging,
            format!(
                "{} was born of {} and {}.",
                base.name,
                parent.base.name,
                cosmic::element_verb(element)
            ),
            vec![base.id.clone(), parent.base.id.clone()],
            created_at,
        );
        creators.push(CosmicCreator {
            base,
            element,
            creations: Vec::new(),
        });
    }

    Ok(creators)
}

pub struct CosmicStage;

impl StageGenerator for CosmicStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::Cosmic
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let creators = generate_cosmic_creators(ctx, rng)?;
        let count = creators.len();
        ctx.cosmic_creators.extend(creators);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldGenError;
    use crate::model::PrimordialKind;
    use crate::worldgen::primordials::generate_primordials;
    use crate::worldgen::test_context;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn requires_primordials() {
        let mut ctx = test_context();
        let mut rng = SmallRng::seed_from_u64(1);
        let err = generate_cosmic_creators(&mut ctx, &mut rng).unwrap_err();
        assert!(matches!(err, WorldGenError::MissingDependency { .. }));
    }

    #[test]
    fn elements_follow_their_favored_force() {
        let mut ctx = test_context();
        let mut rng = SmallRng::seed_from_u64(1);
        let beings = generate_primordials(&mut ctx, PrimordialKind::DEFAULTS, &mut rng).unwrap();
        ctx.primordials = beings;
        let creators = generate_cosmic_creators(&mut ctx, &mut rng).unwrap();
        assert_eq!(creators.len(), 8);
        let water = creators.iter().find(|c| c.element == Element::Water).unwrap();
        let parent = ctx
            .primordials
            .iter()
            .find(|p| Some(&p.base.id) == water.base.parent_id.as_ref())
            .unwrap();
        assert_eq!(parent.kind, PrimordialKind::Time);
    }

    #[test]
    fn custom_forces_get_round_robin_children() {
        let mut ctx = test_context();
        let mut rng = SmallRng::seed_from_u64(3);
        let kinds = [PrimordialKind::Custom("Dream".to_string())];
        ctx.primordials = generate_primordials(&mut ctx, &kinds, &mut rng).unwrap();
        let creators = generate_cosmic_creators(&mut ctx, &mut rng).unwrap();
        let dream = &ctx.primordials[0].base.id;
        assert!(creators.iter().all(|c| c.base.parent_id.as_ref() == Some(dream)));
    }
}
