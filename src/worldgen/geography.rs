use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::debug;

use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{CosmicCreator, Element, EntityType, Era, EventKind, Geography, GeographyKind};
use crate::names::{self, cosmic, places, title_case};
use crate::tables;

pub const STAGE: &str = "geography";

/// Shape every geography kind one or more times. Each feature is parented by
/// a creator whose element the kind favors; without one, the non-magic
/// creators take turns. Magic creators never shape land or water.
pub fn generate_geography(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Vec<Geography>> {
    require(!ctx.cosmic_creators.is_empty(), "geography", "cosmic creators")?;
    let shapers: Vec<&CosmicCreator> = ctx
        .cosmic_creators
        .iter()
        .filter(|c| c.element != Element::Magic)
        .collect();
    require(!shapers.is_empty(), "geography", "non-magic cosmic creators")?;

    let mut used = HashSet::new();
    let mut features = Vec::new();
    let mut round_robin = 0usize;

    for kind in GeographyKind::ALL.iter().copied() {
        let (lo, hi) = places::feature_count(kind);
        let count = rng.random_range(lo..=hi);
        let preferred = tables::geography_elements(kind);

        for _ in 0..count {
            let matching: Vec<&CosmicCreator> = shapers
                .iter()
                .copied()
                .filter(|c| preferred.contains(&c.element))
                .collect();
            let creator = if matching.is_empty() {
                let creator = shapers[round_robin % shapers.len()];
                round_robin += 1;
                debug!(
                    kind = %kind,
                    creator = %creator.base.id,
                    "no affine creator, round-robin fallback"
                );
                creator
            } else {
                matching[rng.random_range(0..matching.len())]
            };

            let name = names::select_name(
                &format!("geography:{kind}"),
                &places::geography_names(kind),
                Some(&mut used),
                rng,
            )?;
            let magnitude = places::typical_magnitude(kind);
            let kind_label = title_case(kind.as_str()).to_lowercase();
            let description = names::fill(
                names::pick(places::GEOGRAPHY_DESCRIPTIONS, rng),
                &[
                    ("magnitude", magnitude.as_str()),
                    ("kind", kind_label.as_str()),
                    ("creator", creator.base.name.as_str()),
                    ("verb", cosmic::element_verb(creator.element)),
                    ("name", name.as_str()),
                ],
            );
            let created_at = moment(Era::AgeOfShaping, rng);
            let base = ctx.factory.base(
                EntityType::Geography,
                kind.as_str(),
                name,
                description,
                Some(creator.base.id.clone()),
                created_at,
            );

            ctx.events.record(
                STAGE,
                EventKind::Shaping,
                format!("{} shaped {}.", creator.base.name, base.name),
                vec![base.id.clone(), creator.base.id.clone()],
                created_at,
            );
            features.push(Geography {
                base,
                kind,
                magnitude,
            });
        }
    }

    Ok(features)
}

pub struct GeographyStage;

impl StageGenerator for GeographyStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::Geography
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let features = generate_geography(ctx, rng)?;
        let count = features.len();
        ctx.geography.extend(features);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldGenError;
    use crate::worldgen::{seeded_context, test_context};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn requires_creators() {
        let mut ctx = test_context();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(
            generate_geography(&mut ctx, &mut rng),
            Err(WorldGenError::MissingDependency { .. })
        ));
    }

    #[test]
    fn affinity_and_no_magic_parents() {
        let mut ctx = seeded_context("geo", &[WorldLevel::Primordial, WorldLevel::Cosmic]);
        let mut rng = SmallRng::seed_from_u64(5);
        let features = generate_geography(&mut ctx, &mut rng).unwrap();
        assert!(features.len() >= GeographyKind::ALL.len());
        for feature in &features {
            let parent = ctx
                .cosmic_creators
                .iter()
                .find(|c| Some(&c.base.id) == feature.base.parent_id.as_ref())
                .unwrap();
            assert_ne!(parent.element, Element::Magic);
            assert!(tables::geography_elements(feature.kind).contains(&parent.element));
        }
        let names: HashSet<_> = features.iter().map(|f| &f.base.name).collect();
        assert_eq!(names.len(), features.len());
    }

    #[test]
    fn falls_back_to_round_robin_among_non_magic() {
        let mut ctx = seeded_context("geo", &[WorldLevel::Primordial, WorldLevel::Cosmic]);
        ctx.cosmic_creators
            .retain(|c| matches!(c.element, Element::Magic | Element::Life));
        let mut rng = SmallRng::seed_from_u64(5);
        let features = generate_geography(&mut ctx, &mut rng).unwrap();
        let life = ctx
            .cosmic_creators
            .iter()
            .find(|c| c.element == Element::Life)
            .unwrap();
        assert!(features
            .iter()
            .all(|f| f.base.parent_id.as_ref() == Some(&life.base.id)));
    }

    #[test]
    fn magic_only_is_a_precondition_failure() {
        let mut ctx = seeded_context("geo", &[WorldLevel::Primordial, WorldLevel::Cosmic]);
        ctx.cosmic_creators.retain(|c| c.element == Element::Magic);
        let mut rng = SmallRng::seed_from_u64(5);
        assert!(generate_geography(&mut ctx, &mut rng).is_err());
    }
}
