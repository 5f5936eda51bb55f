pub mod bosses;
pub mod conceptual;
pub mod config;
pub mod context;
pub mod cosmic;
pub mod demigods;
pub mod dungeons;
pub mod geography;
pub mod lineages;
pub mod organizations;
pub mod primordials;
pub mod races;
pub mod registration;
pub mod stage;
pub mod standouts;

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use tracing::info;

use crate::error::Result;
use crate::model::{
    Era, GeneratedWorld, Geography, GeographyKind, Organization, OrganizationKind,
    PrimordialBeing, WorldTime,
};
use crate::seed::SeededRng;

pub use config::{GenerationDepth, OrganizationDensity, WorldGenerationConfig, WorldLevel};
pub use context::GenerationContext;
pub use stage::StageGenerator;

/// A random year within an era.
pub(crate) fn moment(era: Era, rng: &mut dyn RngCore) -> WorldTime {
    WorldTime::new(era, rng.random_range(0..1000))
}

fn stage_for(level: WorldLevel, config: &WorldGenerationConfig) -> Box<dyn StageGenerator> {
    match level {
        WorldLevel::Primordial => Box::new(primordials::PrimordialStage {
            kinds: config.primordial_kinds(),
        }),
        WorldLevel::Cosmic => Box::new(cosmic::CosmicStage),
        WorldLevel::Geography => Box::new(geography::GeographyStage),
        WorldLevel::Conceptual => Box::new(conceptual::ConceptualStage),
        WorldLevel::DemiGod => Box::new(demigods::DemiGodStage),
        WorldLevel::MortalRace => Box::new(races::RaceStage {
            races: config.races(),
        }),
        WorldLevel::Organization => Box::new(organizations::OrganizationStage {
            density: config.organization_density,
        }),
        WorldLevel::StandoutMortal => Box::new(standouts::StandoutStage),
        WorldLevel::Dungeon => Box::new(dungeons::DungeonStage),
    }
}

/// Stages to run, in execution order. Family lineages trail everything
/// else so registered leaders and bosses found houses too.
pub fn plan(config: &WorldGenerationConfig) -> Vec<Box<dyn StageGenerator>> {
    let levels = config.levels();
    let mut stages: Vec<Box<dyn StageGenerator>> =
        levels.iter().map(|level| stage_for(*level, config)).collect();
    if levels.contains(&WorldLevel::StandoutMortal) {
        stages.push(Box::new(lineages::LineageStage));
    }
    stages
}

/// Run every planned stage against `ctx`, each on its own seeded stream.
pub fn run_stages(ctx: &mut GenerationContext, stages: &[Box<dyn StageGenerator>]) -> Result<()> {
    for stage in stages {
        let mut rng = SeededRng::for_stage(&ctx.seed, stage.name());
        let produced = stage.run(ctx, &mut rng)?;
        info!(
            stage = stage.name(),
            level = stage.level().number(),
            produced,
            "stage complete"
        );
    }
    Ok(())
}

pub struct WorldGenerator {
    config: WorldGenerationConfig,
}

impl WorldGenerator {
    pub fn new(config: WorldGenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorldGenerationConfig {
        &self.config
    }

    /// Generate a world stamped with the current wall-clock time.
    pub fn generate(&self) -> Result<GeneratedWorld> {
        self.generate_at(Utc::now())
    }

    /// Generate a world with a fixed discovery timestamp. Same config and
    /// timestamp give byte-identical output.
    pub fn generate_at(&self, discovered_at: DateTime<Utc>) -> Result<GeneratedWorld> {
        let stages = plan(&self.config);
        let levels: Vec<u8> = self.config.levels().iter().map(|l| l.number()).collect();
        info!(seed = %self.config.seed, ?levels, "generating world");

        let mut ctx = GenerationContext::new(self.config.seed.clone(), discovered_at);
        run_stages(&mut ctx, &stages)?;
        let world = ctx.into_world();
        info!(
            seed = %world.seed,
            entities = world.entity_count(),
            events = world.world_events.len(),
            "world generated"
        );
        Ok(world)
    }
}

/// Generate a complete world from a config.
pub fn generate_world(config: &WorldGenerationConfig) -> Result<GeneratedWorld> {
    WorldGenerator::new(config.clone()).generate()
}

fn partial_run(seed: &str, levels: &[WorldLevel]) -> Result<GeneratedWorld> {
    let config = WorldGenerationConfig {
        include_levels: Some(levels.to_vec()),
        ..WorldGenerationConfig::new(seed)
    };
    WorldGenerator::new(config).generate()
}

/// The primordial beings a full run with this seed would produce.
pub fn get_primordial_beings(seed: &str) -> Result<Vec<PrimordialBeing>> {
    Ok(partial_run(seed, &[WorldLevel::Primordial])?.primordials)
}

/// Geography of a full run with this seed, optionally of one kind.
pub fn get_geography(seed: &str, kind: Option<GeographyKind>) -> Result<Vec<Geography>> {
    let world = partial_run(
        seed,
        &[
            WorldLevel::Primordial,
            WorldLevel::Cosmic,
            WorldLevel::Geography,
        ],
    )?;
    Ok(world
        .geography
        .into_iter()
        .filter(|g| kind.is_none_or(|k| g.kind == k))
        .collect())
}

/// Organizations of a full run with this seed, optionally of one magnitude
/// class.
pub fn get_organizations(
    seed: &str,
    magnitude: Option<OrganizationKind>,
) -> Result<Vec<Organization>> {
    let world = partial_run(
        seed,
        &[
            WorldLevel::Primordial,
            WorldLevel::Cosmic,
            WorldLevel::Geography,
            WorldLevel::MortalRace,
            WorldLevel::Organization,
        ],
    )?;
    Ok(world
        .organizations
        .into_iter()
        .filter(|org| magnitude.is_none_or(|k| org.kind == k))
        .collect())
}

#[cfg(test)]
pub(crate) fn test_context() -> GenerationContext {
    GenerationContext::new("test", DateTime::from_timestamp(0, 0).expect("epoch"))
}

/// Context with the given levels already generated, as a run would.
#[cfg(test)]
pub(crate) fn seeded_context(seed: &str, levels: &[WorldLevel]) -> GenerationContext {
    let config = WorldGenerationConfig {
        include_levels: Some(levels.to_vec()),
        ..WorldGenerationConfig::new(seed)
    };
    let mut ctx = GenerationContext::new(seed, DateTime::from_timestamp(0, 0).expect("epoch"));
    run_stages(&mut ctx, &plan(&config)).expect("upstream stages");
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(0, 0).unwrap()
    }

    #[test]
    fn plan_follows_execution_order_with_trailing_lineages() {
        let names: Vec<&str> = plan(&WorldGenerationConfig::new("x"))
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "primordials",
                "cosmic_creators",
                "geography",
                "mortal_races",
                "conceptual_beings",
                "demi_gods",
                "organizations",
                "standout_mortals",
                "dungeons",
                "family_lineages",
            ]
        );
    }

    #[test]
    fn minimal_depth_plans_three_stages() {
        let config = WorldGenerationConfig::new("x").with_depth(GenerationDepth::Minimal);
        assert_eq!(plan(&config).len(), 3);
    }

    #[test]
    fn pinned_timestamp_is_reproducible() {
        let generator = WorldGenerator::new(WorldGenerationConfig::new("repeat"));
        let a = generator.generate_at(epoch()).unwrap();
        let b = generator.generate_at(epoch()).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        assert_eq!(a.generated_at, epoch());
    }

    #[test]
    fn projections_match_full_run() {
        let full = WorldGenerator::new(WorldGenerationConfig::new("proj"))
            .generate()
            .unwrap();
        let geography = get_geography("proj", None).unwrap();
        let ids: Vec<_> = geography.iter().map(|g| &g.base.id).collect();
        let full_ids: Vec<_> = full.geography.iter().map(|g| &g.base.id).collect();
        assert_eq!(ids, full_ids);

        let mountains = get_geography("proj", Some(GeographyKind::MountainRange)).unwrap();
        assert!(mountains.iter().all(|g| g.kind == GeographyKind::MountainRange));

        let orgs = get_organizations("proj", None).unwrap();
        let names: Vec<_> = orgs.iter().map(|o| &o.base.name).collect();
        let full_names: Vec<_> = full.organizations.iter().map(|o| &o.base.name).collect();
        assert_eq!(names, full_names);
    }

    #[test]
    fn organizations_filter_by_magnitude_class() {
        let all = get_organizations("proj", None).unwrap();
        let kingdoms = get_organizations("proj", Some(OrganizationKind::Kingdom)).unwrap();
        assert!(kingdoms.iter().all(|o| o.kind == OrganizationKind::Kingdom));
        let expected = all.iter().filter(|o| o.kind == OrganizationKind::Kingdom).count();
        assert_eq!(kingdoms.len(), expected);
        assert!(kingdoms.len() < all.len());
    }

    #[test]
    fn skipping_a_dependency_fails_fast() {
        let config = WorldGenerationConfig::new("gap").with_levels(&[1, 3]).unwrap();
        let err = WorldGenerator::new(config).generate_at(epoch()).unwrap_err();
        assert!(err.to_string().contains("must be generated before"));
    }
}
