mod common;

use common::{build_partial, epoch, generate};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use worldforge::model::{Element, PrimordialKind};
use worldforge::worldgen::conceptual::generate_conceptual_beings;
use worldforge::worldgen::{GenerationContext, GenerationDepth};
use worldforge::{OrganizationDensity, WorldGenError, WorldGenerationConfig};

#[test]
fn first_two_levels_of_test_seed() {
    let world = build_partial("test-seed-1", &[1, 2]);
    assert_eq!(world.primordials.len(), 6);
    assert_eq!(world.primordials.len(), PrimordialKind::DEFAULTS.len());
    assert_eq!(world.cosmic_creators.len(), 8);
    assert_eq!(world.cosmic_creators.len(), Element::ALL.len());
    let primordial_ids: Vec<_> = world.primordials.iter().map(|p| &p.base.id).collect();
    for creator in &world.cosmic_creators {
        let parent = creator.base.parent_id.as_ref().expect("parent");
        assert!(primordial_ids.contains(&parent));
    }
    assert!(world.geography.is_empty());
}

#[test]
fn dense_worlds_have_more_organizations() {
    let sparse = generate(
        WorldGenerationConfig::new("test-seed-1").with_density(OrganizationDensity::Sparse),
    );
    let dense = generate(
        WorldGenerationConfig::new("test-seed-1").with_density(OrganizationDensity::Dense),
    );
    assert_eq!(sparse.mortal_races.len(), dense.mortal_races.len());
    assert!(dense.organizations.len() > sparse.organizations.len());
}

#[test]
fn conceptual_beings_need_only_mortal_races() {
    let mut empty = GenerationContext::new("concepts", epoch());
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate_conceptual_beings(&mut empty, &mut rng).unwrap_err();
    assert!(matches!(err, WorldGenError::MissingDependency { .. }));

    let upstream = build_partial("concepts", &[1, 2, 3, 6]);
    let mut ctx = GenerationContext::new("concepts", epoch());
    ctx.mortal_races = upstream.mortal_races;
    let beings = generate_conceptual_beings(&mut ctx, &mut rng).unwrap();
    assert!(!beings.is_empty());
    assert!(ctx.cosmic_creators.is_empty() && ctx.demi_gods.is_empty());
}

#[test]
fn custom_races_and_primordials() {
    let config = WorldGenerationConfig::new("custom")
        .with_depth(GenerationDepth::Partial)
        .with_custom_races(["Sea Elf", "human"])
        .with_custom_primordials(["Dream", "Entropy"]);
    let world = generate(config);
    assert_eq!(world.primordials.len(), 2);
    let sea_elves = world
        .mortal_races
        .iter()
        .filter(|r| r.race.as_str().eq_ignore_ascii_case("sea elf"))
        .count();
    assert_eq!(sea_elves, 1);
    let humans = world
        .mortal_races
        .iter()
        .filter(|r| r.race.as_str().eq_ignore_ascii_case("human"))
        .count();
    assert_eq!(humans, 1);
    assert!(world.standout_mortals.is_empty());
    assert!(world.dungeons.is_empty());
}

#[test]
fn config_from_json() {
    let config = WorldGenerationConfig::from_json(
        r#"{"seed":"json","includeLevels":[1,2,3],"organizationDensity":"dense"}"#,
    )
    .unwrap();
    let world = generate(config);
    assert!(!world.geography.is_empty());
    assert!(world.mortal_races.is_empty());

    let bad = WorldGenerationConfig::from_json(r#"{"seed":"json","includeLevels":[10]}"#);
    assert!(bad.is_err());
}
