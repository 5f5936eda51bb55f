mod common;

use common::{build_partial, build_world};
use worldforge::worldgen::{get_geography, get_primordial_beings};

#[test]
fn same_seed_produces_identical_worlds() {
    let a = build_world("determinism");
    let b = build_world("determinism");
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn different_seeds_diverge() {
    let a = build_world("north");
    let b = build_world("south");
    let names_a: Vec<_> = a.primordials.iter().map(|p| &p.base.name).collect();
    let names_b: Vec<_> = b.primordials.iter().map(|p| &p.base.name).collect();
    let geo_a: Vec<_> = a.geography.iter().map(|g| &g.base.name).collect();
    let geo_b: Vec<_> = b.geography.iter().map(|g| &g.base.name).collect();
    assert!(names_a != names_b || geo_a != geo_b);
}

#[test]
fn partial_runs_match_the_full_run() {
    let full = build_world("partial");
    let partial = build_partial("partial", &[1, 2, 3, 6]);
    assert_eq!(partial.primordials, full.primordials);
    assert_eq!(partial.geography, full.geography);
    assert_eq!(partial.mortal_races, full.mortal_races);
    assert!(partial.organizations.is_empty());
    assert!(partial.dungeons.is_empty());
}

#[test]
fn projection_helpers_rerun_the_pipeline() {
    let full = build_world("helpers");
    let primordials = get_primordial_beings("helpers").unwrap();
    let names: Vec<_> = primordials.iter().map(|p| &p.base.name).collect();
    let full_names: Vec<_> = full.primordials.iter().map(|p| &p.base.name).collect();
    assert_eq!(names, full_names);

    let geography = get_geography("helpers", None).unwrap();
    assert_eq!(geography.len(), full.geography.len());
}
