mod common;

use std::collections::HashMap;

use common::build_world;
use worldforge::model::dungeon::{MAX_DEPTH, MIN_DEPTH};
use worldforge::model::{Dungeon, EntityType};

#[test]
fn depth_and_boss_coverage() {
    for seed in ["delve-1", "delve-2", "delve-3"] {
        let world = build_world(seed);
        for d in &world.dungeons {
            assert!(
                (MIN_DEPTH..=MAX_DEPTH).contains(&d.depth),
                "{} depth {}",
                d.base.name,
                d.depth
            );
            let final_boss = d.final_boss.as_ref().expect("final boss");
            assert_eq!(final_boss.level, d.depth);
            let levels: Vec<u32> = d.mid_bosses.iter().map(|s| s.level).collect();
            assert_eq!(levels, Dungeon::mid_boss_levels(d.depth), "{}", d.base.name);
        }
    }
}

#[test]
fn no_boss_guards_two_dungeons() {
    let world = build_world("exclusive");
    let mut guarded = HashMap::new();
    for record in world.bosses() {
        if let Some(other) = guarded.insert(&record.slot.boss_id, record.dungeon_id) {
            panic!("{} guards both {other} and {}", record.slot.boss_name, record.dungeon_id);
        }
    }
}

#[test]
fn dungeon_creating_mortals_guard_their_own_dungeon() {
    let world = build_world("lairs");
    for m in world.standout_mortals.iter().filter(|m| m.archetype.creates_dungeon()) {
        let dungeon = world
            .dungeons
            .iter()
            .find(|d| d.creator_id == m.base.id)
            .expect("creator has a dungeon");
        assert_eq!(dungeon.creator_type, EntityType::StandoutMortal);
        assert_eq!(dungeon.final_boss.as_ref().unwrap().boss_id, m.base.id);
    }
}

#[test]
fn dungeon_seeds_differ() {
    let world = build_world("seeds");
    let mut seeds: Vec<u64> = world.dungeons.iter().map(|d| d.seed).collect();
    let total = seeds.len();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), total);
}
