mod common;

use std::collections::{HashMap, HashSet};

use common::build_world;
use worldforge::model::{BossType, EntityType};

#[test]
fn parents_precede_their_children() {
    let world = build_world("integrity");
    let entities = world.entities();
    let mut position = HashMap::new();
    for (i, e) in entities.iter().enumerate() {
        assert!(
            position.insert(e.base().id.clone(), i).is_none(),
            "duplicate id {}",
            e.base().id
        );
    }
    for (i, e) in entities.iter().enumerate() {
        let base = e.base();
        match &base.parent_id {
            None => assert_eq!(
                e.entity_type(),
                EntityType::PrimordialBeing,
                "{} has no parent",
                base.id
            ),
            Some(parent) => {
                let at = position
                    .get(parent)
                    .unwrap_or_else(|| panic!("{} points at missing {parent}", base.id));
                assert!(*at < i, "{} points forward at {parent}", base.id);
            }
        }
    }
}

#[test]
fn boss_flag_follows_alignment() {
    let world = build_world("alignment");
    for g in &world.demi_gods {
        assert_eq!(g.is_boss, g.alignment.is_boss(), "{}", g.base.name);
    }
    for m in &world.standout_mortals {
        assert_eq!(m.is_boss, m.alignment.is_boss(), "{}", m.base.name);
    }
}

#[test]
fn names_are_unique_in_scope() {
    let world = build_world("names");

    let mut per_race: HashMap<_, HashSet<&str>> = HashMap::new();
    for c in &world.conceptual_beings {
        assert!(
            per_race.entry(&c.race_id).or_default().insert(&c.base.name),
            "duplicate conceptual name {}",
            c.base.name
        );
    }

    let orgs: HashSet<_> = world.organizations.iter().map(|o| &o.base.name).collect();
    assert_eq!(orgs.len(), world.organizations.len());

    let mortals: HashSet<_> = world.standout_mortals.iter().map(|m| &m.base.name).collect();
    assert_eq!(mortals.len(), world.standout_mortals.len());
}

#[test]
fn every_organization_has_a_leader() {
    let world = build_world("leaders");
    for org in &world.organizations {
        let leader_id = org.leader_id.as_ref().expect("leader");
        let leader = world
            .standout_mortals
            .iter()
            .find(|m| &m.base.id == leader_id)
            .expect("leader is a standout mortal");
        assert_eq!(leader.leads.as_ref(), Some(&org.base.id));
        assert_eq!(leader.race_id, org.race_id);
    }
}

#[test]
fn creations_list_direct_children() {
    let world = build_world("creations");
    let total: usize = world.cosmic_creators.iter().map(|c| c.creations.len()).sum();
    assert!(total > 0);
    for creator in &world.cosmic_creators {
        for child in &creator.creations {
            let entity = world.find(child).expect("creation exists");
            assert_eq!(entity.base().parent_id.as_ref(), Some(&creator.base.id));
        }
    }
}

#[test]
fn registered_bosses_are_standout_mortals() {
    let world = build_world("registered");
    for record in world.bosses() {
        match record.slot.boss_type {
            BossType::DemiGod => assert!(
                world
                    .demi_gods
                    .iter()
                    .any(|g| g.base.id == record.slot.boss_id)
            ),
            BossType::StandoutMortal | BossType::Procedural => {
                let mortal = world
                    .standout_mortals
                    .iter()
                    .find(|m| m.base.id == record.slot.boss_id)
                    .expect("boss registered");
                if record.slot.boss_type == BossType::Procedural {
                    assert!(mortal.base.id.as_str().starts_with("standout_mortal_boss_"));
                }
                assert_eq!(mortal.lair_id.as_ref(), Some(record.dungeon_id));
            }
        }
    }
}

#[test]
fn every_event_references_known_entities() {
    let world = build_world("events");
    let ids: HashSet<_> = world.entities().iter().map(|e| e.base().id.clone()).collect();
    assert!(!world.world_events.is_empty());
    for event in &world.world_events {
        assert!(event.id.as_str().starts_with("world_event_"));
        for id in &event.entity_ids {
            assert!(ids.contains(id), "{} references unknown {id}", event.id);
        }
    }
}
