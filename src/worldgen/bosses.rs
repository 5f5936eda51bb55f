//! Boss assignment for generated dungeons.
//!
//! Evil demi-gods and evil standout mortals are drained from pools as they
//! are assigned, so no entity guards two dungeons. When the pools run dry a
//! boss is synthesized from a hash of the dungeon seed and slot level and
//! registered as a standout mortal.

use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::debug;

use super::context::{EntityFactory, EventLog};
use super::registration::{BossPost, register_boss};
use crate::id::EntityId;
use crate::model::{
    Alignment, BossSlot, BossType, DemiGod, Dungeon, EventKind, MortalRace, StandoutMortal,
};
use crate::names::{self, dungeons as dungeon_names};
use crate::seed::stable_hash;

/// Chance a bossless dungeon prefers a demi-god over a mortal.
const DEMI_GOD_PREFERENCE: f64 = 0.6;
/// Chance a mid-boss slot reuses an existing evil mortal.
const MORTAL_MID_BOSS_CHANCE: f64 = 0.3;

/// Deterministic boss name for a dungeon slot, before disambiguation.
pub fn procedural_boss_name(hash: u64, race: &MortalRace) -> String {
    let pool = dungeon_names::boss_names(Some(&race.race));
    let name = pool[(hash % pool.len() as u64) as usize];
    let titles = dungeon_names::BOSS_TITLES;
    let title = titles[((hash >> 16) % titles.len() as u64) as usize];
    format!("{name}, {title}")
}

pub fn slot_hash(dungeon_seed: u64, level: u32) -> u64 {
    stable_hash(&format!("{dungeon_seed}:{level}"))
}

fn race_label(races: &[MortalRace], id: &EntityId) -> Option<String> {
    races
        .iter()
        .find(|r| &r.base.id == id)
        .map(|r| r.race.as_str().to_string())
}

/// Owned pools drained as bosses are assigned.
pub struct BossAssignment<'a> {
    demi_gods: Vec<&'a DemiGod>,
    mortals: Vec<&'a StandoutMortal>,
    races: &'a [MortalRace],
    used_names: HashSet<String>,
    pub stage: &'static str,
}

impl<'a> BossAssignment<'a> {
    /// Build the pools: evil demi-gods, and evil mortals that did not delve a
    /// dungeon themselves.
    pub fn new(
        stage: &'static str,
        demi_gods: &'a [DemiGod],
        mortals: &'a [StandoutMortal],
        races: &'a [MortalRace],
    ) -> Self {
        let demi_pool = demi_gods
            .iter()
            .filter(|g| g.alignment == Alignment::Evil && g.is_boss)
            .collect();
        let mortal_pool = mortals
            .iter()
            .filter(|m| m.alignment == Alignment::Evil && m.is_boss)
            .filter(|m| !m.archetype.creates_dungeon())
            .collect();
        let used_names = mortals.iter().map(|m| m.base.name.clone()).collect();
        Self {
            demi_gods: demi_pool,
            mortals: mortal_pool,
            races,
            used_names,
            stage,
        }
    }

    pub fn remaining(&self) -> (usize, usize) {
        (self.demi_gods.len(), self.mortals.len())
    }

    fn pop_demi_god(&mut self, rng: &mut dyn RngCore) -> Option<&'a DemiGod> {
        if self.demi_gods.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.demi_gods.len());
        Some(self.demi_gods.remove(idx))
    }

    fn pop_mortal(
        &mut self,
        exclude: &EntityId,
        rng: &mut dyn RngCore,
    ) -> Option<&'a StandoutMortal> {
        let eligible: Vec<usize> = self
            .mortals
            .iter()
            .enumerate()
            .filter(|(_, m)| &m.base.id != exclude)
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return None;
        }
        let idx = eligible[rng.random_range(0..eligible.len())];
        Some(self.mortals.remove(idx))
    }

    fn demi_god_slot(&self, level: u32, god: &DemiGod) -> BossSlot {
        BossSlot {
            level,
            boss_id: god.base.id.clone(),
            boss_type: BossType::DemiGod,
            boss_name: god.base.name.clone(),
            boss_race: god.origin.race_id().and_then(|id| race_label(self.races, id)),
            boss_alignment: Some(god.alignment),
        }
    }

    fn mortal_slot(&self, level: u32, mortal: &StandoutMortal) -> BossSlot {
        BossSlot {
            level,
            boss_id: mortal.base.id.clone(),
            boss_type: BossType::StandoutMortal,
            boss_name: mortal.base.name.clone(),
            boss_race: race_label(self.races, &mortal.race_id),
            boss_alignment: Some(mortal.alignment),
        }
    }

    /// Synthesize and register a boss for one slot.
    fn procedural(
        &mut self,
        dungeon: &Dungeon,
        race: &MortalRace,
        level: u32,
        is_final: bool,
        factory: &mut EntityFactory,
        events: &mut EventLog,
    ) -> (BossSlot, StandoutMortal) {
        let hash = slot_hash(dungeon.seed, level);
        let name = names::unique_from_hash(
            &procedural_boss_name(hash, race),
            hash,
            &mut self.used_names,
        );
        let post = BossPost {
            dungeon_id: &dungeon.base.id,
            dungeon_name: &dungeon.base.name,
            geography_id: &dungeon.geography_id,
            race,
            level,
            is_final,
        };
        let boss = register_boss(factory, events, self.stage, &post, name, hash);
        let slot = BossSlot {
            level,
            boss_id: boss.base.id.clone(),
            boss_type: BossType::Procedural,
            boss_name: boss.base.name.clone(),
            boss_race: Some(race.race.as_str().to_string()),
            boss_alignment: Some(Alignment::Evil),
        };
        (slot, boss)
    }

    /// Fill a dungeon's final boss (when missing) and every mid-boss slot.
    /// Returns the bosses registered along the way.
    pub fn assign(
        &mut self,
        dungeon: &mut Dungeon,
        race: &MortalRace,
        factory: &mut EntityFactory,
        events: &mut EventLog,
        rng: &mut dyn RngCore,
    ) -> Vec<StandoutMortal> {
        let mut registered = Vec::new();

        if dungeon.final_boss.is_none() {
            let level = dungeon.depth;
            let prefer_demi_god = rng.random::<f64>() < DEMI_GOD_PREFERENCE;
            let demi = if prefer_demi_god {
                self.pop_demi_god(rng)
            } else {
                None
            };
            let slot = if let Some(god) = demi {
                Some(self.demi_god_slot(level, god))
            } else if let Some(mortal) = self.pop_mortal(&dungeon.creator_id, rng) {
                Some(self.mortal_slot(level, mortal))
            } else {
                self.pop_demi_god(rng).map(|god| self.demi_god_slot(level, god))
            };
            let slot = match slot {
                Some(slot) => {
                    events.record(
                        self.stage,
                        EventKind::BossClaimed,
                        format!("{} claimed the depths of {}.", slot.boss_name, dungeon.base.name),
                        vec![slot.boss_id.clone(), dungeon.base.id.clone()],
                        dungeon.base.created_at,
                    );
                    slot
                }
                None => {
                    debug!(dungeon = %dungeon.base.id, "boss pools empty, synthesizing final boss");
                    let (slot, boss) = self.procedural(dungeon, race, level, true, factory, events);
                    registered.push(boss);
                    slot
                }
            };
            dungeon.final_boss = Some(slot);
        }

        for level in Dungeon::mid_boss_levels(dungeon.depth) {
            let reuse = rng.random::<f64>() < MORTAL_MID_BOSS_CHANCE;
            let reused = if reuse {
                self.pop_mortal(&dungeon.creator_id, rng)
            } else {
                None
            };
            let slot = match reused {
                Some(mortal) => self.mortal_slot(level, mortal),
                None => {
                    let (slot, boss) =
                        self.procedural(dungeon, race, level, false, factory, events);
                    registered.push(boss);
                    slot
                }
            };
            dungeon.mid_bosses.push(slot);
        }

        registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityBase, EntityType, Era, RaceKind, WorldTime};
    use crate::names::peoples;
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn race() -> MortalRace {
        MortalRace {
            base: EntityBase::new(
                EntityId::new("mortal_race_goblin_0"),
                "Goblins".to_string(),
                String::new(),
                None,
                WorldTime::start_of(Era::AgeOfAwakening),
                DateTime::from_timestamp(0, 0).unwrap(),
            ),
            race: RaceKind::Goblin,
            homeland_id: EntityId::new("geography_hills_0"),
            lifespan: peoples::lifespan(&RaceKind::Goblin),
            population: 10,
        }
    }

    fn dungeon(seed: u64, depth: u32) -> Dungeon {
        Dungeon {
            base: EntityBase::new(
                EntityId::new("dungeon_warren_0"),
                "The Warrens".to_string(),
                String::new(),
                Some(EntityId::new("organization_warren_0")),
                WorldTime::start_of(Era::AgeOfDelving),
                DateTime::from_timestamp(0, 0).unwrap(),
            ),
            creator_id: EntityId::new("organization_warren_0"),
            creator_type: EntityType::Organization,
            geography_id: EntityId::new("geography_hills_0"),
            theme: "warren".to_string(),
            depth,
            seed,
            final_boss: None,
            mid_bosses: Vec::new(),
        }
    }

    #[test]
    fn procedural_names_depend_only_on_seed_and_slot() {
        let r = race();
        assert_eq!(
            procedural_boss_name(slot_hash(42, 25), &r),
            procedural_boss_name(slot_hash(42, 25), &r)
        );
        assert_ne!(slot_hash(42, 25), slot_hash(42, 50));
    }

    #[test]
    fn empty_pools_synthesize_every_boss() {
        let races = vec![race()];
        let mut assignment = BossAssignment::new("dungeons", &[], &[], &races);
        let mut factory = EntityFactory::new(DateTime::from_timestamp(0, 0).unwrap());
        let mut events = EventLog::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut d = dungeon(99, 80);
        let registered = assignment.assign(&mut d, &races[0], &mut factory, &mut events, &mut rng);
        assert_eq!(registered.len(), 4);
        assert_eq!(d.final_boss.as_ref().unwrap().boss_type, BossType::Procedural);
        assert_eq!(d.final_boss.as_ref().unwrap().level, 80);
        let levels: Vec<u32> = d.mid_bosses.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![25, 50, 75]);
        let names: HashSet<_> = registered.iter().map(|b| &b.base.name).collect();
        assert_eq!(names.len(), 4);
        assert!(registered.iter().all(|b| b.lair_id.as_ref() == Some(&d.base.id)));
    }
}
