//! Helpers that promote leaders and dungeon bosses into first-class standout
//! mortals with synthesized histories.

use std::collections::HashSet;

use rand::{Rng, RngCore};

use super::context::{EntityFactory, EventLog};
use super::moment;
use crate::error::Result;
use crate::id::EntityId;
use crate::model::{
    Alignment, Archetype, EntityType, Era, EventKind, MortalRace, Organization, RaceKind,
    StandoutMortal, WorldTime,
};
use crate::names::{self, peoples};
use crate::tables;

/// Archetypes a procedurally generated boss may take. None of them delve
/// dungeons of their own.
pub const BOSS_ARCHETYPES: &[Archetype] = &[
    Archetype::Warlord,
    Archetype::Assassin,
    Archetype::Gladiator,
    Archetype::Shaman,
    Archetype::Thief,
    Archetype::PirateCaptain,
];

/// Every given-name and surname pairing for a race.
pub fn mortal_name_pool(race: &RaceKind) -> Vec<String> {
    let surnames = peoples::surnames(race);
    peoples::given_names(race)
        .iter()
        .flat_map(|given| surnames.iter().map(move |surname| format!("{given} {surname}")))
        .collect()
}

/// Draw a mortal name unique within `used`.
pub fn mortal_name(
    race: &RaceKind,
    used: &mut HashSet<String>,
    rng: &mut dyn RngCore,
) -> Result<String> {
    names::select_name(&format!("mortal:{race}"), &mortal_name_pool(race), Some(used), rng)
}

/// 1-3 distinct history lines.
pub fn synthesize_history(
    archetype: Archetype,
    race_name: &str,
    birthplace: &str,
    rng: &mut dyn RngCore,
) -> Vec<String> {
    let count = rng.random_range(1..=3);
    let archetype_label = archetype.title().to_lowercase();
    names::pick_distinct(peoples::MORTAL_HISTORY, count, rng)
        .into_iter()
        .map(|line| {
            names::fill(
                line,
                &[
                    ("birthplace", birthplace),
                    ("race", race_name),
                    ("archetype", archetype_label.as_str()),
                ],
            )
        })
        .collect()
}

pub fn powers(archetype: Archetype, rng: &mut dyn RngCore) -> Vec<String> {
    let count = rng.random_range(2..=3);
    names::pick_distinct(peoples::archetype_powers(archetype), count, rng)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Register a ruler for an organization that has none.
pub fn register_leader(
    factory: &mut EntityFactory,
    events: &mut EventLog,
    stage: &str,
    org: &Organization,
    race: &MortalRace,
    used: &mut HashSet<String>,
    rng: &mut dyn RngCore,
) -> Result<StandoutMortal> {
    let archetype = Archetype::RULERS[rng.random_range(0..Archetype::RULERS.len())];
    let alignment = tables::alignment_leaning(archetype).roll(rng);
    let name = mortal_name(&race.race, used, rng)?;
    let mut history = synthesize_history(archetype, &race.base.name, &org.base.name, rng);
    history.push(format!("Took the seat of power in {}.", org.base.name));
    let description = format!(
        "{} {name} rules {} on behalf of the {}.",
        archetype.title(),
        org.base.name,
        race.base.name
    );
    let created_at = moment(Era::AgeOfHeroes, rng);
    let base = factory.base(
        EntityType::StandoutMortal,
        "leader",
        name,
        description,
        Some(org.base.id.clone()),
        created_at,
    );
    let mut leader = StandoutMortal::new(
        base,
        archetype,
        race.base.id.clone(),
        Some(org.base.id.clone()),
        org.base.id.clone(),
        alignment,
        powers(archetype, rng),
        history,
    );
    leader.leads = Some(org.base.id.clone());

    events.record(
        stage,
        EventKind::LeaderRose,
        format!("{} took command of {}.", leader.base.name, org.base.name),
        vec![leader.base.id.clone(), org.base.id.clone()],
        created_at,
    );
    Ok(leader)
}

/// Where a procedurally generated boss will be registered.
pub struct BossPost<'a> {
    pub dungeon_id: &'a EntityId,
    pub dungeon_name: &'a str,
    pub geography_id: &'a EntityId,
    pub race: &'a MortalRace,
    pub level: u32,
    pub is_final: bool,
}

/// Register a procedurally generated boss as an evil standout mortal.
///
/// Everything except the ID is derived from `hash`, so the same dungeon
/// seed and slot always yield the same boss.
pub fn register_boss(
    factory: &mut EntityFactory,
    events: &mut EventLog,
    stage: &str,
    post: &BossPost<'_>,
    name: String,
    hash: u64,
) -> StandoutMortal {
    let archetype = BOSS_ARCHETYPES[(hash % BOSS_ARCHETYPES.len() as u64) as usize];
    let role = if post.is_final {
        "final guardian"
    } else {
        "warden"
    };
    let history = vec![
        format!("Spawned in the depths of {}.", post.dungeon_name),
        format!("Claimed level {} as its {role}.", post.level),
    ];
    let boss_powers = {
        let pool = peoples::archetype_powers(archetype);
        let first = (hash >> 8) as usize % pool.len();
        let second = (first + 1 + (hash >> 24) as usize % (pool.len() - 1)) % pool.len();
        vec![pool[first].to_string(), pool[second].to_string()]
    };
    let description = format!(
        "{name}, {role} of level {} in {}.",
        post.level, post.dungeon_name
    );
    let created_at = WorldTime::new(Era::AgeOfDelving, post.level);
    let base = factory
        .base(
            EntityType::StandoutMortal,
            "boss",
            name,
            description,
            Some(post.race.base.id.clone()),
            created_at,
        )
        .with_meta("dungeonId", post.dungeon_id.as_str())
        .with_meta("bossSeed", hash);
    let mut boss = StandoutMortal::new(
        base,
        archetype,
        post.race.base.id.clone(),
        None,
        post.geography_id.clone(),
        Alignment::Evil,
        boss_powers,
        history,
    );
    boss.lair_id = Some(post.dungeon_id.clone());

    events.record(
        stage,
        EventKind::BossClaimed,
        format!("{} claimed level {} of {}.", boss.base.name, post.level, post.dungeon_name),
        vec![boss.base.id.clone(), post.dungeon_id.clone()],
        created_at,
    );
    boss
}
