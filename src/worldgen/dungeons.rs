use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::{debug, warn};

use super::bosses::BossAssignment;
use super::config::WorldLevel;
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::{Result, WorldGenError};
use crate::id::EntityId;
use crate::model::dungeon::{MAX_DEPTH, MIN_DEPTH};
use crate::model::{
    BossSlot, BossType, Dungeon, EntityType, Era, EventKind, Organization, StandoutMortal,
};
use crate::names;
use crate::names::dungeons::{self as dungeon_names, Theme};
use crate::seed::make_seed;
use crate::tables;

pub const STAGE: &str = "dungeons";

/// Chance an organization delves a dungeon.
pub fn organization_dungeon_chance(org: &Organization) -> f64 {
    if tables::purpose_suggests_dungeon(&org.purpose) {
        0.7
    } else if tables::LIKELY_DUNGEON_KINDS.contains(&org.kind) {
        0.3
    } else {
        0.1
    }
}

/// Everything needed to delve one dungeon, gathered before any entity is
/// created.
struct Delver {
    creator_id: EntityId,
    creator_type: EntityType,
    owner: String,
    race_id: EntityId,
    geography_id: EntityId,
    theme: Theme,
    /// The creator guards their own dungeon.
    self_boss: Option<BossSlot>,
}

#[derive(Debug, Default)]
pub struct DungeonOutput {
    pub dungeons: Vec<Dungeon>,
    /// Procedural bosses registered as standout mortals.
    pub bosses: Vec<StandoutMortal>,
}

fn mortal_geography(ctx: &GenerationContext, mortal: &StandoutMortal) -> Option<EntityId> {
    if ctx.geography_by_id(&mortal.birthplace_id).is_some() {
        return Some(mortal.birthplace_id.clone());
    }
    mortal
        .organization_id
        .as_ref()
        .or(Some(&mortal.birthplace_id))
        .and_then(|id| ctx.organization(id))
        .map(|org| org.geography_id.clone())
}

fn delvers(ctx: &GenerationContext, rng: &mut dyn RngCore) -> Vec<Delver> {
    let mut out = Vec::new();

    for org in &ctx.organizations {
        if !rng.random_bool(organization_dungeon_chance(org)) {
            continue;
        }
        out.push(Delver {
            creator_id: org.base.id.clone(),
            creator_type: EntityType::Organization,
            owner: org.base.name.clone(),
            race_id: org.race_id.clone(),
            geography_id: org.geography_id.clone(),
            theme: Theme::for_purpose(&org.purpose),
            self_boss: None,
        });
    }

    for mortal in ctx.standout_mortals.iter().filter(|m| m.archetype.creates_dungeon()) {
        let geography_id = match mortal_geography(ctx, mortal) {
            Some(id) => id,
            None => {
                debug!(mortal = %mortal.base.id, "no seat found, placing dungeon at random");
                ctx.geography[rng.random_range(0..ctx.geography.len())].base.id.clone()
            }
        };
        let raised_tower = ctx.events.has(&EventKind::TowerRaised, &mortal.base.id);
        out.push(Delver {
            creator_id: mortal.base.id.clone(),
            creator_type: EntityType::StandoutMortal,
            owner: mortal.base.name.clone(),
            race_id: mortal.race_id.clone(),
            geography_id,
            theme: Theme::for_mortal(mortal.archetype, raised_tower),
            self_boss: Some(BossSlot {
                level: 0,
                boss_id: mortal.base.id.clone(),
                boss_type: BossType::StandoutMortal,
                boss_name: mortal.base.name.clone(),
                boss_race: ctx.race(&mortal.race_id).map(|r| r.race.as_str().to_string()),
                boss_alignment: Some(mortal.alignment),
            }),
        });
    }

    out
}

/// Delve dungeons for organizations and dungeon-creating mortals, then
/// staff every dungeon with a final boss and a mid-boss every 25 levels.
///
/// With no organizations and no mortals there is nobody to delve, which is
/// not an error.
pub fn generate_dungeons(
    ctx: &mut GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<DungeonOutput> {
    if ctx.organizations.is_empty() && ctx.standout_mortals.is_empty() {
        warn!("no organizations or standout mortals; skipping dungeons");
        return Ok(DungeonOutput::default());
    }
    if ctx.geography.is_empty() {
        return Err(WorldGenError::NoGeography { stage: "dungeons" });
    }
    require(!ctx.mortal_races.is_empty(), "dungeons", "mortal races")?;

    let planned = delvers(ctx, rng);
    let mut used_names: HashSet<String> =
        ctx.dungeons.iter().map(|d| d.base.name.clone()).collect();
    let mut dungeons = Vec::with_capacity(planned.len());
    let mut race_ids = Vec::with_capacity(planned.len());

    for delver in planned {
        let place = ctx
            .geography_by_id(&delver.geography_id)
            .map(|g| g.base.name.clone())
            .unwrap_or_default();
        let templates: Vec<String> = dungeon_names::dungeon_templates(delver.theme)
            .iter()
            .map(|t| {
                names::fill(
                    t,
                    &[("owner", delver.owner.as_str()), ("place", place.as_str())],
                )
            })
            .collect();
        let name = names::select_name(
            &format!("dungeon:{}", delver.theme.as_str()),
            &templates,
            Some(&mut used_names),
            rng,
        )?;
        let depth = rng.random_range(MIN_DEPTH..=MAX_DEPTH);
        let depth_label = depth.to_string();
        let description = names::fill(
            names::pick(dungeon_names::DUNGEON_DESCRIPTIONS, rng),
            &[
                ("owner", delver.owner.as_str()),
                ("place", place.as_str()),
                ("depth", depth_label.as_str()),
                ("theme", delver.theme.as_str()),
            ],
        );
        let created_at = moment(Era::AgeOfDelving, rng);
        let base = ctx.factory.base(
            EntityType::Dungeon,
            delver.theme.as_str(),
            name,
            description,
            Some(delver.creator_id.clone()),
            created_at,
        );
        let seed = make_seed(&ctx.seed, base.id.as_str());

        ctx.events.record(
            STAGE,
            EventKind::DungeonDelved,
            format!("{} delved {} beneath {place}, {depth} levels deep.", delver.owner, base.name),
            vec![base.id.clone(), delver.creator_id.clone(), delver.geography_id.clone()],
            created_at,
        );

        let final_boss = delver.self_boss.map(|slot| BossSlot {
            level: depth,
            ..slot
        });
        race_ids.push(delver.race_id);
        dungeons.push(Dungeon {
            base,
            creator_id: delver.creator_id,
            creator_type: delver.creator_type,
            geography_id: delver.geography_id,
            theme: delver.theme.as_str().to_string(),
            depth,
            seed,
            final_boss,
            mid_bosses: Vec::new(),
        });
    }

    let mut registered = Vec::new();
    {
        let mut assignment = BossAssignment::new(
            STAGE,
            &ctx.demi_gods,
            &ctx.standout_mortals,
            &ctx.mortal_races,
        );
        for (dungeon, race_id) in dungeons.iter_mut().zip(&race_ids) {
            let race = ctx
                .mortal_races
                .iter()
                .find(|r| &r.base.id == race_id)
                .unwrap_or(&ctx.mortal_races[0]);
            registered.extend(assignment.assign(
                dungeon,
                race,
                &mut ctx.factory,
                &mut ctx.events,
                rng,
            ));
        }
        let (demi_left, mortal_left) = assignment.remaining();
        debug!(demi_left, mortal_left, "boss pools after assignment");
    }

    Ok(DungeonOutput {
        dungeons,
        bosses: registered,
    })
}

pub struct DungeonStage;

impl StageGenerator for DungeonStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::Dungeon
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let output = generate_dungeons(ctx, rng)?;
        let count = output.dungeons.len() + output.bosses.len();
        ctx.dungeons.extend(output.dungeons);
        ctx.standout_mortals.extend(output.bosses);
        Ok(count)
    }
}
