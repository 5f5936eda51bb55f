use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::conceptual::ConceptualBeing;
use super::cosmic::CosmicCreator;
use super::demigod::DemiGod;
use super::dungeon::{BossSlot, BossType, Dungeon};
use super::entity::{EntityBase, EntityType, Generated};
use super::event::WorldEvent;
use super::geography::Geography;
use super::lineage::{FamilyLineage, FamilyMember};
use super::organization::Organization;
use super::primordial::PrimordialBeing;
use super::race::MortalRace;
use super::standout::StandoutMortal;
use crate::id::EntityId;

/// Immutable result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorld {
    pub seed: String,
    pub primordials: Vec<PrimordialBeing>,
    pub cosmic_creators: Vec<CosmicCreator>,
    pub geography: Vec<Geography>,
    pub conceptual_beings: Vec<ConceptualBeing>,
    pub demi_gods: Vec<DemiGod>,
    pub mortal_races: Vec<MortalRace>,
    pub organizations: Vec<Organization>,
    pub standout_mortals: Vec<StandoutMortal>,
    pub dungeons: Vec<Dungeon>,
    pub family_members: Vec<FamilyMember>,
    pub family_lineages: Vec<FamilyLineage>,
    pub world_events: Vec<WorldEvent>,
    pub generated_at: DateTime<Utc>,
}

/// Borrowed view of any entity, tagged with its `type` when serialized.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityRef<'a> {
    PrimordialBeing(&'a PrimordialBeing),
    CosmicCreator(&'a CosmicCreator),
    Geography(&'a Geography),
    ConceptualBeing(&'a ConceptualBeing),
    DemiGod(&'a DemiGod),
    MortalRace(&'a MortalRace),
    Organization(&'a Organization),
    StandoutMortal(&'a StandoutMortal),
    Dungeon(&'a Dungeon),
    FamilyLineage(&'a FamilyLineage),
    FamilyMember(&'a FamilyMember),
}

impl<'a> EntityRef<'a> {
    pub fn base(&self) -> &'a EntityBase {
        match *self {
            EntityRef::PrimordialBeing(e) => e.base(),
            EntityRef::CosmicCreator(e) => e.base(),
            EntityRef::Geography(e) => e.base(),
            EntityRef::ConceptualBeing(e) => e.base(),
            EntityRef::DemiGod(e) => e.base(),
            EntityRef::MortalRace(e) => e.base(),
            EntityRef::Organization(e) => e.base(),
            EntityRef::StandoutMortal(e) => e.base(),
            EntityRef::Dungeon(e) => e.base(),
            EntityRef::FamilyLineage(e) => e.base(),
            EntityRef::FamilyMember(e) => e.base(),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityRef::PrimordialBeing(_) => EntityType::PrimordialBeing,
            EntityRef::CosmicCreator(_) => EntityType::CosmicCreator,
            EntityRef::Geography(_) => EntityType::Geography,
            EntityRef::ConceptualBeing(_) => EntityType::ConceptualBeing,
            EntityRef::DemiGod(_) => EntityType::DemiGod,
            EntityRef::MortalRace(_) => EntityType::MortalRace,
            EntityRef::Organization(_) => EntityType::Organization,
            EntityRef::StandoutMortal(_) => EntityType::StandoutMortal,
            EntityRef::Dungeon(_) => EntityType::Dungeon,
            EntityRef::FamilyLineage(_) => EntityType::FamilyLineage,
            EntityRef::FamilyMember(_) => EntityType::FamilyMember,
        }
    }
}

/// A boss slot together with the dungeon it guards.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BossRecord<'a> {
    pub dungeon_id: &'a EntityId,
    pub dungeon_name: &'a str,
    pub is_final: bool,
    #[serde(flatten)]
    pub slot: &'a BossSlot,
}

impl GeneratedWorld {
    /// Every entity, in pipeline execution order.
    pub fn entities(&self) -> Vec<EntityRef<'_>> {
        let mut all = Vec::with_capacity(self.entity_count());
        all.extend(self.primordials.iter().map(EntityRef::PrimordialBeing));
        all.extend(self.cosmic_creators.iter().map(EntityRef::CosmicCreator));
        all.extend(self.geography.iter().map(EntityRef::Geography));
        all.extend(self.mortal_races.iter().map(EntityRef::MortalRace));
        all.extend(self.conceptual_beings.iter().map(EntityRef::ConceptualBeing));
        all.extend(self.demi_gods.iter().map(EntityRef::DemiGod));
        all.extend(self.organizations.iter().map(EntityRef::Organization));
        all.extend(self.standout_mortals.iter().map(EntityRef::StandoutMortal));
        all.extend(self.dungeons.iter().map(EntityRef::Dungeon));
        all.extend(self.family_lineages.iter().map(EntityRef::FamilyLineage));
        all.extend(self.family_members.iter().map(EntityRef::FamilyMember));
        all
    }

    pub fn entity_count(&self) -> usize {
        self.primordials.len()
            + self.cosmic_creators.len()
            + self.geography.len()
            + self.conceptual_beings.len()
            + self.demi_gods.len()
            + self.mortal_races.len()
            + self.organizations.len()
            + self.standout_mortals.len()
            + self.dungeons.len()
            + self.family_lineages.len()
            + self.family_members.len()
    }

    pub fn find(&self, id: &EntityId) -> Option<EntityRef<'_>> {
        self.entities().into_iter().find(|e| &e.base().id == id)
    }

    /// Every boss slot across all dungeons.
    pub fn bosses(&self) -> Vec<BossRecord<'_>> {
        self.dungeons
            .iter()
            .flat_map(|d| {
                d.final_boss
                    .iter()
                    .map(move |slot| (d, true, slot))
                    .chain(d.mid_bosses.iter().map(move |slot| (d, false, slot)))
            })
            .map(|(d, is_final, slot)| BossRecord {
                dungeon_id: &d.base.id,
                dungeon_name: &d.base.name,
                is_final,
                slot,
            })
            .collect()
    }

    /// Count of entities per type tag.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for e in self.entities() {
            *counts.entry(e.entity_type().as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Fill the snapshot-time projections: creator `creations`,
    /// organization `leader_id` and mortal `lair_id`.
    pub(crate) fn resolve_projections(&mut self) {
        let mut children: BTreeMap<EntityId, Vec<EntityId>> = BTreeMap::new();
        for e in self.entities() {
            if let Some(parent) = &e.base().parent_id {
                children
                    .entry(parent.clone())
                    .or_default()
                    .push(e.base().id.clone());
            }
        }
        for creator in &mut self.cosmic_creators {
            creator.creations = children.remove(&creator.base.id).unwrap_or_default();
        }

        let leaders: BTreeMap<EntityId, EntityId> = self
            .standout_mortals
            .iter()
            .filter_map(|m| m.leads.clone().map(|org| (org, m.base.id.clone())))
            .collect();
        for org in &mut self.organizations {
            org.leader_id = leaders.get(&org.base.id).cloned();
        }

        let mut lairs: BTreeMap<EntityId, EntityId> = BTreeMap::new();
        for record in self.bosses() {
            if record.slot.boss_type != BossType::DemiGod {
                lairs
                    .entry(record.slot.boss_id.clone())
                    .or_insert_with(|| record.dungeon_id.clone());
            }
        }
        for mortal in &mut self.standout_mortals {
            mortal.lair_id = lairs.remove(&mortal.base.id);
        }
    }
}
