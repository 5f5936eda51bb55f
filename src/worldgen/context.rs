use chrono::{DateTime, Utc};

use crate::error::{Result, WorldGenError};
use crate::id::{EntityId, IdGenerator};
use crate::model::{
    ConceptualBeing, CosmicCreator, DemiGod, Dungeon, EntityBase, EntityType, EventKind,
    FamilyLineage, FamilyMember, GeneratedWorld, Geography, MortalRace, Organization,
    PrimordialBeing, StandoutMortal, WorldEvent, WorldTime,
};

/// Builds the shared entity fields: allocates the ID and stamps the run's
/// wall-clock time.
#[derive(Debug, Clone)]
pub struct EntityFactory {
    ids: IdGenerator,
    discovered_at: DateTime<Utc>,
}

impl EntityFactory {
    pub fn new(discovered_at: DateTime<Utc>) -> Self {
        Self {
            ids: IdGenerator::new(),
            discovered_at,
        }
    }

    pub fn base(
        &mut self,
        entity_type: EntityType,
        subtype: &str,
        name: String,
        description: String,
        parent_id: Option<EntityId>,
        created_at: WorldTime,
    ) -> EntityBase {
        let id = self.ids.next_id(entity_type.as_str(), subtype);
        EntityBase::new(id, name, description, parent_id, created_at, self.discovered_at)
    }

    pub fn discovered_at(&self) -> DateTime<Utc> {
        self.discovered_at
    }
}

/// Append-only narrative log. Event IDs are `world_event_{stage}_{n}`.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    ids: IdGenerator,
    events: Vec<WorldEvent>,
}

impl EventLog {
    pub fn record(
        &mut self,
        stage: &str,
        kind: EventKind,
        description: String,
        entity_ids: Vec<EntityId>,
        occurred_at: WorldTime,
    ) -> &WorldEvent {
        let id = self.ids.next_id("world_event", stage);
        let idx = self.events.len();
        self.events.push(WorldEvent {
            id,
            kind,
            description,
            entity_ids,
            occurred_at,
        });
        &self.events[idx]
    }

    /// Whether `subject` is the subject of an event of `kind`.
    pub fn has(&self, kind: &EventKind, subject: &EntityId) -> bool {
        self.events
            .iter()
            .any(|e| &e.kind == kind && e.subject() == Some(subject))
    }

    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn into_events(self) -> Vec<WorldEvent> {
        self.events
    }
}

/// Shared accumulator passed through the pipeline.
///
/// Stages read any collection filled by an earlier stage and append to their
/// own. Owned by one run; concurrent runs use independent contexts.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub seed: String,
    pub factory: EntityFactory,
    pub events: EventLog,
    pub primordials: Vec<PrimordialBeing>,
    pub cosmic_creators: Vec<CosmicCreator>,
    pub geography: Vec<Geography>,
    pub mortal_races: Vec<MortalRace>,
    pub conceptual_beings: Vec<ConceptualBeing>,
    pub demi_gods: Vec<DemiGod>,
    pub organizations: Vec<Organization>,
    pub standout_mortals: Vec<StandoutMortal>,
    pub dungeons: Vec<Dungeon>,
    pub family_lineages: Vec<FamilyLineage>,
    pub family_members: Vec<FamilyMember>,
}

impl GenerationContext {
    pub fn new(seed: impl Into<String>, discovered_at: DateTime<Utc>) -> Self {
        Self {
            seed: seed.into(),
            factory: EntityFactory::new(discovered_at),
            events: EventLog::default(),
            primordials: Vec::new(),
            cosmic_creators: Vec::new(),
            geography: Vec::new(),
            mortal_races: Vec::new(),
            conceptual_beings: Vec::new(),
            demi_gods: Vec::new(),
            organizations: Vec::new(),
            standout_mortals: Vec::new(),
            dungeons: Vec::new(),
            family_lineages: Vec::new(),
            family_members: Vec::new(),
        }
    }

    pub fn race(&self, id: &EntityId) -> Option<&MortalRace> {
        self.mortal_races.iter().find(|r| &r.base.id == id)
    }

    pub fn geography_by_id(&self, id: &EntityId) -> Option<&Geography> {
        self.geography.iter().find(|g| &g.base.id == id)
    }

    pub fn organization(&self, id: &EntityId) -> Option<&Organization> {
        self.organizations.iter().find(|o| &o.base.id == id)
    }

    /// Assemble the immutable snapshot.
    pub fn into_world(self) -> GeneratedWorld {
        let generated_at = self.factory.discovered_at();
        let mut world = GeneratedWorld {
            seed: self.seed,
            primordials: self.primordials,
            cosmic_creators: self.cosmic_creators,
            geography: self.geography,
            conceptual_beings: self.conceptual_beings,
            demi_gods: self.demi_gods,
            mortal_races: self.mortal_races,
            organizations: self.organizations,
            standout_mortals: self.standout_mortals,
            dungeons: self.dungeons,
            family_members: self.family_members,
            family_lineages: self.family_lineages,
            world_events: self.events.into_events(),
            generated_at,
        };
        world.resolve_projections();
        world
    }
}

/// Fail fast when an upstream collection is missing.
pub fn require(present: bool, stage: &'static str, requires: &'static str) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(WorldGenError::missing(stage, requires))
    }
}
