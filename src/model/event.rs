use serde::{Deserialize, Serialize};

use super::timestamp::WorldTime;
use crate::id::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    Awakening,
    Forging,
    Shaping,
    RaceAwakened,
    ConceptBorn,
    DemiGodRose,
    OrganizationFounded,
    MortalBorn,
    LeaderRose,
    TowerRaised,
    DungeonDelved,
    BossClaimed,
    LineageFounded,
    Custom(String),
}

string_enum_open!(EventKind, "event kind", {
    Awakening => "awakening",
    Forging => "forging",
    Shaping => "shaping",
    RaceAwakened => "race_awakened",
    ConceptBorn => "concept_born",
    DemiGodRose => "demi_god_rose",
    OrganizationFounded => "organization_founded",
    MortalBorn => "mortal_born",
    LeaderRose => "leader_rose",
    TowerRaised => "tower_raised",
    DungeonDelved => "dungeon_delved",
    BossClaimed => "boss_claimed",
    LineageFounded => "lineage_founded",
});

/// Narrative side-channel entry emitted by a stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldEvent {
    pub id: EntityId,
    pub kind: EventKind,
    pub description: String,
    /// Entities the event is about; the first is the subject.
    pub entity_ids: Vec<EntityId>,
    pub occurred_at: WorldTime,
}

impl WorldEvent {
    pub fn subject(&self) -> Option<&EntityId> {
        self.entity_ids.first()
    }

    pub fn involves(&self, id: &EntityId) -> bool {
        self.entity_ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timestamp::Era;

    #[test]
    fn kind_round_trips_through_string() {
        let json = serde_json::to_string(&EventKind::TowerRaised).unwrap();
        assert_eq!(json, "\"tower_raised\"");
        let parsed: EventKind = serde_json::from_str("\"comet_fell\"").unwrap();
        assert_eq!(parsed, EventKind::Custom("comet_fell".to_string()));
    }

    #[test]
    fn empty_kind_rejected() {
        assert!(serde_json::from_str::<EventKind>("\"\"").is_err());
    }

    #[test]
    fn subject_is_first_entity() {
        let ev = WorldEvent {
            id: EntityId::new("world_event_standouts_0"),
            kind: EventKind::TowerRaised,
            description: "A tower rises".to_string(),
            entity_ids: vec![EntityId::new("a"), EntityId::new("b")],
            occurred_at: WorldTime::start_of(Era::AgeOfHeroes),
        };
        assert_eq!(ev.subject(), Some(&EntityId::new("a")));
        assert!(ev.involves(&EntityId::new("b")));
        assert!(!ev.involves(&EntityId::new("c")));
    }
}
