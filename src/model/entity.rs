use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::WorldTime;
use crate::id::EntityId;

/// Which stage produced an entity. Serialized as the `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EntityType {
    PrimordialBeing,
    CosmicCreator,
    Geography,
    ConceptualBeing,
    DemiGod,
    MortalRace,
    Organization,
    StandoutMortal,
    Dungeon,
    FamilyLineage,
    FamilyMember,
}

string_enum!(EntityType {
    PrimordialBeing => "primordial_being",
    CosmicCreator => "cosmic_creator",
    Geography => "geography",
    ConceptualBeing => "conceptual_being",
    DemiGod => "demi_god",
    MortalRace => "mortal_race",
    Organization => "organization",
    StandoutMortal => "standout_mortal",
    Dungeon => "dungeon",
    FamilyLineage => "family_lineage",
    FamilyMember => "family_member",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Alignment {
    Good,
    Neutral,
    Evil,
}

string_enum!(Alignment {
    Good => "good",
    Neutral => "neutral",
    Evil => "evil",
});

impl Alignment {
    /// Evil beings are boss-eligible; nothing else is.
    pub fn is_boss(self) -> bool {
        self == Alignment::Evil
    }
}

/// Fields shared by every generated entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// The earlier-stage entity that created or caused this one.
    /// `None` only for primordial beings.
    pub parent_id: Option<EntityId>,
    /// In-world time.
    pub created_at: WorldTime,
    /// Wall-clock time of the generation run.
    pub discovered_at: DateTime<Utc>,
    /// Seed/index provenance; never read by generation logic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl EntityBase {
    pub fn new(
        id: EntityId,
        name: String,
        description: String,
        parent_id: Option<EntityId>,
        created_at: WorldTime,
        discovered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            parent_id,
            created_at,
            discovered_at,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Implemented by every entity struct so generic code can reach the shared
/// fields and the stage tag.
pub trait Generated {
    const TYPE: EntityType;

    fn base(&self) -> &EntityBase;

    fn id(&self) -> &EntityId {
        &self.base().id
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn parent_id(&self) -> Option<&EntityId> {
        self.base().parent_id.as_ref()
    }
}

macro_rules! impl_generated {
    ($ty:ty, $tag:expr) => {
        impl $crate::model::entity::Generated for $ty {
            const TYPE: $crate::model::entity::EntityType = $tag;

            fn base(&self) -> &$crate::model::entity::EntityBase {
                &self.base
            }
        }
    };
}

pub(crate) use impl_generated;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timestamp::Era;

    fn sample_base() -> EntityBase {
        EntityBase::new(
            EntityId::new("primordial_being_space_0"),
            "Vastness".to_string(),
            "The endless expanse".to_string(),
            None,
            WorldTime::new(Era::PrimordialDawn, 0),
            DateTime::from_timestamp(0, 0).unwrap(),
        )
    }

    #[test]
    fn serializes_camel_case_shape() {
        let base = sample_base().with_meta("index", 0);
        let json = serde_json::to_value(&base).unwrap();
        assert_eq!(json["id"], "primordial_being_space_0");
        assert!(json["parentId"].is_null());
        assert_eq!(json["createdAt"]["era"], "primordial_dawn");
        assert!(json["discoveredAt"].is_string());
        assert_eq!(json["metadata"]["index"], 0);
    }

    #[test]
    fn empty_metadata_is_omitted() {
        let json = serde_json::to_value(sample_base()).unwrap();
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn only_evil_is_boss() {
        assert!(Alignment::Evil.is_boss());
        assert!(!Alignment::Good.is_boss());
        assert!(!Alignment::Neutral.is_boss());
    }

    #[test]
    fn entity_type_tags() {
        assert_eq!(EntityType::DemiGod.as_str(), "demi_god");
        assert_eq!(
            EntityType::try_from("standout_mortal".to_string()),
            Ok(EntityType::StandoutMortal)
        );
        assert!(EntityType::try_from("wizard".to_string()).is_err());
    }
}
