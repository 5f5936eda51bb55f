use serde::{Deserialize, Serialize};

use super::entity::{Alignment, EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DemiGodKind {
    HalfGod,
    AncientCreature,
    DivineExperiment,
    FallenDivine,
    AscendedMortal,
    PrimordialSpawn,
}

string_enum!(DemiGodKind {
    HalfGod => "half_god",
    AncientCreature => "ancient_creature",
    DivineExperiment => "divine_experiment",
    FallenDivine => "fallen_divine",
    AscendedMortal => "ascended_mortal",
    PrimordialSpawn => "primordial_spawn",
});

/// Archetype-specific payload; the tag lands in the `demiGodType` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "demiGodType", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DemiGodOrigin {
    HalfGod {
        race_id: EntityId,
        divine_parent_id: EntityId,
    },
    AncientCreature {
        creature: String,
        lair_id: Option<EntityId>,
    },
    DivineExperiment {
        creator_id: EntityId,
        features: Vec<String>,
    },
    FallenDivine {
        former_domain: String,
    },
    AscendedMortal {
        race_id: EntityId,
        former_calling: String,
    },
    PrimordialSpawn {
        essence: String,
    },
}

impl DemiGodOrigin {
    pub fn kind(&self) -> DemiGodKind {
        match self {
            DemiGodOrigin::HalfGod { .. } => DemiGodKind::HalfGod,
            DemiGodOrigin::AncientCreature { .. } => DemiGodKind::AncientCreature,
            DemiGodOrigin::DivineExperiment { .. } => DemiGodKind::DivineExperiment,
            DemiGodOrigin::FallenDivine { .. } => DemiGodKind::FallenDivine,
            DemiGodOrigin::AscendedMortal { .. } => DemiGodKind::AscendedMortal,
            DemiGodOrigin::PrimordialSpawn { .. } => DemiGodKind::PrimordialSpawn,
        }
    }

    /// Race payload, for the archetypes that carry one.
    pub fn race_id(&self) -> Option<&EntityId> {
        match self {
            DemiGodOrigin::HalfGod { race_id, .. }
            | DemiGodOrigin::AscendedMortal { race_id, .. } => Some(race_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemiGod {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(flatten)]
    pub origin: DemiGodOrigin,
    pub alignment: Alignment,
    pub powers: Vec<String>,
    /// Always `alignment == evil`; set only by [`DemiGod::new`].
    pub is_boss: bool,
}

impl_generated!(DemiGod, EntityType::DemiGod);

impl DemiGod {
    pub fn new(
        base: EntityBase,
        origin: DemiGodOrigin,
        alignment: Alignment,
        powers: Vec<String>,
    ) -> Self {
        Self {
            base,
            origin,
            alignment,
            powers,
            is_boss: alignment.is_boss(),
        }
    }

    pub fn kind(&self) -> DemiGodKind {
        self.origin.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timestamp::{Era, WorldTime};
    use chrono::DateTime;

    fn experiment(alignment: Alignment) -> DemiGod {
        let base = EntityBase::new(
            EntityId::new("demi_god_divine_experiment_0"),
            "The Stitched One".to_string(),
            String::new(),
            Some(EntityId::new("cosmic_creator_fire_0")),
            WorldTime::start_of(Era::AgeOfLegends),
            DateTime::from_timestamp(0, 0).unwrap(),
        );
        DemiGod::new(
            base,
            DemiGodOrigin::DivineExperiment {
                creator_id: EntityId::new("cosmic_creator_fire_0"),
                features: vec!["wings".to_string(), "scales".to_string()],
            },
            alignment,
            vec![],
        )
    }

    #[test]
    fn is_boss_derived_from_alignment() {
        assert!(experiment(Alignment::Evil).is_boss);
        assert!(!experiment(Alignment::Good).is_boss);
        assert!(!experiment(Alignment::Neutral).is_boss);
    }

    #[test]
    fn payload_is_flattened_with_tag() {
        let json = serde_json::to_value(experiment(Alignment::Evil)).unwrap();
        assert_eq!(json["demiGodType"], "divine_experiment");
        assert_eq!(json["creatorId"], "cosmic_creator_fire_0");
        assert_eq!(json["features"][1], "scales");
        assert_eq!(json["isBoss"], true);
        assert_eq!(json["parentId"], "cosmic_creator_fire_0");

        let back: DemiGod = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), DemiGodKind::DivineExperiment);
    }
}
