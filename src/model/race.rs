use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RaceKind {
    Human,
    Elf,
    Dwarf,
    Halfling,
    Gnome,
    Orc,
    Goblin,
    Troll,
    Giant,
    Dragonborn,
    Tiefling,
    Kobold,
    Lizardfolk,
    Merfolk,
    Custom(String),
}

string_enum_open!(RaceKind, "race", {
    Human => "human",
    Elf => "elf",
    Dwarf => "dwarf",
    Halfling => "halfling",
    Gnome => "gnome",
    Orc => "orc",
    Goblin => "goblin",
    Troll => "troll",
    Giant => "giant",
    Dragonborn => "dragonborn",
    Tiefling => "tiefling",
    Kobold => "kobold",
    Lizardfolk => "lizardfolk",
    Merfolk => "merfolk",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortalRace {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(rename = "raceType")]
    pub race: RaceKind,
    pub homeland_id: EntityId,
    pub lifespan: Lifespan,
    pub population: u64,
}

impl_generated!(MortalRace, EntityType::MortalRace);
