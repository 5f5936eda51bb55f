use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GeographyKind {
    Continent,
    Ocean,
    Sea,
    MountainRange,
    River,
    Lake,
    Forest,
    Jungle,
    Desert,
    Swamp,
    Marsh,
    Tundra,
    Glacier,
    Volcano,
    Island,
    Archipelago,
    Canyon,
    Plains,
    Steppe,
    Hills,
    Valley,
    Plateau,
    Coast,
    Fjord,
    CaveSystem,
}

string_enum!(GeographyKind {
    Continent => "continent",
    Ocean => "ocean",
    Sea => "sea",
    MountainRange => "mountain_range",
    River => "river",
    Lake => "lake",
    Forest => "forest",
    Jungle => "jungle",
    Desert => "desert",
    Swamp => "swamp",
    Marsh => "marsh",
    Tundra => "tundra",
    Glacier => "glacier",
    Volcano => "volcano",
    Island => "island",
    Archipelago => "archipelago",
    Canyon => "canyon",
    Plains => "plains",
    Steppe => "steppe",
    Hills => "hills",
    Valley => "valley",
    Plateau => "plateau",
    Coast => "coast",
    Fjord => "fjord",
    CaveSystem => "cave_system",
});

impl GeographyKind {
    /// Open water cannot host a homeland, organization, or dungeon entrance.
    pub fn is_water(self) -> bool {
        matches!(
            self,
            GeographyKind::Ocean | GeographyKind::Sea | GeographyKind::River | GeographyKind::Lake
        )
    }
}

/// Size class of a geographic feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Magnitude {
    Vast,
    Large,
    Medium,
    Small,
}

string_enum!(Magnitude {
    Vast => "vast",
    Large => "large",
    Medium => "medium",
    Small => "small",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geography {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(rename = "geographyType")]
    pub kind: GeographyKind,
    pub magnitude: Magnitude,
}

impl_generated!(Geography, EntityType::Geography);
