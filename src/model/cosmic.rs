use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Element {
    Rock,
    Wind,
    Water,
    Life,
    Fire,
    Earth,
    Ice,
    Magic,
}

string_enum!(Element {
    Rock => "rock",
    Wind => "wind",
    Water => "water",
    Life => "life",
    Fire => "fire",
    Earth => "earth",
    Ice => "ice",
    Magic => "magic",
});

/// Elemental creator born of a primordial being.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmicCreator {
    #[serde(flatten)]
    pub base: EntityBase,
    pub element: Element,
    /// IDs of entities whose parent is this creator. Filled when the world
    /// snapshot is assembled.
    #[serde(default)]
    pub creations: Vec<EntityId>,
}

impl_generated!(CosmicCreator, EntityType::CosmicCreator);
