use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

/// Deity-like concept born from a mortal race's worship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptualBeing {
    #[serde(flatten)]
    pub base: EntityBase,
    /// Concept key from the global concept pool ("war", "forge", ...).
    pub concept: String,
    /// The race whose worship gave rise to this being; equal to `parent_id`.
    pub race_id: EntityId,
    pub worshiped_by: Vec<EntityId>,
}

impl_generated!(ConceptualBeing, EntityType::ConceptualBeing);
