use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

/// Family founded by a standout mortal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyLineage {
    #[serde(flatten)]
    pub base: EntityBase,
    /// The founding standout mortal; equal to `parent_id`.
    pub founder_id: EntityId,
    pub race_id: EntityId,
    pub surname: String,
    pub member_ids: Vec<EntityId>,
}

impl_generated!(FamilyLineage, EntityType::FamilyLineage);

/// Mundane descendant in a lineage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    #[serde(flatten)]
    pub base: EntityBase,
    pub lineage_id: EntityId,
    pub role: String,
    /// 1 for the founder's children, 2 for grandchildren, ...
    pub generation: u32,
}

impl_generated!(FamilyMember, EntityType::FamilyMember);
