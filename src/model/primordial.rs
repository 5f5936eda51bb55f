use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};

/// Fundamental force a primordial being embodies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PrimordialKind {
    Space,
    Time,
    Light,
    Dark,
    Order,
    Chaos,
    Custom(String),
}

string_enum_open!(PrimordialKind, "primordial type", {
    Space => "space",
    Time => "time",
    Light => "light",
    Dark => "dark",
    Order => "order",
    Chaos => "chaos",
});

/// Root of the world: has no parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimordialBeing {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(rename = "primordialType")]
    pub kind: PrimordialKind,
    pub domain: String,
    pub influence: Vec<String>,
}

impl_generated!(PrimordialBeing, EntityType::PrimordialBeing);
