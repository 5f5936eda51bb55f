use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a generated entity: `{type}_{subtype}_{ordinal}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Deterministic ID allocator keyed by `(type, subtype)`.
/// Each prefix counts its own ordinals from zero, so IDs depend only on the
/// order entities of that prefix are created, never on randomness.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    next: BTreeMap<String, u32>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, entity_type: &str, subtype: &str) -> EntityId {
        let prefix = format!("{entity_type}_{}", slug(subtype));
        let ordinal = self.next.entry(prefix.clone()).or_insert(0);
        let id = EntityId(format!("{prefix}_{ordinal}"));
        *ordinal += 1;
        id
    }

    /// How many IDs have been handed out under a prefix.
    pub fn issued(&self, entity_type: &str, subtype: &str) -> u32 {
        let prefix = format!("{entity_type}_{}", slug(subtype));
        self.next.get(&prefix).copied().unwrap_or(0)
    }
}

/// Lowercase snake_case form of a free-form label ("Sea Elf" -> "sea_elf").
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_sep = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        out.push_str("unnamed");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_per_prefix() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id("geography", "ocean").as_str(), "geography_ocean_0");
        assert_eq!(ids.next_id("geography", "ocean").as_str(), "geography_ocean_1");
        assert_eq!(ids.next_id("geography", "river").as_str(), "geography_river_0");
        assert_eq!(ids.issued("geography", "ocean"), 2);
        assert_eq!(ids.issued("geography", "desert"), 0);
    }

    #[test]
    fn subtype_is_slugged() {
        let mut ids = IdGenerator::new();
        assert_eq!(
            ids.next_id("mortal_race", "Sea Elf").as_str(),
            "mortal_race_sea_elf_0"
        );
    }

    #[test]
    fn slug_handles_punctuation() {
        assert_eq!(slug("  Half-Orc!  "), "half_orc");
        assert_eq!(slug("***"), "unnamed");
    }
}
