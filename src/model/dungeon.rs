use serde::{Deserialize, Serialize};

use super::entity::{Alignment, EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

/// Levels between consecutive mid-bosses.
pub const MID_BOSS_INTERVAL: u32 = 25;
pub const MIN_DEPTH: u32 = 50;
pub const MAX_DEPTH: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BossType {
    DemiGod,
    StandoutMortal,
    Procedural,
}

string_enum!(BossType {
    DemiGod => "demi_god",
    StandoutMortal => "standout_mortal",
    Procedural => "procedural",
});

/// One boss assignment inside a dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossSlot {
    pub level: u32,
    pub boss_id: EntityId,
    pub boss_type: BossType,
    pub boss_name: String,
    pub boss_race: Option<String>,
    pub boss_alignment: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dungeon {
    #[serde(flatten)]
    pub base: EntityBase,
    /// Organization or standout mortal that delved it; equal to `parent_id`.
    pub creator_id: EntityId,
    pub creator_type: EntityType,
    pub geography_id: EntityId,
    pub theme: String,
    pub depth: u32,
    /// Seed for level-layout generation.
    pub seed: u64,
    pub final_boss: Option<BossSlot>,
    pub mid_bosses: Vec<BossSlot>,
}

impl_generated!(Dungeon, EntityType::Dungeon);

impl Dungeon {
    /// Every multiple of the mid-boss interval strictly below `depth`.
    pub fn mid_boss_levels(depth: u32) -> Vec<u32> {
        (1..)
            .map(|i| i * MID_BOSS_INTERVAL)
            .take_while(|level| *level < depth)
            .collect()
    }

    /// Final boss first, then mid-bosses in level order.
    pub fn bosses(&self) -> impl Iterator<Item = &BossSlot> {
        self.final_boss.iter().chain(self.mid_bosses.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_boss_levels_strictly_below_depth() {
        assert_eq!(Dungeon::mid_boss_levels(50), vec![25]);
        assert_eq!(Dungeon::mid_boss_levels(51), vec![25, 50]);
        assert_eq!(Dungeon::mid_boss_levels(75), vec![25, 50]);
        assert_eq!(Dungeon::mid_boss_levels(100), vec![25, 50, 75]);
    }

    #[test]
    fn boss_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&BossType::Procedural).unwrap(),
            "\"procedural\""
        );
    }
}
