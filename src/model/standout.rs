use serde::{Deserialize, Serialize};

use super::entity::{Alignment, EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Archetype {
    King,
    Queen,
    Prince,
    Princess,
    Chieftain,
    Warlord,
    HighPriest,
    Wizard,
    Archmage,
    Sorcerer,
    Warlock,
    Necromancer,
    Lich,
    Vampire,
    Villain,
    Hero,
    Knight,
    Paladin,
    Cleric,
    Druid,
    Ranger,
    Rogue,
    Assassin,
    Thief,
    Bard,
    Sage,
    Prophet,
    Oracle,
    Shaman,
    Alchemist,
    Inventor,
    Explorer,
    MerchantPrince,
    MasterSmith,
    Gladiator,
    PirateCaptain,
}

string_enum!(Archetype {
    King => "king",
    Queen => "queen",
    Prince => "prince",
    Princess => "princess",
    Chieftain => "chieftain",
    Warlord => "warlord",
    HighPriest => "high_priest",
    Wizard => "wizard",
    Archmage => "archmage",
    Sorcerer => "sorcerer",
    Warlock => "warlock",
    Necromancer => "necromancer",
    Lich => "lich",
    Vampire => "vampire",
    Villain => "villain",
    Hero => "hero",
    Knight => "knight",
    Paladin => "paladin",
    Cleric => "cleric",
    Druid => "druid",
    Ranger => "ranger",
    Rogue => "rogue",
    Assassin => "assassin",
    Thief => "thief",
    Bard => "bard",
    Sage => "sage",
    Prophet => "prophet",
    Oracle => "oracle",
    Shaman => "shaman",
    Alchemist => "alchemist",
    Inventor => "inventor",
    Explorer => "explorer",
    MerchantPrince => "merchant_prince",
    MasterSmith => "master_smith",
    Gladiator => "gladiator",
    PirateCaptain => "pirate_captain",
});

impl Archetype {
    /// Archetypes that always delve a dungeon of their own.
    pub const DUNGEON_CREATORS: &'static [Archetype] = &[
        Archetype::Necromancer,
        Archetype::Wizard,
        Archetype::Archmage,
        Archetype::Lich,
        Archetype::Sorcerer,
        Archetype::Warlock,
        Archetype::Villain,
        Archetype::Vampire,
    ];

    /// Archetypes fit to lead an organization.
    pub const RULERS: &'static [Archetype] = &[
        Archetype::King,
        Archetype::Queen,
        Archetype::Chieftain,
        Archetype::Warlord,
        Archetype::HighPriest,
        Archetype::Archmage,
        Archetype::MerchantPrince,
    ];

    pub fn creates_dungeon(self) -> bool {
        Self::DUNGEON_CREATORS.contains(&self)
    }

    pub fn can_rule(self) -> bool {
        Self::RULERS.contains(&self)
    }

    pub fn title(self) -> &'static str {
        match self {
            Archetype::King => "King",
            Archetype::Queen => "Queen",
            Archetype::Prince => "Prince",
            Archetype::Princess => "Princess",
            Archetype::Chieftain => "Chieftain",
            Archetype::Warlord => "Warlord",
            Archetype::HighPriest => "High Priest",
            Archetype::Wizard => "Wizard",
            Archetype::Archmage => "Archmage",
            Archetype::Sorcerer => "Sorcerer",
            Archetype::Warlock => "Warlock",
            Archetype::Necromancer => "Necromancer",
            Archetype::Lich => "Lich",
            Archetype::Vampire => "Vampire Lord",
            Archetype::Villain => "Dread",
            Archetype::Hero => "Hero",
            Archetype::Knight => "Sir",
            Archetype::Paladin => "Paladin",
            Archetype::Cleric => "Cleric",
            Archetype::Druid => "Druid",
            Archetype::Ranger => "Ranger",
            Archetype::Rogue => "Rogue",
            Archetype::Assassin => "Shadow",
            Archetype::Thief => "Thief",
            Archetype::Bard => "Bard",
            Archetype::Sage => "Sage",
            Archetype::Prophet => "Prophet",
            Archetype::Oracle => "Oracle",
            Archetype::Shaman => "Shaman",
            Archetype::Alchemist => "Alchemist",
            Archetype::Inventor => "Artificer",
            Archetype::Explorer => "Wayfarer",
            Archetype::MerchantPrince => "Merchant Prince",
            Archetype::MasterSmith => "Master Smith",
            Archetype::Gladiator => "Champion",
            Archetype::PirateCaptain => "Captain",
        }
    }
}

/// Named individual of the heroic age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandoutMortal {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(rename = "standoutType")]
    pub archetype: Archetype,
    pub race_id: EntityId,
    /// Organization the mortal was born into, if any.
    pub organization_id: Option<EntityId>,
    pub birthplace_id: EntityId,
    pub alignment: Alignment,
    /// Always `alignment == evil`; set only by [`StandoutMortal::new`].
    pub is_boss: bool,
    pub powers: Vec<String>,
    pub history: Vec<String>,
    /// Organization this mortal rules.
    #[serde(default)]
    pub leads: Option<EntityId>,
    /// Dungeon this mortal guards. Filled when the world snapshot is
    /// assembled.
    #[serde(default)]
    pub lair_id: Option<EntityId>,
}

impl_generated!(StandoutMortal, EntityType::StandoutMortal);

impl StandoutMortal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base: EntityBase,
        archetype: Archetype,
        race_id: EntityId,
        organization_id: Option<EntityId>,
        birthplace_id: EntityId,
        alignment: Alignment,
        powers: Vec<String>,
        history: Vec<String>,
    ) -> Self {
        Self {
            base,
            archetype,
            race_id,
            organization_id,
            birthplace_id,
            alignment,
            is_boss: alignment.is_boss(),
            powers,
            history,
            leads: None,
            lair_id: None,
        }
    }
}
