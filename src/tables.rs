//! Immutable affinity tables that bias parent selection toward thematically
//! consistent choices.

use crate::model::{
    Alignment, Archetype, DemiGodKind, Element, GeographyKind, OrganizationKind, PrimordialKind,
    RaceKind,
};

/// Elements whose creators may shape a geography kind.
pub fn geography_elements(kind: GeographyKind) -> &'static [Element] {
    use Element::*;
    use GeographyKind::*;
    match kind {
        Continent => &[Earth, Rock],
        Ocean => &[Water],
        Sea => &[Water],
        MountainRange => &[Rock],
        River => &[Water],
        Lake => &[Water],
        Forest => &[Life],
        Jungle => &[Life, Water],
        Desert => &[Fire, Wind],
        Swamp => &[Water, Life],
        Marsh => &[Water, Earth],
        Tundra => &[Ice],
        Glacier => &[Ice],
        Volcano => &[Fire],
        Island => &[Water, Rock],
        Archipelago => &[Water],
        Canyon => &[Wind, Rock],
        Plains => &[Earth, Wind],
        Steppe => &[Wind],
        Hills => &[Earth],
        Valley => &[Earth, Life],
        Plateau => &[Rock, Wind],
        Coast => &[Water, Earth],
        Fjord => &[Ice, Water],
        CaveSystem => &[Rock, Earth],
    }
}

/// The primordial force each element prefers as its parent.
pub fn element_primordial(element: Element) -> PrimordialKind {
    match element {
        Element::Rock | Element::Earth => PrimordialKind::Order,
        Element::Wind | Element::Fire => PrimordialKind::Chaos,
        Element::Water => PrimordialKind::Time,
        Element::Life => PrimordialKind::Light,
        Element::Ice => PrimordialKind::Dark,
        Element::Magic => PrimordialKind::Space,
    }
}

/// Elements whose creators awaken a race. Empty for custom races, which
/// fall back to round-robin.
pub fn race_elements(race: &RaceKind) -> &'static [Element] {
    match race {
        RaceKind::Human => &[Element::Life],
        RaceKind::Elf => &[Element::Magic, Element::Life],
        RaceKind::Dwarf => &[Element::Rock, Element::Earth],
        RaceKind::Halfling => &[Element::Life, Element::Earth],
        RaceKind::Gnome => &[Element::Magic, Element::Rock],
        RaceKind::Orc => &[Element::Fire, Element::Earth],
        RaceKind::Goblin => &[Element::Earth],
        RaceKind::Troll => &[Element::Rock, Element::Ice],
        RaceKind::Giant => &[Element::Ice, Element::Rock],
        RaceKind::Dragonborn => &[Element::Fire],
        RaceKind::Tiefling => &[Element::Fire, Element::Magic],
        RaceKind::Kobold => &[Element::Earth, Element::Fire],
        RaceKind::Lizardfolk => &[Element::Water],
        RaceKind::Merfolk => &[Element::Water],
        RaceKind::Custom(_) => &[],
    }
}

/// Organization kinds a race may found.
pub fn race_organizations(race: &RaceKind) -> &'static [OrganizationKind] {
    use OrganizationKind::*;
    match race {
        RaceKind::Human => &[
            Empire,
            Kingdom,
            Duchy,
            Barony,
            CityState,
            Republic,
            Theocracy,
            Guild,
            MerchantCompany,
            KnightlyOrder,
            ThievesGuild,
            MercenaryCompany,
            PirateFleet,
        ],
        RaceKind::Elf => &[
            Realm,
            Court,
            Enclave,
            Conclave,
            MagesCircle,
            DruidCircle,
            Grove,
            Academy,
        ],
        RaceKind::Dwarf => &[
            Kingdom,
            Stronghold,
            Hold,
            Clan,
            Guild,
            MiningConsortium,
            Brotherhood,
        ],
        RaceKind::Halfling => &[Republic, Council, Guild, MerchantCompany, Lodge, Clan],
        RaceKind::Gnome => &[Academy, Guild, MiningConsortium, Council, MagesCircle],
        RaceKind::Orc => &[Horde, Warband, Tribe, Clan, MercenaryCompany],
        RaceKind::Goblin => &[Warren, Tribe, ThievesGuild, Warband, Horde],
        RaceKind::Troll => &[Clan, Tribe, Warband, Pack],
        RaceKind::Giant => &[Kingdom, Clan, Court, Stronghold],
        RaceKind::Dragonborn => &[Empire, Clan, KnightlyOrder, Temple, Brotherhood],
        RaceKind::Tiefling => &[
            Cult,
            Coven,
            ThievesGuild,
            AssassinsGuild,
            CityState,
            NomadCaravan,
        ],
        RaceKind::Kobold => &[Warren, Brood, Cult, Tribe, MiningConsortium],
        RaceKind::Lizardfolk => &[Tribe, Brood, Hive, Temple],
        RaceKind::Merfolk => &[Realm, Court, Council, PirateFleet, Temple],
        RaceKind::Custom(_) => &[Kingdom, Tribe, Clan, Guild, Temple],
    }
}

/// Concepts a race's worship gravitates toward.
pub fn race_concepts(race: &RaceKind) -> &'static [&'static str] {
    match race {
        RaceKind::Human => &["war", "harvest", "justice", "trade", "love", "law"],
        RaceKind::Elf => &["magic", "stars", "forests", "beauty", "music", "moon"],
        RaceKind::Dwarf => &["craft", "forge", "stone", "ancestors", "gold", "mining"],
        RaceKind::Halfling => &["hearth", "home", "luck", "feasts", "harvest"],
        RaceKind::Gnome => &["invention", "trickery", "gems", "knowledge", "alchemy"],
        RaceKind::Orc => &["war", "blood", "hunt", "courage", "vengeance", "storm"],
        RaceKind::Goblin => &["trickery", "greed", "shadows", "hunger"],
        RaceKind::Troll => &["hunger", "rot", "rebirth", "mountains"],
        RaceKind::Giant => &["mountains", "frost", "thunder", "honor", "storm"],
        RaceKind::Dragonborn => &["dragons", "fire", "honor", "victory", "oaths"],
        RaceKind::Tiefling => &["secrets", "freedom", "rebellion", "fire", "fate"],
        RaceKind::Kobold => &["dragons", "mining", "trickery", "sacrifice"],
        RaceKind::Lizardfolk => &["serpents", "rivers", "hunger", "rebirth", "sun"],
        RaceKind::Merfolk => &["sea", "tides", "pearls", "moon", "music"],
        RaceKind::Custom(_) => &[],
    }
}

/// Relative weights for rolling an archetype's alignment.
pub struct AlignmentLeaning {
    pub good: u32,
    pub neutral: u32,
    pub evil: u32,
}

impl AlignmentLeaning {
    pub fn roll(&self, rng: &mut dyn rand::RngCore) -> Alignment {
        use rand::Rng;
        let total = self.good + self.neutral + self.evil;
        let roll = rng.random_range(0..total.max(1));
        if roll < self.good {
            Alignment::Good
        } else if roll < self.good + self.neutral {
            Alignment::Neutral
        } else {
            Alignment::Evil
        }
    }
}

pub fn alignment_leaning(archetype: Archetype) -> AlignmentLeaning {
    let (good, neutral, evil) = match archetype {
        Archetype::Hero | Archetype::Paladin | Archetype::Knight | Archetype::Cleric => (8, 2, 0),
        Archetype::Lich | Archetype::Villain | Archetype::Vampire | Archetype::Necromancer => {
            (0, 1, 9)
        }
        Archetype::Warlock | Archetype::Assassin => (1, 3, 6),
        Archetype::Sorcerer | Archetype::Wizard | Archetype::Archmage => (4, 3, 3),
        Archetype::Warlord | Archetype::Thief | Archetype::PirateCaptain => (1, 5, 4),
        Archetype::Druid | Archetype::Sage | Archetype::Oracle | Archetype::Explorer => (4, 6, 0),
        _ => (4, 4, 2),
    };
    AlignmentLeaning {
        good,
        neutral,
        evil,
    }
}

pub fn demigod_leaning(kind: DemiGodKind) -> AlignmentLeaning {
    let (good, neutral, evil) = match kind {
        DemiGodKind::HalfGod => (5, 3, 2),
        DemiGodKind::AncientCreature => (2, 4, 4),
        DemiGodKind::DivineExperiment => (2, 4, 4),
        DemiGodKind::FallenDivine => (0, 2, 8),
        DemiGodKind::AscendedMortal => (8, 2, 0),
        DemiGodKind::PrimordialSpawn => (1, 3, 6),
    };
    AlignmentLeaning {
        good,
        neutral,
        evil,
    }
}

/// Organization kinds that lean toward delving a dungeon.
pub const LIKELY_DUNGEON_KINDS: &[OrganizationKind] = &[
    OrganizationKind::Kingdom,
    OrganizationKind::Horde,
    OrganizationKind::Realm,
    OrganizationKind::Stronghold,
];

/// Purpose keywords that make a dungeon very likely.
pub const DUNGEON_KEYWORDS: &[&str] = &[
    "mining",
    "mine",
    "fortress",
    "vault",
    "crypt",
    "catacomb",
    "tunnel",
    "delve",
    "underworld",
    "treasure",
];

pub fn purpose_suggests_dungeon(purpose: &str) -> bool {
    let lowered = purpose.to_ascii_lowercase();
    DUNGEON_KEYWORDS.iter().any(|k| lowered.contains(k))
}
