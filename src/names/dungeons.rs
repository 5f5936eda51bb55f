use crate::model::{Archetype, RaceKind};

/// Dungeon theme derived from who delved it and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Tower,
    Crypt,
    Lair,
    Mine,
    Vault,
    Fortress,
    Warren,
    Temple,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Tower => "tower",
            Theme::Crypt => "crypt",
            Theme::Lair => "lair",
            Theme::Mine => "mine",
            Theme::Vault => "vault",
            Theme::Fortress => "fortress",
            Theme::Warren => "warren",
            Theme::Temple => "temple",
        }
    }

    /// Theme for an organization's dungeon, keyed off its purpose text.
    pub fn for_purpose(purpose: &str) -> Theme {
        let purpose = purpose.to_ascii_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| purpose.contains(w));
        if has(&["mining", "mithril", "ore", "delve"]) {
            Theme::Mine
        } else if has(&["vault", "treasure", "hoard"]) {
            Theme::Vault
        } else if has(&["fortress", "stronghold"]) {
            Theme::Fortress
        } else if has(&["crypt", "catacomb"]) {
            Theme::Crypt
        } else if has(&["tunnel", "burrow", "underworld", "dig"]) {
            Theme::Warren
        } else {
            Theme::Temple
        }
    }

    /// Theme for a standout mortal's dungeon. Tower builders get towers.
    pub fn for_mortal(archetype: Archetype, raised_tower: bool) -> Theme {
        if raised_tower {
            return Theme::Tower;
        }
        match archetype {
            Archetype::Necromancer | Archetype::Lich | Archetype::Vampire => Theme::Crypt,
            _ => Theme::Lair,
        }
    }
}

/// Name templates per theme. `{owner}` is the creator's name, `{place}` the
/// geography it lies under.
pub fn dungeon_templates(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Tower => &[
            "The Tower of {owner}",
            "{owner}'s Spire",
            "The Sunken Spire of {place}",
            "The Obsidian Tower of {owner}",
            "The Inverted Tower beneath {place}",
        ],
        Theme::Crypt => &[
            "The Crypt of {owner}",
            "{owner}'s Ossuary",
            "The Barrow beneath {place}",
            "The Catacombs of {owner}",
            "The Tomb-Halls of {place}",
        ],
        Theme::Lair => &[
            "The Lair of {owner}",
            "{owner}'s Den",
            "The Hollow under {place}",
            "The Pit of {owner}",
            "The Black Hole of {place}",
        ],
        Theme::Mine => &[
            "The Deep Mines of {owner}",
            "The Lost Delvings of {place}",
            "{owner}'s Shafts",
            "The Endless Seam beneath {place}",
        ],
        Theme::Vault => &[
            "The Vaults of {owner}",
            "The Sealed Treasury beneath {place}",
            "{owner}'s Hoard",
            "The Locked Deep of {place}",
        ],
        Theme::Fortress => &[
            "The Undercroft of {owner}",
            "The Fallen Bastion beneath {place}",
            "{owner}'s Deepkeep",
            "The Buried Citadel of {place}",
        ],
        Theme::Warren => &[
            "The Warrens of {owner}",
            "The Tunnels beneath {place}",
            "{owner}'s Burrows",
            "The Twisting Dark of {place}",
        ],
        Theme::Temple => &[
            "The Sunken Temple of {owner}",
            "The Hidden Sanctum beneath {place}",
            "{owner}'s Undercloister",
            "The Forgotten Shrine of {place}",
        ],
    }
}

pub const DUNGEON_DESCRIPTIONS: &[&str] = &[
    "Delved by {owner} beneath {place}, it descends {depth} levels into the dark.",
    "{owner} carved this {theme} under {place}; {depth} levels deep and rarely mapped.",
    "A {theme} of {depth} levels beneath {place}, the work of {owner}.",
];

/// Titles given to procedurally generated bosses.
pub const BOSS_TITLES: &[&str] = &[
    "the Devourer",
    "the Gatekeeper",
    "Warden of the Deep",
    "the Bonegrinder",
    "the Hollow King",
    "the Ravenous",
    "the Unseen",
    "the Jailer",
    "Mother of Spiders",
    "the Rot-Touched",
    "the Iron Maw",
    "the Pale Watcher",
];

/// Monstrous names for procedural bosses, flavored by the dungeon's race.
pub fn boss_names(race: Option<&RaceKind>) -> &'static [&'static str] {
    match race {
        Some(RaceKind::Orc | RaceKind::Goblin | RaceKind::Troll | RaceKind::Kobold) => &[
            "Gorlag", "Skullmaw", "Urgash", "Grishnak", "Bolgrim", "Snagrot", "Muzgash", "Krogg",
        ],
        Some(RaceKind::Dwarf | RaceKind::Gnome | RaceKind::Giant) => &[
            "Durnhelm",
            "Balrok",
            "Grimthane",
            "Hrothgar",
            "Stonewrath",
            "Kazgrund",
            "Ymthor",
            "Rustbeard",
        ],
        Some(RaceKind::Elf | RaceKind::Tiefling) => &[
            "Vaelith",
            "Morthiel",
            "Zyranne",
            "Ilvarzen",
            "Sythrae",
            "Nethraxis",
            "Calindra",
            "Xalvadris",
        ],
        Some(RaceKind::Lizardfolk | RaceKind::Merfolk | RaceKind::Dragonborn) => &[
            "Sszarak",
            "Tidefang",
            "Vharkul",
            "Ossithrax",
            "Maelgrith",
            "Korrazath",
            "Sythrak",
            "Drowned Olm",
        ],
        _ => &[
            "Morgath",
            "Vexmoor",
            "Ashkarn",
            "Dreadmere",
            "Kalthus",
            "Sorrowgrim",
            "Vornak",
            "Hollowmaw",
        ],
    }
}
