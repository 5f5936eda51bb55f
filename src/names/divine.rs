use crate::model::{DemiGodKind, Element, RaceKind};

/// Global concept pool that conceptual beings are drawn from.
pub const CONCEPTS: &[&str] = &[
    "war",
    "love",
    "craft",
    "forge",
    "stone",
    "death",
    "harvest",
    "sea",
    "sky",
    "storm",
    "sun",
    "moon",
    "stars",
    "wisdom",
    "knowledge",
    "trickery",
    "hunt",
    "wilderness",
    "healing",
    "plague",
    "fire",
    "frost",
    "dreams",
    "nightmares",
    "justice",
    "vengeance",
    "mercy",
    "fate",
    "luck",
    "wealth",
    "trade",
    "travel",
    "roads",
    "music",
    "art",
    "beauty",
    "fertility",
    "childbirth",
    "hearth",
    "home",
    "ancestors",
    "honor",
    "courage",
    "fear",
    "madness",
    "secrets",
    "shadows",
    "light",
    "dawn",
    "dusk",
    "night",
    "seasons",
    "spring",
    "winter",
    "rain",
    "rivers",
    "mountains",
    "forests",
    "beasts",
    "serpents",
    "dragons",
    "blood",
    "bones",
    "rot",
    "rebirth",
    "prophecy",
    "oaths",
    "law",
    "tyranny",
    "freedom",
    "rebellion",
    "hunger",
    "feasts",
    "wine",
    "revelry",
    "silence",
    "sleep",
    "memory",
    "time",
    "thunder",
    "earthquakes",
    "volcanoes",
    "tides",
    "pearls",
    "gold",
    "gems",
    "mining",
    "agriculture",
    "writing",
    "magic",
    "runes",
    "alchemy",
    "invention",
    "gateways",
    "thresholds",
    "storytelling",
    "greed",
    "pride",
    "sacrifice",
    "victory",
];

/// Race-flavored divine names used to build conceptual-being names.
pub fn divine_roots(race: &RaceKind) -> &'static [&'static str] {
    match race {
        RaceKind::Human => &[
            "Aldor", "Benedra", "Casimir", "Ilyana", "Marek", "Solenne", "Tavish", "Verena",
        ],
        RaceKind::Elf => &[
            "Aelithar",
            "Caelyndra",
            "Elunara",
            "Ithilwen",
            "Lorathiel",
            "Sylvanor",
            "Thalanil",
            "Yseril",
        ],
        RaceKind::Dwarf => &[
            "Brannok", "Durgrim", "Gimrak", "Hrolda", "Korgrund", "Morradin", "Thrundra", "Vulkar",
        ],
        RaceKind::Halfling => &[
            "Bramble", "Cobbin", "Hollis", "Marigold", "Pipkin", "Rosamund", "Tansy", "Wendle",
        ],
        RaceKind::Gnome => &[
            "Fizzwick", "Glimmera", "Nackle", "Orrin", "Quillby", "Sprocket", "Tinkara", "Zook",
        ],
        RaceKind::Orc => &[
            "Gorzhak", "Krulla", "Morgash", "Naz'gra", "Rakhul", "Shagra", "Urzog", "Vrakka",
        ],
        RaceKind::Goblin => &[
            "Grizzik", "Nikknak", "Skrat", "Snagga", "Vixx", "Yarba", "Zigzak", "Krink",
        ],
        RaceKind::Troll => &[
            "Grendal", "Hruth", "Mossback", "Oghul", "Skarn", "Thokk", "Ulgra", "Vorn",
        ],
        RaceKind::Giant => &[
            "Bjornhal",
            "Grunnhild",
            "Jotunmar",
            "Skadrik",
            "Thrymra",
            "Ulfgar",
            "Ymira",
            "Hrungnir",
        ],
        RaceKind::Dragonborn => &[
            "Arjhan", "Balasar", "Kriv", "Medrash", "Nadarr", "Sora", "Thava", "Vyrax",
        ],
        RaceKind::Tiefling => &[
            "Akmenos", "Damaia", "Ekemon", "Kallista", "Leucis", "Mordai", "Nemeia", "Skamos",
        ],
        RaceKind::Kobold => &[
            "Drik",
            "Kurtulmak",
            "Meepo",
            "Sniv",
            "Tazz",
            "Yipyak",
            "Zarn",
            "Kib",
        ],
        RaceKind::Lizardfolk => &[
            "Sess'inek",
            "Thassk",
            "Ghaunk",
            "Ixlith",
            "Semuanya",
            "Kasshar",
            "Vuul",
            "Zhesk",
        ],
        RaceKind::Merfolk => &[
            "Coralyn",
            "Eddra",
            "Maristhal",
            "Nerissa",
            "Pelagor",
            "Shellith",
            "Tidreth",
            "Undiel",
        ],
        RaceKind::Custom(_) => &[
            "Anwe", "Bexa", "Corum", "Deyra", "Esk", "Fal", "Gorun", "Hesta",
        ],
    }
}

const CONCEPT_TITLES: &[&str] = &[
    "Lord of {concept}",
    "Keeper of {concept}",
    "Voice of {concept}",
    "the {Concept}-Bringer",
];

/// Candidate conceptual-being names for a race and concept.
pub fn concept_names(race: &RaceKind, concept: &str) -> Vec<String> {
    let capital = super::capitalize(concept);
    let mut names = Vec::new();
    for root in divine_roots(race) {
        for title in CONCEPT_TITLES {
            let title = title.replace("{concept}", &capital).replace("{Concept}", &capital);
            names.push(format!("{root}, {title}"));
        }
    }
    names
}

pub const CONCEPT_DESCRIPTIONS: &[&str] = &[
    "Worshipped first by the {race}, {name} gives shape to {concept}.",
    "The {race} prayed to {concept} until their prayers took form as {name}.",
    "{name} is {concept} made divine, born of {race} devotion.",
];

pub const ANCIENT_CREATURES: &[&str] = &[
    "dragon",
    "leviathan",
    "phoenix",
    "behemoth",
    "kraken",
    "roc",
    "wyrm",
    "basilisk",
    "hydra",
    "chimera",
];

/// Element an ancient creature is most at home in.
pub fn creature_element(creature: &str) -> Option<Element> {
    match creature {
        "dragon" | "phoenix" | "wyrm" => Some(Element::Fire),
        "leviathan" | "kraken" | "hydra" => Some(Element::Water),
        "roc" => Some(Element::Wind),
        "behemoth" | "basilisk" => Some(Element::Earth),
        "chimera" => Some(Element::Magic),
        _ => None,
    }
}

pub const EXPERIMENT_FEATURES: &[&str] = &[
    "wings of living flame",
    "a second beating heart",
    "eyes that see through stone",
    "scales harder than steel",
    "a voice that commands beasts",
    "blood that heals",
    "limbs of woven root",
    "a body of moving water",
    "breath of frost",
    "a crown of horns",
];

pub const FALLEN_DOMAINS: &[&str] = &[
    "the dawn",
    "mercy",
    "the harvest",
    "the hearth",
    "honest trade",
    "the stars",
    "healing",
    "justice",
];

pub const MORTAL_CALLINGS: &[&str] = &[
    "shepherd", "soldier", "scholar", "healer", "smith", "sailor", "priest", "hunter",
];

pub const SPAWN_ESSENCES: &[&str] = &[
    "living void",
    "unmade hours",
    "raw brilliance",
    "congealed night",
    "perfect symmetry",
    "formless hunger",
];

pub fn demigod_names(kind: DemiGodKind) -> &'static [&'static str] {
    match kind {
        DemiGodKind::HalfGod => &[
            "Heraklion",
            "Aurelis",
            "Kastora",
            "Peleus",
            "Thessaly",
            "Orionel",
            "Demara",
            "Achellan",
        ],
        DemiGodKind::AncientCreature => &[
            "Vermithrax",
            "Scylgor",
            "Ashwing",
            "Tiamarok",
            "Glaurith",
            "Nidhogra",
            "Ankhalor",
            "Jormunth",
        ],
        DemiGodKind::DivineExperiment => &[
            "The Stitched One",
            "Amalgam",
            "The Firstborn Failure",
            "Chimaeros",
            "The Woven",
            "Proto",
            "The Unfinished",
            "Mosaic",
        ],
        DemiGodKind::FallenDivine => &[
            "Azraelith",
            "Lucivar",
            "Morwen the Cast-Down",
            "Belishar",
            "Samaelor",
            "The Dimmed Star",
            "Orcus",
            "Malakor",
        ],
        DemiGodKind::AscendedMortal => &[
            "Saint Ilsabet",
            "Varro the Undying",
            "Oona Brightsoul",
            "Tomas Ascendant",
            "Kethra",
            "Hallan the Risen",
            "Mira Starward",
            "Eldric",
        ],
        DemiGodKind::PrimordialSpawn => &[
            "Voidling Prime",
            "The Hour-Eater",
            "Glare",
            "Nightmaw",
            "The Perfect Angle",
            "Seethe",
            "Yawn",
            "Shardmother",
        ],
    }
}

pub fn demigod_powers(kind: DemiGodKind) -> &'static [&'static str] {
    match kind {
        DemiGodKind::HalfGod => &[
            "divine strength",
            "unerring aim",
            "blessed wounds",
            "heroic presence",
            "inspire armies",
        ],
        DemiGodKind::AncientCreature => &[
            "world-shaking roar",
            "elemental breath",
            "endless hoard-sense",
            "impenetrable hide",
            "flight",
        ],
        DemiGodKind::DivineExperiment => &[
            "adaptive flesh",
            "regeneration",
            "mimicry",
            "elemental affinity",
            "unstable surges",
        ],
        DemiGodKind::FallenDivine => &[
            "corrupting touch",
            "stolen miracles",
            "whispered temptation",
            "black flame",
            "despair aura",
        ],
        DemiGodKind::AscendedMortal => &[
            "saintly radiance",
            "prophetic dreams",
            "miraculous healing",
            "unbreakable will",
            "guiding light",
        ],
        DemiGodKind::PrimordialSpawn => &[
            "reality warp",
            "time slip",
            "void step",
            "blinding glare",
            "entropy",
        ],
    }
}

/// Describe a divine experiment by how many features it was given.
pub fn experiment_description(name: &str, creator: &str, features: &[String]) -> String {
    match features {
        [] => format!("{name} was shaped by {creator}, who left it strangely unaltered."),
        [one] => format!("{name} was shaped by {creator} and granted {one}."),
        [a, b] => format!("{creator} gave {name} {a}, then, unsatisfied, added {b}."),
        [a, b, c] => format!(
            "{name} bears three marks of {creator}'s craft: {a}, {b}, and {c}."
        ),
        many => format!(
            "{creator} worked on {name} for an age, layering {}.",
            super::join_list(many)
        ),
    }
}

pub fn demigod_description(kind: DemiGodKind, name: &str, parent: &str, detail: &str) -> String {
    match kind {
        DemiGodKind::HalfGod => {
            format!("{name} is the child of {parent} and a mortal of the {detail}.")
        }
        DemiGodKind::AncientCreature => {
            format!("{name}, an ancient {detail}, was loosed upon the world by {parent}.")
        }
        DemiGodKind::DivineExperiment => format!("{name} was made by {parent}: {detail}"),
        DemiGodKind::FallenDivine => {
            format!("{name} once served {parent} as a power of {detail}, before the fall.")
        }
        DemiGodKind::AscendedMortal => {
            format!("{name}, once a humble {detail}, was raised to godhood by {parent}.")
        }
        DemiGodKind::PrimordialSpawn => {
            format!("{name} dripped from {parent} as a clot of {detail}.")
        }
    }
}
