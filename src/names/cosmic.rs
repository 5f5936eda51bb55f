use crate::model::{Element, PrimordialKind};

pub fn primordial_names(kind: &PrimordialKind) -> &'static [&'static str] {
    match kind {
        PrimordialKind::Space => &[
            "Vastness",
            "The Endless Expanse",
            "Ouranel",
            "The Hollow Between",
            "Aethys",
        ],
        PrimordialKind::Time => &[
            "Chronar",
            "The Turning Wheel",
            "Eternis",
            "The Unending Hour",
            "Aionth",
        ],
        PrimordialKind::Light => &[
            "Lumeth",
            "The First Radiance",
            "Solenne",
            "The Unblinking Eye",
            "Phosra",
        ],
        PrimordialKind::Dark => &[
            "Nyxara",
            "The Devouring Shade",
            "Umbrath",
            "The Silence Below",
            "Erebon",
        ],
        PrimordialKind::Order => &[
            "Axiom",
            "The Great Lattice",
            "Kosmara",
            "The Binding Law",
            "Themorn",
        ],
        PrimordialKind::Chaos => &[
            "Khaosyr",
            "The Roiling Maw",
            "Tumulth",
            "The Formless Storm",
            "Ataxis",
        ],
        PrimordialKind::Custom(_) => &[
            "The Nameless Force",
            "The Unbidden",
            "Protheon",
            "The Elder Current",
            "Arkhos",
        ],
    }
}

pub fn primordial_domain(kind: &PrimordialKind) -> String {
    match kind {
        PrimordialKind::Space => "distance and emptiness".to_string(),
        PrimordialKind::Time => "change and ending".to_string(),
        PrimordialKind::Light => "revelation and warmth".to_string(),
        PrimordialKind::Dark => "concealment and rest".to_string(),
        PrimordialKind::Order => "law and pattern".to_string(),
        PrimordialKind::Chaos => "change without cause".to_string(),
        PrimordialKind::Custom(name) => format!("the essence of {}", name.to_lowercase()),
    }
}

pub fn primordial_influences(kind: &PrimordialKind) -> &'static [&'static str] {
    match kind {
        PrimordialKind::Space => &["stars", "the void", "horizons", "gravity", "voyages"],
        PrimordialKind::Time => &["ageing", "memory", "seasons", "prophecy", "decay"],
        PrimordialKind::Light => &["sunlight", "truth", "growth", "vision", "fire"],
        PrimordialKind::Dark => &["night", "secrets", "dreams", "shadow", "death"],
        PrimordialKind::Order => &["crystals", "oaths", "mathematics", "kingship", "cycles"],
        PrimordialKind::Chaos => &["storms", "mutation", "madness", "luck", "war"],
        PrimordialKind::Custom(_) => &["the unknown", "wonder", "mystery", "power"],
    }
}

pub const PRIMORDIAL_DESCRIPTIONS: &[&str] = &[
    "{name} existed before the first thought, the living embodiment of {domain}.",
    "Before there was anything, there was {name}, and {name} was {domain}.",
    "{name} drifts through the unmade places, shaping all things toward {domain}.",
];

pub fn creator_names(element: Element) -> &'static [&'static str] {
    match element {
        Element::Rock => &[
            "Grathorn the Unbroken",
            "Petrava",
            "The Stone Father",
            "Ulmarok",
            "Kaldrith",
        ],
        Element::Wind => &[
            "Zephyrine",
            "The Howling Mother",
            "Aeolor",
            "Siravelle",
            "Tempesk",
        ],
        Element::Water => &[
            "Thalassa",
            "The Deep Mother",
            "Nerevon",
            "Maridul",
            "Oceanth",
        ],
        Element::Life => &[
            "Verdana",
            "The Green Heart",
            "Sylvareth",
            "Ambrelle",
            "Vitalis",
        ],
        Element::Fire => &[
            "Ignarok",
            "The Forge Heart",
            "Pyrelth",
            "Calderon",
            "Emberion",
        ],
        Element::Earth => &["Terrask", "The Deep Root", "Gaelor", "Humoth", "Orrendal"],
        Element::Ice => &[
            "Glacira",
            "The Still Breath",
            "Rimeth",
            "Frosvald",
            "Hjalmira",
        ],
        Element::Magic => &[
            "Arcanith",
            "The Weaving Hand",
            "Mystrael",
            "Sorveline",
            "Etherion",
        ],
    }
}

pub fn element_verb(element: Element) -> &'static str {
    match element {
        Element::Rock => "raised the bones of the world",
        Element::Wind => "breathed the first winds",
        Element::Water => "poured out the seas",
        Element::Life => "seeded the first living things",
        Element::Fire => "kindled the burning heart of the world",
        Element::Earth => "spread soil over the bare stone",
        Element::Ice => "sealed the far places in frost",
        Element::Magic => "wove power into every thread of creation",
    }
}

pub const CREATOR_DESCRIPTIONS: &[&str] = &[
    "Born of {parent}, {name} {verb}.",
    "{name}, child of {parent}, {verb} and still watches over {element}.",
    "When {parent} stirred, {name} awoke and {verb}.",
];
