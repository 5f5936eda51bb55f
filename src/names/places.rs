use crate::model::{GeographyKind, Magnitude};

const PLACE_ROOTS: &[&str] = &[
    "Ashen", "Amber", "Black", "Cinder", "Dawn", "Dusk", "Ember", "Frost", "Gloom", "Golden",
    "Grey", "Iron", "Jade", "Moon", "Obsidian", "Pale", "Raven", "Salt", "Shadow", "Silver",
    "Storm", "Sun", "Thorn", "Whisper",
];

fn nouns(kind: GeographyKind) -> &'static [&'static str] {
    match kind {
        GeographyKind::Continent => &["Continent", "Lands", "Mainland"],
        GeographyKind::Ocean => &["Ocean", "Deep", "Expanse"],
        GeographyKind::Sea => &["Sea", "Waters"],
        GeographyKind::MountainRange => &["Mountains", "Peaks", "Spine"],
        GeographyKind::River => &["River", "Run", "Flow"],
        GeographyKind::Lake => &["Lake", "Mere", "Loch"],
        GeographyKind::Forest => &["Forest", "Wood", "Weald"],
        GeographyKind::Jungle => &["Jungle", "Tangle", "Canopy"],
        GeographyKind::Desert => &["Desert", "Wastes", "Sands"],
        GeographyKind::Swamp => &["Swamp", "Bog", "Fen"],
        GeographyKind::Marsh => &["Marsh", "Mire", "Reeds"],
        GeographyKind::Tundra => &["Tundra", "Barrens", "Frostlands"],
        GeographyKind::Glacier => &["Glacier", "Icefield", "Rime"],
        GeographyKind::Volcano => &["Volcano", "Caldera", "Mount"],
        GeographyKind::Island => &["Isle", "Island", "Key"],
        GeographyKind::Archipelago => &["Archipelago", "Isles", "Atolls"],
        GeographyKind::Canyon => &["Canyon", "Gorge", "Rift"],
        GeographyKind::Plains => &["Plains", "Fields", "Flats"],
        GeographyKind::Steppe => &["Steppe", "Grasslands", "Reach"],
        GeographyKind::Hills => &["Hills", "Downs", "Knolls"],
        GeographyKind::Valley => &["Valley", "Vale", "Dale"],
        GeographyKind::Plateau => &["Plateau", "Tableland", "Heights"],
        GeographyKind::Coast => &["Coast", "Shore", "Strand"],
        GeographyKind::Fjord => &["Fjord", "Sound", "Inlet"],
        GeographyKind::CaveSystem => &["Caverns", "Hollows", "Underdeep"],
    }
}

/// Candidate names for a feature kind: every root paired with every noun.
pub fn geography_names(kind: GeographyKind) -> Vec<String> {
    let mut names = Vec::new();
    for noun in nouns(kind) {
        for root in PLACE_ROOTS {
            names.push(format!("The {root} {noun}"));
        }
    }
    names
}

/// Size class a feature kind usually has.
pub fn typical_magnitude(kind: GeographyKind) -> Magnitude {
    match kind {
        GeographyKind::Continent | GeographyKind::Ocean => Magnitude::Vast,
        GeographyKind::Sea
        | GeographyKind::MountainRange
        | GeographyKind::Desert
        | GeographyKind::Tundra
        | GeographyKind::Jungle
        | GeographyKind::Steppe
        | GeographyKind::Archipelago => Magnitude::Large,
        GeographyKind::Forest
        | GeographyKind::River
        | GeographyKind::Plains
        | GeographyKind::Glacier
        | GeographyKind::Swamp
        | GeographyKind::Coast
        | GeographyKind::Plateau
        | GeographyKind::Canyon
        | GeographyKind::Hills
        | GeographyKind::Valley => Magnitude::Medium,
        GeographyKind::Lake
        | GeographyKind::Marsh
        | GeographyKind::Volcano
        | GeographyKind::Island
        | GeographyKind::Fjord
        | GeographyKind::CaveSystem => Magnitude::Small,
    }
}

/// How many features of each kind a world gets, as an inclusive range.
pub fn feature_count(kind: GeographyKind) -> (u32, u32) {
    match typical_magnitude(kind) {
        Magnitude::Vast => (1, 2),
        Magnitude::Large => (1, 2),
        Magnitude::Medium => (1, 3),
        Magnitude::Small => (2, 3),
    }
}

pub const GEOGRAPHY_DESCRIPTIONS: &[&str] = &[
    "A {magnitude} {kind} shaped by {creator} in the Age of Shaping.",
    "{creator} {verb}, and so {name} came to be: a {magnitude} {kind}.",
    "Travelers speak of {name}, a {magnitude} {kind} still bearing the mark of {creator}.",
];
