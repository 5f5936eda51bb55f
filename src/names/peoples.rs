use crate::model::{Archetype, Lifespan, OrganizationKind, RaceKind};

pub fn race_display_name(race: &RaceKind) -> String {
    match race {
        RaceKind::Human => "Humans".to_string(),
        RaceKind::Elf => "Elves".to_string(),
        RaceKind::Dwarf => "Dwarves".to_string(),
        RaceKind::Halfling => "Halflings".to_string(),
        RaceKind::Gnome => "Gnomes".to_string(),
        RaceKind::Orc => "Orcs".to_string(),
        RaceKind::Goblin => "Goblins".to_string(),
        RaceKind::Troll => "Trolls".to_string(),
        RaceKind::Giant => "Giants".to_string(),
        RaceKind::Dragonborn => "Dragonborn".to_string(),
        RaceKind::Tiefling => "Tieflings".to_string(),
        RaceKind::Kobold => "Kobolds".to_string(),
        RaceKind::Lizardfolk => "Lizardfolk".to_string(),
        RaceKind::Merfolk => "Merfolk".to_string(),
        RaceKind::Custom(name) => super::title_case(&name.replace(' ', "_")),
    }
}

pub fn lifespan(race: &RaceKind) -> Lifespan {
    let (min, max) = match race {
        RaceKind::Human => (60, 90),
        RaceKind::Elf => (500, 750),
        RaceKind::Dwarf => (250, 350),
        RaceKind::Halfling => (100, 150),
        RaceKind::Gnome => (300, 450),
        RaceKind::Orc => (40, 60),
        RaceKind::Goblin => (30, 50),
        RaceKind::Troll => (150, 250),
        RaceKind::Giant => (300, 500),
        RaceKind::Dragonborn => (70, 90),
        RaceKind::Tiefling => (80, 110),
        RaceKind::Kobold => (90, 120),
        RaceKind::Lizardfolk => (50, 80),
        RaceKind::Merfolk => (150, 200),
        RaceKind::Custom(_) => (70, 120),
    };
    Lifespan { min, max }
}

/// Inclusive population range for a race.
pub fn population_range(race: &RaceKind) -> (u64, u64) {
    match race {
        RaceKind::Human => (2_000_000, 10_000_000),
        RaceKind::Orc | RaceKind::Goblin | RaceKind::Kobold => (1_000_000, 6_000_000),
        RaceKind::Elf | RaceKind::Dwarf | RaceKind::Halfling => (400_000, 2_000_000),
        RaceKind::Giant | RaceKind::Troll => (20_000, 120_000),
        _ => (100_000, 900_000),
    }
}

pub const RACE_DESCRIPTIONS: &[&str] = &[
    "The {race} were awakened by {creator} in {homeland}.",
    "{creator} breathed life into the first {race}, who made {homeland} their home.",
    "From {homeland} the {race} spread, ever mindful of {creator} who made them.",
];

/// Syllables used for organization and settlement names per race.
pub fn name_roots(race: &RaceKind) -> &'static [&'static str] {
    match race {
        RaceKind::Human => &[
            "Westmarch",
            "Aldmoor",
            "Kingsreach",
            "Highvale",
            "Brightwater",
            "Stonebridge",
            "Ravensford",
            "Greywall",
            "Eastwatch",
            "Thornbury",
        ],
        RaceKind::Elf => &[
            "Silverbough",
            "Starwhisper",
            "Moonglade",
            "Evenbloom",
            "Aelthas",
            "Lothmirien",
            "Sunspire",
            "Dawnleaf",
            "Thalorin",
            "Everglen",
        ],
        RaceKind::Dwarf => &[
            "Ironpeak",
            "Deepdelve",
            "Stonehammer",
            "Khaz Morad",
            "Goldvein",
            "Anvilhold",
            "Grimforge",
            "Barak Dum",
            "Coppercrag",
            "Runegate",
        ],
        RaceKind::Halfling => &[
            "Greenhollow",
            "Thistledown",
            "Appleby",
            "Puddlefoot",
            "Mossbottom",
            "Hearthfield",
            "Bramblewick",
            "Honeydale",
            "Tealeaf",
            "Cloverhill",
        ],
        RaceKind::Gnome => &[
            "Cogsworth",
            "Gearspring",
            "Tinkertop",
            "Glimmerdeep",
            "Fizzlebang",
            "Brasswhistle",
            "Sparkhollow",
            "Quartzby",
            "Wobblegate",
            "Spindlewick",
        ],
        RaceKind::Orc => &[
            "Bloodfang",
            "Skullcleaver",
            "Black Tusk",
            "Gorefist",
            "Ironjaw",
            "Burning Eye",
            "Bonegnasher",
            "Redmaw",
            "Warspear",
            "Ashclaw",
        ],
        RaceKind::Goblin => &[
            "Snaggletooth",
            "Rotgut",
            "Grubmire",
            "Sneakfoot",
            "Mudwallow",
            "Knifeear",
            "Ratbiter",
            "Sootskin",
            "Gutspill",
            "Crookback",
        ],
        RaceKind::Troll => &[
            "Mossgrave",
            "Bridgeclaw",
            "Stonehide",
            "Bogmaw",
            "Rootgnaw",
            "Fenrot",
            "Cragback",
            "Deepmire",
            "Greenbone",
            "Mudskull",
        ],
        RaceKind::Giant => &[
            "Frostcrown",
            "Skyhold",
            "Thundercliff",
            "Cloudpeak",
            "Stormhall",
            "Rimegard",
            "Hillheart",
            "Jotunheim",
            "Boulderfall",
            "Worldspine",
        ],
        RaceKind::Dragonborn => &[
            "Emberscale",
            "Flamecrest",
            "Kepeshkmolik",
            "Daardendrian",
            "Clethtinthiallor",
            "Ashwing",
            "Goldtalon",
            "Stormbreath",
            "Brightclaw",
            "Vyrdrakon",
        ],
        RaceKind::Tiefling => &[
            "Ashenveil",
            "Cinderhaven",
            "Hellsgate",
            "Brimstone",
            "Duskhollow",
            "Emberfall",
            "Nightflame",
            "Sulfurstone",
            "Infernalis",
            "Redhorn",
        ],
        RaceKind::Kobold => &[
            "Trapjaw",
            "Dragonsworn",
            "Tunnelsnout",
            "Scalegrub",
            "Glittermaw",
            "Pitspark",
            "Claydigger",
            "Ashtail",
            "Shinyclaw",
            "Deeplurk",
        ],
        RaceKind::Lizardfolk => &[
            "Scaletide",
            "Blackwater",
            "Sunbask",
            "Coldblood",
            "Reedstalker",
            "Mirefang",
            "Swampcrown",
            "Greenscale",
            "Mosscoil",
            "Eggwarden",
        ],
        RaceKind::Merfolk => &[
            "Coralreach",
            "Pearlshoal",
            "Tidecrown",
            "Deepcurrent",
            "Kelpwood",
            "Shellhaven",
            "Brinegate",
            "Wavesong",
            "Seaglass",
            "Abyssmere",
        ],
        RaceKind::Custom(_) => &[
            "Farreach",
            "Newdawn",
            "Oddmere",
            "Stranger's Rest",
            "Lastlight",
            "Wanderhome",
            "Outermark",
            "Hinterhold",
            "Edgewater",
            "Nowhere",
        ],
    }
}

/// Candidate organization names for a race and organization kind.
pub fn organization_names(race: &RaceKind, kind: OrganizationKind) -> Vec<String> {
    let noun = kind.noun();
    name_roots(race)
        .iter()
        .flat_map(|root| {
            [
                format!("The {noun} of {root}"),
                format!("{root} {noun}"),
            ]
        })
        .collect()
}

/// Purpose statements per organization kind. Some mention mining, fortresses
/// or vaults, which makes the organization more likely to dig a dungeon.
pub fn organization_purposes(kind: OrganizationKind) -> &'static [&'static str] {
    use OrganizationKind::*;
    match kind {
        Empire | Kingdom | Realm => &[
            "to rule the surrounding lands from a fortress throne",
            "to unite every clan beneath one crown",
            "to guard the royal vault and the bloodline it protects",
        ],
        Duchy | Barony | Court => &[
            "to govern the marches in the name of a distant crown",
            "to collect tithes and keep the peace",
        ],
        CityState | Republic | Council => &[
            "to keep the city free of kings",
            "to govern by vote and ledger",
        ],
        Theocracy | Temple | MonasticOrder => &[
            "to spread the faith",
            "to guard sacred relics in the catacombs beneath the altar",
            "to keep vigil over the holy crypts",
        ],
        Stronghold | Hold => &[
            "to hold the mountain fortress against all comers",
            "to delve ever deeper in search of mithril",
            "to keep the ancestral vaults sealed",
        ],
        Guild | MerchantCompany | TradingLeague => &[
            "to control the trade roads",
            "to protect the secrets of the craft",
            "to fill the guild vault with gold",
        ],
        MiningConsortium => &[
            "to profit from deep mining of precious ore",
            "to dig tunnels where no one has dug before",
        ],
        MagesCircle | Academy | Conclave => &[
            "to pursue forbidden knowledge",
            "to seal dangerous artifacts in an arcane vault",
            "to teach the arcane arts",
        ],
        ThievesGuild | AssassinsGuild => &[
            "to rule the underworld from hidden tunnels",
            "to take what others hoard",
        ],
        KnightlyOrder | Brotherhood | Lodge => &[
            "to defend the weak",
            "to hunt monsters in their lairs",
            "to keep a fortress on the frontier",
        ],
        Cult | Coven => &[
            "to summon a dark power from the underworld",
            "to perform rites in secret catacombs",
            "to bring about the end of days",
        ],
        DruidCircle | Grove | Enclave => &[
            "to protect the wild places",
            "to keep the balance of the seasons",
        ],
        Horde | Warband | MercenaryCompany => &[
            "to conquer and plunder",
            "to raid the soft lowland farms",
            "to sell swords to the highest bidder",
        ],
        Tribe | Clan | Pack => &[
            "to survive and keep the old ways",
            "to hunt the herds across the seasons",
        ],
        Warren | Hive | Brood => &[
            "to burrow ever outward through the dark",
            "to breed and dig new tunnels beneath the hills",
        ],
        PirateFleet | NomadCaravan => &[
            "to roam free and take tolls from travellers",
            "to hide stolen treasure in a sea-cave vault",
        ],
    }
}

/// Given names per race, for standout mortals and family members.
pub fn given_names(race: &RaceKind) -> &'static [&'static str] {
    match race {
        RaceKind::Human => &[
            "Aldric", "Brenna", "Cedric", "Dagny", "Edmund", "Freya", "Gareth", "Helena", "Isolde",
            "Jorah", "Kael", "Lyra", "Magnus", "Nessa", "Osric", "Rowena",
        ],
        RaceKind::Elf => &[
            "Aerendil",
            "Caelynn",
            "Erevan",
            "Faelar",
            "Galinndan",
            "Ilphas",
            "Lia",
            "Mialee",
            "Naivara",
            "Quelenna",
            "Riardon",
            "Sariel",
            "Thamior",
            "Valanthe",
            "Yvannis",
            "Zinnia",
        ],
        RaceKind::Dwarf => &[
            "Adrik", "Balin", "Dagnal", "Eberk", "Gardain", "Hlin", "Kildrak", "Morgran", "Orsik",
            "Rurik", "Sannl", "Thorin", "Vistra", "Amber", "Bardryn", "Gunnloda",
        ],
        RaceKind::Halfling => &[
            "Alton",
            "Bree",
            "Cade",
            "Eldon",
            "Garret",
            "Kithri",
            "Lavinia",
            "Lyle",
            "Merric",
            "Nedda",
            "Paela",
            "Roscoe",
            "Seraphina",
            "Verna",
            "Wellby",
            "Jillian",
        ],
        RaceKind::Gnome => &[
            "Alston",
            "Bimpnottin",
            "Boddynock",
            "Carlin",
            "Dimble",
            "Ellyjobell",
            "Fonkin",
            "Frug",
            "Nissa",
            "Orryn",
            "Roywyn",
            "Seebo",
            "Tana",
            "Warryn",
            "Zanna",
            "Wrenn",
        ],
        RaceKind::Orc => &[
            "Dench", "Feng", "Gell", "Henk", "Holg", "Imsh", "Keth", "Krusk", "Mhurren", "Ront",
            "Shump", "Thokk", "Baggi", "Emen", "Ovak", "Yevelda",
        ],
        RaceKind::Goblin => &[
            "Bolg", "Grik", "Lurtz", "Mog", "Nix", "Pog", "Rikkit", "Skiv", "Snot", "Trug", "Uzz",
            "Yeek", "Zit", "Gobbo", "Krag", "Nub",
        ],
        RaceKind::Troll => &[
            "Grusk", "Hrok", "Mogg", "Orgul", "Rhuk", "Skagg", "Throg", "Ugg", "Varg", "Wrath",
            "Brug", "Drog", "Gor", "Krull", "Mudd", "Zug",
        ],
        RaceKind::Giant => &[
            "Bergelmir",
            "Grona",
            "Hrimgrim",
            "Jorund",
            "Kolga",
            "Orvald",
            "Skrymir",
            "Thjazi",
            "Ulla",
            "Vafthrud",
            "Ymira",
            "Hrodi",
            "Gerda",
            "Surtvald",
            "Baugi",
            "Fornjot",
        ],
        RaceKind::Dragonborn => &[
            "Arjhan", "Balasar", "Bharash", "Donaar", "Ghesh", "Heskan", "Kriv", "Medrash", "Mehen",
            "Nadarr", "Pandjed", "Rhogar", "Shamash", "Akra", "Biri", "Sora",
        ],
        RaceKind::Tiefling => &[
            "Akmenos", "Amnon", "Barakas", "Damakos", "Ekemon", "Iados", "Kairon", "Leucis",
            "Melech", "Mordai", "Pelaios", "Skamos", "Bryseis", "Criella", "Kallista", "Orianna",
        ],
        RaceKind::Kobold => &[
            "Deeg", "Eks", "Gin", "Hagnar", "Irtos", "Kib", "Meepo", "Nim", "Ook", "Pik", "Rastil",
            "Sniv", "Tazz", "Urk", "Varn", "Yip",
        ],
        RaceKind::Lizardfolk => &[
            "Achuak",
            "Aryte",
            "Baeshra",
            "Darastrix",
            "Garurt",
            "Irhtos",
            "Jhank",
            "Kepesk",
            "Kethend",
            "Korth",
            "Mirik",
            "Othokent",
            "Sauriv",
            "Throden",
            "Thurkear",
            "Usk",
        ],
        RaceKind::Merfolk => &[
            "Aquilla", "Brine", "Coralie", "Delphine", "Eddy", "Finnian", "Marina", "Nerin",
            "Oceane", "Pearl", "Reef", "Shoal", "Tethys", "Undine", "Wade", "Zale",
        ],
        RaceKind::Custom(_) => &[
            "Ash", "Bay", "Cor", "Dane", "Eri", "Fen", "Gil", "Hale", "Ira", "Jun", "Kestrel",
            "Lark", "Moss", "Nim", "Oak", "Pell",
        ],
    }
}

/// Family names per race, used for standout epithets and lineages.
pub fn surnames(race: &RaceKind) -> &'static [&'static str] {
    match race {
        RaceKind::Human => &[
            "Ashford",
            "Blackwood",
            "Coldwell",
            "Dunmere",
            "Fairwind",
            "Greymoor",
            "Hartwood",
            "Kingsward",
            "Longbridge",
            "Northgate",
            "Ravencrest",
            "Whitevale",
        ],
        RaceKind::Elf => &[
            "Amakiir",
            "Galanodel",
            "Holimion",
            "Ilphelkiir",
            "Liadon",
            "Meliamne",
            "Nailo",
            "Siannodel",
            "Xiloscient",
            "Brightleaf",
            "Moonwhisper",
            "Starfall",
        ],
        RaceKind::Dwarf => &[
            "Balderk",
            "Battlehammer",
            "Brawnanvil",
            "Dankil",
            "Fireforge",
            "Frostbeard",
            "Gorunn",
            "Holderhek",
            "Ironfist",
            "Loderr",
            "Rumnaheim",
            "Strakeln",
        ],
        RaceKind::Halfling => &[
            "Brushgather",
            "Goodbarrel",
            "Greenbottle",
            "High-hill",
            "Hilltopple",
            "Leagallow",
            "Tealeaf",
            "Thorngage",
            "Tosscobble",
            "Underbough",
            "Proudfoot",
            "Burrows",
        ],
        RaceKind::Gnome => &[
            "Beren",
            "Daergel",
            "Folkor",
            "Garrick",
            "Nackle",
            "Murnig",
            "Ningel",
            "Raulnor",
            "Scheppen",
            "Timbers",
            "Turen",
            "Gearwhistle",
        ],
        RaceKind::Orc => &[
            "Skullsplitter",
            "Bonebreaker",
            "Bloodtusk",
            "Gutripper",
            "Ironhide",
            "Deathmaw",
            "Eyegouger",
            "Firebelly",
            "Warhowl",
            "Stonefist",
            "Ashgrinder",
            "Redhand",
        ],
        RaceKind::Goblin => &[
            "Mudfoot",
            "Sharpear",
            "Rustknife",
            "Grubeater",
            "Stinkwater",
            "Quickfingers",
            "Bogtrotter",
            "Rockchucker",
            "Nosepicker",
            "Ratcatcher",
            "Soothair",
            "Creepcrawl",
        ],
        RaceKind::Troll => &[
            "Bridgeborn",
            "Mossbelly",
            "Stoneskin",
            "Bogbreath",
            "Rootchewer",
            "Rockgut",
            "Gravelhide",
            "Mireborn",
            "Clubfist",
            "Fenwalker",
            "Boulderback",
            "Slimejaw",
        ],
        RaceKind::Giant => &[
            "Frostborn",
            "Stormcaller",
            "Cloudstrider",
            "Hillshaker",
            "Rockhurler",
            "Icevein",
            "Thunderfoot",
            "Skybreaker",
            "Mountainheart",
            "Glacierborn",
            "Firehand",
            "Oakcrusher",
        ],
        RaceKind::Dragonborn => &[
            "Clethtinthiallor",
            "Daardendrian",
            "Delmirev",
            "Drachedandion",
            "Fenkenkabradon",
            "Kepeshkmolik",
            "Kerrhylon",
            "Kimbatuul",
            "Linxakasendalor",
            "Myastan",
            "Nemmonis",
            "Yarjerit",
        ],
        RaceKind::Tiefling => &[
            "Ashborn",
            "Cinderheart",
            "Duskwalker",
            "Emberveil",
            "Grimsoul",
            "Hellsworn",
            "Nightbloom",
            "Sorrowsong",
            "Thornblood",
            "Vexbound",
            "Wickedhorn",
            "Brimhollow",
        ],
        RaceKind::Kobold => &[
            "Trapmaker",
            "Scaleshine",
            "Dragonfang",
            "Tunnelrunner",
            "Glitterhoard",
            "Mineclaw",
            "Sparkeye",
            "Deepdigger",
            "Egguard",
            "Shinytail",
            "Pitwarden",
            "Ashsnout",
        ],
        RaceKind::Lizardfolk => &[
            "Scaleback",
            "Reedwalker",
            "Mudbasker",
            "Coldeye",
            "Swamptail",
            "Fangclutch",
            "Sunsoak",
            "Mirehunter",
            "Greenhide",
            "Eggwarden",
            "Bloodcoil",
            "Stillwater",
        ],
        RaceKind::Merfolk => &[
            "Tidecaller",
            "Wavecrest",
            "Coralheart",
            "Pearldiver",
            "Deepsinger",
            "Shellborn",
            "Foamrider",
            "Kelpweaver",
            "Saltwhisper",
            "Reefguard",
            "Brinesong",
            "Currentborn",
        ],
        RaceKind::Custom(_) => &[
            "Farwalker",
            "Newborn",
            "Oddfellow",
            "Starling",
            "Lastborn",
            "Wayfinder",
            "Outrider",
            "Dawnseeker",
            "Edgeward",
            "Hollowell",
            "Marsh",
            "Vane",
        ],
    }
}

pub fn archetype_powers(archetype: Archetype) -> &'static [&'static str] {
    use Archetype::*;
    match archetype {
        King | Queen | Prince | Princess => &[
            "royal command",
            "loyal retinue",
            "divine right",
            "statecraft",
            "a famed blade",
        ],
        Chieftain | Warlord | Gladiator => &[
            "battle fury",
            "war cry",
            "unbreakable shield wall",
            "trophy-taking",
            "tactical genius",
        ],
        HighPriest | Cleric | Paladin | Prophet | Oracle => &[
            "healing prayer",
            "holy smite",
            "visions",
            "turn undead",
            "blessing of the faithful",
        ],
        Wizard | Archmage | Sorcerer | Alchemist => &[
            "fireball",
            "arcane ward",
            "teleportation",
            "transmutation",
            "scrying",
            "time stop",
        ],
        Warlock | Necromancer | Lich => &[
            "raise dead",
            "soul drain",
            "eldritch blast",
            "pact of shadows",
            "phylactery",
            "curse",
        ],
        Vampire => &[
            "blood drain",
            "mist form",
            "dominate mind",
            "command bats",
            "undying",
        ],
        Villain | Assassin => &[
            "poisoned blade",
            "web of spies",
            "deathstrike",
            "fear aura",
            "vanish",
        ],
        Hero | Knight => &[
            "heroic strike",
            "rally allies",
            "unyielding",
            "giant-slaying",
            "oath of protection",
        ],
        Druid | Ranger | Shaman | Explorer => &[
            "beast speech",
            "wild shape",
            "pathfinding",
            "spirit calling",
            "storm summoning",
        ],
        Rogue | Thief | PirateCaptain => &[
            "lockpicking",
            "sneak attack",
            "silver tongue",
            "uncanny luck",
            "shadow step",
        ],
        Bard | Sage => &[
            "inspiring song",
            "lore mastery",
            "charm",
            "countercharm",
            "legend-lore",
        ],
        Inventor | MasterSmith | MerchantPrince => &[
            "master craft",
            "clockwork servant",
            "runeforging",
            "golden touch",
            "vast network",
        ],
    }
}

pub const MORTAL_HISTORY: &[&str] = &[
    "Born in {birthplace} among the {race}.",
    "Rose to fame as a {archetype} while still young.",
    "Swore an oath before the gods of the {race}.",
    "Survived a great war that scarred {birthplace}.",
    "Gathered followers from across {birthplace}.",
    "Was exiled for a time, and returned changed.",
];

pub const FAMILY_ROLES: &[&str] = &[
    "blacksmith",
    "merchant",
    "farmer",
    "weaver",
    "baker",
    "fisher",
    "carpenter",
    "miner",
    "scribe",
    "herbalist",
    "shepherd",
    "brewer",
    "mason",
    "tanner",
    "potter",
    "innkeeper",
];
