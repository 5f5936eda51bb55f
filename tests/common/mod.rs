#![allow(dead_code)]

use chrono::{DateTime, Utc};
use worldforge::{GeneratedWorld, WorldGenerationConfig, WorldGenerator};

pub fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(0, 0).unwrap()
}

/// Full world with a pinned timestamp so runs compare byte for byte.
pub fn build_world(seed: &str) -> GeneratedWorld {
    generate(WorldGenerationConfig::new(seed))
}

pub fn build_partial(seed: &str, levels: &[u8]) -> GeneratedWorld {
    generate(WorldGenerationConfig::new(seed).with_levels(levels).unwrap())
}

pub fn generate(config: WorldGenerationConfig) -> GeneratedWorld {
    WorldGenerator::new(config).generate_at(epoch()).unwrap()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
