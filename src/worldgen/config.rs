use serde::{Deserialize, Serialize};

use crate::error::{Result, WorldGenError};
use crate::model::{PrimordialKind, RaceKind};

/// One stage of the pipeline, numbered as callers request it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorldLevel {
    Primordial = 1,
    Cosmic = 2,
    Geography = 3,
    Conceptual = 4,
    DemiGod = 5,
    MortalRace = 6,
    Organization = 7,
    StandoutMortal = 8,
    Dungeon = 9,
}

impl WorldLevel {
    /// Dependency order. Mortal races run before conceptual beings, since
    /// concepts arise from mortal worship.
    pub const EXECUTION_ORDER: [WorldLevel; 9] = [
        WorldLevel::Primordial,
        WorldLevel::Cosmic,
        WorldLevel::Geography,
        WorldLevel::MortalRace,
        WorldLevel::Conceptual,
        WorldLevel::DemiGod,
        WorldLevel::Organization,
        WorldLevel::StandoutMortal,
        WorldLevel::Dungeon,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for WorldLevel {
    type Error = WorldGenError;

    fn try_from(n: u8) -> Result<Self> {
        WorldLevel::EXECUTION_ORDER
            .into_iter()
            .find(|level| level.number() == n)
            .ok_or(WorldGenError::InvalidLevel(n))
    }
}

impl From<WorldLevel> for u8 {
    fn from(level: WorldLevel) -> Self {
        level.number()
    }
}

/// Level set used when `includeLevels` is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationDepth {
    #[default]
    Full,
    Partial,
    Minimal,
}

impl GenerationDepth {
    pub fn levels(self) -> &'static [WorldLevel] {
        use WorldLevel::*;
        match self {
            GenerationDepth::Full => &WorldLevel::EXECUTION_ORDER,
            GenerationDepth::Partial => &[
                Primordial,
                Cosmic,
                Geography,
                MortalRace,
                Conceptual,
                DemiGod,
                Organization,
            ],
            GenerationDepth::Minimal => &[Primordial, Cosmic, Geography],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationDensity {
    Sparse,
    #[default]
    Normal,
    Dense,
}

impl OrganizationDensity {
    pub fn multiplier(self) -> f64 {
        match self {
            OrganizationDensity::Sparse => 0.5,
            OrganizationDensity::Normal => 1.0,
            OrganizationDensity::Dense => 1.5,
        }
    }
}

/// Caller-facing generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldGenerationConfig {
    pub seed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_levels: Option<Vec<WorldLevel>>,
    #[serde(default)]
    pub depth: GenerationDepth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_primordials: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_races: Option<Vec<String>>,
    #[serde(default)]
    pub organization_density: OrganizationDensity,
}

impl Default for WorldGenerationConfig {
    fn default() -> Self {
        Self::new("default")
    }
}

impl WorldGenerationConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            include_levels: None,
            depth: GenerationDepth::default(),
            custom_primordials: None,
            custom_races: None,
            organization_density: OrganizationDensity::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Restrict the run to the given level numbers.
    pub fn with_levels(mut self, levels: &[u8]) -> Result<Self> {
        let levels = levels
            .iter()
            .map(|n| WorldLevel::try_from(*n))
            .collect::<Result<Vec<_>>>()?;
        self.include_levels = Some(levels);
        Ok(self)
    }

    pub fn with_depth(mut self, depth: GenerationDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_density(mut self, density: OrganizationDensity) -> Self {
        self.organization_density = density;
        self
    }

    pub fn with_custom_races<S: Into<String>>(
        mut self,
        races: impl IntoIterator<Item = S>,
    ) -> Self {
        self.custom_races = Some(races.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_custom_primordials<S: Into<String>>(
        mut self,
        kinds: impl IntoIterator<Item = S>,
    ) -> Self {
        self.custom_primordials = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Levels to run, in execution order.
    pub fn levels(&self) -> Vec<WorldLevel> {
        let requested: &[WorldLevel] = match &self.include_levels {
            Some(levels) => levels,
            None => self.depth.levels(),
        };
        WorldLevel::EXECUTION_ORDER
            .into_iter()
            .filter(|level| requested.contains(level))
            .collect()
    }

    /// Primordial kinds to generate. A non-empty custom list replaces the
    /// defaults.
    pub fn primordial_kinds(&self) -> Vec<PrimordialKind> {
        let custom: Vec<PrimordialKind> = self
            .custom_primordials
            .iter()
            .flatten()
            .filter_map(|label| PrimordialKind::parse(label))
            .fold(Vec::new(), |mut acc, kind| {
                if !acc.contains(&kind) {
                    acc.push(kind);
                }
                acc
            });
        if custom.is_empty() {
            PrimordialKind::DEFAULTS.to_vec()
        } else {
            custom
        }
    }

    /// Default races followed by any custom races not already present,
    /// compared case-insensitively.
    pub fn races(&self) -> Vec<RaceKind> {
        let mut races = RaceKind::DEFAULTS.to_vec();
        for label in self.custom_races.iter().flatten() {
            let Some(race) = RaceKind::parse(label) else {
                continue;
            };
            let duplicate = races
                .iter()
                .any(|r| r.as_str().eq_ignore_ascii_case(race.as_str()));
            if !duplicate {
                races.push(race);
            }
        }
        races
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json() {
        let json = r#"{
            "seed": "abc",
            "includeLevels": [2, 1],
            "organizationDensity": "dense",
            "customRaces": ["Sea Elf"]
        }"#;
        let config = WorldGenerationConfig::from_json(json).unwrap();
        assert_eq!(config.seed, "abc");
        assert_eq!(config.levels(), vec![WorldLevel::Primordial, WorldLevel::Cosmic]);
        assert_eq!(config.organization_density, OrganizationDensity::Dense);
        assert_eq!(config.depth, GenerationDepth::Full);
    }

    #[test]
    fn out_of_range_level_rejected() {
        let err =
            WorldGenerationConfig::from_json(r#"{"seed":"x","includeLevels":[10]}"#).unwrap_err();
        assert!(matches!(err, WorldGenError::Config(_)));
        let err = WorldGenerationConfig::new("x").with_levels(&[0]).unwrap_err();
        assert!(matches!(err, WorldGenError::InvalidLevel(0)));
    }

    #[test]
    fn conceptual_runs_after_races() {
        let levels = WorldGenerationConfig::new("x").levels();
        let races = levels.iter().position(|l| *l == WorldLevel::MortalRace).unwrap();
        let concepts = levels.iter().position(|l| *l == WorldLevel::Conceptual).unwrap();
        assert!(races < concepts);
        assert_eq!(levels.len(), 9);
    }

    #[test]
    fn depth_presets() {
        let minimal = WorldGenerationConfig::new("x").with_depth(GenerationDepth::Minimal);
        assert_eq!(minimal.levels().len(), 3);
        let partial = WorldGenerationConfig::new("x").with_depth(GenerationDepth::Partial);
        assert!(!partial.levels().contains(&WorldLevel::Dungeon));
        assert!(partial.levels().contains(&WorldLevel::Organization));
    }

    #[test]
    fn include_levels_override_depth() {
        let config = WorldGenerationConfig::new("x")
            .with_depth(GenerationDepth::Minimal)
            .with_levels(&[1, 2, 3, 6])
            .unwrap();
        assert_eq!(config.levels().last(), Some(&WorldLevel::MortalRace));
    }

    #[test]
    fn custom_races_are_appended_without_duplicates() {
        let config =
            WorldGenerationConfig::new("x").with_custom_races(["DWARF", "Sea Elf", "sea elf", " "]);
        let races = config.races();
        assert_eq!(races.len(), RaceKind::DEFAULTS.len() + 1);
        assert_eq!(races.last(), Some(&RaceKind::Custom("Sea Elf".to_string())));
    }

    #[test]
    fn custom_primordials_replace_defaults() {
        let config = WorldGenerationConfig::new("x").with_custom_primordials(["Dream", "light"]);
        assert_eq!(
            config.primordial_kinds(),
            vec![PrimordialKind::Custom("Dream".to_string()), PrimordialKind::Light]
        );
        assert_eq!(WorldGenerationConfig::default().primordial_kinds().len(), 6);
    }

    #[test]
    fn density_multipliers() {
        assert!(OrganizationDensity::Sparse.multiplier() < OrganizationDensity::Dense.multiplier());
        assert_eq!(OrganizationDensity::default(), OrganizationDensity::Normal);
    }
}
