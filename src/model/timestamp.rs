use std::fmt;

use serde::{Deserialize, Serialize};

const ERA_BITS: u32 = 4;
const YEAR_BITS: u32 = 32 - ERA_BITS;
const YEAR_MASK: u32 = (1 << YEAR_BITS) - 1;

/// Ages of the world, one per pipeline stage, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Era {
    PrimordialDawn,
    AgeOfCreation,
    AgeOfShaping,
    AgeOfAwakening,
    AgeOfFaith,
    AgeOfLegends,
    AgeOfKingdoms,
    AgeOfHeroes,
    AgeOfDelving,
}

string_enum!(Era {
    PrimordialDawn => "primordial_dawn",
    AgeOfCreation => "age_of_creation",
    AgeOfShaping => "age_of_shaping",
    AgeOfAwakening => "age_of_awakening",
    AgeOfFaith => "age_of_faith",
    AgeOfLegends => "age_of_legends",
    AgeOfKingdoms => "age_of_kingdoms",
    AgeOfHeroes => "age_of_heroes",
    AgeOfDelving => "age_of_delving",
});

impl Era {
    fn index(self) -> u32 {
        Era::ALL.iter().position(|e| *e == self).unwrap_or(0) as u32
    }

    fn from_index(index: u32) -> Era {
        Era::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(Era::PrimordialDawn)
    }
}

/// In-world virtual time encoding era and year-within-era in a single `u32`.
///
/// Bit layout: `[era:4][year:28]`. Natural `u32` ordering equals
/// chronological ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "WorldTimeRepr", from = "WorldTimeRepr")]
pub struct WorldTime(u32);

#[derive(Serialize, Deserialize)]
struct WorldTimeRepr {
    era: Era,
    year: u32,
}

impl From<WorldTime> for WorldTimeRepr {
    fn from(t: WorldTime) -> Self {
        WorldTimeRepr {
            era: t.era(),
            year: t.year(),
        }
    }
}

impl From<WorldTimeRepr> for WorldTime {
    fn from(repr: WorldTimeRepr) -> Self {
        WorldTime::new(repr.era, repr.year)
    }
}

impl WorldTime {
    /// Years beyond the 28-bit range saturate.
    pub fn new(era: Era, year: u32) -> Self {
        Self((era.index() << YEAR_BITS) | year.min(YEAR_MASK))
    }

    pub fn start_of(era: Era) -> Self {
        Self::new(era, 0)
    }

    pub fn era(self) -> Era {
        Era::from_index(self.0 >> YEAR_BITS)
    }

    pub fn year(self) -> u32 {
        self.0 & YEAR_MASK
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl Default for WorldTime {
    fn default() -> Self {
        Self::start_of(Era::PrimordialDawn)
    }
}

impl fmt::Display for WorldTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Y{}", self.era(), self.year())
    }
}
