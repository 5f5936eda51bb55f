#[macro_use]
mod macros;

pub mod conceptual;
pub mod cosmic;
pub mod demigod;
pub mod dungeon;
pub mod entity;
pub mod event;
pub mod geography;
pub mod lineage;
pub mod organization;
pub mod primordial;
pub mod race;
pub mod standout;
pub mod timestamp;
pub mod world;

pub use conceptual::ConceptualBeing;
pub use cosmic::{CosmicCreator, Element};
pub use demigod::{DemiGod, DemiGodKind, DemiGodOrigin};
pub use dungeon::{BossSlot, BossType, Dungeon};
pub use entity::{Alignment, EntityBase, EntityType, Generated};
pub use event::{EventKind, WorldEvent};
pub use geography::{Geography, GeographyKind, Magnitude};
pub use lineage::{FamilyLineage, FamilyMember};
pub use organization::{Organization, OrganizationKind};
pub use primordial::{PrimordialBeing, PrimordialKind};
pub use race::{Lifespan, MortalRace, RaceKind};
pub use standout::{Archetype, StandoutMortal};
pub use timestamp::{Era, WorldTime};
pub use world::{BossRecord, EntityRef, GeneratedWorld};
