pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod names;
pub mod seed;
pub mod tables;
pub mod worldgen;

pub use error::{Result, WorldGenError};
pub use id::{EntityId, IdGenerator};
pub use model::{EntityRef, EntityType, GeneratedWorld, WorldEvent};
pub use seed::SeededRng;
pub use worldgen::{
    GenerationDepth, OrganizationDensity, WorldGenerationConfig, WorldGenerator, WorldLevel,
    generate_world, get_geography, get_organizations, get_primordial_beings,
};
