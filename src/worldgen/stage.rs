use rand::RngCore;

use super::config::WorldLevel;
use super::context::GenerationContext;
use crate::error::Result;

/// A pluggable pipeline stage.
///
/// Object-safe so the orchestrator can hold a `Vec<Box<dyn StageGenerator>>`
/// built from the requested level set.
pub trait StageGenerator {
    /// Stable stage name; also keys the stage's RNG stream and event IDs.
    fn name(&self) -> &'static str;

    fn level(&self) -> WorldLevel;

    /// Check preconditions, generate, and append the new entities to `ctx`.
    /// Returns how many entities were appended.
    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize>;
}
