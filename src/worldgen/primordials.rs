use std::collections::HashSet;

use rand::RngCore;

use super::config::WorldLevel;
use super::context::GenerationContext;
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{EntityType, Era, EventKind, PrimordialBeing, PrimordialKind};
use crate::names::{self, cosmic};

pub const STAGE: &str = "primordials";

/// One primordial being per requested force. These are the roots of the
/// world and carry no parent.
pub fn generate_primordials(
    ctx: &mut GenerationContext,
    kinds: &[PrimordialKind],
    rng: &mut dyn RngCore,
) -> Result<Vec<PrimordialBeing>> {
    let mut used = HashSet::new();
    let mut beings = Vec::with_capacity(kinds.len());

    for kind in kinds {
        let name = names::select_name(
            &format!("primordial:{kind}"),
            cosmic::primordial_names(kind),
            Some(&mut used),
            rng,
        )?;
        let domain = cosmic::primordial_domain(kind);
        let influence: Vec<String> =
            names::pick_distinct(cosmic::primordial_influences(kind), 3, rng)
                .into_iter()
                .map(String::from)
                .collect();
        let description = names::fill(
            names::pick(cosmic::PRIMORDIAL_DESCRIPTIONS, rng),
            &[("name", name.as_str()), ("domain", domain.as_str())],
        );
        let created_at = moment(Era::PrimordialDawn, rng);
        let base = ctx
            .factory
            .base(EntityType::PrimordialBeing, kind.as_str(), name, description, None, created_at)
            .with_meta("index", beings.len());

        ctx.events.record(
            STAGE,
            EventKind::Awakening,
            format!("{} stirred in the void, bringing {domain}.", base.name),
            vec![base.id.clone()],
            created_at,
        );
        beings.push(PrimordialBeing {
            base,
            kind: kind.clone(),
            domain,
            influence,
        });
    }

    Ok(beings)
}

pub struct PrimordialStage {
    pub kinds: Vec<PrimordialKind>,
}

impl StageGenerator for PrimordialStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::Primordial
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let beings = generate_primordials(ctx, &self.kinds, rng)?;
        let count = beings.len();
        ctx.primordials.extend(beings);
        Ok(count)
    }
}
