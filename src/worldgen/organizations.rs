use std::collections::HashSet;

use rand::{Rng, RngCore};

use super::config::{OrganizationDensity, WorldLevel};
use super::context::{GenerationContext, require};
use super::moment;
use super::stage::StageGenerator;
use crate::error::Result;
use crate::model::{EntityType, Era, EventKind, Geography, Organization};
use crate::names::{self, peoples};
use crate::tables;

pub const STAGE: &str = "organizations";

/// How many organizations a race founds: a base of 2-4 scaled by density,
/// never fewer than one.
pub fn organization_count(base: u32, density: OrganizationDensity) -> usize {
    ((f64::from(base) * density.multiplier()).round() as usize).max(1)
}

/// Found organizations for every race, restricted to the kinds the race may
/// found. Each is seated in the race's homeland or another patch of land.
pub fn generate_organizations(
    ctx: &mut GenerationContext,
    density: OrganizationDensity,
    rng: &mut dyn RngCore,
) -> Result<Vec<Organization>> {
    require(!ctx.mortal_races.is_empty(), "organizations", "mortal races")?;
    require(!ctx.geography.is_empty(), "organizations", "geography")?;

    let land: Vec<&Geography> = ctx.geography.iter().filter(|g| !g.kind.is_water()).collect();
    let seats: Vec<&Geography> = if land.is_empty() {
        ctx.geography.iter().collect()
    } else {
        land
    };

    let mut used = HashSet::new();
    let mut out = Vec::new();

    for race in &ctx.mortal_races {
        let kinds = tables::race_organizations(&race.race);
        let count = organization_count(rng.random_range(2..=4), density);
        let homeland = seats.iter().copied().find(|g| g.base.id == race.homeland_id);

        for _ in 0..count {
            let kind = kinds[rng.random_range(0..kinds.len())];
            let name = names::select_name(
                &format!("organization:{}:{kind}", race.race),
                &peoples::organization_names(&race.race, kind),
                Some(&mut used),
                rng,
            )?;
            let seat = match homeland {
                Some(home) if rng.random_bool(0.5) => home,
                _ => seats[rng.random_range(0..seats.len())],
            };
            let purpose = names::pick(peoples::organization_purposes(kind), rng).to_string();
            let description = format!(
                "A {} of the {} seated in {}, founded {purpose}.",
                kind.noun().to_lowercase(),
                race.base.name,
                seat.base.name,
            );
            let created_at = moment(Era::AgeOfKingdoms, rng);
            let base = ctx.factory.base(
                EntityType::Organization,
                kind.as_str(),
                name,
                description,
                Some(seat.base.id.clone()),
                created_at,
            );

            ctx.events.record(
                STAGE,
                EventKind::OrganizationFounded,
                format!("The {} founded {} in {}.", race.base.name, base.name, seat.base.name),
                vec![base.id.clone(), race.base.id.clone(), seat.base.id.clone()],
                created_at,
            );
            out.push(Organization {
                base,
                kind,
                race_id: race.base.id.clone(),
                geography_id: seat.base.id.clone(),
                purpose,
                leader_id: None,
            });
        }
    }

    Ok(out)
}

pub struct OrganizationStage {
    pub density: OrganizationDensity,
}

impl StageGenerator for OrganizationStage {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn level(&self) -> WorldLevel {
        WorldLevel::Organization
    }

    fn run(&self, ctx: &mut GenerationContext, rng: &mut dyn RngCore) -> Result<usize> {
        let orgs = generate_organizations(ctx, self.density, rng)?;
        let count = orgs.len();
        ctx.organizations.extend(orgs);
        Ok(count)
    }
}
