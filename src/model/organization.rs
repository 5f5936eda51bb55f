use serde::{Deserialize, Serialize};

use super::entity::{EntityBase, EntityType, impl_generated};
use crate::id::EntityId;

/// Organization class. Serialized as `magnitude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OrganizationKind {
    Empire,
    Kingdom,
    Realm,
    Duchy,
    Barony,
    CityState,
    Republic,
    Theocracy,
    Stronghold,
    Hold,
    Guild,
    MerchantCompany,
    TradingLeague,
    MiningConsortium,
    MagesCircle,
    Academy,
    ThievesGuild,
    AssassinsGuild,
    KnightlyOrder,
    MonasticOrder,
    Temple,
    Cult,
    Coven,
    DruidCircle,
    Grove,
    Enclave,
    Conclave,
    Court,
    Council,
    Horde,
    Warband,
    Tribe,
    Clan,
    Warren,
    Hive,
    Brood,
    Pack,
    Brotherhood,
    MercenaryCompany,
    PirateFleet,
    NomadCaravan,
    Lodge,
}

string_enum!(OrganizationKind {
    Empire => "empire",
    Kingdom => "kingdom",
    Realm => "realm",
    Duchy => "duchy",
    Barony => "barony",
    CityState => "city_state",
    Republic => "republic",
    Theocracy => "theocracy",
    Stronghold => "stronghold",
    Hold => "hold",
    Guild => "guild",
    MerchantCompany => "merchant_company",
    TradingLeague => "trading_league",
    MiningConsortium => "mining_consortium",
    MagesCircle => "mages_circle",
    Academy => "academy",
    ThievesGuild => "thieves_guild",
    AssassinsGuild => "assassins_guild",
    KnightlyOrder => "knightly_order",
    MonasticOrder => "monastic_order",
    Temple => "temple",
    Cult => "cult",
    Coven => "coven",
    DruidCircle => "druid_circle",
    Grove => "grove",
    Enclave => "enclave",
    Conclave => "conclave",
    Court => "court",
    Council => "council",
    Horde => "horde",
    Warband => "warband",
    Tribe => "tribe",
    Clan => "clan",
    Warren => "warren",
    Hive => "hive",
    Brood => "brood",
    Pack => "pack",
    Brotherhood => "brotherhood",
    MercenaryCompany => "mercenary_company",
    PirateFleet => "pirate_fleet",
    NomadCaravan => "nomad_caravan",
    Lodge => "lodge",
});

impl OrganizationKind {
    /// Display noun used in organization names ("Kingdom", "Thieves' Guild").
    pub fn noun(self) -> &'static str {
        match self {
            OrganizationKind::Empire => "Empire",
            OrganizationKind::Kingdom => "Kingdom",
            OrganizationKind::Realm => "Realm",
            OrganizationKind::Duchy => "Duchy",
            OrganizationKind::Barony => "Barony",
            OrganizationKind::CityState => "Free City",
            OrganizationKind::Republic => "Republic",
            OrganizationKind::Theocracy => "Holy See",
            OrganizationKind::Stronghold => "Stronghold",
            OrganizationKind::Hold => "Hold",
            OrganizationKind::Guild => "Guild",
            OrganizationKind::MerchantCompany => "Company",
            OrganizationKind::TradingLeague => "League",
            OrganizationKind::MiningConsortium => "Consortium",
            OrganizationKind::MagesCircle => "Circle",
            OrganizationKind::Academy => "Academy",
            OrganizationKind::ThievesGuild => "Thieves' Guild",
            OrganizationKind::AssassinsGuild => "Silent Guild",
            OrganizationKind::KnightlyOrder => "Order",
            OrganizationKind::MonasticOrder => "Monastery",
            OrganizationKind::Temple => "Temple",
            OrganizationKind::Cult => "Cult",
            OrganizationKind::Coven => "Coven",
            OrganizationKind::DruidCircle => "Druid Circle",
            OrganizationKind::Grove => "Grove",
            OrganizationKind::Enclave => "Enclave",
            OrganizationKind::Conclave => "Conclave",
            OrganizationKind::Court => "Court",
            OrganizationKind::Council => "Council",
            OrganizationKind::Horde => "Horde",
            OrganizationKind::Warband => "Warband",
            OrganizationKind::Tribe => "Tribe",
            OrganizationKind::Clan => "Clan",
            OrganizationKind::Warren => "Warren",
            OrganizationKind::Hive => "Hive",
            OrganizationKind::Brood => "Brood",
            OrganizationKind::Pack => "Pack",
            OrganizationKind::Brotherhood => "Brotherhood",
            OrganizationKind::MercenaryCompany => "Free Company",
            OrganizationKind::PirateFleet => "Fleet",
            OrganizationKind::NomadCaravan => "Caravan",
            OrganizationKind::Lodge => "Lodge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(rename = "magnitude")]
    pub kind: OrganizationKind,
    pub race_id: EntityId,
    /// Home geography; equal to `parent_id`.
    pub geography_id: EntityId,
    pub purpose: String,
    /// Filled from standout mortals when the world snapshot is assembled.
    #[serde(default)]
    pub leader_id: Option<EntityId>,
}

impl_generated!(Organization, EntityType::Organization);
