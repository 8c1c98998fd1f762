use crate::entity::WorldId;
use crate::geometry::Point3;

/// Visual effect emitted at a point.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ParticleKind {
    Flame,
    Smoke,
    Crit,
    Spell,
    EndRod,
    Dust,
    #[strum(serialize = "custom")]
    Custom(u16),
}

/// Fire-and-forget visualization sink.
pub trait ParticleSink {
    fn emit(&mut self, world: WorldId, kind: ParticleKind, position: Point3, count: u32);
}
