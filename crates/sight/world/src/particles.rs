use serde::{Deserialize, Serialize};
use sight_core::{ParticleKind, ParticleSink, Point3, WorldId};

/// One recorded call to [`ParticleSink::emit`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub world: WorldId,
    pub kind: ParticleKind,
    pub position: Point3,
    pub count: u32,
}

/// Particle sink that keeps every emission in order.
#[derive(Clone, Debug, Default)]
pub struct ParticleLog {
    emissions: Vec<Emission>,
}

impl ParticleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    /// Sum of particle counts over all emissions.
    pub fn total_particles(&self) -> u64 {
        self.emissions.iter().map(|e| u64::from(e.count)).sum()
    }

    pub fn clear(&mut self) {
        self.emissions.clear();
    }
}

impl ParticleSink for ParticleLog {
    fn emit(&mut self, world: WorldId, kind: ParticleKind, position: Point3, count: u32) {
        self.emissions.push(Emission {
            world,
            kind,
            position,
            count,
        });
    }
}
