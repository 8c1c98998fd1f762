/// Tunable parameters shared by the targeting, volume, and drawing queries.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpatialConfig {
    /// Upper bound for the probe increment of the sightline sweep.
    /// The sweep never advances further than the lateral tolerance per probe.
    pub sightline_step: f64,

    /// Step used by line drawing when the caller passes a non-positive step.
    pub line_step: f64,

    /// Floor applied to point densities of circle and sphere drawing.
    pub min_density: u32,

    /// Floor applied to the particle count emitted at every point.
    pub min_particle_count: u32,

    /// Whether terrain ray tests ignore entities standing in the way.
    pub pass_through_entities: bool,
}

impl SpatialConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SIGHTLINE_STEP: f64 = 0.5;
    pub const DEFAULT_LINE_STEP: f64 = 0.1;
    pub const DEFAULT_MIN_DENSITY: u32 = 1;
    pub const DEFAULT_MIN_PARTICLE_COUNT: u32 = 1;
    /// Smallest probe increment a sightline sweep will use.
    pub const MIN_SWEEP_INCREMENT: f64 = 1.0e-3;

    pub fn new() -> Self {
        Self {
            sightline_step: Self::DEFAULT_SIGHTLINE_STEP,
            line_step: Self::DEFAULT_LINE_STEP,
            min_density: Self::DEFAULT_MIN_DENSITY,
            min_particle_count: Self::DEFAULT_MIN_PARTICLE_COUNT,
            pass_through_entities: true,
        }
    }

    #[must_use]
    pub fn with_sightline_step(mut self, step: f64) -> Self {
        self.sightline_step = step;
        self
    }

    #[must_use]
    pub fn with_line_step(mut self, step: f64) -> Self {
        self.line_step = step;
        self
    }

    #[must_use]
    pub fn with_pass_through_entities(mut self, pass_through: bool) -> Self {
        self.pass_through_entities = pass_through;
        self
    }

    /// Probe increment for a sweep with the given lateral tolerance.
    ///
    /// Never exceeds the tolerance, so every point of the swept capsule is
    /// covered by at least one probe box. Tolerances below
    /// [`Self::MIN_SWEEP_INCREMENT`] are probed at that floor instead.
    pub fn sweep_increment(&self, tolerance: f64) -> f64 {
        let configured = if self.sightline_step > 0.0 {
            self.sightline_step
        } else {
            Self::DEFAULT_SIGHTLINE_STEP
        };
        let increment = if tolerance > 0.0 {
            configured.min(tolerance)
        } else {
            configured
        };
        increment.max(Self::MIN_SWEEP_INCREMENT)
    }

    /// Step for line drawing, replacing non-positive requests with `line_step`.
    pub fn effective_line_step(&self, requested: f64) -> f64 {
        if requested > 0.0 {
            requested
        } else if self.line_step > 0.0 {
            self.line_step
        } else {
            Self::DEFAULT_LINE_STEP
        }
    }

    pub fn clamp_density(&self, density: u32) -> u32 {
        density.max(self.min_density.max(1))
    }

    pub fn clamp_particle_count(&self, count: u32) -> u32 {
        count.max(self.min_particle_count.max(1))
    }
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self::new()
    }
}
