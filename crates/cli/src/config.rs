//! Environment-driven defaults for the `sight` binary.
use std::env;
use std::path::PathBuf;

use sight_core::SpatialConfig;

/// Settings read from the process environment (after `.env` is loaded).
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Scene used when `--scene` is not given.
    pub scene: Option<PathBuf>,
    pub sightline_step: Option<f64>,
    pub line_step: Option<f64>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIGHT_SCENE` - Path of the default RON scene
    /// - `SIGHT_SIGHTLINE_STEP` - Maximum sightline probe increment
    /// - `SIGHT_LINE_STEP` - Fallback spacing for line drawing
    pub fn from_env() -> Self {
        Self {
            scene: env::var_os("SIGHT_SCENE").map(PathBuf::from),
            sightline_step: read_env::<f64>("SIGHT_SIGHTLINE_STEP").filter(|step| *step > 0.0),
            line_step: read_env::<f64>("SIGHT_LINE_STEP").filter(|step| *step > 0.0),
        }
    }

    /// Layers the environment overrides on top of a scene's configuration.
    pub fn apply(&self, mut config: SpatialConfig) -> SpatialConfig {
        if let Some(step) = self.sightline_step {
            config = config.with_sightline_step(step);
        }
        if let Some(step) = self.line_step {
            config = config.with_line_step(step);
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
