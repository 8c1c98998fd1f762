use anyhow::Result;
use clap::Parser;
use sight_core::on_view_line;

use super::{QueryArgs, SceneArgs, Session};
use crate::config::CliConfig;

/// Living entities along an actor's line of view
#[derive(Parser)]
pub struct LineOfView {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    query: QueryArgs,

    /// Viewing actor
    #[arg(long, value_name = "ID")]
    viewer: u32,

    /// Lateral distance from the view axis still counted as on the line
    #[arg(short, long, default_value_t = 1.0)]
    tolerance: f64,

    /// Maximum probe increment (overrides scene and environment)
    #[arg(long, value_name = "STEP")]
    sightline_step: Option<f64>,
}

impl LineOfView {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let mut session = Session::open(&self.scene, cli)?;
        if let Some(step) = self.sightline_step {
            let config = session.config.with_sightline_step(step);
            session = session.with_config(config);
        }
        let viewer = session.actor(self.viewer)?;

        let targets = on_view_line(&session.env(), &viewer, self.tolerance, &self.query.to_query())?;
        session.print_actors(&viewer.eye_position(), &targets)
    }
}
