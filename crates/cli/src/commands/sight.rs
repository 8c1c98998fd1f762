use anyhow::Result;
use clap::Parser;
use sight_core::in_sight;

use super::{QueryArgs, SceneArgs, Session};
use crate::config::CliConfig;

/// Living entities inside an actor's view cone
#[derive(Parser)]
pub struct Sight {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    query: QueryArgs,

    /// Viewing actor
    #[arg(long, value_name = "ID")]
    viewer: u32,

    /// Full cone angle in degrees; omit to accept every direction
    #[arg(long, value_name = "DEGREES")]
    fov: Option<f64>,
}

impl Sight {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let session = Session::open(&self.scene, cli)?;
        let viewer = session.actor(self.viewer)?;

        let mut query = self.query.to_query();
        if let Some(fov) = self.fov {
            query = query.with_fov(fov);
        }

        let targets = in_sight(&session.env(), &viewer, &query)?;
        session.print_actors(&viewer.position, &targets)
    }
}
