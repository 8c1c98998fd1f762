use anyhow::{Result, bail};
use clap::Parser;
use sight_core::nearest;

use super::{LocationArgs, QueryArgs, SceneArgs, Session};
use crate::config::CliConfig;

/// Living entities nearest to a point or actor
#[derive(Parser)]
pub struct Nearest {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    query: QueryArgs,

    #[command(flatten)]
    location: LocationArgs,

    /// Search around this actor's feet (the actor itself is excluded)
    #[arg(long, value_name = "ID", conflicts_with = "at")]
    around: Option<u32>,
}

impl Nearest {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let session = Session::open(&self.scene, cli)?;
        let mut query = self.query.to_query();

        let center = match (self.around, self.location.location()) {
            (Some(id), _) => {
                let actor = session.actor(id)?;
                if query.exclude.is_none() {
                    query = query.excluding(actor.id);
                }
                actor.location()
            }
            (None, Some(location)) => location,
            (None, None) => bail!("either --around <ID> or --at <X> <Y> <Z> is required"),
        };

        let targets = nearest(&session.env(), &center, &query)?;
        session.print_actors(&center.position, &targets)
    }
}
