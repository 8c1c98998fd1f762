//! Subcommand implementations.
mod capture;
mod draw;
mod line_of_view;
mod nearest;
mod sight;

pub use capture::Capture;
pub use draw::Draw;
pub use line_of_view::LineOfView;
pub use nearest::Nearest;
pub use sight::Sight;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use sight_core::{
    ActorRef, EntityId, EntityKind, Location, Point3, SpatialConfig, SpatialEnv, TargetQuery,
    WorldId,
};
use sight_core::geometry::distance_squared;
use sight_world::{Scene, SimWorld};

use crate::config::CliConfig;

/// Options shared by every subcommand.
#[derive(Args)]
pub struct SceneArgs {
    /// RON scene to load (defaults to $SIGHT_SCENE)
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

/// Targeting parameters shared by the entity queries.
#[derive(Args)]
pub struct QueryArgs {
    /// Search radius, or sweep length for line-of-view
    #[arg(short, long, default_value_t = 16.0)]
    range: f64,

    /// Maximum number of results
    #[arg(short, long)]
    count: Option<usize>,

    /// Entity id that never appears in the results
    #[arg(long, value_name = "ID")]
    exclude: Option<u32>,

    /// Only accept these kinds (and their subtypes); repeatable
    #[arg(short, long = "kind", value_name = "KIND")]
    kinds: Vec<EntityKind>,

    /// Skip terrain occlusion tests
    #[arg(long)]
    ignore_blocked: bool,
}

impl QueryArgs {
    fn to_query(&self) -> TargetQuery {
        let mut query = TargetQuery::new(self.range)
            .allowing(self.kinds.iter().copied())
            .ignoring_blocked(self.ignore_blocked);
        if let Some(count) = self.count {
            query = query.with_count(count);
        }
        if let Some(id) = self.exclude {
            query = query.excluding(EntityId(id));
        }
        query
    }
}

/// Loaded scene plus the effective query configuration.
struct Session {
    world: SimWorld,
    config: SpatialConfig,
    json: bool,
}

impl Session {
    fn open(args: &SceneArgs, cli: &CliConfig) -> Result<Self> {
        let path = args
            .scene
            .clone()
            .or_else(|| cli.scene.clone())
            .context("no scene given; pass --scene or set SIGHT_SCENE")?;
        let scene = Scene::load(&path)
            .with_context(|| format!("Failed to load scene: {}", path.display()))?;
        let world = scene
            .build()
            .with_context(|| format!("Invalid scene: {}", path.display()))?;
        let config = cli.apply(scene.config);
        tracing::debug!(?config, "effective spatial config");

        Ok(Self {
            world,
            config,
            json: args.json,
        })
    }

    fn with_config(mut self, config: SpatialConfig) -> Self {
        self.config = config;
        self
    }

    fn env(&self) -> SpatialEnv<'_> {
        self.world.spatial_env(self.config)
    }

    fn actor(&self, id: u32) -> Result<ActorRef> {
        self.world
            .actor(EntityId(id))
            .copied()
            .with_context(|| format!("Actor {} not found in scene", EntityId(id)))
    }

    fn print_actors(&self, anchor: &Point3, actors: &[ActorRef]) -> Result<()> {
        if self.json {
            return print_json(&actors);
        }
        if actors.is_empty() {
            println!("no targets");
        }
        for actor in actors {
            let p = actor.position;
            println!(
                "{:>6}  {:<16} ({:.2}, {:.2}, {:.2})  {:.2}",
                actor.id.to_string(),
                actor.kind.as_ref(),
                p.x,
                p.y,
                p.z,
                distance_squared(anchor, &p).sqrt()
            );
        }
        Ok(())
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// `--world` plus `--at X Y Z`.
#[derive(Args)]
pub struct LocationArgs {
    /// World id of the location
    #[arg(short, long, default_value_t = 0)]
    world: u32,

    /// Coordinates of the location
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    at: Option<Vec<f64>>,
}

impl LocationArgs {
    fn location(&self) -> Option<Location> {
        match self.at.as_deref() {
            Some(&[x, y, z]) => Some(Location::new(WorldId(self.world), Point3::new(x, y, z))),
            _ => None,
        }
    }
}
