use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use sight_core::{VoxelKind, apply_material, capture_sphere};

use super::{LocationArgs, SceneArgs, Session, print_json};
use crate::config::CliConfig;

/// Capture (and optionally refill) a sphere of voxels
#[derive(Parser)]
pub struct Capture {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    location: LocationArgs,

    /// Sphere radius in blocks
    #[arg(short, long)]
    radius: f64,

    /// Write this material into every captured voxel
    #[arg(long, value_name = "KIND")]
    fill: Option<VoxelKind>,
}

impl Capture {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let mut session = Session::open(&self.scene, cli)?;
        let center = self
            .location
            .location()
            .context("--at <X> <Y> <Z> is required")?;

        let snapshots = capture_sphere(&session.world, &center, self.radius);
        if let Some(kind) = self.fill {
            let written = apply_material(&mut session.world, &snapshots, kind)?;
            tracing::info!(written, material = %kind, "filled sphere");
        }

        if session.json {
            return print_json(&snapshots);
        }
        let mut histogram: BTreeMap<String, usize> = BTreeMap::new();
        for snapshot in &snapshots {
            *histogram.entry(format!("{:?}", snapshot.kind)).or_default() += 1;
        }
        println!("{} voxels captured", snapshots.len());
        for (kind, count) in histogram {
            println!("  {kind:<12} {count}");
        }
        Ok(())
    }
}
