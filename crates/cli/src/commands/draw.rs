use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use sight_core::{
    Brush, LinePath, Location, ParticleKind, ParticlePoint, Vector3, draw_circle, draw_line,
    draw_sphere,
};
use sight_world::ParticleLog;

use super::{LocationArgs, SceneArgs, Session, print_json};
use crate::config::CliConfig;

/// Sample particle points along a shape
#[derive(Subcommand)]
pub enum Draw {
    /// Horizontal circle around a point
    Circle(Shape),

    /// Sphere surface around a point
    Sphere(Shape),

    /// Segment from a point, stopping at terrain
    Line(Line),
}

/// Particle options shared by every shape.
#[derive(Args)]
pub struct BrushArgs {
    /// Particle kind
    #[arg(long, default_value = "flame")]
    particle: ParticleKind,

    /// Particles emitted at each point
    #[arg(long, default_value_t = 1)]
    per_point: u32,
}

impl BrushArgs {
    fn brush(&self) -> Brush {
        Brush::new(self.particle, self.per_point)
    }
}

#[derive(Args)]
pub struct Shape {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    location: LocationArgs,

    #[command(flatten)]
    brush: BrushArgs,

    #[arg(short, long)]
    radius: f64,

    /// Number of points
    #[arg(short, long, default_value_t = 16)]
    density: u32,
}

#[derive(Args)]
pub struct Line {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    location: LocationArgs,

    #[command(flatten)]
    brush: BrushArgs,

    /// Direction of the segment
    #[arg(long, num_args = 3, value_names = ["DX", "DY", "DZ"], allow_negative_numbers = true)]
    direction: Vec<f64>,

    #[arg(short, long)]
    length: f64,

    /// Point spacing; non-positive uses the configured line step
    #[arg(long, default_value_t = 0.0)]
    step: f64,

    /// Keep drawing through terrain
    #[arg(long)]
    ignore_blocked: bool,
}

impl Draw {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let mut log = ParticleLog::new();
        let (session, points) = match self {
            Draw::Circle(shape) => {
                let (session, center) = shape.open(cli)?;
                let points = draw_circle(
                    &mut log,
                    &session.config,
                    &center,
                    shape.radius,
                    shape.density,
                    shape.brush.brush(),
                );
                (session, points)
            }
            Draw::Sphere(shape) => {
                let (session, center) = shape.open(cli)?;
                let points = draw_sphere(
                    &mut log,
                    &session.config,
                    &center,
                    shape.radius,
                    shape.density,
                    shape.brush.brush(),
                );
                (session, points)
            }
            Draw::Line(line) => {
                let session = Session::open(&line.scene, cli)?;
                let start = line
                    .location
                    .location()
                    .context("--at <X> <Y> <Z> is required")?;
                let &[dx, dy, dz] = line.direction.as_slice() else {
                    bail!("--direction takes three components");
                };
                let path = LinePath::new(Vector3::new(dx, dy, dz), line.length)
                    .with_step(line.step)
                    .ignoring_blocked(line.ignore_blocked);
                let points =
                    draw_line(&mut log, &session.env(), &start, &path, line.brush.brush())?;
                (session, points)
            }
        };

        tracing::debug!(emissions = log.len(), particles = log.total_particles(), "drawn");
        print_points(&session, &points)
    }
}

impl Shape {
    fn open(&self, cli: &CliConfig) -> Result<(Session, Location)> {
        let session = Session::open(&self.scene, cli)?;
        let center = self
            .location
            .location()
            .context("--at <X> <Y> <Z> is required")?;
        Ok((session, center))
    }
}

fn print_points(session: &Session, points: &[ParticlePoint]) -> Result<()> {
    if session.json {
        return print_json(&points);
    }
    for point in points {
        let p = point.position;
        println!("({:.3}, {:.3}, {:.3}) x{}", p.x, p.y, p.z, point.count);
    }
    println!("{} points", points.len());
    Ok(())
}
