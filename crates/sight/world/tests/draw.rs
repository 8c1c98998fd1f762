use approx::assert_abs_diff_eq;
use sight_core::{
    ActorRef, BlockPos, Brush, DrawError, EntityId, EntityKind, LinePath, Location, ParticleKind,
    Point3, SpatialConfig, Vector3, VoxelKind, WorldId, draw_circle, draw_line, draw_sphere,
};
use sight_world::{ParticleLog, SimWorld};

const OVERWORLD: WorldId = WorldId(0);

fn start() -> Location {
    Location::new(OVERWORLD, Point3::new(0.0, 64.5, 0.5))
}

fn offsets(log: &ParticleLog) -> Vec<f64> {
    log.emissions().iter().map(|e| e.position.x).collect()
}

fn world_with_block(x: i32, kind: VoxelKind) -> SimWorld {
    let mut world = SimWorld::new();
    world.fill(OVERWORLD, BlockPos::new(x, 60, -3), BlockPos::new(x, 70, 3), kind);
    world
}

#[test]
fn test_line_stops_before_blocking_surface() {
    let world = world_with_block(4, VoxelKind::Stone);
    let env = world.spatial_env(SpatialConfig::default());
    let mut log = ParticleLog::new();
    let path = LinePath::new(Vector3::new(2.0, 0.0, 0.0), 10.0).with_step(1.0);

    let points = draw_line(&mut log, &env, &start(), &path, Brush::new(ParticleKind::Crit, 2))
        .expect("line draws");

    assert_eq!(points.len(), 4);
    assert_eq!(offsets(&log), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(log.total_particles(), 8);
}

#[test]
fn test_entity_in_front_of_wall_does_not_extend_line() {
    let mut world = world_with_block(4, VoxelKind::Stone);
    world.spawn(
        ActorRef::new(EntityId(1), OVERWORLD, EntityKind::Cow, Point3::new(2.5, 64.0, 0.5))
            .with_size(1.0, 2.0),
    );
    let env = world.spatial_env(SpatialConfig::default().with_pass_through_entities(false));
    let mut log = ParticleLog::new();
    let path = LinePath::new(Vector3::x(), 10.0).with_step(1.0);

    draw_line(&mut log, &env, &start(), &path, Brush::new(ParticleKind::Flame, 1))
        .expect("line draws");
    assert_eq!(offsets(&log), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_line_ignoring_blocks_or_through_fluid_draws_full_length() {
    let path = LinePath::new(Vector3::x(), 10.0).with_step(1.0);
    let brush = Brush::new(ParticleKind::Flame, 1);

    let solid = world_with_block(4, VoxelKind::Stone);
    let env = solid.spatial_env(SpatialConfig::default());
    let mut log = ParticleLog::new();
    draw_line(&mut log, &env, &start(), &path.ignoring_blocked(true), brush).expect("line draws");
    assert_eq!(log.len(), 11);

    let fluid = world_with_block(4, VoxelKind::Lava);
    let env = fluid.spatial_env(SpatialConfig::default());
    let mut log = ParticleLog::new();
    draw_line(&mut log, &env, &start(), &path, brush).expect("line draws");
    assert_eq!(log.len(), 11);
}

#[test]
fn test_line_rejects_zero_direction() {
    let world = SimWorld::new();
    let env = world.spatial_env(SpatialConfig::default());
    let mut log = ParticleLog::new();
    let path = LinePath::new(Vector3::zeros(), 5.0);

    let err = draw_line(&mut log, &env, &start(), &path, Brush::new(ParticleKind::Dust, 1))
        .expect_err("zero direction cannot be normalized");
    assert!(matches!(err, DrawError::Geometry(_)));
    assert!(log.is_empty());
}

#[test]
fn test_circle_points_lie_on_radius() {
    let mut log = ParticleLog::new();
    let center = Location::new(OVERWORLD, Point3::new(10.0, 70.0, -4.0));

    draw_circle(&mut log, &SpatialConfig::default(), &center, 3.0, 36, Brush::new(ParticleKind::Spell, 1));

    assert_eq!(log.len(), 36);
    for emission in log.emissions() {
        let offset = emission.position - center.position;
        assert_eq!(offset.y, 0.0);
        assert_abs_diff_eq!(offset.xz().norm(), 3.0, epsilon = 1e-9);
    }
}

#[test]
fn test_sphere_points_lie_on_radius() {
    let mut log = ParticleLog::new();
    let center = Location::new(OVERWORLD, Point3::new(0.0, 80.0, 0.0));

    draw_sphere(&mut log, &SpatialConfig::default(), &center, 5.0, 150, Brush::new(ParticleKind::EndRod, 1));

    assert_eq!(log.len(), 150);
    for emission in log.emissions() {
        assert_abs_diff_eq!((emission.position - center.position).norm(), 5.0, epsilon = 1e-9);
    }
}

#[test]
fn test_malformed_parameters_are_clamped() {
    let mut log = ParticleLog::new();
    let center = Location::new(OVERWORLD, Point3::origin());

    draw_circle(&mut log, &SpatialConfig::default(), &center, 1.0, 0, Brush::new(ParticleKind::Smoke, 0));

    assert_eq!(log.len(), 1);
    assert_eq!(log.emissions()[0].count, 1);
}
