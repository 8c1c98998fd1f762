//! Multi-world host implementing every `sight-core` oracle.
use std::collections::BTreeMap;

use sight_core::{
    ActorRef, BlockPos, EntityId, EntityOracle, Env, OracleError, Point3, Ray, SpatialConfig,
    SpatialEnv, SurfaceHit, TerrainOracle, Vector3, VoxelKind, VoxelOracle, VoxelStore, WorldId,
};

use crate::entities::EntityIndex;
use crate::grid::VoxelGrid;

/// Terrain and entities of a single world.
#[derive(Clone, Debug, Default)]
pub struct WorldLayer {
    terrain: VoxelGrid,
    entities: EntityIndex,
}

impl WorldLayer {
    pub fn new(terrain: VoxelGrid) -> Self {
        Self {
            terrain,
            entities: EntityIndex::new(),
        }
    }

    pub fn terrain(&self) -> &VoxelGrid {
        &self.terrain
    }

    pub fn terrain_mut(&mut self) -> &mut VoxelGrid {
        &mut self.terrain
    }

    pub fn entities(&self) -> &EntityIndex {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut EntityIndex {
        &mut self.entities
    }
}

/// In-memory host world holding any number of worlds.
#[derive(Clone, Debug, Default)]
pub struct SimWorld {
    worlds: BTreeMap<WorldId, WorldLayer>,
}

impl SimWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layer for `id`, creating an empty one with default build limits.
    pub fn create_world(&mut self, id: WorldId) -> &mut WorldLayer {
        self.worlds.entry(id).or_default()
    }

    pub fn insert_world(&mut self, id: WorldId, layer: WorldLayer) -> Option<WorldLayer> {
        self.worlds.insert(id, layer)
    }

    pub fn world(&self, id: WorldId) -> Option<&WorldLayer> {
        self.worlds.get(&id)
    }

    pub fn world_mut(&mut self, id: WorldId) -> Option<&mut WorldLayer> {
        self.worlds.get_mut(&id)
    }

    pub fn world_ids(&self) -> impl Iterator<Item = WorldId> + '_ {
        self.worlds.keys().copied()
    }

    /// Places `actor` in its world, creating the world if needed.
    pub fn spawn(&mut self, actor: ActorRef) -> Option<ActorRef> {
        self.create_world(actor.world).entities_mut().insert(actor)
    }

    /// Looks an actor up across all worlds.
    pub fn actor(&self, id: EntityId) -> Option<&ActorRef> {
        self.worlds.values().find_map(|layer| layer.entities.get(id))
    }

    pub fn fill(&mut self, world: WorldId, a: BlockPos, b: BlockPos, kind: VoxelKind) -> usize {
        self.create_world(world).terrain_mut().fill(a, b, kind)
    }

    /// Bundles this world as both entity and terrain oracle.
    pub fn spatial_env(&self, config: SpatialConfig) -> SpatialEnv<'_> {
        Env::<Self, Self>::new(Some(self), Some(self), config).as_spatial_env()
    }
}

impl EntityOracle for SimWorld {
    fn entities_near(&self, world: WorldId, center: Point3, extents: Vector3) -> Vec<ActorRef> {
        self.world(world)
            .map(|layer| layer.entities.overlapping(center, extents))
            .unwrap_or_default()
    }
}

impl TerrainOracle for SimWorld {
    fn first_blocking_surface(
        &self,
        world: WorldId,
        ray: &Ray,
        max_distance: f64,
        pass_through_entities: bool,
    ) -> Option<SurfaceHit> {
        let layer = self.world(world)?;
        let terrain = layer.terrain.raycast(ray, max_distance);
        if pass_through_entities {
            return terrain;
        }

        // Entity hits never mask terrain behind them.
        if terrain.is_some() {
            return terrain;
        }
        layer
            .entities
            .first_ray_hit(ray, max_distance)
            .map(|(t, actor)| {
                tracing::trace!(hit = %actor.id, distance = t, "ray stopped by entity");
                SurfaceHit::new(ray.point_at(t), t, None)
            })
    }
}

impl VoxelOracle for SimWorld {
    fn kind_at(&self, world: WorldId, pos: BlockPos) -> VoxelKind {
        self.world(world)
            .map_or(VoxelKind::Air, |layer| layer.terrain.get(pos))
    }
}

impl VoxelStore for SimWorld {
    fn set_kind(
        &mut self,
        world: WorldId,
        pos: BlockPos,
        kind: VoxelKind,
    ) -> Result<(), OracleError> {
        let layer = self
            .world_mut(world)
            .ok_or(OracleError::UnknownWorld(world))?;
        if layer.terrain.set(pos, kind) {
            Ok(())
        } else {
            Err(OracleError::OutOfBounds { world, pos })
        }
    }
}
