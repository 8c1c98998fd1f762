//! In-memory host world for `sight-core`.
//!
//! [`SimWorld`] implements every oracle trait over a sparse voxel grid and a
//! per-world entity index. Worlds are assembled in code or loaded from RON
//! [`Scene`] files, and particle emissions are recorded by [`ParticleLog`].
pub mod entities;
pub mod grid;
pub mod particles;
pub mod scene;
pub mod traversal;
pub mod world;

pub use entities::EntityIndex;
pub use grid::VoxelGrid;
pub use particles::{Emission, ParticleLog};
pub use scene::{ActorSpec, BoxSpec, Scene, SceneError, VoxelSpec, WorldSpec};
pub use traversal::VoxelTraversal;
pub use world::{SimWorld, WorldLayer};
