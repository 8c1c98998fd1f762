use sight_core::{ActorRef, Direction3, EntityId, Point3, Ray, Vector3};

/// Actors of one world, enumerated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct EntityIndex {
    actors: Vec<ActorRef>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `actor`, replacing (in place) any actor with the same id.
    pub fn insert(&mut self, actor: ActorRef) -> Option<ActorRef> {
        match self.actors.iter_mut().find(|existing| existing.id == actor.id) {
            Some(slot) => Some(std::mem::replace(slot, actor)),
            None => {
                self.actors.push(actor);
                None
            }
        }
    }

    pub fn remove(&mut self, id: EntityId) -> Option<ActorRef> {
        let index = self.actors.iter().position(|actor| actor.id == id)?;
        Some(self.actors.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&ActorRef> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    /// Moves an actor's feet to `position`. Returns false for unknown ids.
    pub fn move_to(&mut self, id: EntityId, position: Point3) -> bool {
        self.update(id, |actor| actor.position = position)
    }

    pub fn face(&mut self, id: EntityId, facing: Direction3) -> bool {
        self.update(id, |actor| actor.facing = facing)
    }

    fn update(&mut self, id: EntityId, f: impl FnOnce(&mut ActorRef)) -> bool {
        match self.actors.iter_mut().find(|actor| actor.id == id) {
            Some(actor) => {
                f(actor);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorRef> {
        self.actors.iter()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Actors whose bounding box intersects the box of half-size `extents`
    /// around `center`. Touching faces count as intersecting.
    pub fn overlapping(&self, center: Point3, extents: Vector3) -> Vec<ActorRef> {
        let (lo, hi) = (center - extents, center + extents);
        self.actors
            .iter()
            .filter(|actor| {
                let (min, max) = actor.bounds();
                (0..3).all(|axis| min[axis] <= hi[axis] && max[axis] >= lo[axis])
            })
            .copied()
            .collect()
    }

    /// Nearest actor box entered by `ray` within `max_distance`.
    ///
    /// Boxes containing the ray origin are skipped so that a ray cast from an
    /// actor's eye never hits the actor itself.
    pub fn first_ray_hit(&self, ray: &Ray, max_distance: f64) -> Option<(f64, ActorRef)> {
        self.actors
            .iter()
            .filter_map(|actor| {
                let (min, max) = actor.bounds();
                box_entry(ray, &min, &max)
                    .filter(|&t| t <= max_distance)
                    .map(|t| (t, *actor))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
    }
}

/// Slab test: distance at which `ray` enters the box, `None` when it misses
/// or starts inside.
fn box_entry(ray: &Ray, min: &Point3, max: &Point3) -> Option<f64> {
    let dir = ray.direction.vector();
    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        if dir[axis] == 0.0 {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[axis];
        let (t0, t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
    }

    (t_near >= 0.0 && t_near <= t_far).then_some(t_near)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sight_core::{EntityKind, WorldId};

    fn actor(id: u32, x: f64) -> ActorRef {
        ActorRef::new(EntityId(id), WorldId(0), EntityKind::Zombie, Point3::new(x, 0.0, 0.0))
            .with_size(1.0, 2.0)
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut index = EntityIndex::new();
        index.insert(actor(1, 0.0));
        index.insert(actor(2, 5.0));
        let previous = index.insert(actor(1, 9.0));

        assert_eq!(previous.map(|a| a.position.x), Some(0.0));
        let order: Vec<_> = index.iter().map(|a| (a.id.0, a.position.x)).collect();
        assert_eq!(order, vec![(1, 9.0), (2, 5.0)]);
    }

    #[test]
    fn overlap_uses_full_bounding_box() {
        let mut index = EntityIndex::new();
        index.insert(actor(1, 3.4));
        // Box reaches x = 3.0; the actor spans 2.9..=3.9.
        let found = index.overlapping(Point3::new(0.0, 1.0, 0.0), Vector3::repeat(3.0));
        assert_eq!(found.len(), 1);
        assert!(index.overlapping(Point3::new(0.0, 1.0, 0.0), Vector3::repeat(2.8)).is_empty());
    }

    #[test]
    fn ray_skips_the_box_it_starts_in() {
        let mut index = EntityIndex::new();
        index.insert(actor(1, 0.0));
        index.insert(actor(2, 4.0));
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Direction3::x());

        let (t, hit) = index.first_ray_hit(&ray, 10.0).unwrap();
        assert_eq!(hit.id, EntityId(2));
        assert_eq!(t, 3.5);
        assert!(index.first_ray_hit(&ray, 3.0).is_none());
    }

    #[test]
    fn remove_and_update_unknown_ids() {
        let mut index = EntityIndex::new();
        index.insert(actor(1, 0.0));
        assert!(!index.move_to(EntityId(7), Point3::origin()));
        assert!(index.face(EntityId(1), Direction3::x()));
        assert_eq!(index.remove(EntityId(1)).map(|a| a.id), Some(EntityId(1)));
        assert!(index.is_empty());
    }
}
