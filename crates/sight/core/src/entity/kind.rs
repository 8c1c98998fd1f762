use bitflags::bitflags;

bitflags! {
    /// Capability tags attached to an [`EntityKind`].
    ///
    /// A kind inherits every category of its ancestors, so `Husk` is
    /// `LIVING | HOSTILE | UNDEAD` through `Zombie` and `Monster`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct KindCategories: u8 {
        const LIVING     = 1 << 0;
        const HOSTILE    = 1 << 1;
        const PASSIVE    = 1 << 2;
        const UNDEAD     = 1 << 3;
        const PLAYER     = 1 << 4;
        const PROJECTILE = 1 << 5;
    }
}

/// Kind of an entity in the host world.
///
/// Kinds form a single-rooted hierarchy through [`EntityKind::parent`].
/// Abstract kinds (`Entity`, `Living`, `Monster`, ...) never describe a
/// spawned entity but are useful as [`TypeFilter`](super::TypeFilter) members.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    // Abstract
    Entity,
    Living,
    Monster,
    Animal,
    Golem,
    Projectile,

    // Living
    Player,
    Villager,
    ArmorStand,
    Zombie,
    Husk,
    ZombieVillager,
    Skeleton,
    Stray,
    Creeper,
    Spider,
    CaveSpider,
    Cow,
    Pig,
    Sheep,
    Wolf,
    IronGolem,
    SnowGolem,

    // Inanimate
    Arrow,
    Item,
    Boat,
}

impl EntityKind {
    /// Direct parent in the kind hierarchy; `None` only for [`EntityKind::Entity`].
    pub const fn parent(self) -> Option<EntityKind> {
        use EntityKind::*;
        match self {
            Entity => None,
            Living | Projectile | Item | Boat => Some(Entity),
            Monster | Animal | Golem | Player | Villager | ArmorStand => Some(Living),
            Zombie | Skeleton | Creeper | Spider => Some(Monster),
            Husk | ZombieVillager => Some(Zombie),
            Stray => Some(Skeleton),
            CaveSpider => Some(Spider),
            Cow | Pig | Sheep | Wolf => Some(Animal),
            IronGolem | SnowGolem => Some(Golem),
            Arrow => Some(Projectile),
        }
    }

    /// Returns true if `self` is `ancestor` or descends from it.
    pub fn is_a(self, ancestor: EntityKind) -> bool {
        core::iter::successors(Some(self), |kind| kind.parent()).any(|kind| kind == ancestor)
    }

    /// Categories contributed by this kind alone, without inheritance.
    const fn own_categories(self) -> KindCategories {
        use EntityKind::*;
        match self {
            Living => KindCategories::LIVING,
            Monster => KindCategories::HOSTILE,
            Animal | Villager => KindCategories::PASSIVE,
            Player => KindCategories::PLAYER,
            Zombie | Skeleton => KindCategories::UNDEAD,
            Projectile => KindCategories::PROJECTILE,
            _ => KindCategories::empty(),
        }
    }

    /// Categories of this kind including everything inherited from ancestors.
    pub fn categories(self) -> KindCategories {
        core::iter::successors(Some(self), |kind| kind.parent())
            .fold(KindCategories::empty(), |acc, kind| acc | kind.own_categories())
    }

    /// Animate entities are the only valid targeting candidates.
    pub fn is_living(self) -> bool {
        self.categories().contains(KindCategories::LIVING)
    }

    /// Default bounding box as `(width, height)` in blocks.
    pub const fn dimensions(self) -> (f64, f64) {
        use EntityKind::*;
        match self {
            Player => (0.6, 1.8),
            Zombie | Husk | ZombieVillager | Villager => (0.6, 1.95),
            Skeleton | Stray => (0.6, 1.99),
            Creeper => (0.6, 1.7),
            Spider => (1.4, 0.9),
            CaveSpider => (0.7, 0.5),
            Cow => (0.9, 1.4),
            Pig => (0.9, 0.9),
            Sheep => (0.9, 1.3),
            Wolf => (0.6, 0.85),
            IronGolem => (1.4, 2.7),
            SnowGolem => (0.7, 1.9),
            ArmorStand => (0.5, 1.975),
            Arrow => (0.5, 0.5),
            Item => (0.25, 0.25),
            Boat => (1.375, 0.5625),
            Entity | Living | Monster | Animal | Golem | Projectile => (0.6, 1.8),
        }
    }
}
