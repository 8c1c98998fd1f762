use std::collections::BTreeSet;

use super::EntityKind;

/// Allow-list of entity kinds.
///
/// An empty filter accepts every kind. A non-empty filter accepts a kind when
/// it is a member or descends from a member, so `[Monster]` admits `Husk`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeFilter {
    kinds: BTreeSet<EntityKind>,
}

impl TypeFilter {
    /// Filter that accepts every kind.
    pub fn any() -> Self {
        Self::default()
    }

    /// Filter restricted to `kinds` and their descendants.
    pub fn only(kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        kinds.into_iter().collect()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn accepts(&self, kind: EntityKind) -> bool {
        self.is_unrestricted() || self.kinds.iter().any(|&allowed| kind.is_a(allowed))
    }

    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<EntityKind> for TypeFilter {
    fn from_iter<T: IntoIterator<Item = EntityKind>>(iter: T) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}
