//! Session-local favorites.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// The set of products a visitor has hearted. Lives for one page load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<ProductId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is now a favorite.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// A copy with membership of `id` flipped.
    pub fn toggled(&self, id: ProductId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Favorites in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut favorites = FavoriteSet::new();
        let id = ProductId::new(4);

        assert!(favorites.toggle(id));
        assert!(favorites.is_favorite(id));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(id));
        assert!(!favorites.is_favorite(id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_iteration_is_ordered() {
        let favorites: FavoriteSet = [7, 2, 5].into_iter().map(ProductId::new).collect();
        let ids: Vec<u32> = favorites.iter().map(ProductId::get).collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: toggling the same id twice restores the set.
            #[test]
            fn double_toggle_is_identity(
                ids in prop::collection::btree_set(0u32..50, 0..10),
                id in 0u32..50,
            ) {
                let set: FavoriteSet = ids.into_iter().map(ProductId::new).collect();
                let id = ProductId::new(id);
                prop_assert_eq!(set.toggled(id).toggled(id), set);
            }
        }
    }
}
