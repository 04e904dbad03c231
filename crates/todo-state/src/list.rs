//! Item List
//!
//! Ordered collection of items plus the rules that bound it. Every
//! operation leaves the list valid: ids stay unique and the length never
//! exceeds `max_items`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};
use crate::item::{default_seed, Item, SeedItem, DEFAULT_PLACEHOLDER};

/// Maximum number of items shown by default
pub const DEFAULT_MAX_ITEMS: usize = 6;

/// Tunables for an [`ItemList`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Upper bound on the list length
    pub max_items: usize,
    /// Text given to newly added items
    pub placeholder_text: String,
    /// Items the list starts with and returns to on reset
    pub seed: Vec<SeedItem>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            placeholder_text: DEFAULT_PLACEHOLDER.to_string(),
            seed: default_seed(),
        }
    }
}

impl ListConfig {
    /// Check the bound and the seed ids
    pub fn validate(&self) -> ListResult<()> {
        if self.max_items == 0 {
            return Err(ListError::EmptyCapacity);
        }
        if self.seed.len() > self.max_items {
            return Err(ListError::SeedTooLarge {
                seed: self.seed.len(),
                max: self.max_items,
            });
        }
        let mut seen = HashSet::new();
        for seed in &self.seed {
            if seed.id == u32::MAX {
                return Err(ListError::ReservedId(seed.id));
            }
            if !seen.insert(seed.id) {
                return Err(ListError::DuplicateId(seed.id));
            }
        }
        Ok(())
    }
}

/// The to-do list state container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
    config: ListConfig,
    /// Next id handed out by `add`; only ever grows
    next_id: u32,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::from_valid(ListConfig::default())
    }
}

impl ItemList {
    /// Build a list from a configuration, starting at the seed
    pub fn new(config: ListConfig) -> ListResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ListConfig) -> Self {
        let next_id = config
            .seed
            .iter()
            .map(|s| s.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        let items = config.seed.iter().map(SeedItem::to_item).collect();
        Self {
            items,
            config,
            next_id,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.config.max_items
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Whether `add` would append an item
    pub fn can_add(&self) -> bool {
        self.items.len() < self.config.max_items
    }

    // ========================
    // Operations
    // ========================

    /// Append a placeholder item. Returns its id, or `None` at capacity.
    pub fn add(&mut self) -> Option<u32> {
        match self.try_add() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!("add ignored: {}", e);
                None
            }
        }
    }

    /// Append a placeholder item, failing with [`ListError::AtCapacity`]
    pub fn try_add(&mut self) -> ListResult<u32> {
        if !self.can_add() {
            return Err(ListError::AtCapacity {
                max: self.config.max_items,
            });
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(ListError::IdsExhausted)?;
        self.items
            .push(Item::new(id, self.config.placeholder_text.clone()));
        tracing::debug!(id, len = self.items.len(), "item added");
        Ok(id)
    }

    /// Flip the `checked` flag of an item. Returns false for unknown ids.
    pub fn toggle_checked(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                tracing::debug!(id, checked = item.checked, "item toggled");
                true
            }
            None => false,
        }
    }

    /// Remove an item by id, keeping the order of the rest
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        self.try_remove(id).ok()
    }

    pub fn try_remove(&mut self, id: u32) -> ListResult<Item> {
        let index = self.position(id).ok_or(ListError::NotFound(id))?;
        let removed = self.items.remove(index);
        tracing::debug!(id, len = self.items.len(), "item removed");
        Ok(removed)
    }

    /// Replace the order with `sequence`, which must be a permutation of
    /// the current items. Only the order is taken from `sequence`; item
    /// contents stay as stored. On error the list is left untouched.
    pub fn reorder(&mut self, sequence: Vec<Item>) -> ListResult<()> {
        let ids: Vec<u32> = sequence.iter().map(|item| item.id).collect();
        self.reorder_ids(&ids)
    }

    /// Same as [`ItemList::reorder`], keyed by id only
    pub fn reorder_ids(&mut self, ids: &[u32]) -> ListResult<()> {
        if ids.len() != self.items.len() {
            return Err(ListError::LengthMismatch {
                expected: self.items.len(),
                got: ids.len(),
            });
        }
        let mut seen = HashSet::with_capacity(ids.len());
        for &id in ids {
            if !seen.insert(id) {
                return Err(ListError::DuplicateId(id));
            }
            if self.get(id).is_none() {
                return Err(ListError::UnknownId(id));
            }
        }

        let mut remaining = std::mem::take(&mut self.items);
        self.items = ids
            .iter()
            .filter_map(|&id| {
                let index = remaining.iter().position(|item| item.id == id)?;
                Some(remaining.swap_remove(index))
            })
            .collect();
        tracing::debug!(order = ?ids, "items reordered");
        Ok(())
    }

    /// Restore the seed items, unchecked and in seed order
    pub fn reset(&mut self) {
        self.items = self.config.seed.iter().map(SeedItem::to_item).collect();
        tracing::debug!(len = self.items.len(), "list reset to seed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_ids() -> Vec<u32> {
        vec![1, 2, 3, 4, 5, 6]
    }

    #[test]
    fn test_starts_from_seed() {
        let list = ItemList::default();
        assert_eq!(list.ids(), seed_ids());
        assert!(list.items().iter().all(|item| !item.checked));
        assert_eq!(list.items()[0].text, "Finish blog post ✍️");
    }

    #[test]
    fn test_add_rejected_at_capacity() {
        let mut list = ItemList::default();
        assert!(!list.can_add());
        let before = list.clone();

        assert_eq!(list.add(), None);
        assert_eq!(list.try_add(), Err(ListError::AtCapacity { max: 6 }));
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_uses_placeholder_and_fresh_id() {
        let mut list = ItemList::default();
        list.remove(2);

        let id = list.add().expect("room for one more");
        assert_eq!(id, 7);
        let added = list.get(id).unwrap();
        assert_eq!(added.text, DEFAULT_PLACEHOLDER);
        assert!(!added.checked);
        assert_eq!(list.position(id), Some(5));
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut list = ItemList::default();
        assert!(list.toggle_checked(3));

        assert!(list.get(3).unwrap().checked);
        assert_eq!(list.items().iter().filter(|i| i.checked).count(), 1);
        assert_eq!(list.ids(), seed_ids());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut list = ItemList::default();
        let before = list.clone();

        assert!(!list.toggle_checked(42));
        assert_eq!(list.remove(42), None);
        assert_eq!(list.try_remove(42), Err(ListError::NotFound(42)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_scenario_toggle_remove_reset() {
        let mut list = ItemList::default();

        assert_eq!(list.add(), None);
        assert_eq!(list.len(), 6);

        list.toggle_checked(3);
        let removed = list.remove(3).unwrap();
        assert!(removed.checked);
        assert_eq!(list.ids(), vec![1, 2, 4, 5, 6]);

        list.reset();
        assert_eq!(list.ids(), seed_ids());
        assert!(list.items().iter().all(|item| !item.checked));
    }

    #[test]
    fn test_reorder_applies_permutation() {
        let mut list = ItemList::default();
        list.toggle_checked(1);

        let mut sequence = list.items().to_vec();
        sequence.reverse();
        list.reorder(sequence).unwrap();

        assert_eq!(list.ids(), vec![6, 5, 4, 3, 2, 1]);
        assert!(list.get(1).unwrap().checked);
    }

    #[test]
    fn test_reorder_keeps_stored_contents() {
        let mut list = ItemList::default();
        let mut sequence = list.items().to_vec();
        sequence.swap(0, 1);
        sequence[0].text = "tampered".to_string();
        sequence[0].checked = true;

        list.reorder(sequence).unwrap();
        assert_eq!(list.items()[0].id, 2);
        assert_eq!(list.items()[0].text, "Build new Three.js experiences ✨");
        assert!(!list.items()[0].checked);
    }

    #[test]
    fn test_reorder_rejects_malformed_sequences() {
        let mut list = ItemList::default();
        let before = list.clone();

        assert_eq!(
            list.reorder_ids(&[1, 2, 3]),
            Err(ListError::LengthMismatch { expected: 6, got: 3 })
        );
        assert_eq!(
            list.reorder_ids(&[1, 2, 3, 4, 5, 5]),
            Err(ListError::DuplicateId(5))
        );
        assert_eq!(
            list.reorder_ids(&[1, 2, 3, 4, 5, 9]),
            Err(ListError::UnknownId(9))
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_reset_does_not_rewind_ids() {
        let mut list = ItemList::default();
        list.remove(1);
        assert_eq!(list.add(), Some(7));
        list.reset();
        list.remove(1);
        assert_eq!(list.add(), Some(8));
    }

    #[test]
    fn test_empty_list_is_allowed() {
        let mut list = ItemList::default();
        for id in seed_ids() {
            list.remove(id);
        }
        assert!(list.is_empty());
        assert!(list.reorder_ids(&[]).is_ok());
        assert_eq!(list.add(), Some(7));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ListConfig::default();
        config.max_items = 0;
        assert_eq!(ItemList::new(config).unwrap_err(), ListError::EmptyCapacity);

        let mut config = ListConfig::default();
        config.max_items = 3;
        assert_eq!(
            ItemList::new(config).unwrap_err(),
            ListError::SeedTooLarge { seed: 6, max: 3 }
        );

        let mut config = ListConfig::default();
        config.seed[1].id = 1;
        assert_eq!(ItemList::new(config).unwrap_err(), ListError::DuplicateId(1));
    }

    #[test]
    fn test_max_seed_id_rejected() {
        let config = ListConfig {
            seed: vec![SeedItem::new(u32::MAX, "x"), SeedItem::new(0, "y")],
            ..ListConfig::default()
        };
        assert_eq!(ItemList::new(config).unwrap_err(), ListError::ReservedId(u32::MAX));
    }

    #[test]
    fn test_add_fails_once_ids_run_out() {
        let config = ListConfig {
            seed: vec![SeedItem::new(u32::MAX - 1, "last")],
            ..ListConfig::default()
        };
        let mut list = ItemList::new(config).unwrap();
        let before = list.clone();

        assert_eq!(list.try_add(), Err(ListError::IdsExhausted));
        assert_eq!(list.add(), None);
        assert_eq!(list, before);
        assert_eq!(list.ids(), vec![u32::MAX - 1]);
    }

    #[test]
    fn test_empty_seed_starts_ids_at_one() {
        let config = ListConfig {
            seed: Vec::new(),
            ..ListConfig::default()
        };
        let mut list = ItemList::new(config).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.add(), Some(1));
    }
}
