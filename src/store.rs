//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! the authoritative item list and the rows currently on screen; every list
//! operation goes through a helper below so the two never drift apart.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_state::{Item, ItemList};

use crate::presence::{self, Rendered};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct TodoState {
    /// Authoritative item list
    pub list: ItemList,
    /// Rows on screen, including ones still fading out
    pub rendered: Vec<Rendered<Item>>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new(ItemList::default())
    }
}

impl TodoState {
    pub fn new(list: ItemList) -> Self {
        let rendered = presence::initial(list.items(), true);
        Self { list, rendered }
    }
}

/// Type alias for the store
pub type AppStore = Store<TodoState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Rebuild the rendered rows from the current list
fn sync_rendered(store: &AppStore) {
    let next = store.list().read_untracked().items().to_vec();
    let rendered_field = store.rendered();
    let mut rendered = rendered_field.write();
    let reconciled = presence::reconcile(rendered.as_slice(), &next);
    *rendered = reconciled;
}

/// Append a placeholder item; no-op at capacity
pub fn store_add_item(store: &AppStore) -> Option<u32> {
    let added = store.list().write().add();
    if added.is_some() {
        sync_rendered(store);
    }
    added
}

/// Flip an item's checked flag
pub fn store_toggle_item(store: &AppStore, item_id: u32) {
    if store.list().write().toggle_checked(item_id) {
        sync_rendered(store);
    }
}

/// Remove an item; its row keeps fading out
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    if store.list().write().remove(item_id).is_some() {
        sync_rendered(store);
    }
}

/// Replace the order of the list with `sequence`
pub fn store_reorder(store: &AppStore, sequence: Vec<Item>) {
    let result = store.list().write().reorder(sequence);
    match result {
        Ok(()) => sync_rendered(store),
        Err(e) => tracing::warn!("reorder rejected: {}", e),
    }
}

/// Move the dragged item into the slot of the target item
pub fn store_move_item(store: &AppStore, dragged_id: u32, target_id: u32) {
    let (items, from, to) = {
        let list = store.list().read_untracked();
        (list.items().to_vec(), list.position(dragged_id), list.position(target_id))
    };
    if let (Some(from), Some(to)) = (from, to) {
        store_reorder(store, leptos_dragdrop::move_to(&items, from, to));
    }
}

/// Restore the seed items
pub fn store_reset(store: &AppStore) {
    store.list().write().reset();
    sync_rendered(store);
}

/// Mark an entering row as present
pub fn store_settle_row(store: &AppStore, item_id: u32) {
    let entering = store
        .rendered()
        .read_untracked()
        .iter()
        .any(|row| row.key() == item_id && row.phase == presence::Phase::Entering);
    if entering {
        let rendered_field = store.rendered();
        presence::settle(rendered_field.write().as_mut_slice(), item_id);
    }
}

/// Drop a row whose exit animation finished
pub fn store_finish_exit(store: &AppStore, item_id: u32) {
    let exiting = store
        .rendered()
        .read_untracked()
        .iter()
        .any(|row| row.key() == item_id && row.phase == presence::Phase::Exiting);
    if exiting {
        let rendered_field = store.rendered();
        let mut rows = rendered_field.write();
        presence::finish_exit(&mut *rows, item_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::Phase;

    fn rows(store: &AppStore) -> Vec<(u32, Phase)> {
        store
            .rendered()
            .read_untracked()
            .iter()
            .map(|row| (row.key(), row.phase))
            .collect()
    }

    fn ids(store: &AppStore) -> Vec<u32> {
        store.list().read_untracked().ids()
    }

    fn settle_all(store: &AppStore) {
        for id in ids(store) {
            store_settle_row(store, id);
        }
    }

    #[test]
    fn test_remove_move_and_finish_exit() {
        Owner::new().with(|| {
            let store = Store::new(TodoState::default());

            store_remove_item(&store, 3);
            store_move_item(&store, 1, 4);

            assert_eq!(ids(&store), vec![2, 4, 1, 5, 6]);
            assert_eq!(
                rows(&store),
                vec![
                    (2, Phase::Entering),
                    (3, Phase::Exiting),
                    (4, Phase::Entering),
                    (1, Phase::Entering),
                    (5, Phase::Entering),
                    (6, Phase::Entering),
                ]
            );

            store_finish_exit(&store, 3);
            let keys: Vec<u32> = rows(&store).into_iter().map(|(id, _)| id).collect();
            assert_eq!(keys, vec![2, 4, 1, 5, 6]);
        });
    }

    #[test]
    fn test_reset_brings_exiting_row_back() {
        Owner::new().with(|| {
            let store = Store::new(TodoState::default());
            settle_all(&store);

            store_toggle_item(&store, 2);
            store_remove_item(&store, 2);
            assert_eq!(rows(&store)[1], (2, Phase::Exiting));

            store_reset(&store);
            assert_eq!(ids(&store), vec![1, 2, 3, 4, 5, 6]);
            assert!(rows(&store).iter().all(|&(_, phase)| phase == Phase::Present));
            assert!(!store.rendered().read_untracked()[1].value.checked);

            // timer from the earlier removal fires late
            store_finish_exit(&store, 2);
            assert_eq!(rows(&store).len(), 6);
        });
    }

    #[test]
    fn test_rejected_reorder_changes_nothing() {
        Owner::new().with(|| {
            let store = Store::new(TodoState::default());
            store_remove_item(&store, 5);
            let list_before = store.list().get_untracked();
            let rendered_before = store.rendered().get_untracked();

            let mut sequence = list_before.items().to_vec();
            sequence.pop();
            store_reorder(&store, sequence);

            assert_eq!(store.list().get_untracked(), list_before);
            assert_eq!(store.rendered().get_untracked(), rendered_before);
        });
    }

    #[test]
    fn test_add_enters_and_settles() {
        Owner::new().with(|| {
            let store = Store::new(TodoState::default());
            settle_all(&store);
            assert_eq!(store_add_item(&store), None);

            store_remove_item(&store, 1);
            store_finish_exit(&store, 1);
            let id = store_add_item(&store).unwrap();
            assert_eq!(id, 7);
            assert_eq!(rows(&store).last(), Some(&(7, Phase::Entering)));

            store_settle_row(&store, 7);
            assert_eq!(rows(&store).last(), Some(&(7, Phase::Present)));
        });
    }
}
