//! Property tests for the item list invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use todo_state::{ItemList, ListConfig};

#[derive(Debug, Clone)]
enum Op {
    Add,
    Toggle(u32),
    Remove(u32),
    Reverse,
    Rotate(usize),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        3 => (1u32..12).prop_map(Op::Toggle),
        3 => (1u32..12).prop_map(Op::Remove),
        1 => Just(Op::Reverse),
        1 => (0usize..6).prop_map(Op::Rotate),
        1 => Just(Op::Reset),
    ]
}

fn apply(list: &mut ItemList, op: &Op) {
    match op {
        Op::Add => {
            list.add();
        }
        Op::Toggle(id) => {
            list.toggle_checked(*id);
        }
        Op::Remove(id) => {
            list.remove(*id);
        }
        Op::Reverse => {
            let mut sequence = list.items().to_vec();
            sequence.reverse();
            list.reorder(sequence).unwrap();
        }
        Op::Rotate(n) => {
            let mut ids = list.ids();
            if !ids.is_empty() {
                let k = n % ids.len();
                ids.rotate_left(k);
            }
            list.reorder_ids(&ids).unwrap();
        }
        Op::Reset => list.reset(),
    }
}

fn unique(list: &ItemList) -> bool {
    let ids = list.ids();
    ids.iter().collect::<HashSet<_>>().len() == ids.len()
}

proptest! {
    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut list = ItemList::default();
        for op in &ops {
            apply(&mut list, op);
            prop_assert!(unique(&list));
            prop_assert!(list.len() <= list.max_items());
        }
    }

    #[test]
    fn add_at_capacity_changes_nothing(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut list = ItemList::default();
        for op in &ops {
            apply(&mut list, op);
        }
        while list.can_add() {
            list.add();
        }
        let before = list.clone();
        prop_assert_eq!(list.add(), None);
        prop_assert_eq!(list, before);
    }

    #[test]
    fn toggle_twice_restores_item(
        ops in prop::collection::vec(op_strategy(), 0..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = ItemList::default();
        for op in &ops {
            apply(&mut list, op);
        }
        prop_assume!(!list.is_empty());
        let id = list.items()[pick.index(list.len())].id;
        let before = list.clone();

        list.toggle_checked(id);
        list.toggle_checked(id);
        prop_assert_eq!(list, before);
    }

    #[test]
    fn remove_drops_exactly_one(
        ops in prop::collection::vec(op_strategy(), 0..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = ItemList::default();
        for op in &ops {
            apply(&mut list, op);
        }
        prop_assume!(!list.is_empty());
        let id = list.items()[pick.index(list.len())].id;
        let expected: Vec<u32> = list.ids().into_iter().filter(|&other| other != id).collect();

        let removed = list.remove(id);
        prop_assert_eq!(removed.map(|item| item.id), Some(id));
        prop_assert_eq!(list.ids(), expected);
    }

    #[test]
    fn reset_restores_seed(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut list = ItemList::default();
        let seed = list.items().to_vec();
        for op in &ops {
            apply(&mut list, op);
        }
        list.reset();
        prop_assert_eq!(list.items(), seed.as_slice());
        prop_assert!(list.items().iter().all(|item| !item.checked));
    }

    #[test]
    fn reorder_takes_the_given_order(
        ops in prop::collection::vec(op_strategy(), 0..30),
        seed in any::<u64>(),
    ) {
        let mut list = ItemList::default();
        for op in &ops {
            apply(&mut list, op);
        }
        let mut ids = list.ids();
        // deterministic shuffle driven by the generated seed
        let mut state = seed;
        for i in (1..ids.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            ids.swap(i, j);
        }
        let before: HashSet<u32> = list.ids().into_iter().collect();

        list.reorder_ids(&ids).unwrap();
        prop_assert_eq!(list.ids(), ids);
        prop_assert_eq!(list.ids().into_iter().collect::<HashSet<_>>(), before);
    }
}

#[test]
fn custom_config_round_trips_through_json() {
    let json = r#"{ "max_items": 3, "seed": [{ "id": 10, "text": "Water plants" }] }"#;
    let config: ListConfig = serde_json::from_str(json).unwrap();
    let mut list = ItemList::new(config).unwrap();

    assert_eq!(list.ids(), vec![10]);
    assert_eq!(list.add(), Some(11));
    assert_eq!(list.add(), Some(12));
    assert_eq!(list.add(), None);
    assert_eq!(list.get(11).unwrap().text, "Prepare for a space travel 🚀");
}
