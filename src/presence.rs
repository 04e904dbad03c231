//! Presence Tracking
//!
//! Keeps rows on screen while they animate out. The state list drops an
//! item immediately; the rendered list keeps it as `Exiting` until the exit
//! animation has finished and `finish_exit` is called.

use std::collections::HashSet;

use todo_state::Entity;

/// Lifecycle of a rendered row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, enter animation not started yet
    Entering,
    Present,
    /// Gone from state, playing its exit animation
    Exiting,
}

/// A row in the rendered list
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered<T> {
    pub value: T,
    pub phase: Phase,
}

impl<T: Entity> Rendered<T> {
    pub fn key(&self) -> T::Id {
        self.value.id()
    }
}

/// Rows for a first render: present without an enter animation when
/// `animate_initial` is false
pub fn initial<T: Entity>(items: &[T], animate_initial: bool) -> Vec<Rendered<T>> {
    let phase = if animate_initial { Phase::Entering } else { Phase::Present };
    items
        .iter()
        .map(|value| Rendered { value: value.clone(), phase })
        .collect()
}

/// Merge the next state snapshot into the rendered rows.
///
/// Rows follow `next` order. New ids enter, known ids keep their phase
/// (an exiting row that comes back is present again), and rows missing
/// from `next` start exiting in place, right after the nearest earlier
/// row that is still rendered.
pub fn reconcile<T: Entity>(rendered: &[Rendered<T>], next: &[T]) -> Vec<Rendered<T>> {
    let next_ids: HashSet<T::Id> = next.iter().map(Entity::id).collect();

    let mut result: Vec<Rendered<T>> = next
        .iter()
        .map(|value| {
            let phase = match rendered.iter().find(|row| row.key() == value.id()) {
                Some(row) if row.phase == Phase::Exiting => Phase::Present,
                Some(row) => row.phase,
                None => Phase::Entering,
            };
            Rendered { value: value.clone(), phase }
        })
        .collect();

    let mut previous_key: Option<T::Id> = None;
    for row in rendered {
        let key = row.key();
        if !next_ids.contains(&key) {
            let index = previous_key
                .and_then(|prev| result.iter().position(|r| r.key() == prev))
                .map_or(0, |pos| pos + 1);
            result.insert(
                index,
                Rendered {
                    value: row.value.clone(),
                    phase: Phase::Exiting,
                },
            );
        }
        previous_key = Some(key);
    }

    result
}

/// Promote an entering row once its enter animation has started
pub fn settle<T: Entity>(rendered: &mut [Rendered<T>], key: T::Id) -> bool {
    match rendered
        .iter_mut()
        .find(|row| row.key() == key && row.phase == Phase::Entering)
    {
        Some(row) => {
            row.phase = Phase::Present;
            true
        }
        None => false,
    }
}

/// Drop a row whose exit animation ended. A row that re-entered in the
/// meantime is kept.
pub fn finish_exit<T: Entity>(rendered: &mut Vec<Rendered<T>>, key: T::Id) -> bool {
    let before = rendered.len();
    rendered.retain(|row| !(row.key() == key && row.phase == Phase::Exiting));
    rendered.len() != before
}
