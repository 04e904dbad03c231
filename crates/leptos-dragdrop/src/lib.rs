//! Leptos DragDrop Utilities
//!
//! Vertical drag-to-reorder for Leptos lists using mouse events.
//! Uses a movement threshold to distinguish click from drag; while a drag
//! is active the dragged row follows the pointer on the y axis.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Row the pointer is currently over while dragging
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Vertical pointer offset of the dragged row from where it started
    pub offset_y_read: ReadSignal<i32>,
    pub offset_y_write: WriteSignal<i32>,
    /// Row and offset of the last completed drop, for layout animation
    pub released_read: ReadSignal<Option<(u32, i32)>>,
    pub released_write: WriteSignal<Option<(u32, i32)>>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (offset_y_read, offset_y_write) = signal(0i32);
    let (released_read, released_write) = signal(None::<(u32, i32)>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        offset_y_read,
        offset_y_write,
        released_read,
        released_write,
    }
}

impl DndSignals {
    /// Whether `id` is the row being dragged (tracked)
    pub fn is_dragging(&self, id: u32) -> bool {
        self.dragging_id_read.get() == Some(id)
    }

    /// Whether `id` is the row under the pointer during a drag (tracked)
    pub fn is_over(&self, id: u32) -> bool {
        self.over_id_read.get() == Some(id)
    }

    /// Take the last drop if it was for `id`
    pub fn take_released(&self, id: u32) -> Option<i32> {
        match self.released_read.get_untracked() {
            Some((released_id, offset)) if released_id == id => {
                self.released_write.set(None);
                Some(offset)
            }
            _ => None,
        }
    }
}

/// Return `items` with the element at `from` moved to index `to`.
/// Out-of-range indices leave the order unchanged.
pub fn move_to<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() || from == to {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.offset_y_write.set(0);
}

/// Finish the gesture on mouseup. Returns `(dragged, target)` for a real
/// drag released over another row; only then is the release offset kept
/// for the dropped row's layout animation.
pub fn release(dnd: &DndSignals) -> Option<(u32, u32)> {
    let dragging_id = dnd.dragging_id_read.get_untracked();
    let over_id = dnd.over_id_read.get_untracked();
    let offset = dnd.offset_y_read.get_untracked();
    end_drag(dnd);

    let dropped = dragging_id.zip(over_id);
    dnd.released_write.set(dropped.map(|(dragged, _)| (dragged, offset)));
    dropped
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                    if el.closest("button").ok().flatten().is_some() { return; }
                }
            }
            dnd.pending_id_write.set(Some(row_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on the document - starts drag if moved enough, then tracks offset
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_none() {
            return;
        }
        let start_y = dnd.start_y_read.get_untracked();

        if dnd.dragging_id_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                tracing::debug!(id = ?pending, "drag started");
                dnd.dragging_id_write.set(pending);
            }
        }

        if dnd.dragging_id_read.get_untracked().is_some() {
            ev.prevent_default();
            dnd.offset_y_write.set(ev.client_y() - start_y);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter(dnd: DndSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != row_id {
                dnd.over_id_write.set(Some(row_id));
            }
        }
    }
}

/// Create mouseleave handler for the list container.
/// Rows keep the last hovered target so a drop in the gap between rows still lands.
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
/// `on_drop(dragged, target)` fires only for a real drag released over another row.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if let Some((dragged, target)) = release(&dnd) {
            tracing::debug!(dragged, target, "drag dropped");
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down() {
        assert_eq!(move_to(&[1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_move_up() {
        assert_eq!(move_to(&[1, 2, 3, 4], 3, 1), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_release_over_target_keeps_offset() {
        Owner::new().with(|| {
            let dnd = create_dnd_signals();
            dnd.pending_id_write.set(Some(1));
            dnd.dragging_id_write.set(Some(1));
            dnd.over_id_write.set(Some(3));
            dnd.offset_y_write.set(42);

            assert_eq!(release(&dnd), Some((1, 3)));
            assert_eq!(dnd.released_read.get_untracked(), Some((1, 42)));
            assert_eq!(dnd.take_released(1), Some(42));
            assert_eq!(dnd.take_released(1), None);
            assert_eq!(dnd.dragging_id_read.get_untracked(), None);
            assert_eq!(dnd.pending_id_read.get_untracked(), None);
            assert_eq!(dnd.offset_y_read.get_untracked(), 0);
        });
    }

    #[test]
    fn test_release_without_target_leaves_no_offset() {
        Owner::new().with(|| {
            let dnd = create_dnd_signals();
            dnd.dragging_id_write.set(Some(2));
            dnd.offset_y_write.set(-17);

            assert_eq!(release(&dnd), None);
            assert_eq!(dnd.released_read.get_untracked(), None);
            assert_eq!(dnd.take_released(2), None);
        });
    }

    #[test]
    fn test_click_is_not_a_drop() {
        Owner::new().with(|| {
            let dnd = create_dnd_signals();
            dnd.pending_id_write.set(Some(4));

            assert_eq!(release(&dnd), None);
            assert_eq!(dnd.pending_id_read.get_untracked(), None);
        });
    }

    #[test]
    fn test_move_out_of_range_is_identity() {
        assert_eq!(move_to(&[1, 2, 3], 5, 0), vec![1, 2, 3]);
        assert_eq!(move_to(&[1, 2, 3], 0, 3), vec![1, 2, 3]);
    }
}
