//! Todo List Component
//!
//! Renders the rows on screen (including rows still fading out) and wires
//! drag-to-reorder through leptos-dragdrop.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TodoRow;
use crate::store::{store_move_item, use_app_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id, target_id| {
        store_move_item(&store, dragged_id, target_id);
    });

    let row_ids = move || {
        store
            .rendered()
            .read()
            .iter()
            .map(|row| row.key())
            .collect::<Vec<u32>>()
    };

    view! {
        <div
            class="flex flex-col gap-3 m-0 p-0 w-full"
            role="list"
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <For
                each=row_ids
                key=|id| *id
                children=move |id| view! { <TodoRow id=id dnd=dnd /> }
            />
        </div>
    }
}
