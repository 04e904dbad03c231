//! Action Bar Component
//!
//! Add and reset controls above the list.

use leptos::prelude::*;

use crate::components::{Button, RepeatIcon, Tooltip};
use crate::store::{store_add_item, store_reset, use_app_store, TodoStateStoreFields};

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_app_store();
    let at_capacity = Signal::derive(move || !store.list().read().can_add());

    view! {
        <div class="flex gap-4">
            <Button
                disabled=at_capacity
                on_click=move |_: web_sys::MouseEvent| {
                    store_add_item(&store);
                }
            >
                "Add item"
            </Button>
            <Tooltip content="Reset task list">
                <Button
                    aria_label="Reset task list"
                    on_click=move |_: web_sys::MouseEvent| store_reset(&store)
                >
                    <RepeatIcon class="h-4 w-4" />
                </Button>
            </Tooltip>
        </div>
    }
}
