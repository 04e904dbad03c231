//! Checkbox Component
//!
//! A button with checkbox semantics, so it can be styled freely.

use leptos::prelude::*;

use crate::components::CheckIcon;

#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    #[prop(into)] checked: Signal<bool>,
    aria_label: &'static str,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="checkbox"
            id=id
            aria-label=aria_label
            aria-checked=move || if checked.get() { "true" } else { "false" }
            class=move || {
                if checked.get() {
                    "peer h-4 w-4 shrink-0 rounded-sm border border-primary shadow bg-primary text-primary-foreground flex items-center justify-center"
                } else {
                    "peer h-4 w-4 shrink-0 rounded-sm border border-primary shadow flex items-center justify-center"
                }
            }
            on:click=move |_| on_click.run(())
        >
            <Show when=move || checked.get()>
                <CheckIcon class="h-3 w-3" />
            </Show>
        </button>
    }
}
