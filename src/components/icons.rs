//! Icons
//!
//! Inline SVG glyphs, stroke-based, 24x24 view box.

use leptos::prelude::*;

#[component]
pub fn RepeatIcon(#[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=move || class.get().unwrap_or_else(|| "h-4 w-4".to_string())
            aria-hidden="true"
        >
            <path d="m17 2 4 4-4 4" />
            <path d="M3 11v-1a4 4 0 0 1 4-4h14" />
            <path d="m7 22-4-4 4-4" />
            <path d="M21 13v1a4 4 0 0 1-4 4H3" />
        </svg>
    }
}

#[component]
pub fn XIcon(#[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=move || class.get().unwrap_or_else(|| "h-4 w-4".to_string())
            aria-hidden="true"
        >
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}

#[component]
pub fn CheckIcon(#[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="3"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=move || class.get().unwrap_or_else(|| "h-4 w-4".to_string())
            aria-hidden="true"
        >
            <path d="M20 6 9 17l-5-5" />
        </svg>
    }
}
