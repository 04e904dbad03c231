//! Tooltip Component
//!
//! Shows a small label above its trigger on hover or keyboard focus.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::motion::MotionPhase;

#[component]
pub fn Tooltip(#[prop(into)] content: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let fade = ctx.motion.fade();

    view! {
        <div
            class="relative inline-flex"
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
            on:focusin=move |_| set_open.set(true)
            on:focusout=move |_| set_open.set(false)
        >
            {children()}
            <div
                role="tooltip"
                class="pointer-events-none absolute bottom-full left-1/2 mb-2 -translate-x-1/2 whitespace-nowrap rounded-md bg-primary px-3 py-1.5 text-xs text-primary-foreground"
                style=move || fade.style(if open.get() { MotionPhase::Animate } else { MotionPhase::Exit })
            >
                <p>{content}</p>
            </div>
        </div>
    }
}
