//! Card Components
//!
//! `Card` and `CardContent` render either as a plain block or as a motion
//! block, forward a `NodeRef` to the rendered element, and merge their base
//! classes with the caller's. Undeclared attributes given as `attr:*`
//! (the app sets `attr:id`) land on the rendered element.

use leptos::html::Div;
use leptos::prelude::*;

use crate::class_names::cn;
use crate::motion::{Motion, MotionPhase};

const CARD_CLASS: &str = "rounded-xl border bg-card text-card-foreground shadow";
const CARD_CONTENT_CLASS: &str = "p-6 pt-0";

/// What a card renders as
#[derive(Clone, Copy, Default)]
pub enum CardAs {
    /// Plain block container
    #[default]
    Block,
    /// Block whose inline style follows a motion descriptor
    Motion {
        motion: Signal<Motion>,
        phase: Signal<MotionPhase>,
    },
}

impl CardAs {
    /// Motion block that always shows its `animate` target
    pub fn animated(motion: Signal<Motion>) -> Self {
        CardAs::Motion {
            motion,
            phase: Signal::stored(MotionPhase::Animate),
        }
    }
}

fn render_card(
    base: &'static str,
    as_: CardAs,
    node_ref: NodeRef<Div>,
    class: MaybeProp<String>,
    children: Children,
) -> AnyView {
    let class = move || cn(&[base, &class.get().unwrap_or_default()]);
    match as_ {
        CardAs::Block => view! {
            <div node_ref=node_ref class=class>
                {children()}
            </div>
        }
        .into_any(),
        CardAs::Motion { motion, phase } => view! {
            <div
                node_ref=node_ref
                class=class
                style=move || motion.get().style(phase.get())
            >
                {children()}
            </div>
        }
        .into_any(),
    }
}

/// Bordered, rounded container
#[component]
pub fn Card(
    #[prop(optional)] as_: CardAs,
    #[prop(optional)] node_ref: NodeRef<Div>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    render_card(CARD_CLASS, as_, node_ref, class, children)
}

/// Padded body of a card
#[component]
pub fn CardContent(
    #[prop(optional)] as_: CardAs,
    #[prop(optional)] node_ref: NodeRef<Div>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    render_card(CARD_CONTENT_CLASS, as_, node_ref, class, children)
}
