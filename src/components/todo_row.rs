//! Todo Row Component
//!
//! One list row: layout wrapper (drag + FLIP), presence fade, the card with
//! checkbox and text, and the dismiss button shown for checked items.

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::class_names::cn;
use crate::components::{
    AnimatePresence, Button, ButtonSize, ButtonVariant, Card, CardAs, CardContent, Checkbox, XIcon,
};
use crate::context::use_app_context;
use crate::layout::{next_frame, use_layout_animation};
use crate::motion::MotionPhase;
use crate::presence::Phase;
use crate::store::{
    store_finish_exit, store_remove_item, store_settle_row, store_toggle_item, use_app_store,
    TodoStateStoreFields,
};

#[component]
pub fn TodoRow(id: u32, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let motion = ctx.motion;

    let row = Memo::new(move |_| {
        store
            .rendered()
            .read()
            .iter()
            .find(|row| row.key() == id)
            .cloned()
    });
    let index = Memo::new(move |_| {
        store
            .rendered()
            .read()
            .iter()
            .position(|row| row.key() == id)
            .unwrap_or_default()
    });
    let phase = Memo::new(move |_| row.get().map(|row| row.phase).unwrap_or(Phase::Exiting));
    let checked = Memo::new(move |_| row.get().is_some_and(|row| row.value.checked));
    let text = move || row.get().map(|row| row.value.text).unwrap_or_default();

    // Phase transitions: start the enter fade next frame, drop after the exit fade
    let exit_timer = StoredValue::new_local(None::<Timeout>);
    let fade = motion.fade();
    Effect::new(move |_| match phase.get() {
        Phase::Entering => next_frame(move || store_settle_row(&store, id)),
        Phase::Exiting => {
            let timer = Timeout::new(fade.exit_ms(), move || store_finish_exit(&store, id));
            exit_timer.set_value(Some(timer));
        }
        Phase::Present => exit_timer.set_value(None),
    });

    // Layout wrapper: follows the pointer while dragged, slides when moved
    let node_ref = NodeRef::<Div>::new();
    let layout_style = use_layout_animation(
        node_ref,
        Signal::derive(move || index.get()),
        motion.layout_ms,
        move || dnd.take_released(id),
    );
    let wrapper_style = move || {
        if dnd.is_dragging(id) {
            format!(
                "transform: translateY({}px); transition: none; z-index: 10; pointer-events: none;",
                dnd.offset_y_read.get()
            )
        } else {
            layout_style.get()
        }
    };
    let wrapper_class = move || {
        cn(&[
            "relative w-full",
            if dnd.is_dragging(id) { "row-dragging" } else { "" },
            if dnd.is_over(id) { "row-drop-target" } else { "" },
        ])
    };

    let presence_style = move || {
        let phase = match phase.get() {
            Phase::Entering => MotionPhase::Initial,
            Phase::Present => MotionPhase::Animate,
            Phase::Exiting => MotionPhase::Exit,
        };
        fade.style(phase)
    };

    let width_motion = Signal::derive(move || motion.row_width(checked.get()));

    view! {
        <div
            node_ref=node_ref
            class=wrapper_class
            style=wrapper_style
            role="listitem"
            on:mousedown=make_on_mousedown(dnd, id)
            on:mouseenter=make_on_row_mouseenter(dnd, id)
        >
            <div class="flex items-center justify-between gap-6" style=presence_style>
                <Card
                    as_=CardAs::animated(width_motion)
                    class="relative h-full grow list-none cursor-grab rounded-[12px]"
                >
                    <CardContent class="flex items-center gap-4 p-4">
                        <Checkbox
                            id=format!("checkbox-{}", id)
                            checked=Signal::derive(move || checked.get())
                            aria_label="Mark as done"
                            on_click=move |_: ()| store_toggle_item(&store, id)
                        />
                        <p class="mb-[2px] select-none">{text}</p>
                    </CardContent>
                </Card>
                <AnimatePresence show=Signal::derive(move || checked.get()) motion=fade>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Icon
                        aria_label="Remove item"
                        on_click=move |_: web_sys::MouseEvent| store_remove_item(&store, id)
                    >
                        <XIcon />
                    </Button>
                </AnimatePresence>
            </div>
        </div>
    }
}
