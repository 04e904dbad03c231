//! Animate Presence Component
//!
//! Mounts its children while `show` is true and keeps them mounted for the
//! exit animation after `show` turns false.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::layout::next_frame;
use crate::motion::{Motion, MotionPhase};

#[component]
pub fn AnimatePresence(
    #[prop(into)] show: Signal<bool>,
    motion: Motion,
    /// Play the enter animation for children shown on first render
    #[prop(optional)]
    initial: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    // None while unmounted
    let phase = RwSignal::new(None::<MotionPhase>);
    let exit_timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |first_run: Option<()>| {
        let visible = show.get();
        let current = phase.get_untracked();
        if visible {
            exit_timer.set_value(None);
            match current {
                None if first_run.is_none() && !initial => phase.set(Some(MotionPhase::Animate)),
                None => {
                    phase.set(Some(MotionPhase::Initial));
                    next_frame(move || {
                        if phase.get_untracked() == Some(MotionPhase::Initial) {
                            phase.set(Some(MotionPhase::Animate));
                        }
                    });
                }
                Some(MotionPhase::Exit) => phase.set(Some(MotionPhase::Animate)),
                Some(_) => {}
            }
        } else if current.is_some() {
            phase.set(Some(MotionPhase::Exit));
            let timer = Timeout::new(motion.exit_ms(), move || {
                if phase.get_untracked() == Some(MotionPhase::Exit) {
                    phase.set(None);
                }
            });
            exit_timer.set_value(Some(timer));
        }
    });

    view! {
        <Show when=move || phase.get().is_some()>
            <div
                class=move || class.get().unwrap_or_default()
                style=move || motion.style(phase.get().unwrap_or(MotionPhase::Exit))
            >
                {children()}
            </div>
        </Show>
    }
}
