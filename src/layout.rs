//! Layout Hooks
//!
//! Measurement-driven animation helpers: content height via
//! `ResizeObserver`, and FLIP repositioning for rows that move.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::motion::{Easing, Motion, MotionPhase, MotionTarget, Transition};

/// Below this many pixels a move is not worth animating
const MIN_LAYOUT_DELTA_PX: f64 = 0.5;

/// Run `f` two frames from now, once the current styles have been painted
pub fn next_frame(f: impl FnOnce() + 'static) {
    request_animation_frame(move || request_animation_frame(f));
}

/// Track the rendered height of an element
pub fn use_element_height(node_ref: NodeRef<Div>) -> ReadSignal<f64> {
    let (height, set_height) = signal(0.0f64);
    let observer = StoredValue::new_local(None::<web_sys::ResizeObserver>);

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else { return };
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::ResizeObserverEntry = entry.unchecked_into();
                    set_height.set(entry.target().get_bounding_client_rect().height());
                }
            },
        );
        match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(resize_observer) => {
                resize_observer.observe(&el);
                observer.set_value(Some(resize_observer));
            }
            Err(e) => tracing::warn!("ResizeObserver unavailable: {:?}", e),
        }
        callback.forget();
    });

    on_cleanup(move || {
        observer.try_with_value(|resize_observer| {
            if let Some(resize_observer) = resize_observer {
                resize_observer.disconnect();
            }
        });
    });

    height
}

/// FLIP layout animation.
///
/// Each time `trigger` changes the element's layout position is measured;
/// if it moved, the element is translated back to where it was and then
/// released to slide into place. `release_offset` adds the visual offset an
/// element had when a drag let go of it. Returns the inline style to apply.
pub fn use_layout_animation<F>(
    node_ref: NodeRef<Div>,
    trigger: Signal<usize>,
    duration_ms: u32,
    release_offset: F,
) -> Signal<String>
where
    F: Fn() -> Option<i32> + Copy + 'static,
{
    let (offset, set_offset) = signal(0.0f64);
    let (playing, set_playing) = signal(false);
    let last_top = StoredValue::new(None::<f64>);

    Effect::new(move |_| {
        trigger.track();
        let Some(el) = node_ref.get() else { return };
        request_animation_frame(move || {
            let top = f64::from(el.offset_top());
            let released = release_offset().map(f64::from).unwrap_or(0.0);
            if let Some(previous) = last_top.get_value() {
                let delta = previous - top + released;
                if delta.abs() > MIN_LAYOUT_DELTA_PX {
                    set_playing.set(false);
                    set_offset.set(delta);
                    request_animation_frame(move || {
                        set_playing.set(true);
                        set_offset.set(0.0);
                    });
                }
            }
            last_top.set_value(Some(top));
        });
    });

    Signal::derive(move || {
        let offset = offset.get();
        let playing = playing.get();
        if offset == 0.0 && !playing {
            return String::new();
        }
        let phase = if playing { MotionPhase::Animate } else { MotionPhase::Initial };
        Motion::new(MotionTarget::new().translate_y_px(offset))
            .transition(Transition::new(duration_ms).easing(Easing::EaseOut))
            .style(phase)
    })
}
