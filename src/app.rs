//! Motion To-Do App
//!
//! A single card: action row, the animated list and a footer line. The card
//! body tweens its height to whatever the content measures.

use leptos::html::Div;
use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::LoggerHandle;
use todo_state::ItemList;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::components::{ActionBar, Card, CardAs, CardContent, TodoList};
use crate::config::WidgetConfig;
use crate::context::{recent_logs, AppContext};
use crate::layout::{use_element_height, use_layout_animation};
use crate::store::{TodoState, TodoStateStoreFields};

/// Element id of the outer card
pub const WIDGET_ID: &str = "motion-todo";

/// Name of the `window` function returning the buffered log lines
const LOG_HOOK_NAME: &str = "motionTodoLogs";

fn install_log_hook() {
    let Some(owner) = Owner::current() else { return };
    let hook = Closure::<dyn Fn() -> js_sys::Array>::new(move || {
        owner
            .with(recent_logs)
            .iter()
            .map(|line| JsValue::from_str(line))
            .collect()
    });
    if let Some(window) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(LOG_HOOK_NAME), hook.as_ref()) {
            tracing::warn!("log hook not installed: {:?}", e);
        }
    }
    hook.forget();
}

#[component]
pub fn App(config: WidgetConfig, #[prop(default = None)] logger: Option<LoggerHandle>) -> impl IntoView {
    let list = ItemList::new(config.list.clone()).unwrap_or_else(|e| {
        tracing::error!("invalid list configuration: {}; using defaults", e);
        ItemList::default()
    });
    tracing::info!(items = list.len(), max = list.max_items(), "widget starting");

    // State
    let store = Store::new(TodoState::new(list));
    let motion = config.motion;

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(motion));
    if let Some(logger) = logger {
        provide_context(logger);
        install_log_hook();
    }

    // Card height follows the measured content
    let content_ref = NodeRef::<Div>::new();
    let content_height = use_element_height(content_ref);
    let height_motion = Signal::derive(move || motion.height(content_height.get()));

    // Footer slides when the number of rows changes
    let footer_ref = NodeRef::<Div>::new();
    let row_count = Signal::derive(move || store.rendered().read().len());
    let footer_style = use_layout_animation(footer_ref, row_count, motion.height_ms, || None);

    view! {
        <Card class=config.card_class attr:id=WIDGET_ID>
            <CardContent as_=CardAs::animated(height_motion)>
                <CardContent node_ref=content_ref class="flex flex-col gap-4 items-start px-0 py-6">
                    <ActionBar />
                    <TodoList />
                    <div node_ref=footer_ref style=footer_style>
                        <p>"Check items off the list when you're done!"</p>
                    </div>
                </CardContent>
            </CardContent>
        </Card>
    }
}
