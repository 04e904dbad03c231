//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod animate_presence;
mod button;
mod card;
mod checkbox;
mod icons;
mod todo_list;
mod todo_row;
mod tooltip;

pub use action_bar::ActionBar;
pub use animate_presence::AnimatePresence;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardAs, CardContent};
pub use checkbox::Checkbox;
pub use icons::{CheckIcon, RepeatIcon, XIcon};
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use tooltip::Tooltip;
