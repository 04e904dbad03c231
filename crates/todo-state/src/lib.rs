//! To-Do State Container
//!
//! Layered like a domain crate:
//! - entity: identity contract shared with the presentation layer
//! - item: the to-do item and the seed data
//! - list: the ordered list and its operations
//! - error: list and configuration errors
//!
//! Nothing here performs I/O; every operation is a synchronous mutation
//! of an in-memory list.

mod entity;
mod error;
mod item;
mod list;

pub use entity::Entity;
pub use error::{ListError, ListResult};
pub use item::{default_seed, Item, SeedItem, DEFAULT_PLACEHOLDER};
pub use list::{ItemList, ListConfig, DEFAULT_MAX_ITEMS};
