//! Item Entity
//!
//! A single to-do row and the seed data the list starts from.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Text given to items created by the add action
pub const DEFAULT_PLACEHOLDER: &str = "Prepare for a space travel 🚀";

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, stable across reorders
    pub id: u32,
    /// Display label
    pub text: String,
    /// Completion flag
    pub checked: bool,
}

impl Item {
    /// Create an unchecked item
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
        }
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Seed entry; seeds always start unchecked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: u32,
    pub text: String,
}

impl SeedItem {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn to_item(&self) -> Item {
        Item::new(self.id, self.text.clone())
    }
}

/// The six items the widget ships with
pub fn default_seed() -> Vec<SeedItem> {
    vec![
        SeedItem::new(1, "Finish blog post ✍️"),
        SeedItem::new(2, "Build new Three.js experiences ✨"),
        SeedItem::new(3, "Add new components to Design System 🌈"),
        SeedItem::new(4, "Make some coffee ☕️"),
        SeedItem::new(5, "Drink water 💧"),
        SeedItem::new(6, "Go to the gym 🏃‍♂️"),
    ]
}
