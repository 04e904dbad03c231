//! Widget Configuration
//!
//! Everything has a default matching the stock widget. A host page may
//! override any of it with a JSON block:
//!
//! ```html
//! <script type="application/json" id="motion-todo-config">
//!   { "list": { "max_items": 4 }, "motion": { "exit_ms": 150 } }
//! </script>
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_state::{ListConfig, ListError};

use crate::motion::{Motion, MotionTarget, Transition};

/// Element id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "motion-todo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid list configuration: {0}")]
    List(#[from] ListError),
}

/// Animation timings, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Container height tween
    pub height_ms: u32,
    /// Delay before a new row or a dismiss button fades in
    pub enter_delay_ms: u32,
    /// Fade-out of removed rows and hidden dismiss buttons
    pub exit_ms: u32,
    /// Row width change when checked
    pub width_ms: u32,
    /// Rows sliding to a new position
    pub layout_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            height_ms: 300,
            enter_delay_ms: 200,
            exit_ms: 200,
            width_ms: 300,
            layout_ms: 250,
        }
    }
}

impl MotionConfig {
    /// Fade used by list rows and the dismiss button
    pub fn fade(&self) -> Motion {
        Motion::fade(
            Transition::default().delay(self.enter_delay_ms),
            Transition::new(self.exit_ms),
        )
    }

    /// Height tween of the card content
    pub fn height(&self, height_px: f64) -> Motion {
        Motion::new(MotionTarget::new().height_px(height_px)).transition(Transition::new(self.height_ms))
    }

    /// Width of a row card, narrower when checked
    pub fn row_width(&self, checked: bool) -> Motion {
        let width = if checked { 70.0 } else { 100.0 };
        Motion::new(MotionTarget::new().width_pct(width)).transition(Transition::new(self.width_ms))
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub list: ListConfig,
    pub motion: MotionConfig,
    /// Extra classes for the outer card
    pub card_class: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            motion: MotionConfig::default(),
            card_class: "w-[640px] mx-auto mt-[10rem]".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.list.validate()?;
        Ok(config)
    }

    /// Read the host page's configuration block, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = read_config_element() else {
            tracing::debug!("no configuration block, using defaults");
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => {
                tracing::info!(max_items = config.list.max_items, "configuration loaded");
                config
            }
            Err(e) => {
                tracing::error!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
