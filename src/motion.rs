//! Declarative Motion
//!
//! Animation descriptors in the style of `initial` / `animate` / `exit`
//! targets plus a transition spec. They render to inline CSS; the browser
//! does the interpolation, so nothing here ticks per frame.

use std::fmt::Write as _;

/// Easing curve of a transition
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// CSS `ease`
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!("cubic-bezier({}, {}, {}, {})", a, b, c, d),
        }
    }
}

/// Timing of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            delay_ms: 0,
            easing: Easing::default(),
        }
    }
}

impl Transition {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total time until the transition settles
    pub fn total_ms(&self) -> u32 {
        self.duration_ms + self.delay_ms
    }

    /// CSS `transition` value covering `properties`
    pub fn css(&self, properties: &[&str]) -> String {
        let easing = self.easing.css();
        properties
            .iter()
            .map(|property| format!("{} {}ms {} {}ms", property, self.duration_ms, easing, self.delay_ms))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Visual target of an animation; unset fields are left to the stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MotionTarget {
    pub opacity: Option<f64>,
    pub height_px: Option<f64>,
    pub width_pct: Option<f64>,
    pub translate_y_px: Option<f64>,
}

impl MotionTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn height_px(mut self, height: f64) -> Self {
        self.height_px = Some(height);
        self
    }

    pub fn width_pct(mut self, width: f64) -> Self {
        self.width_pct = Some(width);
        self
    }

    pub fn translate_y_px(mut self, offset: f64) -> Self {
        self.translate_y_px = Some(offset);
        self
    }

    /// `other` wins wherever it sets a value
    pub fn merge(&self, other: &MotionTarget) -> MotionTarget {
        MotionTarget {
            opacity: other.opacity.or(self.opacity),
            height_px: other.height_px.or(self.height_px),
            width_pct: other.width_pct.or(self.width_pct),
            translate_y_px: other.translate_y_px.or(self.translate_y_px),
        }
    }

    /// CSS property names this target sets
    pub fn properties(&self) -> Vec<&'static str> {
        let mut properties = Vec::new();
        if self.opacity.is_some() {
            properties.push("opacity");
        }
        if self.height_px.is_some() {
            properties.push("height");
        }
        if self.width_pct.is_some() {
            properties.push("width");
        }
        if self.translate_y_px.is_some() {
            properties.push("transform");
        }
        properties
    }

    /// Inline declarations, e.g. `opacity: 0; height: 120px;`
    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            let _ = write!(css, "opacity: {}; ", opacity);
        }
        if let Some(height) = self.height_px {
            let _ = write!(css, "height: {}px; ", height);
        }
        if let Some(width) = self.width_pct {
            let _ = write!(css, "width: {}%; ", width);
        }
        if let Some(offset) = self.translate_y_px {
            let _ = write!(css, "transform: translateY({}px); ", offset);
        }
        css.trim_end().to_string()
    }
}

/// Which target a motion element currently shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    /// First frame after mount, before the enter transition starts
    Initial,
    Animate,
    Exit,
}

/// Declarative description of how an element enters, settles and leaves
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Motion {
    pub initial: Option<MotionTarget>,
    pub animate: MotionTarget,
    pub exit: Option<MotionTarget>,
    pub transition: Transition,
    pub exit_transition: Option<Transition>,
}

impl Motion {
    pub fn new(animate: MotionTarget) -> Self {
        Self {
            animate,
            ..Self::default()
        }
    }

    pub fn initial(mut self, initial: MotionTarget) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn exit(mut self, exit: MotionTarget) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn exit_transition(mut self, transition: Transition) -> Self {
        self.exit_transition = Some(transition);
        self
    }

    /// Fade in from transparent, fade out to transparent
    pub fn fade(enter: Transition, exit: Transition) -> Self {
        Motion::new(MotionTarget::new().opacity(1.0))
            .initial(MotionTarget::new().opacity(0.0))
            .exit(MotionTarget::new().opacity(0.0))
            .transition(enter)
            .exit_transition(exit)
    }

    /// How long the exit takes before the element may be dropped
    pub fn exit_ms(&self) -> u32 {
        self.exit_transition.unwrap_or(self.transition).total_ms()
    }

    /// Inline style for `phase`
    pub fn style(&self, phase: MotionPhase) -> String {
        match phase {
            MotionPhase::Initial => {
                let target = match self.initial {
                    Some(initial) => self.animate.merge(&initial),
                    None => self.animate,
                };
                format!("{} transition: none;", target.css()).trim_start().to_string()
            }
            MotionPhase::Animate => Self::with_transition(&self.animate, &self.transition),
            MotionPhase::Exit => {
                let target = match self.exit {
                    Some(exit) => self.animate.merge(&exit),
                    None => self.animate,
                };
                let transition = self.exit_transition.unwrap_or(self.transition);
                Self::with_transition(&target, &transition)
            }
        }
    }

    fn with_transition(target: &MotionTarget, transition: &Transition) -> String {
        let properties = target.properties();
        if properties.is_empty() {
            return String::new();
        }
        format!("{} transition: {};", target.css(), transition.css(&properties))
    }
}
