//! The swipe switch: a drag gesture resolved into an on/off value

use std::{fmt, time::Duration};
use tracing::debug;

use super::geometry::{ToggleConfig, ToggleGeometry};
use crate::{
    error::Result,
    state::{KnobMotion, ToggleState},
};

type ChangeCallback = Box<dyn FnMut(bool) + Send>;

/// One swipe switch widget.
///
/// The knob position is only written by the gesture entry points, by
/// `set_value`, and by `advance` while a settle animation runs.
pub struct DragToggle {
    config: ToggleConfig,
    geometry: ToggleGeometry,
    state: ToggleState,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for DragToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragToggle")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl DragToggle {
    /// Create a toggle resting at the position of `value`
    pub fn new(config: ToggleConfig, value: bool) -> Result<Self> {
        let geometry = ToggleGeometry::new(config.width, config.height)?;
        Ok(Self {
            state: ToggleState::resting(value, geometry.rest_position(value)),
            config,
            geometry,
            on_change: None,
        })
    }

    /// Register the callback invoked on every commit
    pub fn with_on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> bool {
        self.state.logical_value
    }

    pub fn knob_position(&self) -> f32 {
        self.state.knob_position
    }

    pub fn geometry(&self) -> &ToggleGeometry {
        &self.geometry
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn label_opacity(&self) -> f32 {
        self.geometry.label_opacity(self.state.knob_position)
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// No drag in progress and no animation running
    pub fn is_at_rest(&self) -> bool {
        self.state.is_resting()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Disabling mid-drag drops the gesture and returns the knob to rest
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled && self.state.is_dragging() {
            self.settle();
        }
    }

    pub fn on_gesture_start(&mut self) {
        if self.config.disabled {
            return;
        }
        let base = self.geometry.rest_position(self.state.logical_value);
        self.state.grab(base);
    }

    /// Track the pointer; nothing is committed until the gesture ends.
    ///
    /// A move without a preceding start begins the drag itself.
    pub fn on_gesture_move(&mut self, dx: f32) {
        if self.config.disabled {
            return;
        }
        let base = self.drag_base();
        if !self.state.is_dragging() {
            self.state.grab(base);
        }
        self.state.knob_position = self.geometry.clamp(base + dx);
    }

    /// Commit the value implied by the release position.
    ///
    /// Returns the committed value, or `None` when the toggle is disabled.
    pub fn on_gesture_end(&mut self, dx: f32) -> Option<bool> {
        if self.config.disabled {
            return None;
        }
        let end_position = self.drag_base() + dx;
        let value = self.geometry.commits_on(end_position);
        debug!("Toggle released at {:.1}, committing {}", end_position, value);
        Some(self.commit(value))
    }

    /// Interrupted gesture: back to rest without a commit
    pub fn on_gesture_cancel(&mut self) {
        if self.config.disabled || !self.state.is_dragging() {
            return;
        }
        self.settle();
    }

    /// Flip the value without a drag
    pub fn on_tap(&mut self) -> Option<bool> {
        if self.config.disabled || self.state.is_dragging() {
            return None;
        }
        Some(self.commit(!self.state.logical_value))
    }

    /// Owner-driven value change; animates but does not invoke the callback
    pub fn set_value(&mut self, value: bool) {
        self.state.logical_value = value;
        if !self.state.is_dragging() {
            self.settle();
        }
    }

    /// Step the settle animation
    pub fn advance(&mut self, dt: Duration) {
        self.state.advance(dt);
    }

    /// Skip to the end of the settle animation
    pub fn finish_animation(&mut self) {
        self.state.finish();
    }

    fn drag_base(&self) -> f32 {
        match self.state.motion {
            KnobMotion::Dragging { base } => base,
            _ => self.geometry.rest_position(self.state.logical_value),
        }
    }

    fn commit(&mut self, value: bool) -> bool {
        self.state.logical_value = value;
        self.settle();
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        value
    }

    fn settle(&mut self) {
        let target = self.geometry.rest_position(self.state.logical_value);
        self.state.settle_to(target);
    }
}
