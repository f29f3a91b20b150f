//! Track geometry and configuration of a drag toggle

use crate::error::{GuideError, Result};

/// Gap between the knob and the track edge
pub const KNOB_INSET: f32 = 3.0;

/// Caller-facing options of a toggle
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleConfig {
    pub width: f32,
    pub height: f32,
    pub disabled: bool,
    pub label: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            width: 152.0,
            height: 28.0,
            disabled: false,
            label: "browse to look".to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Knob travel derived from a track size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleGeometry {
    pub knob_diameter: f32,
    pub min_x: f32,
    pub max_x: f32,
}

impl ToggleGeometry {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let knob_diameter = height - 2.0 * KNOB_INSET;
        let min_x = KNOB_INSET;
        let max_x = width - knob_diameter - KNOB_INSET;

        let valid = width.is_finite() && height.is_finite() && knob_diameter > 0.0 && max_x >= min_x;
        if !valid {
            return Err(GuideError::InvalidToggleGeometry { width, height });
        }

        Ok(Self {
            knob_diameter,
            min_x,
            max_x,
        })
    }

    pub fn midpoint(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn rest_position(&self, value: bool) -> f32 {
        if value {
            self.max_x
        } else {
            self.min_x
        }
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min_x, self.max_x)
    }

    /// Strictly past the midpoint commits `true`
    pub fn commits_on(&self, end_position: f32) -> bool {
        end_position > self.midpoint()
    }

    /// Label opacity: 1 at `min_x` fading linearly to 0 at `max_x`
    pub fn label_opacity(&self, x: f32) -> f32 {
        let span = self.max_x - self.min_x;
        if span <= 0.0 {
            return if x <= self.min_x { 1.0 } else { 0.0 };
        }
        (1.0 - (x - self.min_x) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_travel_from_track_size() {
        let geometry = ToggleGeometry::new(128.0, 26.0).unwrap();
        assert_eq!(geometry.knob_diameter, 20.0);
        assert_eq!(geometry.min_x, 3.0);
        assert_eq!(geometry.max_x, 105.0);

        let geometry = ToggleGeometry::new(152.0, 28.0).unwrap();
        assert_eq!(geometry.max_x, 127.0);
    }

    #[test]
    fn midpoint_threshold_is_strict() {
        // 142 - 20 - 3 = 119
        let geometry = ToggleGeometry::new(142.0, 26.0).unwrap();
        assert_eq!((geometry.min_x, geometry.max_x), (3.0, 119.0));
        assert_eq!(geometry.midpoint(), 61.0);
        assert!(geometry.commits_on(62.0));
        assert!(!geometry.commits_on(61.0));
        assert!(!geometry.commits_on(10.0));
    }

    #[test]
    fn label_fades_across_travel() {
        let geometry = ToggleGeometry::new(142.0, 26.0).unwrap();
        assert_eq!(geometry.label_opacity(3.0), 1.0);
        assert_eq!(geometry.label_opacity(61.0), 0.5);
        assert_eq!(geometry.label_opacity(119.0), 0.0);
        assert_eq!(geometry.label_opacity(-50.0), 1.0);
        assert_eq!(geometry.label_opacity(500.0), 0.0);
    }

    #[test]
    fn rejects_tracks_without_room_for_the_knob() {
        assert!(ToggleGeometry::new(100.0, 6.0).is_err());
        assert!(ToggleGeometry::new(20.0, 28.0).is_err());
        assert!(ToggleGeometry::new(f32::NAN, 28.0).is_err());
    }
}
