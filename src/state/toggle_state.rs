//! Knob state of a drag toggle

use std::time::Duration;

/// Time a released knob takes to reach its resting position
pub const SETTLE_DURATION: Duration = Duration::from_millis(220);

/// What currently owns the knob position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobMotion {
    Resting,
    /// A gesture owns the knob; `base` is the rest position at gesture start
    Dragging { base: f32 },
    /// Easing from `from` to `to`
    Settling { from: f32, to: f32, elapsed: Duration },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleState {
    pub logical_value: bool,
    pub knob_position: f32,
    pub motion: KnobMotion,
}

impl ToggleState {
    pub fn resting(logical_value: bool, knob_position: f32) -> Self {
        Self {
            logical_value,
            knob_position,
            motion: KnobMotion::Resting,
        }
    }

    /// Start easing from the current position to `target`
    pub fn settle_to(&mut self, target: f32) {
        self.motion = if self.knob_position == target {
            KnobMotion::Resting
        } else {
            KnobMotion::Settling {
                from: self.knob_position,
                to: target,
                elapsed: Duration::ZERO,
            }
        };
    }

    /// Freeze the knob where it is and hand it to a gesture
    pub fn grab(&mut self, base: f32) {
        self.motion = KnobMotion::Dragging { base };
    }

    /// Step a running settle animation by `dt`
    pub fn advance(&mut self, dt: Duration) {
        let KnobMotion::Settling { from, to, elapsed } = self.motion else {
            return;
        };

        let elapsed = elapsed + dt;
        if elapsed >= SETTLE_DURATION {
            self.knob_position = to;
            self.motion = KnobMotion::Resting;
            return;
        }

        let t = elapsed.as_secs_f32() / SETTLE_DURATION.as_secs_f32();
        self.knob_position = from + (to - from) * ease_out(t);
        self.motion = KnobMotion::Settling { from, to, elapsed };
    }

    /// Jump to the end of any settle animation
    pub fn finish(&mut self) {
        if let KnobMotion::Settling { to, .. } = self.motion {
            self.knob_position = to;
            self.motion = KnobMotion::Resting;
        }
    }

    pub fn is_resting(&self) -> bool {
        self.motion == KnobMotion::Resting
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, KnobMotion::Dragging { .. })
    }
}

// cubic ease-out
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_moves_monotonically_and_lands_on_target() {
        let mut state = ToggleState::resting(true, 3.0);
        state.settle_to(100.0);

        let mut last = state.knob_position;
        for _ in 0..10 {
            state.advance(Duration::from_millis(20));
            assert!(state.knob_position >= last);
            last = state.knob_position;
        }
        assert!(!state.is_resting());

        state.advance(Duration::from_millis(100));
        assert_eq!(state.knob_position, 100.0);
        assert!(state.is_resting());
    }

    #[test]
    fn settling_to_current_position_is_immediately_at_rest() {
        let mut state = ToggleState::resting(false, 3.0);
        state.settle_to(3.0);
        assert!(state.is_resting());
    }

    #[test]
    fn advance_does_nothing_while_dragging() {
        let mut state = ToggleState::resting(false, 40.0);
        state.grab(3.0);
        state.advance(Duration::from_secs(1));
        assert_eq!(state.knob_position, 40.0);
        assert!(state.is_dragging());
    }
}
