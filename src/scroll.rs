//! Scroll state with smooth-scroll animation.
//!
//! The offset is fractional so the animation can ease; rendering rounds it
//! to whole rows. Smooth scrolls are fire-and-forget: a new command simply
//! replaces the target, and manual scrolling cancels it.

/// Rows the page must be scrolled before the scroll-to-top control appears.
pub const TOP_BUTTON_THRESHOLD: f32 = 2.0;

/// Fraction of the remaining distance covered per animation tick.
const SMOOTH_FACTOR: f32 = 0.2;

/// Distance at which an animation snaps to its target and ends.
const SNAP_DISTANCE: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: f32,
    target: Option<f32>,
    max: f32,
}

impl ScrollState {
    /// Current offset in rows (fractional while animating).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset rounded to whole rows, as rendered.
    pub fn row_offset(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f32 {
        self.max
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Update the clamping maximum (content or viewport size changed).
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max);
        if let Some(target) = self.target.as_mut() {
            *target = target.clamp(0.0, self.max);
        }
    }

    /// Manual scroll; cancels any in-flight animation.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    /// Jump without animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.target = None;
        self.offset = offset.clamp(0.0, self.max);
    }

    /// Begin (or redirect) a smooth scroll toward `offset`.
    pub fn smooth_to(&mut self, offset: f32) {
        self.target = Some(offset.clamp(0.0, self.max));
    }

    /// Advance the animation one frame. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target - self.offset;
        if distance.abs() <= SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
        } else {
            self.offset += distance * SMOOTH_FACTOR;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_scroll_converges_on_target() {
        let mut scroll = ScrollState::default();
        scroll.set_max(100.0);
        scroll.smooth_to(50.0);
        assert!(scroll.is_animating());

        let mut ticks = 0;
        while scroll.tick() {
            ticks += 1;
            assert!(ticks < 200, "animation failed to settle");
        }
        assert!((scroll.offset() - 50.0).abs() < f32::EPSILON);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn animation_moves_monotonically_toward_target() {
        let mut scroll = ScrollState::default();
        scroll.set_max(100.0);
        scroll.smooth_to(80.0);

        let mut previous = scroll.offset();
        while scroll.tick() {
            assert!(scroll.offset() >= previous);
            previous = scroll.offset();
        }
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.set_max(100.0);
        scroll.smooth_to(50.0);
        scroll.scroll_by(1.0);
        assert!(!scroll.is_animating());
        assert!((scroll.offset() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn offset_is_clamped_to_bounds() {
        let mut scroll = ScrollState::default();
        scroll.set_max(10.0);
        scroll.scroll_by(-5.0);
        assert_eq!(scroll.offset(), 0.0);
        scroll.scroll_by(1000.0);
        assert_eq!(scroll.offset(), 10.0);
    }

    #[test]
    fn shrinking_max_reclamps_offset_and_target() {
        let mut scroll = ScrollState::default();
        scroll.set_max(100.0);
        scroll.jump_to(80.0);
        scroll.smooth_to(90.0);
        scroll.set_max(40.0);
        assert_eq!(scroll.offset(), 40.0);
        while scroll.tick() {}
        assert_eq!(scroll.offset(), 40.0);
    }
}
