//! Viewport-intersection detection.
//!
//! Watches every section's row extent against the scrolled viewport and
//! reports threshold crossings. Edge-triggered: a section fires when it
//! becomes intersecting, stays silent while it remains so, and can fire
//! again after leaving.

use crate::page::SectionBounds;

/// Observation parameters.
#[derive(Debug, Clone)]
pub struct ObserverConfig {
    /// Fraction of a section's rows that must be visible for it to count as
    /// intersecting.
    pub threshold: f64,
    /// Rows shaved off the top and bottom of the viewport before the
    /// intersection is computed (shrinks the trigger region).
    pub margin_rows: u16,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            margin_rows: 2,
        }
    }
}

/// Edge-triggered intersection tracker over all sections.
#[derive(Debug)]
pub struct ViewportObserver {
    config: ObserverConfig,
    intersecting: Vec<bool>,
}

impl ViewportObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            intersecting: Vec::new(),
        }
    }

    /// Forget all intersection state and track `section_count` sections.
    pub fn reset(&mut self, section_count: usize) {
        self.intersecting = vec![false; section_count];
    }

    /// Check every section against the current viewport and return the
    /// indices that crossed into intersection since the previous call, in
    /// delivery order (ascending index). The caller applies them in that
    /// order, so the last crossing in a batch ends up active.
    ///
    /// A section taller than the shrunken viewport can never reach the
    /// threshold; that matches the underlying area-fraction semantics and is
    /// deliberately not special-cased.
    pub fn observe(
        &mut self,
        bounds: &[SectionBounds],
        scroll_top: u16,
        viewport_height: u16,
    ) -> Vec<usize> {
        self.intersecting.resize(bounds.len(), false);

        let margin = i64::from(self.config.margin_rows);
        let view_top = i64::from(scroll_top) + margin;
        let view_bottom = i64::from(scroll_top) + i64::from(viewport_height) - margin;

        let mut crossings = Vec::new();
        for (index, section) in bounds.iter().enumerate() {
            let top = i64::from(section.top);
            let bottom = i64::from(section.bottom());
            let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0);
            let fraction = if section.height == 0 {
                0.0
            } else {
                overlap as f64 / f64::from(section.height)
            };
            let now = fraction >= self.config.threshold;
            if now && !self.intersecting[index] {
                crossings.push(index);
            }
            self.intersecting[index] = now;
        }
        crossings
    }
}
