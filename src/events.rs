//! Input events consumed by the page controller.
//!
//! User interactions and viewport notifications both reduce to this one
//! enum, which keeps the active-state machine decoupled from terminal event
//! types. All variants funnel into `App::apply`.

use crate::page::SectionId;

/// An input to the active-state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// A navigation entry was activated; carries its section back-reference.
    NavigationClicked(SectionId),
    /// The viewport observer reported a section crossing the visibility
    /// threshold.
    SectionBecameVisible(SectionId),
    /// A section heading was activated (collapse toggle).
    HeadingClicked(SectionId),
    /// The scroll offset changed (manual or animated), in rows.
    ScrollPositionChanged(f32),
}
