//! Application state and event handling.
//!
//! This module implements the Elm Architecture pattern for state management,
//! with a centralized App struct holding all application state. User
//! interactions and viewport notifications reduce to `PageEvent`s that all
//! funnel through `App::apply`, which is where the active marker moves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::events::PageEvent;
use crate::nav::NavMenu;
use crate::page::{Page, PageConfig, SectionBounds, SectionId};
use crate::scroll::{ScrollState, TOP_BUTTON_THRESHOLD};
use crate::viewport::{ObserverConfig, ViewportObserver};

/// Rows moved by a single-step scroll key.
const SCROLL_STEP: f32 = 1.0;

/// Maximum entries kept in the activity log.
const MAX_LOGS: usize = 100;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

/// A log entry shown in the activity pane.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: LogLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: LogLevel::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: LogLevel::Warning,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Whether the application should quit.
    pub should_quit: bool,
    /// The generated page.
    pub page: Page,
    /// Navigation menu, one entry per section.
    pub nav: NavMenu,
    /// Scroll offset and smooth-scroll animation.
    pub scroll: ScrollState,
    /// Whether the scroll-to-top control is shown.
    pub show_top_button: bool,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Activity log entries.
    pub logs: Vec<LogEntry>,

    observer: ViewportObserver,

    /// Index of the single active (section, entry) pair. Held explicitly and
    /// updated transactionally in `activate` rather than re-derived by
    /// scanning the page on every transition.
    active: usize,

    /// Cached row geometry for `layout_width`.
    bounds: Vec<SectionBounds>,
    layout_width: u16,
    viewport_height: u16,

    /// Whether the observer has delivered its attach-time batch.
    observer_primed: bool,

    config: PageConfig,
    rng: StdRng,
}

impl App {
    /// Create a new application instance. A seed makes section generation
    /// deterministic; otherwise it is entropy-seeded like a fresh page load.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let config = PageConfig::default();
        let page = Page::generate(&mut rng, &config);
        let nav = NavMenu::build(&page);
        let mut observer = ViewportObserver::new(ObserverConfig::default());
        observer.reset(page.sections.len());

        let mut app = Self {
            should_quit: false,
            page,
            nav,
            scroll: ScrollState::default(),
            show_top_button: false,
            show_help: false,
            logs: Vec::new(),
            observer,
            active: 0,
            bounds: Vec::new(),
            layout_width: 0,
            viewport_height: 0,
            observer_primed: false,
            config,
            rng,
        };

        app.log(LogEntry::info("Landing page initialized"));
        let count = app.page.sections.len();
        app.log(LogEntry::success(format!("Generated {count} sections")));
        app
    }

    /// Index of the currently active (section, entry) pair.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Row geometry of the sections at the current layout width.
    pub fn bounds(&self) -> &[SectionBounds] {
        &self.bounds
    }

    /// Add a log entry, dropping the oldest past the cap.
    pub fn log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
    }

    /// Per-frame update: refresh geometry, advance the smooth scroll, and let
    /// the observer see any movement. `view_width` and `view_height` describe
    /// the page viewport (the content area inside its borders).
    pub fn tick(&mut self, view_width: u16, view_height: u16) {
        if view_width != self.layout_width || view_height != self.viewport_height {
            self.layout_width = view_width;
            self.viewport_height = view_height;
            self.relayout();
        }

        // Attach-time observation batch, once geometry exists.
        if !self.observer_primed && !self.bounds.is_empty() {
            self.observer_primed = true;
            self.apply(PageEvent::ScrollPositionChanged(self.scroll.offset()));
        }

        if self.scroll.tick() {
            self.apply(PageEvent::ScrollPositionChanged(self.scroll.offset()));
        }
    }

    /// Reduce one page event. The click path and the observation path both
    /// land in `activate`; only the click path scrolls.
    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::NavigationClicked(id) => {
                let Some(index) = self.page.index_of(id) else {
                    self.missing_section(id);
                    return;
                };
                self.activate(index);
                if let Some(bounds) = self.bounds.get(index) {
                    self.scroll.smooth_to(f32::from(bounds.top));
                }
                let title = self.page.sections[index].title.clone();
                self.log(LogEntry::info(format!("Navigating to {title}")));
            }
            PageEvent::SectionBecameVisible(id) => {
                let Some(index) = self.page.index_of(id) else {
                    self.missing_section(id);
                    return;
                };
                self.activate(index);
                let title = self.page.sections[index].title.clone();
                self.log(LogEntry::info(format!("{title} scrolled into view")));
            }
            PageEvent::HeadingClicked(id) => {
                let Some(index) = self.page.index_of(id) else {
                    self.missing_section(id);
                    return;
                };
                let section = &mut self.page.sections[index];
                section.collapsed = !section.collapsed;
                let state = if section.collapsed {
                    "collapsed"
                } else {
                    "expanded"
                };
                let title = section.title.clone();
                // Collapse changes geometry immediately.
                self.relayout();
                self.log(LogEntry::info(format!("{title} {state}")));
            }
            PageEvent::ScrollPositionChanged(offset) => {
                self.show_top_button = offset > TOP_BUTTON_THRESHOLD;
                let scroll_top = offset.round().max(0.0) as u16;
                let crossings =
                    self.observer
                        .observe(&self.bounds, scroll_top, self.viewport_height);
                // Crossings apply in delivery order; the last one in a batch
                // ends up active.
                for index in crossings {
                    let id = self.page.sections[index].id;
                    self.apply(PageEvent::SectionBecameVisible(id));
                }
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => self.regenerate(),

            // Navigation menu.
            KeyCode::Char('h') | KeyCode::Left => self.nav.focus_previous(),
            KeyCode::Char('l') | KeyCode::Right => self.nav.focus_next(),
            KeyCode::Enter => {
                if let Some(entry) = self.nav.entries.get(self.nav.focused) {
                    self.apply(PageEvent::NavigationClicked(entry.target));
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(entry) = self.nav.entries.get(index) {
                    self.apply(PageEvent::NavigationClicked(entry.target));
                }
            }
            KeyCode::Char('0') => {
                if let Some(entry) = self.nav.entries.get(9) {
                    self.apply(PageEvent::NavigationClicked(entry.target));
                }
            }

            // Scrolling.
            KeyCode::Char('j') | KeyCode::Down => self.manual_scroll(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.manual_scroll(-SCROLL_STEP),
            KeyCode::PageDown => {
                self.manual_scroll(f32::from(self.viewport_height.saturating_sub(1)));
            }
            KeyCode::PageUp => {
                self.manual_scroll(-f32::from(self.viewport_height.saturating_sub(1)));
            }
            KeyCode::Home => {
                self.scroll.jump_to(0.0);
                self.apply(PageEvent::ScrollPositionChanged(self.scroll.offset()));
            }
            KeyCode::End => {
                let max = self.scroll.max_offset();
                self.scroll.jump_to(max);
                self.apply(PageEvent::ScrollPositionChanged(self.scroll.offset()));
            }

            // Section features.
            KeyCode::Char('c') => {
                if let Some(section) = self.page.sections.get(self.active) {
                    self.apply(PageEvent::HeadingClicked(section.id));
                }
            }
            KeyCode::Char('t') => self.top_button_clicked(),

            _ => {}
        }
    }

    /// Rebuild the whole page: fresh random section count, fresh navigation,
    /// observer and scroll reset.
    pub fn regenerate(&mut self) {
        self.page = Page::generate(&mut self.rng, &self.config);
        self.nav = NavMenu::build(&self.page);
        self.observer.reset(self.page.sections.len());
        self.active = 0;
        self.scroll.jump_to(0.0);
        self.show_top_button = false;
        self.observer_primed = false;
        self.relayout();
        let count = self.page.sections.len();
        self.log(LogEntry::success(format!("Reloaded: {count} sections")));
    }

    /// Move the active marker to the pair at `index`. Removal is no-op safe
    /// when nothing is marked; afterwards exactly one section and one entry
    /// are active and they reference each other.
    fn activate(&mut self, index: usize) {
        if let Some(section) = self.page.sections.get_mut(self.active) {
            section.active = false;
        }
        if let Some(entry) = self.nav.entries.get_mut(self.active) {
            entry.active = false;
        }
        if let Some(section) = self.page.sections.get_mut(index) {
            section.active = true;
        }
        if let Some(entry) = self.nav.entries.get_mut(index) {
            entry.active = true;
        }
        self.active = index;
    }

    /// Recompute section geometry for the current width and re-clamp the
    /// scroll range.
    fn relayout(&mut self) {
        if self.layout_width == 0 {
            self.bounds.clear();
            return;
        }
        self.bounds = self.page.layout(self.layout_width);
        let total = self.bounds.last().map(|b| b.bottom()).unwrap_or(0);
        self.scroll
            .set_max(f32::from(total.saturating_sub(self.viewport_height)));
    }

    fn manual_scroll(&mut self, delta: f32) {
        self.scroll.scroll_by(delta);
        self.apply(PageEvent::ScrollPositionChanged(self.scroll.offset()));
    }

    /// Scroll-to-top control; only reacts while visible.
    fn top_button_clicked(&mut self) {
        if !self.show_top_button {
            return;
        }
        self.scroll.smooth_to(0.0);
        self.log(LogEntry::info("Scrolling back to top"));
    }

    /// A back-reference resolved to no section: fatal during development, a
    /// logged no-op in release.
    fn missing_section(&mut self, id: SectionId) {
        debug_assert!(false, "no section matching {id}");
        self.log(LogEntry::warning(format!("Ignored event for unknown {id}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_WIDTH: u16 = 100;
    const VIEW_HEIGHT: u16 = 16;

    fn test_app() -> App {
        let mut app = App::new(Some(42));
        app.tick(VIEW_WIDTH, VIEW_HEIGHT);
        app
    }

    fn assert_single_active(app: &App) {
        let sections: Vec<usize> = app
            .page
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
            .collect();
        let entries: Vec<usize> = app
            .nav
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(sections.len(), 1, "expected exactly one active section");
        assert_eq!(entries.len(), 1, "expected exactly one active entry");
        assert_eq!(sections[0], entries[0]);
        assert_eq!(sections[0], app.active_index());
        assert_eq!(
            app.nav.entries[entries[0]].target,
            app.page.sections[sections[0]].id
        );
    }

    /// Recompute the intersecting set with the observer's default geometry.
    fn intersecting(bounds: &[SectionBounds], offset: u16, view_height: u16) -> Vec<usize> {
        let view_top = i64::from(offset) + 2;
        let view_bottom = i64::from(offset) + i64::from(view_height) - 2;
        bounds
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                let overlap = (i64::from(b.bottom()).min(view_bottom)
                    - i64::from(b.top).max(view_top))
                .max(0);
                overlap as f64 / f64::from(b.height) >= 0.7
            })
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn initialization_establishes_the_invariant() {
        let app = test_app();
        assert!(app.page.sections.len() >= 4);
        assert_eq!(app.nav.entries.len(), app.page.sections.len());
        assert_single_active(&app);
        assert_eq!(app.active_index(), 0);
    }

    #[test]
    fn click_activates_pair_and_scrolls_to_section_top() {
        let mut app = test_app();
        let id = app.page.sections[2].id;

        app.apply(PageEvent::NavigationClicked(id));
        assert_single_active(&app);
        assert_eq!(app.active_index(), 2);
        assert!(app.scroll.is_animating());

        let target = f32::from(app.bounds()[2].top).min(app.scroll.max_offset());
        for _ in 0..300 {
            app.tick(VIEW_WIDTH, VIEW_HEIGHT);
            if !app.scroll.is_animating() {
                break;
            }
        }
        assert!(!app.scroll.is_animating());
        assert!((app.scroll.offset() - target).abs() <= 0.5);
        // The final crossing during the animation is the clicked section.
        assert_eq!(app.active_index(), 2);
        assert_single_active(&app);
    }

    #[test]
    fn observation_path_updates_active_without_scrolling() {
        let mut app = test_app();
        let id = app.page.sections[1].id;
        let before = app.scroll.offset();

        app.apply(PageEvent::SectionBecameVisible(id));
        assert_single_active(&app);
        assert_eq!(app.active_index(), 1);
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.offset(), before);
    }

    #[test]
    fn scroll_crossing_activates_last_in_batch() {
        let mut app = test_app();
        let bounds = app.bounds().to_vec();
        let offset = bounds[2].top;

        let before = intersecting(&bounds, 0, VIEW_HEIGHT);
        app.scroll.scroll_by(f32::from(offset));
        app.apply(PageEvent::ScrollPositionChanged(app.scroll.offset()));

        let after = intersecting(&bounds, offset, VIEW_HEIGHT);
        let newly: Vec<usize> = after
            .iter()
            .copied()
            .filter(|i| !before.contains(i))
            .collect();
        assert!(!newly.is_empty(), "scroll produced no crossings");
        assert_eq!(app.active_index(), *newly.last().unwrap());
        assert_single_active(&app);
        // Observation never moves the scroll.
        assert_eq!(app.scroll.offset(), f32::from(offset));
    }

    #[test]
    fn heading_collapse_round_trips() {
        let mut app = test_app();
        let id = app.page.sections[0].id;
        let expanded_height = app.bounds()[0].height;

        app.apply(PageEvent::HeadingClicked(id));
        assert!(app.page.sections[0].collapsed);
        assert_eq!(app.bounds()[0].height, 2);
        assert_single_active(&app);

        app.apply(PageEvent::HeadingClicked(id));
        assert!(!app.page.sections[0].collapsed);
        assert_eq!(app.bounds()[0].height, expanded_height);
        assert_eq!(app.active_index(), 0);
    }

    #[test]
    fn top_button_appears_past_threshold_and_returns_home() {
        let mut app = test_app();
        assert!(!app.show_top_button);

        app.scroll.scroll_by(5.0);
        app.apply(PageEvent::ScrollPositionChanged(app.scroll.offset()));
        assert!(app.show_top_button);

        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(app.scroll.is_animating());
        for _ in 0..300 {
            app.tick(VIEW_WIDTH, VIEW_HEIGHT);
            if !app.scroll.is_animating() {
                break;
            }
        }
        assert!(app.scroll.offset() < 0.5);
        assert!(!app.show_top_button);
    }

    #[test]
    fn top_button_ignores_clicks_while_hidden() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(!app.scroll.is_animating());
    }

    #[test]
    fn digit_keys_click_entries_directly() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(app.active_index(), 2);
        assert!(app.scroll.is_animating());
        assert_single_active(&app);
    }

    #[test]
    fn focus_and_enter_click_the_focused_entry() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.active_index(), 2);
        assert_single_active(&app);
    }

    #[test]
    fn regeneration_resets_the_session() {
        let mut app = test_app();
        app.scroll.scroll_by(10.0);
        app.apply(PageEvent::ScrollPositionChanged(app.scroll.offset()));

        for _ in 0..8 {
            app.regenerate();
            let count = app.page.sections.len();
            assert!((4..=10).contains(&count));
            assert_eq!(app.nav.entries.len(), count);
            assert_eq!(app.active_index(), 0);
            assert_eq!(app.scroll.offset(), 0.0);
            assert!(!app.show_top_button);
            assert_single_active(&app);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn unknown_back_reference_is_fatal_in_debug() {
        let mut app = test_app();
        app.apply(PageEvent::NavigationClicked(SectionId(99)));
    }
}
