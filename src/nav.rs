//! Navigation menu derived from the generated sections.

use crate::page::{Page, SectionId};

/// One menu entry, back-referencing its section by identifier.
#[derive(Debug, Clone)]
pub struct NavEntry {
    pub target: SectionId,
    pub label: String,
    /// Active marker; mirrors the active section's entry.
    pub active: bool,
}

/// The navigation menu: exactly one entry per section, in page order.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    pub entries: Vec<NavEntry>,
    /// Keyboard focus cursor; independent of the active marker.
    pub focused: usize,
}

impl NavMenu {
    /// Build the menu from the page's current section set. Reads the live
    /// page rather than any cached generator output, so it can be rebuilt at
    /// any point after sections exist. Entry order follows section order.
    pub fn build(page: &Page) -> Self {
        let entries = page
            .sections
            .iter()
            .map(|section| NavEntry {
                target: section.id,
                label: section.title.clone(),
                active: section.active,
            })
            .collect();
        Self {
            entries,
            focused: 0,
        }
    }

    /// Move focus to the next entry, wrapping.
    pub fn focus_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.focused = (self.focused + 1) % self.entries.len();
    }

    /// Move focus to the previous entry, wrapping.
    pub fn focus_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.focused = self.focused.checked_sub(1).unwrap_or(self.entries.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_page() -> Page {
        let mut rng = StdRng::seed_from_u64(7);
        Page::generate(&mut rng, &PageConfig::default())
    }

    #[test]
    fn one_entry_per_section_in_order() {
        let page = sample_page();
        let menu = NavMenu::build(&page);
        assert_eq!(menu.entries.len(), page.sections.len());
        for (entry, section) in menu.entries.iter().zip(&page.sections) {
            assert_eq!(entry.target, section.id);
            assert_eq!(entry.label, section.title);
        }
    }

    #[test]
    fn first_entry_starts_active() {
        let menu = NavMenu::build(&sample_page());
        let active: Vec<usize> = menu
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![0]);
    }

    #[test]
    fn focus_wraps_at_both_ends() {
        let mut menu = NavMenu::build(&sample_page());
        let last = menu.entries.len() - 1;

        assert_eq!(menu.focused, 0);
        menu.focus_previous();
        assert_eq!(menu.focused, last);
        menu.focus_next();
        assert_eq!(menu.focused, 0);
        menu.focus_next();
        assert_eq!(menu.focused, 1);
    }
}
