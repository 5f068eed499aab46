//! Page content model: section generation and row geometry.
//!
//! Sections are generated once per page "load" (startup or reload): a random
//! count is drawn, each section gets a sequential identifier and the shared
//! placeholder body, and the first one starts active. Geometry is computed in
//! a single pass over the whole batch so the viewport math always sees a
//! consistent picture of the page.

use std::fmt;

use rand::Rng;

/// Display title prefix for generated sections.
pub const SECTION_TITLE: &str = "Section";

/// Columns of indentation for body text under a heading.
pub const BODY_INDENT: u16 = 2;

/// Placeholder body text shared by every generated section.
pub const SECTION_BODY: &str = "Lorem ipsum dolor sit amet, consectetur \
    adipiscing elit. Morbi fermentum metus faucibus lectus pharetra dapibus. \
    Suspendisse potenti. Aenean aliquam elementum mi, ac euismod augue. Donec \
    eget lacinia ex. Phasellus imperdiet porta orci eget mollis. Sed convallis \
    sollicitudin mauris ac tincidunt. Donec bibendum, nulla eget bibendum \
    consectetur, sem nisi aliquam leo, ut pulvinar quam nunc eu augue. \
    Pellentesque maximus imperdiet elit a pharetra. Duis lectus mi, aliquam in \
    mi quis, aliquam porttitor lacus. Morbi a tincidunt felis. Sed leo nunc, \
    pharetra et elementum non, faucibus vitae elit. Integer nec libero \
    venenatis libero ultricies molestie semper in tellus. Sed congue et odio \
    sed euismod.";

/// Identifier of a generated section, derived from its 1-based order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub u32);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section{}", self.0)
    }
}

/// Generation parameters for a page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Minimum number of sections (inclusive).
    pub min_sections: u32,
    /// Maximum number of sections (inclusive).
    pub max_sections: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            min_sections: 4,
            max_sections: 10,
        }
    }
}

/// A single content section.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub body: &'static str,
    /// Active marker; at most one section carries it at a time.
    pub active: bool,
    /// Whether the body is hidden (heading collapse).
    pub collapsed: bool,
}

impl Section {
    fn new(order: u32) -> Self {
        Self {
            id: SectionId(order),
            title: format!("{} {}", SECTION_TITLE, order),
            body: SECTION_BODY,
            active: false,
            collapsed: false,
        }
    }

    /// Body text wrapped for a content area of the given width.
    pub fn body_lines(&self, content_width: u16) -> Vec<String> {
        wrap_text(self.body, content_width.saturating_sub(BODY_INDENT) as usize)
    }
}

/// Row extent of one section within the page column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub top: u16,
    pub height: u16,
}

impl SectionBounds {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// The generated page: an ordered batch of sections.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub sections: Vec<Section>,
}

impl Page {
    /// Generate a fresh page with a random section count in the configured
    /// range. The first section starts active.
    pub fn generate(rng: &mut impl Rng, config: &PageConfig) -> Self {
        let count = rng.gen_range(config.min_sections..=config.max_sections);
        let mut sections: Vec<Section> = (1..=count).map(Section::new).collect();
        if let Some(first) = sections.first_mut() {
            first.active = true;
        }
        Self { sections }
    }

    /// Index of the section with the given identifier.
    pub fn index_of(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Compute the row extent of every section for the given content width.
    ///
    /// The row math here must agree exactly with the lines `ui::render_page`
    /// emits; the viewport observer only measures what is actually drawn.
    /// A collapsed section contributes its heading and the separator row.
    pub fn layout(&self, content_width: u16) -> Vec<SectionBounds> {
        let mut bounds = Vec::with_capacity(self.sections.len());
        let mut top = 0u16;
        for section in &self.sections {
            let mut height = 1; // heading
            if !section.collapsed {
                height += 1 + section.body_lines(content_width).len() as u16; // blank + body
            }
            height += 1; // separator
            bounds.push(SectionBounds { top, height });
            top = top.saturating_add(height);
        }
        bounds
    }
}

/// Greedy word wrap; words longer than the width are hard-broken.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                let piece: String = chunk.iter().collect();
                if chunk.len() == width {
                    lines.push(piece);
                } else {
                    current = piece;
                }
            }
            continue;
        }
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
