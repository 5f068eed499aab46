//! UI rendering module.
//!
//! This module handles all the TUI rendering using ratatui,
//! implementing the Kanagawa Dragon aesthetic. The page body is drawn as one
//! scrolled paragraph whose line structure matches `Page::layout` row for row.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, LogLevel};
use crate::page::BODY_INDENT;
use crate::theme::{colors, section_color, styles};

/// Rows taken by the navigation bar (including its borders).
const NAV_BAR_HEIGHT: u16 = 3;

/// Rows taken by the activity log pane (including its borders).
const LOG_PANEL_HEIGHT: u16 = 5;

/// Content area of the page viewport for a terminal of the given size:
/// the middle chunk of the vertical layout, minus the page block's borders.
/// Scroll and intersection math run against this region.
pub fn page_viewport(width: u16, height: u16) -> (u16, u16) {
    let inner_width = width.saturating_sub(2);
    let inner_height = height
        .saturating_sub(NAV_BAR_HEIGHT + LOG_PANEL_HEIGHT)
        .saturating_sub(2);
    (inner_width, inner_height)
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Fill background with theme color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(LOG_PANEL_HEIGHT),
        ])
        .split(area);

    render_nav(frame, app, chunks[0]);
    render_page(frame, app, chunks[1]);
    render_logs(frame, app, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render the navigation bar
fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .nav
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut style = if entry.active {
                styles::tab_active()
            } else {
                styles::tab_inactive()
            };
            if index == app.nav.focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Line::from(Span::styled(format!(" {} ", entry.label), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Landing Page ")
                .title_style(styles::title())
                .borders(Borders::ALL)
                .border_style(styles::border())
                .style(Style::default().bg(colors::BG_MEDIUM)),
        )
        .select(app.nav.focused)
        .style(styles::text())
        // Focus is marked by the underlined span; keep the widget's own
        // highlight inert.
        .highlight_style(Style::default())
        .divider(Span::styled("|", styles::border_dim()));

    frame.render_widget(tabs, area);
}

/// Render the scrolled page content.
///
/// The lines pushed here must stay in lockstep with the heights
/// `Page::layout` computes: heading row, then (when expanded) a blank row and
/// the wrapped body, then a separator row per section.
fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Sections ")
        .title_style(styles::title())
        .borders(Borders::ALL)
        .border_style(styles::border())
        .style(Style::default().bg(colors::BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indent = " ".repeat(BODY_INDENT as usize);
    let mut lines: Vec<Line> = Vec::new();
    for (index, section) in app.page.sections.iter().enumerate() {
        let marker = if section.collapsed { "▸" } else { "▾" };
        let mut heading_style = Style::default()
            .fg(section_color(index))
            .add_modifier(Modifier::BOLD);
        if section.active {
            heading_style = heading_style.bg(colors::BG_HIGHLIGHT);
        }
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", section.title),
            heading_style,
        )));

        if !section.collapsed {
            lines.push(Line::from(""));
            for body_line in section.body_lines(inner.width) {
                lines.push(Line::from(Span::styled(
                    format!("{indent}{body_line}"),
                    styles::text(),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).scroll((app.scroll.row_offset(), 0));
    frame.render_widget(paragraph, inner);

    // Help hint in the bottom border.
    let hint = " ? help ";
    if area.width > hint.len() as u16 + 2 && area.height > 1 {
        let hint_area = Rect::new(
            area.x + 2,
            area.y + area.height - 1,
            hint.len() as u16,
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(hint, styles::text_hint())),
            hint_area,
        );
    }

    if app.show_top_button {
        render_top_button(frame, inner);
    }
}

/// Floating scroll-to-top control in the bottom-right of the page viewport
fn render_top_button(frame: &mut Frame, inner: Rect) {
    let label = " ↑ top (t) ";
    let width = label.chars().count() as u16;
    if inner.width <= width || inner.height < 1 {
        return;
    }
    let button_area = Rect::new(
        inner.x + inner.width - width - 1,
        inner.y + inner.height - 1,
        width,
        1,
    );
    frame.render_widget(Clear, button_area);
    frame.render_widget(
        Paragraph::new(Span::styled(label, styles::selected())),
        button_area,
    );
}

/// Render the activity log pane
fn render_logs(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let (prefix, color) = match entry.level {
                LogLevel::Info => ("i", colors::BLUE),
                LogLevel::Success => ("+", colors::GREEN),
                LogLevel::Warning => ("!", colors::YELLOW),
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", prefix), Style::default().fg(color)),
                Span::styled(&entry.message, styles::text_dim()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Activity ")
            .title_style(Style::default().fg(colors::FG_DIM))
            .borders(Borders::ALL)
            .border_style(styles::border_dim())
            .style(Style::default().bg(colors::BG_DARK)),
    );

    frame.render_widget(list, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(46, 18, area);

    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(colors::BLUE));
    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(colors::BLUE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![key("  h/l or Left/Right "), Span::raw("Move menu focus")]),
        Line::from(vec![key("  Enter             "), Span::raw("Open focused section")]),
        Line::from(vec![key("  1-9, 0            "), Span::raw("Open section directly")]),
        Line::from(vec![key("  j/k or Up/Down    "), Span::raw("Scroll the page")]),
        Line::from(vec![key("  PgUp/PgDn         "), Span::raw("Scroll by a screen")]),
        Line::from(vec![key("  Home/End          "), Span::raw("Jump to top/bottom")]),
        Line::from(vec![key("  c                 "), Span::raw("Collapse active section")]),
        Line::from(vec![key("  t                 "), Span::raw("Back to top (when shown)")]),
        Line::from(vec![key("  r                 "), Span::raw("Reload the page")]),
        Line::from(vec![key("  ?                 "), Span::raw("Toggle this help")]),
        Line::from(vec![key("  q or Ctrl+C       "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            styles::text_hint(),
        )),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(styles::title())
            .borders(Borders::ALL)
            .border_style(styles::border_focused())
            .style(Style::default().bg(colors::BG_MEDIUM)),
    );

    frame.render_widget(help, popup_area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
