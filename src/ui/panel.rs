//! Score panel rendering

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, PANEL_CONTENT_ROWS};
use crate::display::PanelRow;
use crate::models::PanelVisibility;
use crate::theme::{
    BG_PANEL, BG_SECTION, GREEN_SUCCESS, HEADER_BLUE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
    TOGGLE_BLUE,
};

use super::helpers::anchor_bottom_right;

/// Panel width in columns, borders included
pub const PANEL_WIDTH: u16 = 44;

pub const PANEL_TITLE: &str = "XZZD Score Finder";

/// Convert panel rows to styled lines
pub fn panel_lines(rows: &[PanelRow]) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| match row {
            PanelRow::Header(section) => Line::from(Span::styled(
                section.label(),
                Style::default()
                    .fg(HEADER_BLUE)
                    .bg(BG_SECTION)
                    .add_modifier(Modifier::BOLD),
            )),
            PanelRow::Entry { text, scored } => {
                let color = if *scored { GREEN_SUCCESS } else { TEXT_SECONDARY };
                Line::from(Span::styled(text.clone(), Style::default().fg(color)))
            }
            PanelRow::Empty => Line::from(Span::styled(
                row.text().to_string(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )),
        })
        .collect()
}

/// Height of the panel for the current state, borders included
pub fn panel_height(app: &App) -> u16 {
    match app.visibility {
        PanelVisibility::Hidden => 2,
        PanelVisibility::Shown => {
            let content = app.rows.len().clamp(1, PANEL_CONTENT_ROWS);
            content as u16 + 2
        }
    }
}

/// Where the panel lands inside `area`; shrinks on small terminals
pub fn panel_area(area: Rect, app: &App) -> Rect {
    anchor_bottom_right(area, PANEL_WIDTH, panel_height(app))
}

/// Render the floating score panel in the bottom-right of `area`
pub fn render_panel(area: Rect, app: &App, frame: &mut Frame) {
    let panel_area = panel_area(area, app);

    let title = Line::from(Span::styled(
        format!(" {} ", PANEL_TITLE),
        Style::default().fg(HEADER_BLUE).add_modifier(Modifier::BOLD),
    ));
    let toggle = Line::from(Span::styled(
        format!(" [h] {} ", app.visibility.toggle_label()),
        Style::default().fg(TOGGLE_BLUE),
    ))
    .right_aligned();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(HEADER_BLUE))
        .style(Style::default().bg(BG_PANEL))
        .title(title)
        .title(toggle);

    // The panel floats over whatever is underneath
    frame.render_widget(Clear, panel_area);

    if app.visibility == PanelVisibility::Hidden {
        frame.render_widget(block, panel_area);
        return;
    }

    let lines = if app.is_loading() {
        vec![Line::from(Span::styled(
            "加载中...",
            Style::default().fg(TEXT_MUTED),
        ))]
    } else {
        panel_lines(&app.rows)
    };

    let content = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll_offset as u16, 0));

    frame.render_widget(content, panel_area);
}
