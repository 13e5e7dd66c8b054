//! UI module for score-tui
//!
//! This module contains the rendering functions for the terminal interface:
//! the floating score panel, the background frame, and the bottom bar.

mod helpers;
mod panel;
mod status;

pub use helpers::anchor_bottom_right;
pub use panel::{panel_area, panel_lines, render_panel, PANEL_TITLE, PANEL_WIDTH};
pub use status::{refresh_status, render_background, render_bottom_bar};

use ratatui::prelude::*;

use crate::app::App;
use crate::models::PanelVisibility;

/// Draw one full frame
///
/// Also records how many content rows the panel got, so scrolling can
/// reach the last entry on short terminals.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Create main layout: content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Background + floating panel
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    let content_area = main_layout[0];
    let bottom_bar_area = main_layout[1];

    render_background(content_area, app, frame);

    // Keep the panel inside the background border
    let inner = content_area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    if app.visibility == PanelVisibility::Shown {
        let panel = panel_area(inner, app);
        app.set_visible_rows(panel.height.saturating_sub(2) as usize);
    }
    render_panel(inner, app, frame);

    render_bottom_bar(bottom_bar_area, app, frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;
    use crate::client::ClientConfig;
    use crate::models::{ActivityRead, MergedActivity};
    use crate::refresh::PollerEvent;
    use ratatui::backend::TestBackend;
    use serde_json::json;
    use std::time::Duration;

    fn app() -> App {
        App::new(&CliConfig {
            course_id: 99,
            client: ClientConfig {
                base_url: "https://courses.zju.edu.cn".to_string(),
                course_id: 99,
                cookie: None,
                timeout: Duration::from_secs(10),
            },
            refresh_interval: Duration::from_secs(300),
            log_file: None,
        })
    }

    fn screen_text(app: &mut App) -> String {
        screen_text_sized(app, 80, 24)
    }

    fn screen_text_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_panel_title_and_course() {
        let text = screen_text(&mut app());
        assert!(text.contains(PANEL_TITLE));
        assert!(text.contains("course 99"));
    }

    #[test]
    fn test_draw_shows_scores() {
        let mut app = app();
        let read: ActivityRead = serde_json::from_value(json!({
            "activity_id": 1,
            "activity_type": "learning_activity",
            "data": {"score": 90}
        }))
        .unwrap();
        app.apply(PollerEvent::Refreshed {
            activities: Some(vec![MergedActivity::new(read, "Lab1")]),
            at: chrono::Local::now(),
        });

        let text = screen_text(&mut app);
        assert!(text.contains("Lab1"));
    }

    #[test]
    fn test_draw_hidden_panel_omits_scores() {
        let mut app = app();
        let read: ActivityRead = serde_json::from_value(json!({
            "activity_id": 1,
            "activity_type": "learning_activity",
            "data": {"score": 90}
        }))
        .unwrap();
        app.apply(PollerEvent::Refreshed {
            activities: Some(vec![MergedActivity::new(read, "Lab1")]),
            at: chrono::Local::now(),
        });
        app.toggle_panel();

        let text = screen_text(&mut app);
        assert!(text.contains(PANEL_TITLE));
        assert!(!text.contains("Lab1"));
    }

    #[test]
    fn test_short_terminal_can_scroll_to_last_entry() {
        let mut app = app();
        let activities = (0..20)
            .map(|id| {
                let read: ActivityRead = serde_json::from_value(json!({
                    "activity_id": id,
                    "activity_type": "learning_activity",
                    "data": {"score": 80}
                }))
                .unwrap();
                MergedActivity::new(read, format!("HW{:02}", id))
            })
            .collect();
        app.apply(PollerEvent::Refreshed {
            activities: Some(activities),
            at: chrono::Local::now(),
        });

        // 12 rows: 11 content, 9 inside the frame, 7 inside the panel border
        let text = screen_text_sized(&mut app, 80, 12);
        assert_eq!(app.visible_rows, 7);
        assert!(!text.contains("HW19"));

        for _ in 0..100 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, 14);
        let text = screen_text_sized(&mut app, 80, 12);
        assert!(text.contains("HW19"));
        assert!(text.contains("HW13"));
        assert!(!text.contains("HW12"));
    }
}
