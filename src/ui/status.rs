//! Bottom bar and background rendering

use std::time::Duration;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::RefreshState;
use crate::theme::{AMBER_WARNING, BORDER_SUBTLE, HEADER_BLUE, TEXT_MUTED};

const KEY_HINTS: &str = " q: Quit | h/Space: 隐藏/显示 | ↑↓: Scroll | r: Refresh ";

/// Format a countdown as MM:SS; minutes keep counting past 59
pub fn format_countdown(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Right-hand side of the bottom bar
pub fn refresh_status(app: &App) -> String {
    match app.refresh_state {
        RefreshState::Fetching => "Refreshing... ".to_string(),
        RefreshState::Idle => {
            let next = format_countdown(app.time_until_refresh());
            match app.last_updated {
                Some(at) => format!("Updated {} | next {} ", at.format("%H:%M:%S"), next),
                None => format!("Waiting for data | next {} ", next),
            }
        }
    }
}

/// Render the course frame behind the panel
pub fn render_background(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(format!(" score-tui | course {} ", app.course_id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    frame.render_widget(block, area);
}

/// Render the single-line bottom bar: key hints left, refresh status right
pub fn render_bottom_bar(area: Rect, app: &App, frame: &mut Frame) {
    let status = refresh_status(app);
    let status_color = match app.refresh_state {
        RefreshState::Fetching => AMBER_WARNING,
        RefreshState::Idle => TEXT_MUTED,
    };

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status.chars().count() as u16),
        ])
        .split(area);

    let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::Black).bg(HEADER_BLUE));
    let status = Paragraph::new(status).style(Style::default().fg(status_color));

    frame.render_widget(hints, layout[0]);
    frame.render_widget(status, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;
    use crate::client::ClientConfig;
    use crate::refresh::PollerEvent;

    fn app() -> App {
        App::new(&CliConfig {
            course_id: 3,
            client: ClientConfig {
                base_url: "https://courses.zju.edu.cn".to_string(),
                course_id: 3,
                cookie: None,
                timeout: Duration::from_secs(10),
            },
            refresh_interval: Duration::from_secs(300),
            log_file: None,
        })
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::from_secs(0)), "00:00");
        assert_eq!(format_countdown(Duration::from_secs(299)), "04:59");
        assert_eq!(format_countdown(Duration::from_millis(61_900)), "01:01");
        assert_eq!(format_countdown(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn test_status_before_first_cycle() {
        let status = refresh_status(&app());
        assert!(status.starts_with("Waiting for data | next "));
    }

    #[test]
    fn test_status_while_fetching() {
        let mut app = app();
        app.apply(PollerEvent::Refreshing);
        assert_eq!(refresh_status(&app), "Refreshing... ");
    }

    #[test]
    fn test_status_after_update() {
        let mut app = app();
        let at = chrono::Local::now();
        app.apply(PollerEvent::Refreshed {
            activities: Some(Vec::new()),
            at,
        });
        let status = refresh_status(&app);
        assert!(status.starts_with(&format!("Updated {}", at.format("%H:%M:%S"))));
    }
}
