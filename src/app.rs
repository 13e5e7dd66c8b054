//! Application state and core logic for the score TUI.
//!
//! This module contains the `App` struct which holds everything the panel
//! renderer needs: the rows built from the last accepted snapshot, panel
//! visibility, scroll position, and refresh status.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::cli::CliConfig;
use crate::display::{build_rows, PanelRow};
use crate::models::{PanelVisibility, RefreshState};
use crate::refresh::PollerEvent;

/// Maximum number of content rows the panel shows at once
pub const PANEL_CONTENT_ROWS: usize = 16;

/// Application state
pub struct App {
    pub course_id: u64,
    pub rows: Vec<PanelRow>,
    pub visibility: PanelVisibility,
    pub scroll_offset: usize,
    pub refresh_state: RefreshState,
    // Set once the first cycle succeeds
    pub last_updated: Option<DateTime<Local>>,
    pub refresh_interval: Duration,
    pub next_refresh: Instant,
    // Content rows the panel actually had room for at the last draw
    pub visible_rows: usize,
}

impl App {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            course_id: config.course_id,
            rows: Vec::new(),
            visibility: PanelVisibility::default(),
            scroll_offset: 0,
            refresh_state: RefreshState::Idle,
            last_updated: None,
            refresh_interval: config.refresh_interval,
            next_refresh: Instant::now() + config.refresh_interval,
            visible_rows: PANEL_CONTENT_ROWS,
        }
    }

    /// Apply a poller event
    ///
    /// Rows are only replaced when the poller reports a changed list;
    /// unchanged and aborted cycles leave the content as it was.
    pub fn apply(&mut self, event: PollerEvent) {
        match event {
            PollerEvent::Refreshing => {
                self.refresh_state = RefreshState::Fetching;
            }
            PollerEvent::Refreshed { activities, at } => {
                self.refresh_state = RefreshState::Idle;
                self.last_updated = Some(at);
                self.next_refresh = Instant::now() + self.refresh_interval;
                if let Some(activities) = activities {
                    self.rows = build_rows(&activities);
                    self.scroll_offset = self.scroll_offset.min(self.max_scroll());
                }
            }
            PollerEvent::Aborted => {
                self.refresh_state = RefreshState::Idle;
                self.next_refresh = Instant::now() + self.refresh_interval;
            }
        }
    }

    pub fn toggle_panel(&mut self) {
        self.visibility = self.visibility.toggle();
    }

    pub fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.visible_rows.max(1))
    }

    /// Record how many content rows fit on screen and re-clamp the scroll
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows.min(PANEL_CONTENT_ROWS);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
    }

    /// Time left until the next scheduled cycle
    pub fn time_until_refresh(&self) -> Duration {
        self.next_refresh.saturating_duration_since(Instant::now())
    }

    /// True until the first cycle has produced rows
    pub fn is_loading(&self) -> bool {
        self.rows.is_empty()
    }
}
