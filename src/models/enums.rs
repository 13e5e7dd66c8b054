//! Enums used throughout the score TUI
//!
//! This module contains the small state enums used by the app loop and
//! the panel renderer.

/// Whether the panel content region is shown or collapsed to its header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Shown,
    Hidden,
}

impl PanelVisibility {
    pub fn toggle(&self) -> Self {
        match self {
            PanelVisibility::Shown => PanelVisibility::Hidden,
            PanelVisibility::Hidden => PanelVisibility::Shown,
        }
    }

    /// Label of the toggle control: what pressing it will do
    pub fn toggle_label(&self) -> &'static str {
        match self {
            PanelVisibility::Shown => "隐藏",
            PanelVisibility::Hidden => "显示",
        }
    }
}

/// Refresh cycle state as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Fetching,
}

/// Section of the score list a header introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    KnownTitles,
    UnknownTitles,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::KnownTitles => "已知名称的成绩：",
            Section::UnknownTitles => "未知名称的成绩：",
        }
    }
}
