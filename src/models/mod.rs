//! Data models for the score TUI
//!
//! This module contains the core data structures:
//! - Activity reads and merged activities
//! - Typed envelopes for the three feeds
//! - Enums for state management

pub mod activity;
pub mod enums;
pub mod feeds;

// Re-exports for convenient access
pub use activity::{ActivityData, ActivityRead, ActivityType, MergedActivity, Score, UNKNOWN_TITLE};
pub use enums::{PanelVisibility, RefreshState, Section};
pub use feeds::{ActivityReadsResponse, ExamsResponse, Feed, HomeworkResponse, TitleEntry};
