//! Terminal score panel for a course-management site.
//!
//! Polls three course feeds (activity reads, homework titles, exam titles),
//! joins them into titled score records, and renders them in a floating,
//! collapsible panel that only redraws its content when the scores change.

pub mod app;
pub mod cli;
pub mod client;
pub mod course;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod merge;
pub mod models;
pub mod refresh;
pub mod theme;
pub mod ui;

pub use error::{Result, ScoreError};
