//! Title resolution for activity reads.
//!
//! The activity-read feed only carries identifiers. Titles live in two
//! separate feeds (homework and exams), so every cycle joins the three by
//! activity id. Homework titles take precedence over exam titles, and an
//! id neither feed knows gets [`UNKNOWN_TITLE`].

use std::collections::HashMap;

use crate::models::{ActivityRead, MergedActivity, TitleEntry, UNKNOWN_TITLE};

/// Activity id to title mapping built from one feed
#[derive(Debug, Clone, Default)]
pub struct TitleLookup {
    titles: HashMap<u64, String>,
}

impl TitleLookup {
    /// Build a lookup; a repeated id keeps the last title seen
    pub fn from_entries(entries: &[TitleEntry]) -> Self {
        let titles = entries
            .iter()
            .map(|entry| (entry.id, entry.title.clone()))
            .collect();
        Self { titles }
    }

    pub fn get(&self, id: u64) -> Option<&str> {
        self.titles.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Resolve one id: homework first, then exams, then the sentinel
pub fn resolve_title<'a>(id: u64, homework: &'a TitleLookup, exams: &'a TitleLookup) -> &'a str {
    homework
        .get(id)
        .or_else(|| exams.get(id))
        .unwrap_or(UNKNOWN_TITLE)
}

/// Attach a title to every activity read
///
/// Output has exactly one entry per input read, in input order.
pub fn merge(
    exams: &[TitleEntry],
    homework: &[TitleEntry],
    activity_reads: &[ActivityRead],
) -> Vec<MergedActivity> {
    let homework = TitleLookup::from_entries(homework);
    let exams = TitleLookup::from_entries(exams);

    activity_reads
        .iter()
        .map(|read| {
            let title = resolve_title(read.activity_id, &homework, &exams);
            MergedActivity::new(read.clone(), title)
        })
        .collect()
}
