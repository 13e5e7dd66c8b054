//! Response envelopes for the three course service feeds.

use std::fmt;

use serde::Deserialize;

use super::activity::ActivityRead;

/// Which of the three feeds a request or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    ActivityReads,
    Homework,
    Exams,
}

impl Feed {
    pub fn label(&self) -> &'static str {
        match self {
            Feed::ActivityReads => "activity reads",
            Feed::Homework => "homework",
            Feed::Exams => "exams",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `{id, title}` record shared by the homework and exam feeds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitleEntry {
    pub id: u64,
    pub title: String,
}

/// `GET /api/course/{id}/activity-reads-for-user`
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityReadsResponse {
    pub activity_reads: Vec<ActivityRead>,
}

/// `GET /api/course/{id}/homework-scores?fields=id,title`
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkResponse {
    pub homework_activities: Vec<TitleEntry>,
}

/// `GET /api/courses/{id}/exams`
#[derive(Debug, Clone, Deserialize)]
pub struct ExamsResponse {
    pub exams: Vec<TitleEntry>,
}
