//! Activity records as reported by the course service
//!
//! An `ActivityRead` is one student's engagement record for one gradable
//! activity. A `MergedActivity` is the same record with a resolved title.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title used when neither lookup knows the activity
pub const UNKNOWN_TITLE: &str = "未知名称";

/// Activity type tag
///
/// Only homework (`learning_activity`) and exam (`exam_activity`) entries
/// carry a displayable score. Any other tag is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Learning,
    Exam,
    Other(String),
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Learning => "learning_activity",
            ActivityType::Exam => "exam_activity",
            ActivityType::Other(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ActivityType::Other(_))
    }
}

impl From<String> for ActivityType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "learning_activity" => ActivityType::Learning,
            "exam_activity" => ActivityType::Exam,
            _ => ActivityType::Other(tag),
        }
    }
}

impl From<ActivityType> for String {
    fn from(kind: ActivityType) -> Self {
        match kind {
            ActivityType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A non-null score value
///
/// Anything that is neither a number nor a string is kept as raw JSON
/// rather than failing the whole feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
    Other(Value),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display drops a trailing ".0", so 90.0 prints as "90"
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => f.write_str(s),
            Score::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Nested score payload of an activity read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the `activity_reads` feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRead {
    pub activity_id: u64,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub data: Option<ActivityData>,
    /// Fields we don't interpret but carry through the merge untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityRead {
    pub fn score(&self) -> Option<&Score> {
        self.data.as_ref().and_then(|d| d.score.as_ref())
    }
}

/// An activity read with its resolved title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedActivity {
    #[serde(flatten)]
    pub read: ActivityRead,
    pub title: String,
}

impl MergedActivity {
    pub fn new(read: ActivityRead, title: impl Into<String>) -> Self {
        Self {
            read,
            title: title.into(),
        }
    }

    pub fn has_score(&self) -> bool {
        self.read.score().is_some()
    }

    /// True when the title came from one of the lookups
    pub fn has_known_title(&self) -> bool {
        self.title != UNKNOWN_TITLE
    }
}
