//! Course id extraction from a course page location.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::error::{Result, ScoreError};

fn course_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/course/([0-9]+)/").expect("course path pattern is valid"))
}

/// Pull the course id out of a course page URL or path.
///
/// Only the path is searched, e.g. `https://courses.zju.edu.cn/course/12345/content`
/// and `/course/12345/homework` both yield `12345`. A location without a
/// `/course/<digits>/` segment is an error.
pub fn extract_course_id(location: &str) -> Result<u64> {
    let path = match Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => location.to_string(),
    };

    course_path_pattern()
        .captures(&path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| ScoreError::CourseIdNotFound(location.to_string()))
}
