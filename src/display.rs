//! Ordering and grouping of merged activities for the panel.

use std::cmp::Ordering;

use crate::models::{MergedActivity, Section};

/// Shown in place of a missing score
pub const NOT_AVAILABLE: &str = "暂无";

/// Shown when the course has no activity reads at all
pub const NO_SCORES: &str = "暂无成绩数据";

/// One line of panel content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    Header(Section),
    Entry { text: String, scored: bool },
    Empty,
}

impl PanelRow {
    pub fn text(&self) -> &str {
        match self {
            PanelRow::Header(section) => section.label(),
            PanelRow::Entry { text, .. } => text,
            PanelRow::Empty => NO_SCORES,
        }
    }
}

fn display_order(a: &MergedActivity, b: &MergedActivity) -> Ordering {
    // `true` sorts first in both keys
    b.has_score()
        .cmp(&a.has_score())
        .then_with(|| b.has_known_title().cmp(&a.has_known_title()))
}

/// Scored entries first, then known titles first within each tier.
///
/// `sort_by` is stable, so entries equal on both keys keep their order.
pub fn sort_for_display(activities: &mut [MergedActivity]) {
    activities.sort_by(display_order);
}

/// Text of a single entry line
pub fn entry_line(activity: &MergedActivity) -> String {
    match activity.read.score() {
        Some(score) if activity.read.activity_type.is_recognized() => {
            format!("{}的成绩: {}", activity.title, score)
        }
        _ => format!("{} - {}", activity.title, NOT_AVAILABLE),
    }
}

/// Sort a copy of `activities` and lay it out as panel rows
///
/// A section header goes right before the first known-title entry and
/// right before the first unknown-title entry, once each.
pub fn build_rows(activities: &[MergedActivity]) -> Vec<PanelRow> {
    if activities.is_empty() {
        return vec![PanelRow::Empty];
    }

    let mut sorted = activities.to_vec();
    sort_for_display(&mut sorted);

    let mut rows = Vec::with_capacity(sorted.len() + 2);
    let mut known_header_inserted = false;
    let mut unknown_header_inserted = false;

    for activity in &sorted {
        if activity.has_known_title() && !known_header_inserted {
            rows.push(PanelRow::Header(Section::KnownTitles));
            known_header_inserted = true;
        }
        if !activity.has_known_title() && !unknown_header_inserted {
            rows.push(PanelRow::Header(Section::UnknownTitles));
            unknown_header_inserted = true;
        }
        rows.push(PanelRow::Entry {
            text: entry_line(activity),
            scored: activity.has_score(),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityRead, UNKNOWN_TITLE};
    use serde_json::{json, Value};

    fn activity(id: u64, kind: &str, data: Value, title: &str) -> MergedActivity {
        let read: ActivityRead = serde_json::from_value(json!({
            "activity_id": id,
            "activity_type": kind,
            "data": data
        }))
        .unwrap();
        MergedActivity::new(read, title)
    }

    fn scored(id: u64, title: &str) -> MergedActivity {
        activity(id, "learning_activity", json!({"score": 90}), title)
    }

    fn unscored(id: u64, title: &str) -> MergedActivity {
        activity(id, "learning_activity", json!({}), title)
    }

    fn ids(activities: &[MergedActivity]) -> Vec<u64> {
        activities.iter().map(|a| a.read.activity_id).collect()
    }

    #[test]
    fn test_entry_line_with_score() {
        let a = activity(1, "learning_activity", json!({"score": 90}), "HW1");
        assert_eq!(entry_line(&a), "HW1的成绩: 90");
    }

    #[test]
    fn test_entry_line_exam_without_score() {
        let a = activity(9, "exam_activity", json!({}), UNKNOWN_TITLE);
        assert_eq!(entry_line(&a), "未知名称 - 暂无");
    }

    #[test]
    fn test_entry_line_zero_score_is_shown() {
        let a = activity(2, "exam_activity", json!({"score": 0}), "Quiz");
        assert_eq!(entry_line(&a), "Quiz的成绩: 0");
    }

    #[test]
    fn test_entry_line_unrecognized_type() {
        let a = activity(3, "forum", json!({"score": 5}), "Forum");
        assert_eq!(entry_line(&a), "Forum - 暂无");
    }

    #[test]
    fn test_sort_tiers() {
        let mut list = vec![
            unscored(1, UNKNOWN_TITLE),
            unscored(2, "HW2"),
            scored(3, UNKNOWN_TITLE),
            scored(4, "HW4"),
        ];
        sort_for_display(&mut list);
        assert_eq!(ids(&list), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_within_tier() {
        let mut list = vec![
            unscored(10, "A"),
            scored(11, UNKNOWN_TITLE),
            scored(12, "B"),
            unscored(13, "C"),
            scored(14, UNKNOWN_TITLE),
            scored(15, "D"),
        ];
        sort_for_display(&mut list);
        assert_eq!(ids(&list), vec![12, 15, 11, 14, 10, 13]);
    }

    #[test]
    fn test_build_rows_inserts_headers_once() {
        let list = vec![
            unscored(1, "HW1"),
            scored(2, UNKNOWN_TITLE),
            scored(3, "HW3"),
            unscored(4, UNKNOWN_TITLE),
        ];
        let rows = build_rows(&list);
        let texts: Vec<&str> = rows.iter().map(PanelRow::text).collect();
        assert_eq!(
            texts,
            vec![
                "已知名称的成绩：",
                "HW3的成绩: 90",
                "未知名称的成绩：",
                "未知名称的成绩: 90",
                "HW1 - 暂无",
                "未知名称 - 暂无",
            ]
        );
    }

    #[test]
    fn test_build_rows_only_unknown() {
        let rows = build_rows(&[unscored(1, UNKNOWN_TITLE)]);
        assert_eq!(rows[0], PanelRow::Header(Section::UnknownTitles));
        assert_eq!(rows.len(), 2);
        assert!(!rows.contains(&PanelRow::Header(Section::KnownTitles)));
    }

    #[test]
    fn test_build_rows_marks_scored_entries() {
        let rows = build_rows(&[scored(1, "HW1"), unscored(2, "HW2")]);
        assert_eq!(
            rows[1],
            PanelRow::Entry {
                text: "HW1的成绩: 90".to_string(),
                scored: true
            }
        );
        assert!(matches!(rows[2], PanelRow::Entry { scored: false, .. }));
    }

    #[test]
    fn test_build_rows_empty() {
        let rows = build_rows(&[]);
        assert_eq!(rows, vec![PanelRow::Empty]);
        assert_eq!(rows[0].text(), "暂无成绩数据");
    }

    #[test]
    fn test_build_rows_leaves_input_order() {
        let list = vec![unscored(1, "HW1"), scored(2, "HW2")];
        let _ = build_rows(&list);
        assert_eq!(ids(&list), vec![1, 2]);
    }
}
