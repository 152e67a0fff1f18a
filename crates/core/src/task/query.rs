//! Derived task queries
//!
//! Views computed over a listing snapshot; nothing here holds state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::{TaskItem, TaskStatus};

/// Occurrence count for a single tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Retain tasks whose tag set contains the given tag, after normalizing it
/// the same way stored tags are normalized
pub fn filter_by_tag(tasks: &[TaskItem], tag: &str) -> Vec<TaskItem> {
    let needle = tag.trim().to_lowercase();
    tasks
        .iter()
        .filter(|t| t.tags.iter().any(|stored| *stored == needle))
        .cloned()
        .collect()
}

/// Retain tasks with a due date strictly before `now` and a status other than
/// Done, ordered by ascending due date
pub fn overdue(tasks: &[TaskItem], now: DateTime<Utc>) -> Vec<TaskItem> {
    let mut overdue: Vec<TaskItem> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done)
        .filter(|t| t.due_date.is_some_and(|due| due < now))
        .cloned()
        .collect();
    overdue.sort_by_key(|t| t.due_date);
    overdue
}

/// Count occurrences of every tag across all tasks, ordered by ascending tag
/// name
pub fn tag_summary(tasks: &[TaskItem]) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for task in tasks {
        for tag in &task.tags {
            *counts.entry(tag).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect()
}
