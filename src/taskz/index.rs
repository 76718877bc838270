//! # User-facing Indexes
//!
//! Users refer to tasks by their 1-based position in the list. Positions are
//! recomputed on every listing, so there are never gaps: after deleting task 2 the
//! old task 3 becomes task 2.
//!
//! A [`TaskIndex`] is whatever integer the user typed. Whether it points at a task
//! is only known against a concrete list, which is what [`resolve_indexes`] checks.

use crate::error::{Result, TaskzError};
use crate::model::Task;
use crate::task_list::TaskList;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskIndex(i64);

impl TaskIndex {
    pub fn new(index: i64) -> Self {
        Self(index)
    }

    pub fn from_position(position: usize) -> Self {
        Self(i64::try_from(position).map_or(i64::MAX, |p| p.saturating_add(1)))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Zero-based position in a list of `len` tasks, if the index is in range.
    pub fn position(self, len: usize) -> Option<usize> {
        usize::try_from(self.0)
            .ok()
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1)
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskIndex {
    type Err = TaskzError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse()
            .map(TaskIndex)
            .map_err(|_| TaskzError::InvalidNumber(s.to_string()))
    }
}

/// A task paired with the index it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedTask {
    pub index: TaskIndex,
    pub task: Task,
}

impl fmt::Display for ListedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.task)
    }
}

pub fn index_tasks(tasks: &TaskList) -> Vec<ListedTask> {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| ListedTask {
            index: TaskIndex::from_position(position),
            task: task.clone(),
        })
        .collect()
}

/// Parses a whitespace-separated list of indexes.
pub fn parse_indexes(input: &str) -> Result<Vec<TaskIndex>> {
    input.split_whitespace().map(str::parse::<TaskIndex>).collect()
}

/// Maps every index to its position, failing on the first one that is out of
/// range. Nothing is returned unless all of them resolve.
pub fn resolve_indexes(tasks: &TaskList, indexes: &[TaskIndex]) -> Result<Vec<(TaskIndex, usize)>> {
    indexes
        .iter()
        .map(|idx| {
            idx.position(tasks.len())
                .map(|position| (*idx, position))
                .ok_or(TaskzError::IndexOutOfRange {
                    index: idx.get(),
                    len: tasks.len(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(descriptions: &[&str]) -> TaskList {
        descriptions
            .iter()
            .map(|d| Task::todo(d).unwrap())
            .collect()
    }

    #[test]
    fn test_parsing() {
        assert_eq!(TaskIndex::from_str("1").unwrap(), TaskIndex::new(1));
        assert_eq!(TaskIndex::from_str("42").unwrap(), TaskIndex::new(42));
        assert_eq!(TaskIndex::from_str("-3").unwrap(), TaskIndex::new(-3));

        for bad in ["", "abc", "3a", "1.5", " 1"] {
            assert!(matches!(
                TaskIndex::from_str(bad),
                Err(TaskzError::InvalidNumber(_))
            ));
        }
    }

    #[test]
    fn test_parse_indexes_tolerates_whitespace_runs() {
        assert_eq!(
            parse_indexes(" 1  3 ").unwrap(),
            vec![TaskIndex::new(1), TaskIndex::new(3)]
        );
        assert!(parse_indexes("1 x").is_err());
    }

    #[test]
    fn test_positions_are_one_based() {
        assert_eq!(TaskIndex::new(1).position(3), Some(0));
        assert_eq!(TaskIndex::new(3).position(3), Some(2));
        assert_eq!(TaskIndex::new(4).position(3), None);
        assert_eq!(TaskIndex::new(0).position(3), None);
        assert_eq!(TaskIndex::new(-1).position(3), None);
        assert_eq!(TaskIndex::from_position(0), TaskIndex::new(1));
    }

    #[test]
    fn test_index_tasks_numbers_without_gaps() {
        let tasks = list_of(&["a", "b", "c"]);
        let listed = index_tasks(&tasks);
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].to_string(), "1. [T][ ] a");
        assert_eq!(listed[2].index, TaskIndex::new(3));
    }

    #[test]
    fn test_resolve_rejects_whole_batch() {
        let tasks = list_of(&["a", "b"]);
        let resolved = resolve_indexes(&tasks, &[TaskIndex::new(2), TaskIndex::new(1)]).unwrap();
        assert_eq!(
            resolved,
            vec![(TaskIndex::new(2), 1), (TaskIndex::new(1), 0)]
        );

        let err = resolve_indexes(&tasks, &[TaskIndex::new(1), TaskIndex::new(3)]).unwrap_err();
        assert!(matches!(
            err,
            TaskzError::IndexOutOfRange { index: 3, len: 2 }
        ));
    }
}
