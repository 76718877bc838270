//! # Task List Engine
//!
//! One module per command. Each `run` takes the session's [`TaskList`] (and the
//! store, for `load`/`save`) plus arguments that already passed validation, and
//! returns a [`CmdResult`] describing what happened.
//!
//! Commands that touch several tasks resolve every index before changing anything,
//! so a bad index rejects the whole batch and leaves the list as it was.
//!
//! [`TaskList`]: crate::task_list::TaskList

use crate::index::ListedTask;
use std::fmt;

pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod help;
pub mod helpers;
pub mod list;
pub mod priority;
pub mod sample;
pub mod search;
pub mod sort;
pub mod storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Tasks changed by the command, rendered after the change.
    pub affected_tasks: Vec<ListedTask>,
    /// Tasks the command wants shown (list, search, sort).
    pub listed_tasks: Vec<ListedTask>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<ListedTask>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<ListedTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Plain-text rendering: listed tasks first, then the messages, one per line.
impl fmt::Display for CmdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .listed_tasks
            .iter()
            .map(ToString::to_string)
            .chain(self.messages.iter().map(|m| m.content.clone()));
        for (i, line) in lines.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
