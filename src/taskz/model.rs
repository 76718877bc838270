//! Task values.
//!
//! A [`Task`] never changes once built. Marking it done or changing its priority
//! returns a fresh value with that single field flipped, so a list can swap the
//! old value out without any other holder observing the change.

use crate::error::{Result, TaskzError};
use crate::parser;
use chrono::NaiveDate;
use std::fmt;

pub const DEADLINE_MARKER: &str = "/by";
pub const EVENT_MARKER: &str = "/at";

const PRIORITY_TAG: &str = "IMPT! ";
const DATE_DISPLAY_FORMAT: &str = "%-d %b";
const DATE_ROW_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline(NaiveDate),
    Event(NaiveDate),
}

impl TaskKind {
    /// Single-letter code used both in the rendering and in persisted rows.
    pub fn code(&self) -> &'static str {
        match self {
            TaskKind::Todo => "T",
            TaskKind::Deadline(_) => "D",
            TaskKind::Event(_) => "E",
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline(date) | TaskKind::Event(date) => Some(*date),
        }
    }

    fn date_label(&self) -> Option<&'static str> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline(_) => Some("by"),
            TaskKind::Event(_) => Some("at"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    kind: TaskKind,
    description: String,
    is_done: bool,
    is_high_priority: bool,
}

impl Task {
    fn new(kind: TaskKind, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            is_done: false,
            is_high_priority: false,
        }
    }

    /// Builds a todo from the argument of a `todo` command.
    pub fn todo(input: &str) -> Result<Self> {
        parser::check_todo(input)?;
        Ok(Self::new(TaskKind::Todo, input))
    }

    /// Builds a deadline from `<description> /by <YYYY-MM-DD>`.
    pub fn deadline(input: &str) -> Result<Self> {
        let (description, date) = parser::split_dated(input, DEADLINE_MARKER)?;
        Ok(Self::new(TaskKind::Deadline(date), description))
    }

    /// Builds an event from `<description> /at <YYYY-MM-DD>`.
    pub fn event(input: &str) -> Result<Self> {
        let (description, date) = parser::split_dated(input, EVENT_MARKER)?;
        Ok(Self::new(TaskKind::Event(date), description))
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn is_high_priority(&self) -> bool {
        self.is_high_priority
    }

    pub fn mark_done(&self) -> Self {
        Self {
            is_done: true,
            ..self.clone()
        }
    }

    pub fn set_high_priority(&self) -> Self {
        Self {
            is_high_priority: true,
            ..self.clone()
        }
    }

    pub fn set_low_priority(&self) -> Self {
        Self {
            is_high_priority: false,
            ..self.clone()
        }
    }

    /// Fields of the persisted row, in file order.
    pub fn to_row(&self) -> Vec<String> {
        let mut fields = vec![
            self.kind.code().to_string(),
            flag_field(self.is_done).to_string(),
            flag_field(self.is_high_priority).to_string(),
            self.description.clone(),
        ];
        if let Some(date) = self.kind.date() {
            fields.push(date.format(DATE_ROW_FORMAT).to_string());
        }
        fields
    }

    /// Rebuilds a task from the fields produced by [`Task::to_row`].
    ///
    /// Callers are expected to have run [`parser::check_row`] first; anything that
    /// still does not fit is reported rather than trusted.
    pub fn from_row<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        let fields: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
        let (code, done, priority, description, date) = match fields.as_slice() {
            [code, done, priority, description] => (*code, *done, *priority, *description, None),
            [code, done, priority, description, date] => {
                (*code, *done, *priority, *description, Some(*date))
            }
            _ => {
                return Err(TaskzError::InvalidFormat(format!(
                    "Expected 4 or 5 fields, found {}",
                    fields.len()
                )))
            }
        };

        let kind = match (code, date) {
            ("T", None) => TaskKind::Todo,
            ("D", Some(date)) => TaskKind::Deadline(parser::parse_date(date)?),
            ("E", Some(date)) => TaskKind::Event(parser::parse_date(date)?),
            _ => {
                return Err(TaskzError::InvalidFormat(format!(
                    "\"{}\" row has the wrong shape",
                    code
                )))
            }
        };

        Ok(Self {
            kind,
            description: description.to_string(),
            is_done: parser::parse_flag(done)?,
            is_high_priority: parser::parse_flag(priority)?,
        })
    }
}

fn flag_field(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.is_done { "X" } else { " " };
        let priority = if self.is_high_priority {
            PRIORITY_TAG
        } else {
            ""
        };
        write!(
            f,
            "[{}][{}] {}{}",
            self.kind.code(),
            done,
            priority,
            self.description
        )?;
        if let (Some(label), Some(date)) = (self.kind.date_label(), self.kind.date()) {
            write!(f, " ({}: {})", label, date.format(DATE_DISPLAY_FORMAT))?;
        }
        Ok(())
    }
}
