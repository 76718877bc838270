//! # Command Resolution and Validation
//!
//! Every line a user types goes through [`parse_input`] before anything touches the
//! task list. The first word picks a [`Command`]; the rest of the line is checked
//! against that command's argument grammar and handed back untouched.
//!
//! Validation is strict and ordered: the first rule that fails produces the error,
//! so the same bad input always yields the same message.
//!
//! Persisted rows go through the same validators (see [`check_row`]) with the date
//! marker put back in, so a row is accepted on load exactly when the equivalent
//! command would have been accepted when typed.
//!
//! An argument that is exactly `-h` skips validation for every command. It asks
//! for that command's usage text instead.

use crate::error::{Result, TaskzError};
use crate::index::TaskIndex;
use crate::model::{DEADLINE_MARKER, EVENT_MARKER};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub const HELP_FLAG: &str = "-h";

const ROW_DELIMITER: char = ';';
const ROW_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Bye,
    Clear,
    Deadline,
    Delete,
    Done,
    Event,
    Help,
    HighPriority,
    List,
    Load,
    LowPriority,
    Sample,
    Save,
    Search,
    Sort,
    Todo,
}

impl Command {
    pub const ALL: [Command; 16] = [
        Command::Bye,
        Command::Clear,
        Command::Deadline,
        Command::Delete,
        Command::Done,
        Command::Event,
        Command::Help,
        Command::HighPriority,
        Command::List,
        Command::Load,
        Command::LowPriority,
        Command::Sample,
        Command::Save,
        Command::Search,
        Command::Sort,
        Command::Todo,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Bye => "bye",
            Command::Clear => "clear",
            Command::Deadline => "deadline",
            Command::Delete => "delete",
            Command::Done => "done",
            Command::Event => "event",
            Command::Help => "help",
            Command::HighPriority => "highpriority",
            Command::List => "list",
            Command::Load => "load",
            Command::LowPriority => "lowpriority",
            Command::Sample => "sample",
            Command::Save => "save",
            Command::Search => "search",
            Command::Sort => "sort",
            Command::Todo => "todo",
        }
    }

    /// Checks `args` against this command's grammar.
    pub fn validate(self, args: &str) -> Result<()> {
        if args == HELP_FLAG {
            return Ok(());
        }

        match self {
            Command::Bye
            | Command::Clear
            | Command::Help
            | Command::List
            | Command::Load
            | Command::Sample
            | Command::Save
            | Command::Sort => check_no_argument(args),
            Command::Todo => check_todo(args),
            Command::Deadline => split_dated(args, DEADLINE_MARKER).map(|_| ()),
            Command::Event => split_dated(args, EVENT_MARKER).map(|_| ()),
            Command::Done | Command::Delete => check_unique_indexes(args).map(|_| ()),
            Command::HighPriority | Command::LowPriority => check_indexes(args).map(|_| ()),
            Command::Search => check_search(args),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Command {
    type Err = TaskzError;

    fn from_str(s: &str) -> Result<Self> {
        let command = match s.to_ascii_uppercase().as_str() {
            "BYE" => Command::Bye,
            "CLEAR" => Command::Clear,
            "DEADLINE" => Command::Deadline,
            "DELETE" => Command::Delete,
            "DONE" => Command::Done,
            "EVENT" => Command::Event,
            "HELP" => Command::Help,
            "HIGHPRIORITY" => Command::HighPriority,
            "LIST" => Command::List,
            "LOAD" => Command::Load,
            "LOWPRIORITY" => Command::LowPriority,
            "SAMPLE" => Command::Sample,
            "SAVE" => Command::Save,
            "SEARCH" => Command::Search,
            "SORT" => Command::Sort,
            "TODO" => Command::Todo,
            _ => return Err(TaskzError::UnknownCommand(s.to_string())),
        };
        Ok(command)
    }
}

/// Splits a line into its command and argument string, rejecting anything the
/// command's grammar does not allow.
pub fn parse_input(input: &str) -> Result<(Command, &str)> {
    check_single_line(input)?;
    let (head, args) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));
    let command: Command = head.parse()?;
    command.validate(args)?;
    Ok((command, args))
}

/// Accepts only a literal `y` or `n`.
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(TaskzError::InvalidYesNo),
    }
}

/// Validates one line of the data file and returns its logical fields: four for a
/// todo, five for a deadline or event.
///
/// The date of a dated row is taken from the last delimiter, so descriptions may
/// themselves contain `;`.
pub fn check_row(row: &str) -> Result<Vec<&str>> {
    let fields: Vec<&str> = row.splitn(ROW_FIELDS, ROW_DELIMITER).collect();
    if fields.len() != ROW_FIELDS {
        return Err(TaskzError::InvalidFormat(format!(
            "expected {} fields separated by \"{}\", found {}",
            ROW_FIELDS,
            ROW_DELIMITER,
            fields.len()
        )));
    }
    parse_flag(fields[1]).map_err(|_| {
        TaskzError::InvalidFormat(format!("done column should be 0 or 1, not \"{}\"", fields[1]))
    })?;
    parse_flag(fields[2]).map_err(|_| {
        TaskzError::InvalidFormat(format!(
            "priority column should be 0 or 1, not \"{}\"",
            fields[2]
        ))
    })?;

    let rest = fields[3];
    match fields[0] {
        "T" => {
            check_todo(rest)?;
            Ok(fields)
        }
        "D" => check_dated_row(&fields, rest, DEADLINE_MARKER),
        "E" => check_dated_row(&fields, rest, EVENT_MARKER),
        other => Err(TaskzError::InvalidFormat(format!(
            "\"{}\" is not a valid task type",
            other
        ))),
    }
}

fn check_dated_row<'a>(fields: &[&'a str], rest: &'a str, marker: &str) -> Result<Vec<&'a str>> {
    let (description, date) = rest.rsplit_once(ROW_DELIMITER).ok_or_else(|| {
        TaskzError::InvalidFormat(format!("\"{}\" row is missing its date", fields[0]))
    })?;
    split_dated(&format!("{} {} {}", description, marker, date), marker)?;

    let mut logical = fields[..3].to_vec();
    logical.push(description);
    logical.push(date);
    Ok(logical)
}

pub fn parse_flag(field: &str) -> Result<bool> {
    match field {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(TaskzError::InvalidFormat(format!(
            "\"{}\" should be 0 or 1",
            other
        ))),
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !well_shaped {
        return Err(TaskzError::InvalidDateFormat(input.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| TaskzError::InvalidDateFormat(input.to_string()))
}

fn check_no_argument(args: &str) -> Result<()> {
    if !args.is_empty() {
        return Err(TaskzError::InvalidFormat(format!(
            "{} is not a valid argument!",
            args
        )));
    }
    Ok(())
}

/// Rows are newline-delimited on disk, so no stored text may span lines.
fn check_single_line(text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(TaskzError::InvalidFormat(
            "Please keep each command on a single line!".to_string(),
        ));
    }
    Ok(())
}

pub fn check_todo(args: &str) -> Result<()> {
    check_single_line(args)?;
    if args.trim().is_empty() {
        return Err(TaskzError::InvalidFormat(
            "Please include a description of the Todo!".to_string(),
        ));
    }
    Ok(())
}

fn check_search(args: &str) -> Result<()> {
    if args.is_empty() {
        return Err(TaskzError::InvalidFormat(
            "Enter a keyword to search!".to_string(),
        ));
    }
    Ok(())
}

/// Splits `<description> <marker> <date>` into its description and parsed date.
///
/// The marker must be surrounded by single spaces and appear exactly once, with
/// something on both sides of it.
pub fn split_dated<'a>(input: &'a str, marker: &str) -> Result<(&'a str, NaiveDate)> {
    let separator = format!(" {} ", marker);
    let parts: Vec<&str> = input.split(separator.as_str()).collect();
    match parts.as_slice() {
        [description, date] => {
            check_single_line(description)?;
            if description.trim().is_empty() || date.is_empty() {
                return Err(TaskzError::InvalidFormat(format!(
                    "Both a description and a date are needed around \"{}\"",
                    marker
                )));
            }
            Ok((*description, parse_date(date)?))
        }
        [_] => Err(TaskzError::InvalidFormat(format!(
            "Description and date should be separated by \"{}\"",
            marker
        ))),
        _ => Err(TaskzError::InvalidFormat(format!(
            "Please do not use \"{}\" multiple times!",
            marker
        ))),
    }
}

/// Index list for `done` and `delete`: single spaces only, no repeats.
fn check_unique_indexes(args: &str) -> Result<Vec<TaskIndex>> {
    if args.is_empty() {
        return Err(TaskzError::InvalidFormat(
            "Please input a task number!".to_string(),
        ));
    }

    let mut indexes = Vec::new();
    for token in args.split(' ') {
        if token.is_empty() {
            return Err(TaskzError::InvalidFormat(
                "Please only leave one space between numbers!".to_string(),
            ));
        }
        indexes.push(token.parse::<TaskIndex>()?);
    }

    let mut sorted = indexes.clone();
    sorted.sort_unstable();
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(TaskzError::DuplicateIndex(pair[0].get()));
    }
    Ok(indexes)
}

/// Index list for the priority commands.
fn check_indexes(args: &str) -> Result<Vec<TaskIndex>> {
    if args.trim().is_empty() {
        return Err(TaskzError::InvalidFormat(
            "Please input a task number!".to_string(),
        ));
    }
    args.split_whitespace()
        .map(str::parse::<TaskIndex>)
        .collect()
}
