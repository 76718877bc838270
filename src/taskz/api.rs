//! # API Facade
//!
//! [`TaskzApi`] is the single entry point a front end talks to. It owns one
//! session: the in-memory task list, the store it saves to, and whether a yes/no
//! confirmation is pending.
//!
//! ## Request / Response
//!
//! A front end hands over raw input lines with [`TaskzApi::submit`] and gets back a
//! [`Response`]:
//! - `Message`: the command ran; render the [`CmdResult`].
//! - `Error`: the line was rejected; nothing changed.
//! - `Shutdown`: the user confirmed `bye`; the front end should exit.
//!
//! The facade never prints and never exits the process.
//!
//! ## Confirmations
//!
//! `bye` and `clear` do not act immediately. They ask a yes/no question and the
//! next submitted line is read as the answer: `y` proceeds, `n` cancels, anything
//! else is rejected with `InvalidYesNo` and the question stays open.

use crate::commands;
use crate::error::{Result, TaskzError};
use crate::index::parse_indexes;
use crate::model::Task;
use crate::parser::{self, Command, HELP_FLAG};
use crate::store::DataStore;
use crate::task_list::TaskList;
use tracing::debug;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// Outcome of one submitted line.
#[derive(Debug)]
pub enum Response {
    Message(CmdResult),
    Error(TaskzError),
    Shutdown,
}

impl Response {
    pub fn is_shutdown(&self) -> bool {
        matches!(self, Response::Shutdown)
    }

    /// Plain-text form of the response, for front ends without styling.
    pub fn text(&self) -> String {
        match self {
            Response::Message(result) => result.to_string(),
            Response::Error(e) => e.to_string(),
            Response::Shutdown => "Bye. Hope to see you again soon!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Exit,
    Clear,
}

/// The main API facade for taskz operations.
///
/// Generic over `DataStore` so sessions can run against a file or memory.
pub struct TaskzApi<S: DataStore> {
    store: S,
    tasks: TaskList,
    pending: Option<Pending>,
}

impl<S: DataStore> TaskzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: TaskList::new(),
            pending: None,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the next line will be read as a yes/no answer.
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    /// Loads the stored list, keeping the current one if the store is corrupt.
    pub fn load(&mut self) -> Result<CmdResult> {
        commands::storage::load(&self.store, &mut self.tasks)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::storage::save(&mut self.store, &self.tasks)
    }

    /// Runs one raw input line.
    pub fn submit(&mut self, line: &str) -> Response {
        let line = line.trim();
        let outcome = match self.pending {
            Some(pending) => self.answer(pending, line),
            None => self.dispatch(line),
        };
        outcome.unwrap_or_else(Response::Error)
    }

    fn answer(&mut self, pending: Pending, line: &str) -> Result<Response> {
        let confirmed = parser::parse_yes_no(line)?;
        self.pending = None;
        debug!(?pending, confirmed, "confirmation answered");

        if !confirmed {
            return Ok(Response::Message(
                CmdResult::default().with_message(CmdMessage::info("Okay, never mind.")),
            ));
        }
        match pending {
            Pending::Exit => Ok(Response::Shutdown),
            Pending::Clear => commands::clear::run(&mut self.tasks).map(Response::Message),
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Response> {
        let (command, args) = parser::parse_input(line)?;
        debug!(%command, args, "dispatching");

        if args == HELP_FLAG {
            return commands::help::run(Some(command)).map(Response::Message);
        }

        let result = match command {
            Command::Bye => self.ask(Pending::Exit, "Are you sure you want to exit? (y/n)"),
            Command::Clear => self.ask(
                Pending::Clear,
                "This removes every task. Are you sure? (y/n)",
            ),
            Command::Help => commands::help::run(None)?,
            Command::List => commands::list::run(&self.tasks)?,
            Command::Load => self.load()?,
            Command::Save => self.save()?,
            Command::Sample => commands::sample::run(&mut self.tasks)?,
            Command::Search => commands::search::run(&self.tasks, args)?,
            Command::Sort => commands::sort::run(&mut self.tasks)?,
            Command::Todo => commands::add::run(&mut self.tasks, Task::todo(args)?)?,
            Command::Deadline => commands::add::run(&mut self.tasks, Task::deadline(args)?)?,
            Command::Event => commands::add::run(&mut self.tasks, Task::event(args)?)?,
            Command::Done => commands::done::run(&mut self.tasks, &parse_indexes(args)?)?,
            Command::Delete => commands::delete::run(&mut self.tasks, &parse_indexes(args)?)?,
            Command::HighPriority => {
                commands::priority::high(&mut self.tasks, &parse_indexes(args)?)?
            }
            Command::LowPriority => {
                commands::priority::low(&mut self.tasks, &parse_indexes(args)?)?
            }
        };
        Ok(Response::Message(result))
    }

    fn ask(&mut self, pending: Pending, question: &str) -> CmdResult {
        self.pending = Some(pending);
        CmdResult::default().with_message(CmdMessage::warning(question))
    }
}
