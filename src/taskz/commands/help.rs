use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::parser::Command;

pub fn usage(command: Command) -> &'static str {
    match command {
        Command::Bye => "bye: exit (asks for confirmation)",
        Command::Clear => "clear: remove every task (asks for confirmation)",
        Command::Deadline => "deadline <description> /by <YYYY-MM-DD>: add a task due on a date",
        Command::Delete => "delete <index> [index...]: remove tasks, e.g. delete 2 5",
        Command::Done => "done <index> [index...]: mark tasks as done, e.g. done 1 3",
        Command::Event => "event <description> /at <YYYY-MM-DD>: add a task happening on a date",
        Command::Help => "help: show this list of commands",
        Command::HighPriority => "highpriority <index> [index...]: flag tasks as important",
        Command::List => "list: show every task",
        Command::Load => "load: replace the list with the saved one",
        Command::LowPriority => "lowpriority <index> [index...]: remove the important flag",
        Command::Sample => "sample: replace the list with a set of example tasks",
        Command::Save => "save: write the list to the data file",
        Command::Search => "search <keyword>: show tasks whose description contains the keyword",
        Command::Sort => "sort: unfinished tasks first, then alphabetically",
        Command::Todo => "todo <description>: add a task without a date",
    }
}

/// Usage for one command, or for all of them.
pub fn run(command: Option<Command>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match command {
        Some(command) => result.add_message(CmdMessage::info(usage(command))),
        None => {
            result.add_message(CmdMessage::info(
                "Available commands (add -h to any of them for its usage):",
            ));
            for command in Command::ALL {
                result.add_message(CmdMessage::info(format!("  {}", usage(command))));
            }
        }
    }
    Ok(result)
}
