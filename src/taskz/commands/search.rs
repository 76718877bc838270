use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_tasks;
use crate::task_list::TaskList;

/// Case-sensitive substring match on descriptions. Matches keep the index they
/// have in the full list.
pub fn run(tasks: &TaskList, keyword: &str) -> Result<CmdResult> {
    let matches: Vec<_> = index_tasks(tasks)
        .into_iter()
        .filter(|entry| entry.task.description().contains(keyword))
        .collect();

    let message = if matches.is_empty() {
        CmdMessage::info(format!("No tasks match \"{}\".", keyword))
    } else {
        CmdMessage::info(format!(
            "Found {} matching task(s) for \"{}\".",
            matches.len(),
            keyword
        ))
    };

    Ok(CmdResult::default()
        .with_listed_tasks(matches)
        .with_message(message))
}
