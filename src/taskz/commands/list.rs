use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_tasks;
use crate::task_list::TaskList;

pub fn run(tasks: &TaskList) -> Result<CmdResult> {
    if tasks.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Your task list is empty.")));
    }
    Ok(CmdResult::default().with_listed_tasks(index_tasks(tasks)))
}
