use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_tasks;
use crate::task_list::TaskList;

pub fn run(tasks: &mut TaskList) -> Result<CmdResult> {
    tasks.sort();
    Ok(CmdResult::default()
        .with_listed_tasks(index_tasks(tasks))
        .with_message(CmdMessage::success(
            "Sorted: unfinished tasks first, then by description.",
        )))
}
