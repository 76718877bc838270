use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_indexes, TaskIndex};
use crate::task_list::TaskList;

use super::helpers::listed;

pub fn run(tasks: &mut TaskList, indexes: &[TaskIndex]) -> Result<CmdResult> {
    let resolved = resolve_indexes(tasks, indexes)?;
    let mut result = CmdResult::default();

    for (index, position) in resolved {
        let Some(task) = tasks.get(position).map(|t| t.mark_done()) else {
            continue;
        };
        result.add_message(CmdMessage::success(format!(
            "Nice! I've marked this task as done ({}): {}",
            index, task
        )));
        result.affected_tasks.push(listed(index, &task));
        tasks.replace(position, task);
    }

    Ok(result)
}
