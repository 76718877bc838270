use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_indexes, TaskIndex};
use crate::task_list::TaskList;

use super::helpers::{count_message, listed};

pub fn run(tasks: &mut TaskList, indexes: &[TaskIndex]) -> Result<CmdResult> {
    let resolved = resolve_indexes(tasks, indexes)?;
    let mut result = CmdResult::default();

    for (index, position) in &resolved {
        if let Some(task) = tasks.get(*position) {
            result.add_message(CmdMessage::success(format!(
                "Noted. I've removed this task ({}): {}",
                index, task
            )));
            result.affected_tasks.push(listed(*index, task));
        }
    }

    // Highest positions first so the remaining ones stay valid.
    let mut positions: Vec<usize> = resolved.iter().map(|(_, position)| *position).collect();
    positions.sort_unstable_by(|a, b| b.cmp(a));
    for position in positions {
        tasks.remove(position);
    }

    result.add_message(count_message(tasks.len()));
    Ok(result)
}
