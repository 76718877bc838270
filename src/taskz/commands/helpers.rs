use crate::commands::CmdMessage;
use crate::index::{ListedTask, TaskIndex};
use crate::model::Task;

pub fn count_message(len: usize) -> CmdMessage {
    let noun = if len == 1 { "task" } else { "tasks" };
    CmdMessage::info(format!("Now you have {} {} in the list.", len, noun))
}

pub fn listed(index: TaskIndex, task: &Task) -> ListedTask {
    ListedTask {
        index,
        task: task.clone(),
    }
}
