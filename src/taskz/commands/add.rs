use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TaskIndex;
use crate::model::Task;
use crate::task_list::TaskList;

use super::helpers::{count_message, listed};

pub fn run(tasks: &mut TaskList, task: Task) -> Result<CmdResult> {
    let index = TaskIndex::from_position(tasks.len());
    let entry = listed(index, &task);
    tasks.push(task);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Got it. I've added this task: {}",
            entry.task
        )))
        .with_message(count_message(tasks.len()))
        .with_affected_tasks(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_and_reports_new_count() {
        let mut tasks = TaskList::new();
        run(&mut tasks, Task::todo("first").unwrap()).unwrap();
        let result = run(&mut tasks, Task::event("second /at 2021-05-04").unwrap()).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(result.affected_tasks[0].index, TaskIndex::new(2));
        assert_eq!(
            result.affected_tasks[0].to_string(),
            "2. [E][ ] second (at: 4 May)"
        );
        assert_eq!(
            result.messages[1].content,
            "Now you have 2 tasks in the list."
        );
    }
}
