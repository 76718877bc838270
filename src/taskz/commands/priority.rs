use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_indexes, TaskIndex};
use crate::task_list::TaskList;

use super::helpers::listed;

pub fn high(tasks: &mut TaskList, indexes: &[TaskIndex]) -> Result<CmdResult> {
    priority_state(tasks, indexes, true)
}

pub fn low(tasks: &mut TaskList, indexes: &[TaskIndex]) -> Result<CmdResult> {
    priority_state(tasks, indexes, false)
}

fn priority_state(
    tasks: &mut TaskList,
    indexes: &[TaskIndex],
    is_high_priority: bool,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(tasks, indexes)?;
    let mut result = CmdResult::default();

    for (index, position) in resolved {
        let updated = tasks.get(position).map(|task| {
            if is_high_priority {
                task.set_high_priority()
            } else {
                task.set_low_priority()
            }
        });
        let Some(task) = updated else {
            continue;
        };

        let level = if is_high_priority { "high" } else { "low" };
        result.add_message(CmdMessage::success(format!(
            "Task set to {} priority ({}): {}",
            level, index, task
        )));
        result.affected_tasks.push(listed(index, &task));
        tasks.replace(position, task);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn sample() -> TaskList {
        vec![Task::todo("a").unwrap(), Task::todo("b").unwrap()].into()
    }

    #[test]
    fn high_priority_tags_task() {
        let mut tasks = sample();
        high(&mut tasks, &[TaskIndex::new(2)]).unwrap();

        assert!(!tasks.get(0).unwrap().is_high_priority());
        assert_eq!(tasks.get(1).unwrap().to_string(), "[T][ ] IMPT! b");
    }

    #[test]
    fn low_priority_untags_task() {
        let mut tasks = sample();
        high(&mut tasks, &[TaskIndex::new(1), TaskIndex::new(2)]).unwrap();
        low(&mut tasks, &[TaskIndex::new(1)]).unwrap();

        assert!(!tasks.get(0).unwrap().is_high_priority());
        assert!(tasks.get(1).unwrap().is_high_priority());
    }

    #[test]
    fn repeated_index_is_harmless() {
        let mut tasks = sample();
        let result = high(&mut tasks, &[TaskIndex::new(1), TaskIndex::new(1)]).unwrap();
        assert_eq!(result.affected_tasks.len(), 2);
        assert_eq!(tasks.get(0).unwrap().to_string(), "[T][ ] IMPT! a");
    }

    #[test]
    fn bad_index_rejects_batch() {
        let mut tasks = sample();
        assert!(high(&mut tasks, &[TaskIndex::new(1), TaskIndex::new(9)]).is_err());
        assert!(!tasks.get(0).unwrap().is_high_priority());
    }
}
