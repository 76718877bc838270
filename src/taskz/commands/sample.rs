use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_tasks;
use crate::store::codec;
use crate::task_list::TaskList;

const SAMPLE_ROWS: &[&str] = &[
    "T;0;1;Read the onboarding guide",
    "D;0;0;Submit expense report;2026-03-31",
    "E;1;0;Team retrospective;2026-01-15",
    "T;1;0;Buy groceries",
    "D;0;1;Renew passport;2026-06-01",
    "E;0;0;Dentist appointment;2026-02-03",
];

/// Replaces the current list with a fixed set of demonstration tasks.
pub fn run(tasks: &mut TaskList) -> Result<CmdResult> {
    *tasks = codec::deserialize(SAMPLE_ROWS)?;
    Ok(CmdResult::default()
        .with_listed_tasks(index_tasks(tasks))
        .with_message(CmdMessage::success(format!(
            "Loaded {} sample tasks.",
            tasks.len()
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    #[test]
    fn replaces_list_with_samples() {
        let mut tasks: TaskList = vec![Task::todo("mine").unwrap()].into();
        let result = run(&mut tasks).unwrap();

        assert_eq!(tasks.len(), SAMPLE_ROWS.len());
        assert_eq!(result.listed_tasks.len(), SAMPLE_ROWS.len());
        assert_eq!(
            result.listed_tasks[0].to_string(),
            "1. [T][ ] IMPT! Read the onboarding guide"
        );
        assert!(tasks.iter().all(|t| t.description() != "mine"));
    }
}
