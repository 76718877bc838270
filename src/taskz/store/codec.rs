use crate::error::{Result, TaskzError};
use crate::model::Task;
use crate::parser;
use crate::task_list::TaskList;

const FIELD_SEPARATOR: &str = ";";

pub fn serialize(tasks: &TaskList) -> Vec<String> {
    tasks
        .into_iter()
        .map(|task| task.to_row().join(FIELD_SEPARATOR))
        .collect()
}

/// Decodes rows into a list, failing on the first invalid row.
///
/// Nothing is skipped: a data file with a single bad line is rejected as a whole,
/// and the error names the 1-based line.
pub fn deserialize<I, S>(rows: I) -> Result<TaskList>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            parser::check_row(row.as_ref())
                .and_then(|fields| Task::from_row(&fields))
                .map_err(|e| TaskzError::CorruptPersistedRow {
                    line: i + 1,
                    reason: e.to_string(),
                })
        })
        .collect()
}
