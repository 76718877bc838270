use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{codec, DataStore};
use crate::task_list::TaskList;
use tracing::{info, warn};

use super::helpers::count_message;

/// Replaces the in-memory list with the stored one.
///
/// The stored rows are fully decoded before anything is swapped in: a single bad
/// row fails the whole load and `tasks` is left untouched.
pub fn load<S: DataStore>(store: &S, tasks: &mut TaskList) -> Result<CmdResult> {
    let rows = store.load_rows()?;
    let loaded = codec::deserialize(&rows).inspect_err(|e| {
        warn!(location = %store.location(), error = %e, "rejected data file");
    })?;

    *tasks = loaded;
    info!(location = %store.location(), count = tasks.len(), "loaded tasks");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Loaded tasks from {}.",
            store.location()
        )))
        .with_message(count_message(tasks.len())))
}

pub fn save<S: DataStore>(store: &mut S, tasks: &TaskList) -> Result<CmdResult> {
    let rows = codec::serialize(tasks);
    store.save_rows(&rows)?;

    info!(location = %store.location(), count = rows.len(), "saved tasks");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} task(s) to {}.",
        rows.len(),
        store.location()
    ))))
}
