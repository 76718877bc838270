use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::task_list::TaskList;

use super::helpers::count_message;

pub fn run(tasks: &mut TaskList) -> Result<CmdResult> {
    let removed = tasks.len();
    tasks.clear();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Cleared {} task(s).", removed)))
        .with_message(count_message(0)))
}
