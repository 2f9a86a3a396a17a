use std::collections::HashSet;

use evalrun_parser::{Prompt, TaskId};

/// Apply the task allow-list and the selection cap, in that order.
///
/// An omitted or empty allow-list retains every prompt; a negative limit
/// clamps to zero. Relative order is preserved throughout, and an empty
/// result is valid.
pub fn select_prompts(
    prompts: Vec<Prompt>,
    include_tasks: Option<&HashSet<TaskId>>,
    limit: Option<i64>,
) -> Vec<Prompt> {
    let mut selected = prompts;

    if let Some(include) = include_tasks.filter(|set| !set.is_empty()) {
        selected.retain(|prompt| include.contains(&prompt.task_id));
    }

    if let Some(limit) = limit {
        selected.truncate(limit.max(0) as usize);
    }

    selected
}
