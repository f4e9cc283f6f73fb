//! Key Namespace Module
//!
//! Builders for the flat, colon-separated key convention used by the
//! backend (`task:<id>`, `tasks:list:<scope>`, `tasks:count:<status>`,
//! `user:<id>`). Keeping key construction in one place keeps bulk
//! invalidation honest: `invalidate_pattern(&keys::prefix_pattern("tasks:"))`
//! reliably hits every task-derived key.

use std::fmt::Display;

/// Key for a single task.
pub fn task(id: impl Display) -> String {
    format!("task:{id}")
}

/// Key for a task listing; `scope` narrows which listing ("all", "user:7").
pub fn task_list(scope: impl Display) -> String {
    format!("tasks:list:{scope}")
}

/// Key for a per-status task count aggregate.
pub fn task_count(status: impl Display) -> String {
    format!("tasks:count:{status}")
}

/// Key for a single user.
pub fn user(id: impl Display) -> String {
    format!("user:{id}")
}

/// Key for the user listing.
pub fn user_list() -> String {
    "users:list".to_string()
}

/// Anchored regex pattern matching every key that starts with `prefix`.
///
/// The prefix is escaped, so ids and other caller-supplied segments cannot
/// smuggle regex syntax into an invalidation.
pub fn prefix_pattern(prefix: &str) -> String {
    format!("^{}", regex::escape(prefix))
}
