use std::fmt;

use serde::{Deserialize, Serialize};

/// Short task code derived from a catalog section heading, e.g. "T1".
///
/// Headings without a recognizable leading code resolve to the `T?` sentinel,
/// as do prompts appearing before any heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub const UNRESOLVED: &'static str = "T?";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn unresolved() -> Self {
        Self(Self::UNRESOLVED.to_string())
    }

    /// Map a section heading to its task code.
    ///
    /// Matches a leading `T<digits>` token (ignoring surrounding whitespace)
    /// terminated at a word boundary; anything else falls back to `T?`.
    pub fn from_heading(heading: &str) -> Self {
        let trimmed = heading.trim();
        let Some(rest) = trimmed.strip_prefix('T') else {
            return Self::unresolved();
        };

        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Self::unresolved();
        }

        // The code must not run straight into another identifier character.
        match rest[digits.len()..].chars().next() {
            Some(c) if c.is_alphanumeric() || c == '_' => Self::unresolved(),
            _ => Self(format!("T{digits}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_resolved(&self) -> bool {
        self.0 != Self::UNRESOLVED
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single evaluation prompt, owned by exactly one task.
///
/// Immutable once parsed; `prompt_id` is unique within a task's listing by
/// convention but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub task_id: TaskId,
    pub prompt_id: u32,
    pub text: String,
}

impl Prompt {
    pub fn new(task_id: TaskId, prompt_id: u32, text: impl Into<String>) -> Self {
        Self {
            task_id,
            prompt_id,
            text: text.into(),
        }
    }
}
