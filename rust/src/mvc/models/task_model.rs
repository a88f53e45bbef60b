// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use core::fmt;

/// Identifies a task for the lifetime of the [`TaskListState`](super::TaskListState)
/// that created it. Ids are never reused, not even after the task was removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskModel {
    pub id: TaskId,

    // always trimmed and never empty
    pub text: String,
    pub completed: bool,

    // transient: the row shows an inline editor
    pub editing: bool,
}
