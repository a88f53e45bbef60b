// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! The task list and the text of the task being composed, together with the
//! only operations allowed to change them.
//!
//! Every operation is total: blank text and unknown ids are no-ops, never
//! errors. Mutating operations report which rows they touched so that a view
//! can update incrementally, see [`TaskListChange`].

use super::{TaskId, TaskModel};

/// Rows touched by a single operation on [`TaskListState`].
///
/// Indices refer to [`TaskListState::tasks`] *after* the operation, except for
/// [`TaskListChange::Removed`] which names the index the task occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskListChange {
    Added(usize),
    Changed(usize),
    Removed(usize),
    /// The editing flag moved. `stopped` lost it, `started` gained it.
    EditingMoved { stopped: Option<usize>, started: Option<usize> },
}

#[derive(Clone, Debug)]
pub struct TaskListState {
    // newest first
    tasks: Vec<TaskModel>,
    compose_text: String,
    next_id: u64,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self { tasks: Vec::new(), compose_text: String::new(), next_id: 1 }
    }
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[TaskModel] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, id: TaskId) -> Option<&TaskModel> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// The task currently showing an inline editor, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.tasks.iter().find(|task| task.editing).map(|task| task.id)
    }

    pub fn compose_text(&self) -> &str {
        &self.compose_text
    }

    /// Whether [`Self::add_task`] would add something right now.
    pub fn can_add(&self) -> bool {
        !self.compose_text.trim().is_empty()
    }

    /// Replaces the compose text as typed. The text is only trimmed when the
    /// task is added, so the input field keeps showing what the user entered.
    pub fn set_compose_text(&mut self, text: impl Into<String>) {
        self.compose_text = text.into();
        log::trace!("compose text changed, can add: {}", self.can_add());
    }

    /// Prepends a task made from the trimmed compose text and clears the
    /// compose text. Does nothing while [`Self::can_add`] is false.
    pub fn add_task(&mut self) -> Option<TaskListChange> {
        let text = self.compose_text.trim();
        if text.is_empty() {
            log::debug!("ignoring add of blank task");
            return None;
        }

        let id = TaskId::new(self.next_id);
        // ids are handed out once; an exhausted counter refuses further adds
        self.next_id = self.next_id.checked_add(1)?;

        self.tasks.insert(0, TaskModel { id, text: text.to_string(), ..Default::default() });
        self.compose_text.clear();

        log::debug!("added task {id}");
        Some(TaskListChange::Added(0))
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Option<TaskListChange> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;

        log::debug!("task {id} completed: {}", task.completed);
        Some(TaskListChange::Changed(index))
    }

    /// Opens the inline editor on `id` and closes it everywhere else. With an
    /// unknown `id` this still closes any open editor.
    pub fn start_editing(&mut self, id: TaskId) -> Option<TaskListChange> {
        let mut stopped = None;
        let mut started = None;

        for (index, task) in self.tasks.iter_mut().enumerate() {
            let editing = task.id == id;
            if task.editing == editing {
                continue;
            }

            task.editing = editing;
            if editing {
                started = Some(index);
            } else {
                stopped = Some(index);
            }
        }

        if stopped.is_none() && started.is_none() {
            return None;
        }

        log::debug!("editing task {id}");
        Some(TaskListChange::EditingMoved { stopped, started })
    }

    /// Stores the trimmed `text` and closes the editor. Blank text is refused
    /// and leaves the editor open, so the user can retry or cancel.
    pub fn save_editing(&mut self, id: TaskId, text: &str) -> Option<TaskListChange> {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("ignoring blank text for task {id}");
            return None;
        }

        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.text = text.to_string();
        task.editing = false;

        log::debug!("saved task {id}");
        Some(TaskListChange::Changed(index))
    }

    /// Closes the editor on `id`, keeping the stored text.
    pub fn cancel_editing(&mut self, id: TaskId) -> Option<TaskListChange> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        if !task.editing {
            return None;
        }
        task.editing = false;

        log::debug!("cancelled editing task {id}");
        Some(TaskListChange::Changed(index))
    }

    pub fn remove_task(&mut self, id: TaskId) -> Option<TaskListChange> {
        let index = self.position(id)?;
        self.tasks.remove(index);

        log::debug!("removed task {id}");
        Some(TaskListChange::Removed(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: &[&str] = &["", " ", "   ", "\t", "\n", " \t\r\n ", "\u{a0}", "\u{2003}"];

    fn state_with(texts: &[&str]) -> TaskListState {
        let mut state = TaskListState::new();
        for text in texts {
            state.set_compose_text(*text);
            state.add_task();
        }
        state
    }

    fn id_of(state: &TaskListState, text: &str) -> TaskId {
        state.tasks().iter().find(|task| task.text == text).unwrap().id
    }

    fn editing_count(state: &TaskListState) -> usize {
        state.tasks().iter().filter(|task| task.editing).count()
    }

    #[test]
    fn test_add_blank_is_ignored() {
        for text in BLANK {
            let mut state = state_with(&["Existing"]);
            let before = state.tasks().to_vec();

            state.set_compose_text(*text);
            assert!(!state.can_add());
            assert_eq!(state.add_task(), None);
            assert_eq!(state.tasks(), before.as_slice());
        }
    }

    #[test]
    fn test_add_prepends_trimmed() {
        for text in ["Buy milk", "  padded  ", "\tx\n", "multi word task", "ünïcödé"] {
            let mut state = state_with(&["Existing"]);
            let len = state.len();

            state.set_compose_text(text);
            assert!(state.can_add());
            assert_eq!(state.add_task(), Some(TaskListChange::Added(0)));

            assert_eq!(state.len(), len + 1);
            let task = &state.tasks()[0];
            assert_eq!(task.text, text.trim());
            assert!(!task.completed);
            assert!(!task.editing);
            assert!(!state.can_add());
            assert_eq!(state.compose_text(), "");
        }
    }

    #[test]
    fn test_compose_text_is_kept_verbatim() {
        let mut state = TaskListState::new();
        state.set_compose_text("  draft ");
        assert_eq!(state.compose_text(), "  draft ");
        assert!(state.can_add());
    }

    #[test]
    fn test_add_then_add_again_with_empty_compose() {
        let mut state = TaskListState::new();
        state.set_compose_text("Buy milk");
        state.add_task();

        assert_eq!(state.len(), 1);
        assert_eq!(state.tasks()[0].text, "Buy milk");
        assert!(!state.tasks()[0].completed);

        assert_eq!(state.add_task(), None);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_newest_first() {
        let state = state_with(&["A", "B"]);
        let texts: Vec<_> = state.tasks().iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, ["B", "A"]);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut state = state_with(&["A", "B", "C"]);
        let removed = id_of(&state, "C");
        state.remove_task(removed);

        state.set_compose_text("D");
        state.add_task();

        let mut ids: Vec<_> = state.tasks().iter().map(|task| task.id).collect();
        assert!(!ids.contains(&removed));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.len());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = state_with(&["A"]);
        let second = state_with(&["B"]);

        first.remove_task(first.tasks()[0].id);
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = state_with(&["A", "B"]);
        let id = id_of(&state, "A");

        assert_eq!(state.toggle_completed(id), Some(TaskListChange::Changed(1)));
        assert!(state.task(id).unwrap().completed);
        state.toggle_completed(id);
        assert!(!state.task(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_keeps_order() {
        let mut state = state_with(&["A", "B", "C"]);
        state.toggle_completed(id_of(&state, "B"));
        let texts: Vec<_> = state.tasks().iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, ["C", "B", "A"]);
    }

    #[test]
    fn test_at_most_one_editing() {
        let mut state = state_with(&["A", "B", "C"]);
        let ids: Vec<_> = state.tasks().iter().map(|task| task.id).collect();

        for id in ids.iter().chain(ids.iter().rev()).chain([&TaskId::new(999)]) {
            state.start_editing(*id);
            assert!(editing_count(&state) <= 1);
        }
    }

    #[test]
    fn test_start_editing_moves_flag() {
        let mut state = state_with(&["A", "B"]);
        let a = id_of(&state, "A");
        let b = id_of(&state, "B");

        assert_eq!(
            state.start_editing(a),
            Some(TaskListChange::EditingMoved { stopped: None, started: Some(1) })
        );
        assert_eq!(
            state.start_editing(b),
            Some(TaskListChange::EditingMoved { stopped: Some(1), started: Some(0) })
        );
        assert_eq!(state.editing(), Some(b));
        assert_eq!(state.start_editing(b), None);
    }

    #[test]
    fn test_start_editing_unknown_id_closes_editor() {
        let mut state = state_with(&["A"]);
        let a = id_of(&state, "A");
        state.start_editing(a);

        assert_eq!(
            state.start_editing(TaskId::new(999)),
            Some(TaskListChange::EditingMoved { stopped: Some(0), started: None })
        );
        assert_eq!(state.editing(), None);
        assert_eq!(state.start_editing(TaskId::new(999)), None);
    }

    #[test]
    fn test_save_blank_keeps_editor_open() {
        let mut state = state_with(&["Task"]);
        let id = id_of(&state, "Task");
        state.start_editing(id);

        for text in BLANK {
            assert_eq!(state.save_editing(id, text), None);
            let task = state.task(id).unwrap();
            assert_eq!(task.text, "Task");
            assert!(task.editing);
        }
    }

    #[test]
    fn test_save_editing() {
        let mut state = state_with(&["Task"]);
        let id = id_of(&state, "Task");
        state.start_editing(id);

        assert_eq!(state.save_editing(id, "  Task v2 "), Some(TaskListChange::Changed(0)));
        let task = state.task(id).unwrap();
        assert_eq!(task.text, "Task v2");
        assert!(!task.editing);
    }

    #[test]
    fn test_cancel_editing() {
        let mut state = state_with(&["Task"]);
        let id = id_of(&state, "Task");
        state.start_editing(id);

        assert_eq!(state.cancel_editing(id), Some(TaskListChange::Changed(0)));
        let task = state.task(id).unwrap();
        assert_eq!(task.text, "Task");
        assert!(!task.editing);
        assert_eq!(state.cancel_editing(id), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut state = state_with(&["A", "B"]);
        let id = id_of(&state, "A");

        assert_eq!(state.remove_task(id), Some(TaskListChange::Removed(1)));
        assert_eq!(state.len(), 1);
        assert_eq!(state.remove_task(id), None);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_unknown_ids_on_empty_list() {
        let mut state = TaskListState::new();
        let id = TaskId::new(42);

        assert_eq!(state.toggle_completed(id), None);
        assert_eq!(state.start_editing(id), None);
        assert_eq!(state.save_editing(id, "text"), None);
        assert_eq!(state.cancel_editing(id), None);
        assert_eq!(state.remove_task(id), None);
        assert!(state.is_empty());
    }
}
