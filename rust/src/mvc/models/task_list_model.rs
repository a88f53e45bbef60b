// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskId, TaskListChange, TaskListState, TaskModel};

/// Shared, observable handle on a [`TaskListState`].
///
/// Clones share the same state. Every mutation goes through [`Self::update`],
/// which forwards the reported [`TaskListChange`] to the attached views.
#[derive(Clone, Default)]
pub struct TaskListModel {
    state: Rc<RefCell<TaskListState>>,
    notify: Rc<ModelNotify>,
}

impl TaskListModel {
    pub fn new(state: TaskListState) -> Self {
        Self { state: Rc::new(RefCell::new(state)), notify: Rc::new(Default::default()) }
    }

    /// Runs `f` on the state, then notifies views about the rows it touched.
    pub fn update(
        &self,
        f: impl FnOnce(&mut TaskListState) -> Option<TaskListChange>,
    ) -> Option<TaskListChange> {
        // the borrow must end before notifying, views read back row data
        let change = f(&mut self.state.borrow_mut())?;

        match change {
            TaskListChange::Added(index) => self.notify.row_added(index, 1),
            TaskListChange::Changed(index) => self.notify.row_changed(index),
            TaskListChange::Removed(index) => self.notify.row_removed(index, 1),
            TaskListChange::EditingMoved { stopped, started } => {
                for index in stopped.into_iter().chain(started) {
                    self.notify.row_changed(index);
                }
            }
        }

        Some(change)
    }

    /// Reads the state without going through change notification.
    pub fn with_state<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Changes the state in a way no row shows, such as the compose text.
    pub fn with_state_mut<R>(&self, f: impl FnOnce(&mut TaskListState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub fn id_at(&self, row: usize) -> Option<TaskId> {
        self.with_state(|state| state.tasks().get(row).map(|task| task.id))
    }
}

impl Model for TaskListModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.state.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.state.borrow().tasks().get(row).cloned()
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}
