// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::mvc::{TaskId, TaskListModel};

/// Row operations on existing tasks, addressed by [`TaskId`].
pub struct TaskListController {
    model: TaskListModel,
}

impl TaskListController {
    pub fn new(model: TaskListModel) -> Rc<Self> {
        Rc::new(Self { model })
    }

    pub fn model(&self) -> TaskListModel {
        self.model.clone()
    }

    pub fn toggle_completed(&self, id: TaskId) {
        self.model.update(|state| state.toggle_completed(id));
    }

    pub fn start_editing(&self, id: TaskId) {
        self.model.update(|state| state.start_editing(id));
    }

    pub fn save_editing(&self, id: TaskId, text: &str) {
        self.model.update(|state| state.save_editing(id, text));
    }

    pub fn cancel_editing(&self, id: TaskId) {
        self.model.update(|state| state.cancel_editing(id));
    }

    pub fn remove_task(&self, id: TaskId) {
        self.model.update(|state| state.remove_task(id));
    }
}
