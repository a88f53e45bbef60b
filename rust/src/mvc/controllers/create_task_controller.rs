// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::Callback;
use crate::mvc::{CreateTaskModel, TaskListModel};

/// Owns the compose text of the next task and adds it to the list.
pub struct CreateTaskController {
    model: TaskListModel,
    refresh_callback: Callback<CreateTaskModel>,
    can_add_changed_callback: Callback<bool>,
}

impl CreateTaskController {
    pub fn new(model: TaskListModel) -> Rc<Self> {
        Rc::new(Self {
            model,
            refresh_callback: Callback::default(),
            can_add_changed_callback: Callback::default(),
        })
    }

    pub fn create_task_model(&self) -> CreateTaskModel {
        self.model.with_state(|state| CreateTaskModel {
            text: state.compose_text().into(),
            can_add: state.can_add(),
        })
    }

    pub fn can_add(&self) -> bool {
        self.model.with_state(|state| state.can_add())
    }

    /// The text field already shows `text`, so only `can_add` is reported back.
    pub fn set_compose_text(&self, text: &str) {
        let could_add = self.can_add();
        self.model.with_state_mut(|state| state.set_compose_text(text));

        let can_add = self.can_add();
        if can_add != could_add {
            self.can_add_changed_callback.invoke(&can_add);
        }
    }

    /// Adds the composed task, then refreshes the compose bar, which is empty again.
    pub fn add_task(&self) {
        if self.model.update(|state| state.add_task()).is_some() {
            self.refresh();
        }
    }

    pub fn refresh(&self) {
        self.refresh_callback.invoke(&self.create_task_model());
    }

    pub fn on_refresh(&self, mut callback: impl FnMut(CreateTaskModel) + 'static) {
        self.refresh_callback.on(move |model| callback(model.clone()));
    }

    pub fn on_can_add_changed(&self, mut callback: impl FnMut(bool) + 'static) {
        self.can_add_changed_callback.on(move |can_add| callback(*can_add));
    }
}
