// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    mvc::{CreateTaskController, CreateTaskModel},
    ui,
};

pub fn connect(view_handle: &ui::MainWindow, controller: Rc<CreateTaskController>) {
    controller.on_refresh({
        let view_handle = view_handle.as_weak();

        move |create_task_model| {
            if let Some(view_handle) = view_handle.upgrade() {
                apply_create_task_model(&view_handle, create_task_model);
            }
        }
    });

    controller.on_can_add_changed({
        let view_handle = view_handle.as_weak();

        move |can_add| {
            if let Some(view_handle) = view_handle.upgrade() {
                ui::CreateTaskAdapter::get(&view_handle).set_can_add(can_add);
            }
        }
    });

    ui::CreateTaskAdapter::get(view_handle).on_text_edited({
        let controller = controller.clone();

        move |text| {
            controller.set_compose_text(text.as_str());
        }
    });

    ui::CreateTaskAdapter::get(view_handle).on_add_task({
        let controller = controller.clone();

        move || {
            controller.add_task();
        }
    });

    controller.refresh();
}

fn apply_create_task_model(view_handle: &ui::MainWindow, create_task_model: CreateTaskModel) {
    let adapter = ui::CreateTaskAdapter::get(view_handle);
    adapter.set_text(create_task_model.text.into());
    adapter.set_can_add(create_task_model.can_add);
}
