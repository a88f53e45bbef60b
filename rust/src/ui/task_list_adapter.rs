// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    mvc::{TaskId, TaskListController, TaskModel},
    ui,
};

pub fn connect(view_handle: &ui::MainWindow, controller: Rc<TaskListController>) {
    ui::TaskListAdapter::get(view_handle)
        .set_tasks(Rc::new(MapModel::new(controller.model(), map_task_to_item)).into());

    ui::TaskListAdapter::get(view_handle).on_toggle_completed({
        let controller = controller.clone();

        move |index| {
            if let Some(id) = task_id(&controller, index) {
                controller.toggle_completed(id);
            }
        }
    });

    ui::TaskListAdapter::get(view_handle).on_start_editing({
        let controller = controller.clone();

        move |index| {
            if let Some(id) = task_id(&controller, index) {
                controller.start_editing(id);
            }
        }
    });

    ui::TaskListAdapter::get(view_handle).on_save_editing({
        let controller = controller.clone();

        move |index, text| {
            if let Some(id) = task_id(&controller, index) {
                controller.save_editing(id, text.as_str());
            }
        }
    });

    ui::TaskListAdapter::get(view_handle).on_cancel_editing({
        let controller = controller.clone();

        move |index| {
            if let Some(id) = task_id(&controller, index) {
                controller.cancel_editing(id);
            }
        }
    });

    ui::TaskListAdapter::get(view_handle).on_remove_task({
        move |index| {
            if let Some(id) = task_id(&controller, index) {
                controller.remove_task(id);
            }
        }
    });
}

// a row index from the view that no longer exists resolves to nothing
fn task_id(controller: &TaskListController, index: i32) -> Option<TaskId> {
    let id = usize::try_from(index).ok().and_then(|row| controller.model().id_at(row));
    if id.is_none() {
        log::debug!("no task at row {index}");
    }
    id
}

// maps a TaskModel (data) to a TaskItem (ui)
fn map_task_to_item(task: TaskModel) -> ui::TaskItem {
    ui::TaskItem { text: task.text.into(), completed: task.completed, editing: task.editing }
}
