// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task_model;
pub use task_model::{TaskId, TaskModel};

mod create_task_model;
pub use create_task_model::CreateTaskModel;

mod task_list_state;
pub use task_list_state::{TaskListChange, TaskListState};

mod task_list_model;
pub use task_list_model::TaskListModel;
