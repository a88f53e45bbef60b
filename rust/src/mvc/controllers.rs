// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod create_task_controller;
pub use create_task_controller::*;

mod task_list_controller;
pub use task_list_controller::*;
