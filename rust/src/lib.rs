// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use slint::ComponentHandle;

pub mod ui;

mod callback;
pub use callback::*;

pub mod mvc;

/// Creates the window with an empty task list and wires it to the controllers.
pub fn init() -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let model = mvc::TaskListModel::default();

    let task_list_controller = mvc::TaskListController::new(model.clone());
    ui::task_list_adapter::connect(&view_handle, task_list_controller);

    let create_task_controller = mvc::CreateTaskController::new(model);
    ui::create_task_adapter::connect(&view_handle, create_task_controller);

    Ok(view_handle)
}

pub fn run() -> Result<(), slint::PlatformError> {
    init_logging();

    let main_window = init().inspect_err(|err| log::error!("cannot create window: {err}"))?;
    main_window.run().inspect_err(|err| log::error!("event loop failed: {err}"))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    // already logged
    let _ = run();
}

// a second call keeps the logger installed first
fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = env_logger::try_init();

    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Debug);
}
