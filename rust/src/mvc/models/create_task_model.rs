// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// What the compose bar shows.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CreateTaskModel {
    pub text: String,
    pub can_add: bool,
}
