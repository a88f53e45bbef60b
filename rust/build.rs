// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint_build::CompilerConfiguration;
use std::env;

fn main() -> Result<(), slint_build::CompileError> {
    let style = match env::var("TARGET") {
        Ok(target) if target.contains("android") => "material",
        _ => "fluent",
    };

    slint_build::compile_with_config(
        "../ui/index.slint",
        CompilerConfiguration::new().with_style(style.into()),
    )
}
