//! Write the D93 to sRGB lookup table.

use std::process::ExitCode;

use assetgen_cli::{Task, main_for};

fn main() -> ExitCode {
    main_for(Task::D93Gamma)
}
