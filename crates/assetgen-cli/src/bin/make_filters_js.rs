//! Bundle `Filters/**/*.txt` into `filters.js`.

use std::process::ExitCode;

use assetgen_cli::{Task, main_for};

fn main() -> ExitCode {
    main_for(Task::FiltersJs)
}
