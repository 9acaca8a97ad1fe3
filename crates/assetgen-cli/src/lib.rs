//! Shared entry point for the asset generation binaries.
//!
//! Each binary runs exactly one [`Task`] against the working directory.
//! There are no flags; log verbosity follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use assetgen_core::{BundleConfig, CurveConfig, bundle_directory, generate_curve};
use tracing::error;

/// One asset generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    BoostGamma,
    D93Gamma,
    FiltersJs,
    GammasJs,
}

impl Task {
    pub fn run(self) -> assetgen_core::Result<()> {
        match self {
            Self::BoostGamma => generate_curve(&CurveConfig::boost()).map(drop),
            Self::D93Gamma => generate_curve(&CurveConfig::d93()).map(drop),
            Self::FiltersJs => bundle_directory(&BundleConfig::filters()).map(drop),
            Self::GammasJs => bundle_directory(&BundleConfig::gammas()).map(drop),
        }
    }
}

/// Install the fmt subscriber with an `info` default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Run `task` and map the outcome to an exit status.
pub fn main_for(task: Task) -> ExitCode {
    init_logging();
    match task.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{task:?} failed: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetgen_core::Error;

    #[test]
    fn test_bundle_task_fails_without_root_directory() {
        // Tests run from the package directory, which has no `Gamma` folder.
        let err = Task::GammasJs.run().unwrap_err();
        assert!(matches!(err, Error::MissingRoot(_)), "{err}");
        assert!(!std::path::Path::new("gammas.js").exists());
    }
}
