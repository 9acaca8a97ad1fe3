//! Assetgen Core — static asset generation for the browser filter tool.
//!
//! Two kinds of build-time steps live here: curve generators that write
//! 256-row RGB lookup tables as text, and bundlers that fold a directory of
//! text files into one script assigning a global. Every step is a single
//! synchronous pass driven by an explicit config.

pub mod bundle;
pub mod config;
pub mod curve;
pub mod error;

// Re-exports for convenience.
pub use bundle::{Bundle, bundle_directory};
pub use config::{BundleConfig, CurveConfig, CurveFormula};
pub use curve::generate_curve;
pub use curve::table::LookupTable;
pub use error::{Error, Result};
