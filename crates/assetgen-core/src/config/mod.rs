//! Configuration for the curve generators and the bundlers.
//!
//! Each component receives one of these structs instead of reading globals.
//! The presets reproduce the four fixed asset-generation steps.

pub mod defaults;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use defaults::*;

/// Closed-form formula that maps a table index to a channel value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveFormula {
    /// Blend of a shadow and a highlight power term:
    /// `t = (255 - i)·(i/255)^shadow + i·(i/255)^highlight`, scaled by `max / 255`.
    Boost {
        shadow_exponent: f64,
        highlight_exponent: f64,
    },
    /// Plain power curve `t = (i/255)^exponent`, scaled by `max`.
    Power { exponent: f64 },
}

impl CurveFormula {
    /// Short human-readable description, used for table headers.
    pub fn describe(&self) -> String {
        match self {
            Self::Boost {
                shadow_exponent,
                highlight_exponent,
            } => format!(
                "contrast boost (255 - i)*(i/255)^{shadow_exponent} + i*(i/255)^{highlight_exponent}"
            ),
            Self::Power { exponent } => format!("power curve (i/255)^{exponent}"),
        }
    }

    fn exponents(&self) -> Vec<f64> {
        match *self {
            Self::Boost {
                shadow_exponent,
                highlight_exponent,
            } => vec![shadow_exponent, highlight_exponent],
            Self::Power { exponent } => vec![exponent],
        }
    }
}

/// Everything a curve generator needs for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Name used in logs.
    pub name: String,
    /// Formula evaluated for every row.
    pub formula: CurveFormula,
    /// Maximum value of the R, G and B channels.
    pub channel_maxima: [u32; 3],
    /// Destination of the rendered table.
    pub output_path: PathBuf,
    /// Text of the `#` comment line at the top of the table.
    pub header: String,
}

impl CurveConfig {
    /// Build a config whose header is derived from the formula and maxima.
    pub fn new(
        name: impl Into<String>,
        formula: CurveFormula,
        channel_maxima: [u32; 3],
        output_path: impl Into<PathBuf>,
    ) -> Self {
        let name = name.into();
        let [r, g, b] = channel_maxima;
        let header = format!(
            "{name}: {}, channel maxima {r}, {g}, {b}",
            formula.describe()
        );
        Self {
            name,
            formula,
            channel_maxima,
            output_path: output_path.into(),
            header,
        }
    }

    /// Contrast boost table. All three channels share the maximum 255.
    pub fn boost() -> Self {
        Self::new(
            "contrast_boost_d93",
            CurveFormula::Boost {
                shadow_exponent: BOOST_SHADOW_EXPONENT,
                highlight_exponent: BOOST_HIGHLIGHT_EXPONENT,
            },
            BOOST_MAXIMA,
            BOOST_OUTPUT,
        )
    }

    /// D93 to sRGB gamma table with distinct per-channel maxima.
    pub fn d93() -> Self {
        Self::new(
            "d93_to_srgb_lut",
            CurveFormula::Power {
                exponent: D93_EXPONENT,
            },
            D93_MAXIMA,
            D93_OUTPUT,
        )
    }

    /// Check the config before any work is done.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.formula.exponents().into_iter().find(|e| !e.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "{}: exponent {bad} is not finite",
                self.name
            )));
        }
        if let Some(max) = self.channel_maxima.iter().find(|&&m| m > CHANNEL_LIMIT) {
            return Err(Error::InvalidConfig(format!(
                "{}: channel maximum {max} exceeds {CHANNEL_LIMIT}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Everything a bundler needs for one directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Directory scanned recursively.
    pub root_directory: PathBuf,
    /// Files whose name ends with this suffix are bundled.
    pub file_suffix: String,
    /// Destination of the emitted script.
    pub output_path: PathBuf,
    /// Global the script assigns, e.g. `window.filters`.
    pub variable_name: String,
    /// Translate `\r\n` and lone `\r` to `\n` while reading.
    #[serde(default = "default_true")]
    pub normalize_newlines: bool,
}

fn default_true() -> bool {
    true
}

impl BundleConfig {
    pub fn new(
        root_directory: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            file_suffix: BUNDLE_SUFFIX.to_string(),
            output_path: output_path.into(),
            variable_name: variable_name.into(),
            normalize_newlines: true,
        }
    }

    pub fn filters() -> Self {
        Self::new(FILTERS_ROOT, FILTERS_OUTPUT, FILTERS_VARIABLE)
    }

    pub fn gammas() -> Self {
        Self::new(GAMMAS_ROOT, GAMMAS_OUTPUT, GAMMAS_VARIABLE)
    }

    /// Check the config before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.file_suffix.is_empty() {
            return Err(Error::InvalidConfig("file suffix is empty".into()));
        }
        if self.variable_name.trim().is_empty() {
            return Err(Error::InvalidConfig("variable name is empty".into()));
        }
        Ok(())
    }
}
