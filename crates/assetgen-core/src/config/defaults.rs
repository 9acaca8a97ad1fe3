//! Named constants behind the preset configurations.

/// Number of rows in every generated lookup table.
pub const TABLE_SIZE: usize = 256;

/// Largest value a channel can hold.
pub const CHANNEL_LIMIT: u32 = 255;

// Contrast boost curve
/// Exponent on the `(255 - i)` shadow term of the boost curve.
pub const BOOST_SHADOW_EXPONENT: f64 = 2.0;
/// Exponent on the `i` highlight term of the boost curve.
pub const BOOST_HIGHLIGHT_EXPONENT: f64 = 0.35;
/// Per-channel maxima of the boost table.
pub const BOOST_MAXIMA: [u32; 3] = [255, 255, 255];
/// Output file of the boost table.
pub const BOOST_OUTPUT: &str = "contrast_boost_d93.txt";

// D93 to sRGB curve
/// Power-curve exponent of the D93 table.
pub const D93_EXPONENT: f64 = 1.1091;
/// Per-channel maxima of the D93 table, giving the bluish D93 white point.
pub const D93_MAXIMA: [u32; 3] = [225, 237, 255];
/// Output file of the D93 table.
pub const D93_OUTPUT: &str = "d93_to_srgb_lut.txt";

// Bundles
/// Only files whose name ends in this suffix are bundled.
pub const BUNDLE_SUFFIX: &str = ".txt";
/// Root directory of the filter definitions.
pub const FILTERS_ROOT: &str = "Filters";
/// Script emitted for the filter definitions.
pub const FILTERS_OUTPUT: &str = "filters.js";
/// Global the filters script assigns.
pub const FILTERS_VARIABLE: &str = "window.filters";
/// Root directory of the gamma tables.
pub const GAMMAS_ROOT: &str = "Gamma";
/// Script emitted for the gamma tables.
pub const GAMMAS_OUTPUT: &str = "gammas.js";
/// Global the gammas script assigns.
pub const GAMMAS_VARIABLE: &str = "window.gammas";
