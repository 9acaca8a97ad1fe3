//! Tone curve formulas evaluated over the 256 table indices.
//!
//! Each formula produces an unrounded channel value for a given index and
//! channel maximum. Rounding and clamping happen in the table builder.

use crate::config::CurveFormula;

/// A closed-form curve from a table index to a channel value.
pub trait ToneCurve: Send + Sync {
    /// Unrounded value of the channel whose maximum is `maximum` at `index`.
    fn channel(&self, index: u8, maximum: f64) -> f64;
}

impl CurveFormula {
    /// Get the curve implementation for this formula.
    pub fn curve(&self) -> Box<dyn ToneCurve> {
        match *self {
            Self::Boost {
                shadow_exponent,
                highlight_exponent,
            } => Box::new(BoostCurve {
                shadow_exponent,
                highlight_exponent,
            }),
            Self::Power { exponent } => Box::new(PowerCurve { exponent }),
        }
    }
}

// ---------------------------------------------------------------------------
// Contrast boost
// ---------------------------------------------------------------------------

/// Blend of two power terms that darkens shadows and lifts highlights.
///
/// ```text
/// x = i / 255
/// t = (255 − i) × x^shadow + i × x^highlight
/// value = max / 255 × t
/// ```
///
/// Both weights sum to 255, so `t` stays in `[0, 255]` and reaches 255 at
/// `i = 255`.
#[derive(Debug, Clone, Copy)]
pub struct BoostCurve {
    pub shadow_exponent: f64,
    pub highlight_exponent: f64,
}

impl ToneCurve for BoostCurve {
    fn channel(&self, index: u8, maximum: f64) -> f64 {
        let i = f64::from(index);
        let x = i / 255.0;
        let t = (255.0 - i) * x.powf(self.shadow_exponent) + i * x.powf(self.highlight_exponent);
        maximum / 255.0 * t
    }
}

// ---------------------------------------------------------------------------
// Power curve
// ---------------------------------------------------------------------------

/// Single power-law gamma scaled to the channel maximum.
///
/// ```text
/// t = (i / 255)^exponent
/// value = max × t
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PowerCurve {
    pub exponent: f64,
}

impl ToneCurve for PowerCurve {
    fn channel(&self, index: u8, maximum: f64) -> f64 {
        let t = (f64::from(index) / 255.0).powf(self.exponent);
        maximum * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_boost_endpoints() {
        let curve = BoostCurve {
            shadow_exponent: 2.0,
            highlight_exponent: 0.35,
        };
        assert!(curve.channel(0, 255.0).abs() < EPSILON);
        assert!((curve.channel(255, 255.0) - 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_boost_midpoint_matches_formula() {
        let curve = BoostCurve {
            shadow_exponent: 2.0,
            highlight_exponent: 0.35,
        };
        let x: f64 = 128.0 / 255.0;
        let expected = 127.0 * x * x + 128.0 * x.powf(0.35);
        assert!((curve.channel(128, 255.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_boost_scales_by_maximum_over_255() {
        let curve = BoostCurve {
            shadow_exponent: 2.0,
            highlight_exponent: 0.35,
        };
        let full = curve.channel(200, 255.0);
        let half = curve.channel(200, 127.5);
        assert!((half - full / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_power_endpoints_reach_maximum() {
        let curve = PowerCurve { exponent: 1.1091 };
        for max in [225.0, 237.0, 255.0] {
            assert!(curve.channel(0, max).abs() < EPSILON);
            assert!((curve.channel(255, max) - max).abs() < EPSILON);
        }
    }

    #[test]
    fn test_power_exponent_one_is_linear() {
        let curve = PowerCurve { exponent: 1.0 };
        for i in [0u8, 1, 64, 128, 254, 255] {
            assert!((curve.channel(i, 255.0) - f64::from(i)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_formula_dispatches_to_matching_curve() {
        let formula = CurveFormula::Power { exponent: 2.0 };
        let curve = formula.curve();
        assert!((curve.channel(51, 255.0) - 255.0 * 0.04).abs() < EPSILON);
    }
}
