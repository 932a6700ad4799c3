use std::fmt;

use serde::{Deserialize, Serialize};

/// Brightness remapping applied to normalized pixel values before display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StretchTransform {
    Linear,
    #[default]
    Logarithmic,
    SquareRoot,
}

impl StretchTransform {
    pub const ALL: &[Self] = &[Self::Linear, Self::Logarithmic, Self::SquareRoot];

    /// Short name used in menus and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Logarithmic => "Log",
            Self::SquareRoot => "Sqrt",
        }
    }

    /// Map a value in [0.0, 1.0] through the stretch.
    ///
    /// `log_exponent` is the `a` in `ln(a*x + 1) / ln(a + 1)` and is ignored
    /// by the other transforms. Output stays in [0.0, 1.0].
    pub fn apply(&self, x: f32, log_exponent: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Self::Linear => x,
            Self::Logarithmic => (log_exponent * x).ln_1p() / log_exponent.ln_1p(),
            Self::SquareRoot => x.sqrt(),
        }
    }
}

impl fmt::Display for StretchTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
            Self::SquareRoot => write!(f, "Square Root"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_LOG_EXPONENT;

    #[test]
    fn endpoints_are_fixed() {
        for t in StretchTransform::ALL {
            assert!((t.apply(0.0, DEFAULT_LOG_EXPONENT)).abs() < 1e-6, "{t}");
            assert!((t.apply(1.0, DEFAULT_LOG_EXPONENT) - 1.0).abs() < 1e-5, "{t}");
        }
    }

    #[test]
    fn log_and_sqrt_lift_midtones() {
        let lin = StretchTransform::Linear.apply(0.25, DEFAULT_LOG_EXPONENT);
        let sqrt = StretchTransform::SquareRoot.apply(0.25, DEFAULT_LOG_EXPONENT);
        let log = StretchTransform::Logarithmic.apply(0.25, DEFAULT_LOG_EXPONENT);
        assert!((sqrt - 0.5).abs() < 1e-6);
        assert!(log > sqrt && sqrt > lin);
    }

    #[test]
    fn default_is_logarithmic() {
        assert_eq!(StretchTransform::default(), StretchTransform::Logarithmic);
    }
}
