//! Purity classification of reduced qubit states
//!
//! A near-zero Bloch vector shows that the qubit is mixed once the rest of the
//! register is traced out. For a pure global state that mixedness comes from
//! entanglement, but the label alone is not an entanglement witness.

use crate::constants::{MAXIMALLY_MIXED_THRESHOLD, PURE_THRESHOLD};
use crate::partial_trace::BlochVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative state of a single reduced qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurityLabel {
    /// On the sphere surface
    Pure,
    /// Strictly inside the sphere
    Mixed,
    /// At (or near) the centre; possibly entangled with the rest of the register
    MaximallyMixed,
}

impl PurityLabel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::Mixed => "mixed",
            Self::MaximallyMixed => "maximally-mixed",
        }
    }

    /// Short explanation suitable for a UI caption
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Pure => "separable from the rest of the register",
            Self::Mixed => "partially entangled or classically mixed",
            Self::MaximallyMixed => "possibly entangled with the rest of the register",
        }
    }
}

impl fmt::Display for PurityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Norm cut-offs between the three labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurityThresholds {
    /// `norm >= pure` is pure
    pub pure: f64,
    /// `norm <= maximally_mixed` is maximally mixed
    pub maximally_mixed: f64,
}

impl Default for PurityThresholds {
    fn default() -> Self {
        Self {
            pure: PURE_THRESHOLD,
            maximally_mixed: MAXIMALLY_MIXED_THRESHOLD,
        }
    }
}

impl PurityThresholds {
    /// Label a Bloch vector by its Euclidean norm.
    ///
    /// A NaN norm (from non-finite amplitudes such as `1e400`) compares false
    /// everywhere and falls through to `MaximallyMixed`. The browser popup this
    /// crate replaces showed such a qubit with no caption, i.e. like a pure one;
    /// labelling it pure would hide a broken input, so it is reported as
    /// maximally mixed instead.
    pub fn classify(&self, bloch: &BlochVector) -> PurityLabel {
        let purity = bloch.norm();
        if purity >= self.pure {
            PurityLabel::Pure
        } else if purity > self.maximally_mixed {
            PurityLabel::Mixed
        } else {
            PurityLabel::MaximallyMixed
        }
    }
}

/// Classify with the default thresholds (0.99 / 0.1)
pub fn classify(bloch: &BlochVector) -> PurityLabel {
    PurityThresholds::default().classify(bloch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_at_and_above_threshold() {
        assert_eq!(classify(&BlochVector::new(0.0, 0.0, 1.0)), PurityLabel::Pure);
        assert_eq!(classify(&BlochVector::new(0.0, 0.0, 0.99)), PurityLabel::Pure);
        assert_eq!(classify(&BlochVector::new(0.0, 0.0, -2.0)), PurityLabel::Pure);
    }

    #[test]
    fn test_mixed_band() {
        assert_eq!(classify(&BlochVector::new(0.0, 0.0, 0.98)), PurityLabel::Mixed);
        assert_eq!(classify(&BlochVector::new(0.3, 0.4, 0.0)), PurityLabel::Mixed);
        assert_eq!(classify(&BlochVector::new(0.0, 0.0, 0.1001)), PurityLabel::Mixed);
    }

    #[test]
    fn test_maximally_mixed_at_and_below_threshold() {
        assert_eq!(classify(&BlochVector::new(0.0, 0.0, 0.1)), PurityLabel::MaximallyMixed);
        assert_eq!(classify(&BlochVector::ORIGIN), PurityLabel::MaximallyMixed);
    }

    #[test]
    fn test_nan_is_maximally_mixed() {
        assert_eq!(
            classify(&BlochVector::new(f64::NAN, 0.0, 0.0)),
            PurityLabel::MaximallyMixed
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = PurityThresholds {
            pure: 0.999,
            maximally_mixed: 0.5,
        };
        assert_eq!(strict.classify(&BlochVector::new(0.0, 0.0, 0.995)), PurityLabel::Mixed);
        assert_eq!(strict.classify(&BlochVector::new(0.0, 0.4, 0.0)), PurityLabel::MaximallyMixed);
    }

    #[test]
    fn test_label_names() {
        assert_eq!(PurityLabel::MaximallyMixed.to_string(), "maximally-mixed");
        assert_eq!(PurityLabel::Pure.name(), "pure");
        assert!(PurityLabel::MaximallyMixed.hint().contains("entangled"));
    }
}
