//! Named example states
//!
//! Literals are written the way simulators print them, little-endian.

use crate::error::QuantumResult;
use crate::parser::parse_amplitudes;
use crate::state_vector::StateVector;

/// Example state with its amplitude literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub literal: &'static str,
}

impl Preset {
    /// Parsed and validated amplitudes
    pub fn state(&self) -> QuantumResult<StateVector> {
        StateVector::new(parse_amplitudes(self.literal))
    }

    /// Look a preset up by name (case-insensitive)
    pub fn find(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// |+⟩ = (|0⟩ + |1⟩)/√2
pub const PLUS: Preset = Preset {
    name: "plus",
    description: "equal superposition of one qubit",
    literal: "[0.7071+0j, 0.7071+0j]",
};

/// |Φ+⟩ = (|00⟩ + |11⟩)/√2
pub const BELL_PHI_PLUS: Preset = Preset {
    name: "bell-phi-plus",
    description: "maximally entangled Bell pair",
    literal: "[0.7071+0j, 0+0j, 0+0j, 0.7071+0j]",
};

/// |Φ-⟩ = (|00⟩ - |11⟩)/√2
pub const BELL_PHI_MINUS: Preset = Preset {
    name: "bell-phi-minus",
    description: "Bell pair with relative phase π",
    literal: "[0.7071+0j, 0+0j, 0+0j, -0.7071+0j]",
};

/// |Ψ+⟩ = (|01⟩ + |10⟩)/√2
pub const BELL_PSI_PLUS: Preset = Preset {
    name: "bell-psi-plus",
    description: "anti-correlated Bell pair",
    literal: "[0+0j, 0.7071+0j, 0.7071+0j, 0+0j]",
};

/// |Ψ-⟩ = (|01⟩ - |10⟩)/√2 (singlet)
pub const BELL_PSI_MINUS: Preset = Preset {
    name: "bell-psi-minus",
    description: "singlet state",
    literal: "[0+0j, 0.7071+0j, -0.7071+0j, 0+0j]",
};

/// 0.8944|00⟩ + 0.4472|11⟩
pub const PARTIAL: Preset = Preset {
    name: "partial",
    description: "partially entangled pair, both qubits mixed",
    literal: "[0.8944+0j, 0+0j, 0+0j, 0.4472+0j]",
};

/// (|000⟩ + |111⟩)/√2
pub const GHZ: Preset = Preset {
    name: "ghz",
    description: "three-qubit GHZ state",
    literal: "[0.7071+0j, 0+0j, 0+0j, 0+0j, 0+0j, 0+0j, 0+0j, 0.7071+0j]",
};

/// (|001⟩ + |010⟩ + |100⟩)/√3
pub const W: Preset = Preset {
    name: "w",
    description: "three-qubit W state",
    literal: "[0+0j, 0.5774+0j, 0.5774+0j, 0+0j, 0.5774+0j, 0+0j, 0+0j, 0+0j]",
};

pub const PRESETS: &[Preset] = &[
    PLUS,
    BELL_PHI_PLUS,
    BELL_PHI_MINUS,
    BELL_PSI_PLUS,
    BELL_PSI_MINUS,
    PARTIAL,
    GHZ,
    W,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid_and_normalised() {
        for preset in PRESETS {
            let state = preset.state().unwrap();
            assert!(
                (state.norm_sq() - 1.0).abs() < 1e-3,
                "{} has norm² {}",
                preset.name,
                state.norm_sq()
            );
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(Preset::find("GHZ"), Some(&GHZ));
        assert_eq!(Preset::find("bell-phi-plus").map(|p| p.literal), Some(BELL_PHI_PLUS.literal));
        assert!(Preset::find("unknown").is_none());
    }

    #[test]
    fn test_qubit_counts() {
        assert_eq!(PLUS.state().unwrap().num_qubits(), 1);
        assert_eq!(PARTIAL.state().unwrap().num_qubits(), 2);
        assert_eq!(W.state().unwrap().num_qubits(), 3);
    }
}
