//! Qubit Bloch Vectors
//!
//! This crate turns the textual amplitude list of a multi-qubit pure state into
//! one reduced single-qubit state per qubit:
//!
//! - **Parsing**: bracketed, comma separated complex literals such as `0.7071+0j`
//! - **Validation**: power-of-two lengths, at most 5 qubits
//! - **Partial trace**: the 2x2 reduced density matrix of every qubit
//! - **Bloch vectors**: `ρ = ½(I + x·σx + y·σy + z·σz)`
//! - **Purity**: pure / mixed / maximally mixed classification
//!
//! ```
//! use qubit_bloch::{analyze, PurityLabel};
//!
//! let report = analyze("[0.7071+0j, 0+0j, 0+0j, 0.7071+0j]").unwrap();
//! assert_eq!(report.num_qubits, 2);
//! assert!(report.qubits.iter().all(|q| q.label == PurityLabel::MaximallyMixed));
//! ```
//!
//! Qubit `k` is bit `k` of the basis-state index (qubit 0 is the least
//! significant bit) unless [`BitOrder::BigEndian`] is configured.

pub mod complex;
pub mod error;
pub mod parser;
pub mod state_vector;
pub mod partial_trace;
pub mod purity;
pub mod analyzer;
pub mod scanner;
pub mod presets;

pub use analyzer::{analyze, AnalyzerConfig, QubitReport, StateAnalyzer, StateReport};
pub use complex::Complex;
pub use error::{QuantumError, QuantumResult};
pub use parser::{parse_amplitudes, parse_tokens, TokenOutcome};
pub use partial_trace::{bloch_vector, reduced_density_matrix, BlochVector, ReducedDensityMatrix};
pub use purity::{classify, PurityLabel, PurityThresholds};
pub use scanner::find_state_vector;
pub use state_vector::{BitOrder, StateVector};

/// Limits and thresholds shared by the whole pipeline
pub mod constants {
    /// Largest register accepted (performance cap, not a physical one)
    pub const MAX_QUBITS: usize = 5;

    /// Amplitude count of a full `MAX_QUBITS` register
    pub const MAX_AMPLITUDES: usize = 1 << MAX_QUBITS;

    /// Bloch vector norm at or above which a qubit counts as pure
    pub const PURE_THRESHOLD: f64 = 0.99;

    /// Bloch vector norm at or below which a qubit counts as maximally mixed
    pub const MAXIMALLY_MIXED_THRESHOLD: f64 = 0.1;

    /// Imaginary unit marker in amplitude literals
    pub const IMAGINARY_UNIT: char = 'j';
}
