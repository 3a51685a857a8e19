//! Error types for state vector analysis

use thiserror::Error;

/// Result alias for state vector operations
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Failures surfaced by the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    #[error("state vector length must be a power of two (2, 4, 8, 16, 32), got {len}")]
    InvalidLength { len: usize },

    #[error("at most {max_qubits} qubits are supported ({max_amplitudes} amplitudes), got {len} amplitudes")]
    TooManyQubits {
        len: usize,
        max_qubits: usize,
        max_amplitudes: usize,
    },

    #[error("qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("no bracketed amplitude list found in text")]
    NoStateVector,
}
