//! Validated multi-qubit state vectors
//!
//! Provides the register length checks and the qubit-to-bit mapping

use crate::complex::Complex;
use crate::constants::{MAX_AMPLITUDES, MAX_QUBITS};
use crate::error::{QuantumError, QuantumResult};
use serde::{Deserialize, Serialize};

/// How qubit indices map onto bits of a basis-state index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BitOrder {
    /// Qubit 0 is the least significant bit (Qiskit convention)
    #[default]
    LittleEndian,
    /// Qubit 0 is the most significant bit
    BigEndian,
}

impl BitOrder {
    /// Bit position of `qubit` in an `num_qubits` register
    pub fn bit_position(self, qubit: usize, num_qubits: usize) -> usize {
        match self {
            Self::LittleEndian => qubit,
            Self::BigEndian => num_qubits - 1 - qubit,
        }
    }
}

/// Amplitude vector whose length is a power of two no larger than `MAX_AMPLITUDES`
///
/// Normalisation is not checked: Σ|amplitude|² ≠ 1 is accepted as is.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<Complex>,
    num_qubits: usize,
}

impl StateVector {
    /// Validate a parsed amplitude list
    pub fn new(amplitudes: Vec<Complex>) -> QuantumResult<Self> {
        let num_qubits = validate_len(amplitudes.len())?;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (2^num_qubits)
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false: a valid register holds at least one amplitude
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Σ|amplitude|², 1 for a normalised state
    pub fn norm_sq(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sq()).sum()
    }

    /// Probability of measuring each basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sq()).collect()
    }

    /// Bit mask selecting `qubit` under `order`
    pub fn qubit_mask(&self, qubit: usize, order: BitOrder) -> QuantumResult<usize> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(1 << order.bit_position(qubit, self.num_qubits))
    }
}

/// Check an amplitude count and return the qubit count it encodes
pub fn validate_len(len: usize) -> QuantumResult<usize> {
    if !len.is_power_of_two() {
        return Err(QuantumError::InvalidLength { len });
    }
    if len > MAX_AMPLITUDES {
        return Err(QuantumError::TooManyQubits {
            len,
            max_qubits: MAX_QUBITS,
            max_amplitudes: MAX_AMPLITUDES,
        });
    }
    Ok(len.trailing_zeros() as usize)
}
