//! Text-to-Bloch-vector pipeline
//!
//! parse → validate → per-qubit partial trace → classify. Every run is a pure
//! function of its input; the analyzer holds configuration only.

use crate::error::{QuantumError, QuantumResult};
use crate::parser::{parse_tokens, TokenOutcome};
use crate::partial_trace::{reduced_density_matrix, BlochVector};
use crate::purity::{PurityLabel, PurityThresholds};
use crate::scanner::find_state_vector;
use crate::state_vector::{BitOrder, StateVector};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Analysis settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Qubit-to-bit mapping of the amplitude list's source
    pub bit_order: BitOrder,
    pub thresholds: PurityThresholds,
}

impl AnalyzerConfig {
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    pub fn with_thresholds(mut self, thresholds: PurityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Reduced state of one qubit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitReport {
    pub qubit: usize,
    pub bloch: BlochVector,
    pub label: PurityLabel,
}

impl QubitReport {
    /// Bloch vector norm
    pub fn purity(&self) -> f64 {
        self.bloch.norm()
    }
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateReport {
    pub num_qubits: usize,
    /// One entry per qubit, in qubit order
    pub qubits: Vec<QubitReport>,
    /// Indices of amplitude tokens that were unreadable and set to zero
    pub defaulted_tokens: Vec<usize>,
}

impl StateReport {
    pub fn has_defaulted_tokens(&self) -> bool {
        !self.defaulted_tokens.is_empty()
    }
}

/// Runs the pipeline with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct StateAnalyzer {
    config: AnalyzerConfig,
}

impl StateAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a bracketed amplitude list.
    ///
    /// Length failures abort before any per-qubit work and yield no partial
    /// results.
    pub fn analyze(&self, input: &str) -> QuantumResult<StateReport> {
        let outcomes = parse_tokens(input);

        let mut defaulted_tokens = Vec::new();
        for (index, outcome) in outcomes.iter().enumerate() {
            if let TokenOutcome::DefaultedToZero { token, .. } = outcome {
                warn!("amplitude {index} ({token:?}) is not a number, using 0");
                defaulted_tokens.push(index);
            }
        }

        let state = StateVector::new(outcomes.iter().map(TokenOutcome::value).collect())?;
        let qubits = self.analyze_state(&state)?;

        Ok(StateReport {
            num_qubits: state.num_qubits(),
            qubits,
            defaulted_tokens,
        })
    }

    /// Analyze the first amplitude list found in free text
    pub fn analyze_text(&self, text: &str) -> QuantumResult<StateReport> {
        let list = find_state_vector(text).ok_or(QuantumError::NoStateVector)?;
        debug!("found state vector {list}");
        self.analyze(list)
    }

    /// Reduce and classify every qubit of an already validated state
    pub fn analyze_state(&self, state: &StateVector) -> QuantumResult<Vec<QubitReport>> {
        (0..state.num_qubits())
            .map(|qubit| {
                let rho = reduced_density_matrix(state, qubit, self.config.bit_order)?;
                trace!(
                    "qubit {qubit}: rho00={} rho11={} rho01={}",
                    rho.rho00,
                    rho.rho11,
                    rho.rho01
                );

                let bloch = rho.bloch_vector();
                let label = self.config.thresholds.classify(&bloch);
                debug!("qubit {qubit}: bloch={bloch} |r|={:.4} {label}", bloch.norm());

                Ok(QubitReport { qubit, bloch, label })
            })
            .collect()
    }
}

/// Analyze with the default configuration (little-endian, 0.99 / 0.1)
pub fn analyze(input: &str) -> QuantumResult<StateReport> {
    StateAnalyzer::default().analyze(input)
}
