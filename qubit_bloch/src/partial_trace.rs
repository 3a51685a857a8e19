//! Single-qubit reduction of a multi-qubit pure state
//!
//! For a target qubit with bit mask `m`, the reduced density matrix sums over
//! every pair of basis states `(i, i | m)` that differ only in that bit:
//!
//! ```text
//! ρ00 = Σ |c(i)|²        ρ11 = Σ |c(i|m)|²        ρ01 = Σ c(i)·c(i|m)*
//! ```
//!
//! and the Bloch vector is `x = 2·Re ρ01`, `y = 2·Im ρ01`, `z = ρ00 − ρ11`.

use crate::complex::Complex;
use crate::error::QuantumResult;
use crate::state_vector::{BitOrder, StateVector};
use glam::DVec3;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eigenvalues and norms below this count as zero
const EPSILON: f64 = 1e-12;

/// 2x2 Hermitian density matrix of one qubit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReducedDensityMatrix {
    pub rho00: f64,
    pub rho11: f64,
    pub rho01: Complex,
}

impl ReducedDensityMatrix {
    /// Lower off-diagonal element, the conjugate of `rho01`
    pub fn rho10(&self) -> Complex {
        self.rho01.conj()
    }

    /// Tr ρ, equal to Σ|amplitude|² of the full state
    pub fn trace(&self) -> f64 {
        self.rho00 + self.rho11
    }

    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::new(
            2.0 * self.rho01.re,
            2.0 * self.rho01.im,
            self.rho00 - self.rho11,
        )
    }

    /// Tr ρ², 1 for a pure qubit and ½ for a maximally mixed one
    pub fn purity(&self) -> f64 {
        self.rho00 * self.rho00 + self.rho11 * self.rho11 + 2.0 * self.rho01.norm_sq()
    }

    /// Eigenvalues in descending order
    pub fn eigenvalues(&self) -> (f64, f64) {
        let trace = self.trace();
        let det = self.rho00 * self.rho11 - self.rho01.norm_sq();
        let spread = (trace * trace - 4.0 * det).max(0.0).sqrt();
        ((trace + spread) / 2.0, (trace - spread) / 2.0)
    }

    /// Von Neumann entropy in bits.
    ///
    /// For a normalised global pure state this is the entanglement entropy
    /// between this qubit and the rest of the register: 0 for a product
    /// state, 1 for a maximally entangled qubit.
    pub fn von_neumann_entropy(&self) -> f64 {
        let (l0, l1) = self.eigenvalues();
        [l0, l1]
            .into_iter()
            .filter(|&l| l > EPSILON)
            .map(|l| -l * l.log2())
            .sum()
    }

    pub fn to_matrix(&self) -> Matrix2<nalgebra::Complex<f64>> {
        Matrix2::new(
            nalgebra::Complex::new(self.rho00, 0.0),
            self.rho01.into(),
            self.rho10().into(),
            nalgebra::Complex::new(self.rho11, 0.0),
        )
    }
}

/// Bloch sphere coordinates in the physics basis (no renderer axis remapping)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    pub const ORIGIN: BlochVector = BlochVector { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length; 1 on the sphere surface, 0 at the centre
    pub fn norm(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Spherical angles `(theta, phi)`: polar angle from +z and azimuth from +x.
    ///
    /// The origin has no direction and maps to `(0, 0)`.
    pub fn angles(&self) -> (f64, f64) {
        let r = self.norm();
        if r < EPSILON {
            return (0.0, 0.0);
        }
        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        (theta, phi)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<BlochVector> for DVec3 {
    fn from(v: BlochVector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for BlochVector {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Trace out every qubit except `qubit`
pub fn reduced_density_matrix(
    state: &StateVector,
    qubit: usize,
    order: BitOrder,
) -> QuantumResult<ReducedDensityMatrix> {
    let mask = state.qubit_mask(qubit, order)?;
    let amplitudes = state.amplitudes();

    let mut rho00 = 0.0;
    let mut rho11 = 0.0;
    let mut rho01 = Complex::ZERO;

    for i0 in (0..amplitudes.len()).filter(|i| i & mask == 0) {
        let c0 = amplitudes[i0];
        let c1 = amplitudes[i0 | mask];

        rho00 += c0.norm_sq();
        rho11 += c1.norm_sq();
        rho01 += c0 * c1.conj();
    }

    Ok(ReducedDensityMatrix { rho00, rho11, rho01 })
}

/// Bloch vector of `qubit` after tracing out the rest of the register
pub fn bloch_vector(state: &StateVector, qubit: usize, order: BitOrder) -> QuantumResult<BlochVector> {
    reduced_density_matrix(state, qubit, order).map(|rho| rho.bloch_vector())
}
