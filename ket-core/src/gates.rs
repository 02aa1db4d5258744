//! # Quantum Gates — Portas Quânticas
//!
//! Conjunto fechado de portas unitárias na base `{|0⟩, |1⟩}`.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: X, Y, Z (Pauli), H (Hadamard), S, T
//! - **Fase**: R_k (rotação controlada), PS_n (phase shift do QFT)
//! - **Two-qubit**: SWAP, CNOT (4x4)
//!
//! Qualquer tipo que implemente [`QuantumGate`] pode ser aplicado a um
//! [`Register`](crate::register::Register), o que deixa espaço para redes de
//! SWAP maiores que 2 qubits sem alterar o enum.

use ndarray::{Array2, array};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;

use crate::config::DEFAULT_UNITARITY_TOLERANCE;
use crate::error::{KetError, KetResult};
use crate::linalg::{self, ComplexMatrix, ComplexVector, ONE, ZERO};

/// Trait para portas quânticas
pub trait QuantumGate: Send + Sync {
    /// Símbolo curto usado em diagramas ("H", "R3", ...)
    fn identifier(&self) -> Cow<'static, str>;

    /// Matriz da porta (2^k × 2^k)
    fn matrix(&self) -> ComplexMatrix;

    /// Número de qubits em que a porta atua
    fn num_qubits(&self) -> usize {
        self.matrix().nrows().trailing_zeros() as usize
    }

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        linalg::is_unitary(&self.matrix(), DEFAULT_UNITARITY_TOLERANCE)
    }

    /// Aplica a um vetor de estado de dimensão compatível
    fn apply(&self, state: &ComplexVector) -> KetResult<ComplexVector> {
        let m = self.matrix();
        if m.ncols() != state.len() {
            return Err(KetError::DimensionMismatch {
                expected: m.ncols(),
                actual: state.len(),
            });
        }
        Ok(m.dot(state))
    }
}

/// Portas suportadas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// NOT quântico: X|0⟩ = |1⟩, X|1⟩ = |0⟩
    PauliX,
    PauliY,
    /// Phase flip
    PauliZ,
    /// Cria superposição; H·H = I
    Hadamard,
    /// √Z
    S,
    /// π/8
    T,
    /// Rotação de fase `e^{iπ·2/2^k}` aplicada a |1⟩
    ControlledR { k: u32 },
    /// Fase `e^{2πi/2^n}` para um sistema de n qubits
    PhaseShift { qubits: u32 },
    /// Troca de dois qubits vizinhos
    Swap,
    /// NOT controlado (controle = primeiro qubit)
    Cnot,
}

impl Gate {
    /// Cria R_k
    pub fn controlled_r(k: u32) -> Self {
        Self::ControlledR { k }
    }

    /// Cria o phase shift de um sistema com `qubits` qubits
    pub fn phase_shift(qubits: u32) -> Self {
        Self::PhaseShift { qubits }
    }

    /// Ângulo de fase aplicado a |1⟩, para as portas diagonais de fase
    pub fn phase_angle(&self) -> Option<f64> {
        match self {
            Self::PauliZ => Some(PI),
            Self::S => Some(PI / 2.0),
            Self::T => Some(PI / 4.0),
            // π · 2^{1-k}
            Self::ControlledR { k } => Some(PI * 2f64.powf(1.0 - f64::from(*k))),
            // 2π / 2^n
            Self::PhaseShift { qubits } => Some(PI * 2f64.powf(1.0 - f64::from(*qubits))),
            _ => None,
        }
    }

    /// Porta atua em um único qubit?
    pub fn is_single_qubit(&self) -> bool {
        !matches!(self, Self::Swap | Self::Cnot)
    }
}

fn phase(angle: f64) -> ComplexMatrix {
    array![[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, angle)]]
}

fn permutation(mapping: &[usize]) -> ComplexMatrix {
    let dim = mapping.len();
    let mut m = Array2::from_elem((dim, dim), ZERO);
    for (col, &row) in mapping.iter().enumerate() {
        m[[row, col]] = ONE;
    }
    m
}

impl QuantumGate for Gate {
    fn identifier(&self) -> Cow<'static, str> {
        match self {
            Self::PauliX => Cow::Borrowed("X"),
            Self::PauliY => Cow::Borrowed("Y"),
            Self::PauliZ => Cow::Borrowed("Z"),
            Self::Hadamard => Cow::Borrowed("H"),
            Self::S => Cow::Borrowed("S"),
            Self::T => Cow::Borrowed("T"),
            Self::ControlledR { k } => Cow::Owned(format!("R{k}")),
            Self::PhaseShift { qubits } => Cow::Owned(format!("PS{qubits}")),
            Self::Swap => Cow::Borrowed("SWAP"),
            Self::Cnot => Cow::Borrowed("CNOT"),
        }
    }

    fn matrix(&self) -> ComplexMatrix {
        match self {
            Self::PauliX => array![[ZERO, ONE], [ONE, ZERO]],
            Self::PauliY => array![
                [ZERO, Complex64::new(0.0, -1.0)],
                [Complex64::new(0.0, 1.0), ZERO]
            ],
            Self::Hadamard => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![[h, h], [h, -h]]
            }
            Self::PauliZ | Self::S | Self::T | Self::ControlledR { .. } | Self::PhaseShift { .. } => {
                phase(self.phase_angle().unwrap_or_default())
            }
            // |01⟩ ↔ |10⟩
            Self::Swap => permutation(&[0, 2, 1, 3]),
            // |10⟩ ↔ |11⟩
            Self::Cnot => permutation(&[0, 1, 3, 2]),
        }
    }

    fn num_qubits(&self) -> usize {
        if self.is_single_qubit() { 1 } else { 2 }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

// =============================================================================
// Testes
// =============================================================================
