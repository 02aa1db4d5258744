//! # Qubit — Estado de um único qubit
//!
//! ```text
//! |ψ⟩ = α|0⟩ + β|1⟩       |α|² + |β|² = 1
//! ```
//!
//! Vetores explícitos são validados na construção: com
//! `auto_normalize` desligado um vetor fora da norma é rejeitado, com ele
//! ligado o vetor é normalizado.

use ndarray::{Array1, array};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::SimConfig;
use crate::error::{KetError, KetResult};
use crate::gates::QuantumGate;
use crate::linalg::{self, ComplexVector, ONE, ZERO};

/// Estado de um qubit (vetor coluna de dimensão 2)
///
/// Serializado como a lista `[α, β]`; a desserialização passa pela mesma
/// validação de [`Qubit::from_amplitudes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Complex64>", into = "Vec<Complex64>")]
pub struct Qubit {
    state: ComplexVector,
}

impl Qubit {
    /// Cria |0⟩
    pub fn zero() -> Self {
        Self {
            state: array![ONE, ZERO],
        }
    }

    /// Cria |1⟩
    pub fn one() -> Self {
        Self {
            state: array![ZERO, ONE],
        }
    }

    /// Cria `(cos θ, sin θ)` a partir de um ângulo em radianos
    pub fn from_angle(angle: f64) -> Self {
        Self::from_angle_with(angle, &SimConfig::default())
    }

    /// Cria a partir de um ângulo, respeitando a resolução angular configurada
    pub fn from_angle_with(angle: f64, config: &SimConfig) -> Self {
        let theta = config.quantize_angle(angle);
        Self {
            state: array![
                Complex64::new(theta.cos(), 0.0),
                Complex64::new(theta.sin(), 0.0)
            ],
        }
    }

    /// Cria a partir de amplitudes explícitas `[α, β]`
    pub fn from_amplitudes(amplitudes: &[Complex64]) -> KetResult<Self> {
        Self::from_amplitudes_with(amplitudes, &SimConfig::default())
    }

    /// Cria a partir de amplitudes explícitas com configuração
    ///
    /// # Errors
    ///
    /// - [`KetError::DimensionMismatch`] se não houver exatamente 2 amplitudes
    /// - [`KetError::NotNormalized`] se a norma divergir de 1 e
    ///   `auto_normalize` estiver desligado
    /// - [`KetError::ZeroVector`] se o vetor for nulo
    pub fn from_amplitudes_with(amplitudes: &[Complex64], config: &SimConfig) -> KetResult<Self> {
        if amplitudes.len() != 2 {
            return Err(KetError::DimensionMismatch {
                expected: 2,
                actual: amplitudes.len(),
            });
        }
        let state = Array1::from(amplitudes.to_vec());
        let norm = linalg::norm(&state);
        if (norm - 1.0).abs() <= config.norm_tolerance {
            return Ok(Self { state });
        }
        if !config.auto_normalize {
            return Err(KetError::NotNormalized(norm));
        }
        if norm > 0.0 && (norm - 1.0).abs() > 0.5 {
            warn!(norm, "normalizing qubit amplitudes far from unit norm");
        }
        Ok(Self {
            state: linalg::normalize_vector(&state)?,
        })
    }

    /// Construtor com inicializador opcional: ângulo tem prioridade
    ///
    /// # Errors
    ///
    /// [`KetError::MissingInitializer`] se nenhum dos dois for fornecido.
    pub fn try_new(angle: Option<f64>, amplitudes: Option<&[Complex64]>) -> KetResult<Self> {
        match (angle, amplitudes) {
            (Some(angle), _) => Ok(Self::from_angle(angle)),
            (None, Some(amplitudes)) => Self::from_amplitudes(amplitudes),
            (None, None) => Err(KetError::MissingInitializer),
        }
    }

    /// Vetor de estado
    pub fn state(&self) -> &ComplexVector {
        &self.state
    }

    /// Amplitude de |0⟩
    pub fn alpha(&self) -> Complex64 {
        self.state[0]
    }

    /// Amplitude de |1⟩
    pub fn beta(&self) -> Complex64 {
        self.state[1]
    }

    /// Está exatamente em |0⟩ ou |1⟩? (sem tolerância)
    pub fn is_computational_basis_state(&self) -> bool {
        self.basis_bit().is_some()
    }

    /// Bit clássico do qubit, se estiver num estado da base
    pub fn basis_bit(&self) -> Option<u8> {
        match (self.alpha(), self.beta()) {
            (a, b) if a == ONE && b == ZERO => Some(0),
            (a, b) if a == ZERO && b == ONE => Some(1),
            _ => None,
        }
    }

    /// Aplica uma porta de 1 qubit in-place: `state ← G · state`
    pub fn apply_gate<G: QuantumGate + ?Sized>(&mut self, gate: &G) -> KetResult<()> {
        self.state = gate.apply(&self.state)?;
        Ok(())
    }

    /// Norma euclidiana do estado
    pub fn norm(&self) -> f64 {
        linalg::norm(&self.state)
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Vec<Complex64>> for Qubit {
    type Error = KetError;

    fn try_from(amplitudes: Vec<Complex64>) -> KetResult<Self> {
        Self::from_amplitudes(&amplitudes)
    }
}

impl From<Qubit> for Vec<Complex64> {
    fn from(qubit: Qubit) -> Self {
        qubit.state.to_vec()
    }
}

/// Estado da base computacional de n qubits
///
/// Vetor one-hot de dimensão 2^n; o índice é a sequência de bits dos qubits
/// lida em base 2, qubit 0 mais significativo.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisState {
    hilbert_dimensions: usize,
    index: usize,
    state: ComplexVector,
}

impl BasisState {
    /// Cria a partir de qubits que estejam todos em |0⟩ ou |1⟩
    ///
    /// # Errors
    ///
    /// - [`KetError::NotBasisState`] com a posição do primeiro qubit inválido
    /// - [`KetError::TooManyQubits`] acima de [`DEFAULT_MAX_QUBITS`](crate::config::DEFAULT_MAX_QUBITS)
    pub fn from_qubits(qubits: &[Qubit]) -> KetResult<Self> {
        Self::from_qubits_with(qubits, &SimConfig::default())
    }

    /// Como [`BasisState::from_qubits`], limitado por `config.max_qubits`
    pub fn from_qubits_with(qubits: &[Qubit], config: &SimConfig) -> KetResult<Self> {
        if qubits.len() > config.max_qubits {
            return Err(KetError::TooManyQubits {
                requested: qubits.len(),
                max: config.max_qubits,
            });
        }
        let bits = qubits
            .iter()
            .enumerate()
            .map(|(position, qubit)| {
                qubit
                    .basis_bit()
                    .ok_or(KetError::NotBasisState { position })
            })
            .collect::<KetResult<Vec<u8>>>()?;

        let index = bits
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
        let hilbert_dimensions = 1usize << qubits.len();

        let mut state = Array1::from_elem(hilbert_dimensions, ZERO);
        state[index] = ONE;

        Ok(Self {
            hilbert_dimensions,
            index,
            state,
        })
    }

    /// Dimensão do espaço de Hilbert (2^n)
    pub fn hilbert_dimensions(&self) -> usize {
        self.hilbert_dimensions
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.hilbert_dimensions.trailing_zeros() as usize
    }

    /// Índice do ket
    pub fn index(&self) -> usize {
        self.index
    }

    /// Vetor one-hot
    pub fn state(&self) -> &ComplexVector {
        &self.state
    }

    /// Consome e devolve o vetor
    pub fn into_state(self) -> ComplexVector {
        self.state
    }
}
