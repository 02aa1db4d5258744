//! # Register — Estado conjunto de n qubits
//!
//! Vetor de 2^n amplitudes. O bit mais à esquerda do ket corresponde ao
//! qubit 0, que é também o primeiro fator do produto tensorial usado em
//! [`upscale_gate`](crate::operator::upscale_gate).
//!
//! ```text
//! índice 5, n = 3  →  |101⟩  →  q0 = 1, q1 = 0, q2 = 1
//! ```

use ndarray::Array1;
use num_complex::Complex64;
use std::fmt;
use tracing::debug;

use crate::config::SimConfig;
use crate::error::{KetError, KetResult};
use crate::gates::QuantumGate;
use crate::linalg::{self, ComplexVector, ONE, ZERO};
use crate::operator::{upscale_controlled, upscale_gate};
use crate::qubit::{BasisState, Qubit};

/// Registrador de n qubits
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    size: usize,
    state: ComplexVector,
    config: SimConfig,
}

/// Termo `amplitude * |bits>` da decomposição na base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisTerm {
    /// Índice do ket
    pub index: usize,
    /// Amplitude complexa
    pub amplitude: Complex64,
    /// Número de bits do ket
    pub width: usize,
    /// Abaixo disso a parte imaginária é omitida
    pub tolerance: f64,
}

impl fmt::Display for BasisTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amplitude.im.abs() < self.tolerance {
            write!(f, "{}", self.amplitude.re)?;
        } else {
            write!(f, "{}", self.amplitude)?;
        }
        write!(f, "*|{:0width$b}>", self.index, width = self.width)
    }
}

impl Register {
    /// Cria registrador em |0…0⟩
    pub fn new(size: usize) -> KetResult<Self> {
        Self::with_config(size, SimConfig::default())
    }

    /// Cria registrador com configuração customizada
    pub fn with_config(size: usize, config: SimConfig) -> KetResult<Self> {
        Self::check_size(size, &config)?;
        let mut state = Array1::from_elem(1usize << size, ZERO);
        state[0] = ONE;
        Ok(Self {
            size,
            state,
            config,
        })
    }

    fn check_size(size: usize, config: &SimConfig) -> KetResult<()> {
        if size == 0 {
            return Err(KetError::EmptyRegister);
        }
        if size > config.max_qubits {
            return Err(KetError::TooManyQubits {
                requested: size,
                max: config.max_qubits,
            });
        }
        Ok(())
    }

    /// Cria a partir de um estado da base
    pub fn from_basis_state(basis: BasisState) -> KetResult<Self> {
        Self::from_basis_state_with(basis, SimConfig::default())
    }

    /// Cria a partir de um estado da base com configuração customizada
    pub fn from_basis_state_with(basis: BasisState, config: SimConfig) -> KetResult<Self> {
        let size = basis.num_qubits();
        Self::check_size(size, &config)?;
        Ok(Self {
            size,
            state: basis.into_state(),
            config,
        })
    }

    /// Estado produto `q_0 ⊗ q_1 ⊗ … ⊗ q_{n-1}`
    pub fn from_qubits(qubits: &[Qubit]) -> KetResult<Self> {
        Self::from_qubits_with(qubits, SimConfig::default())
    }

    /// Estado produto com configuração customizada
    pub fn from_qubits_with(qubits: &[Qubit], config: SimConfig) -> KetResult<Self> {
        Self::check_size(qubits.len(), &config)?;
        let state = qubits
            .iter()
            .fold(Array1::from_elem(1, ONE), |acc, qubit| {
                linalg::kron_vec(&acc, qubit.state())
            });
        Ok(Self {
            size: qubits.len(),
            state,
            config,
        })
    }

    /// Cria a partir de amplitudes explícitas (validadas como em [`Qubit`])
    pub fn from_amplitudes(amplitudes: Vec<Complex64>, config: SimConfig) -> KetResult<Self> {
        let dim = amplitudes.len();
        if !dim.is_power_of_two() || dim < 2 {
            return Err(KetError::NotPowerOfTwo(dim));
        }
        let size = dim.trailing_zeros() as usize;
        Self::check_size(size, &config)?;

        let mut state = Array1::from(amplitudes);
        let norm = linalg::norm(&state);
        if (norm - 1.0).abs() > config.norm_tolerance {
            if !config.auto_normalize {
                return Err(KetError::NotNormalized(norm));
            }
            state = linalg::normalize_vector(&state)?;
        }
        Ok(Self {
            size,
            state,
            config,
        })
    }

    /// Número de qubits
    pub fn size(&self) -> usize {
        self.size
    }

    /// Dimensão do espaço de Hilbert (2^n)
    pub fn dimension(&self) -> usize {
        self.state.len()
    }

    /// Vetor de estado
    pub fn state(&self) -> &ComplexVector {
        &self.state
    }

    /// Configuração
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Norma euclidiana
    pub fn norm(&self) -> f64 {
        linalg::norm(&self.state)
    }

    /// Probabilidades |amplitude|² por índice
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Aplica `gate` a partir do qubit `qubit_index`
    ///
    /// Portas de k qubits ocupam `qubit_index..qubit_index + k`.
    pub fn execute_gate<G: QuantumGate + ?Sized>(
        &mut self,
        gate: &G,
        qubit_index: usize,
    ) -> KetResult<()> {
        let operator = upscale_gate(&gate.matrix(), qubit_index, self.size)?;
        self.state = operator.dot(&self.state);
        debug!(gate = %gate.identifier(), qubit = qubit_index, size = self.size, "executed gate");
        Ok(())
    }

    /// Aplica `gate` em `target` se `control` estiver em |1⟩
    pub fn execute_controlled<G: QuantumGate + ?Sized>(
        &mut self,
        gate: &G,
        control: usize,
        target: usize,
    ) -> KetResult<()> {
        let operator = upscale_controlled(&gate.matrix(), control, target, self.size)?;
        self.state = operator.dot(&self.state);
        debug!(
            gate = %gate.identifier(),
            control,
            qubit = target,
            size = self.size,
            "executed controlled gate"
        );
        Ok(())
    }

    /// Termos com amplitude não nula (comparação exata), em ordem de índice
    pub fn basis_terms(&self) -> impl Iterator<Item = BasisTerm> + '_ {
        let width = self.size;
        let tolerance = self.config.readout_tolerance;
        self.state
            .iter()
            .enumerate()
            .filter(|(_, amplitude)| **amplitude != ZERO)
            .map(move |(index, &amplitude)| BasisTerm {
                index,
                amplitude,
                width,
                tolerance,
            })
    }

    /// Decomposição `amp*|bits> + amp*|bits> + …`
    ///
    /// String vazia se nenhuma amplitude for não nula.
    pub fn read_basis_states(&self) -> String {
        self.basis_terms()
            .map(|term| term.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.read_basis_states())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::Gate;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_initial_state() {
        let reg = Register::new(3).unwrap();
        assert_eq!(reg.size(), 3);
        assert_eq!(reg.dimension(), 8);
        assert_eq!(reg.state()[0], ONE);
        assert_eq!(reg.read_basis_states(), "1*|000>");
    }

    #[test]
    fn test_two_qubit_readout() {
        let reg = Register::new(2).unwrap();
        assert_eq!(reg.read_basis_states(), "1*|00>");
        assert_eq!(reg.to_string(), "1*|00>");
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(Register::new(0), Err(KetError::EmptyRegister));
        assert_eq!(
            Register::new(17),
            Err(KetError::TooManyQubits { requested: 17, max: 16 })
        );
        let config = SimConfig::default().with_max_qubits(20);
        assert!(Register::with_config(17, config).is_ok());
    }

    #[test]
    fn test_pauli_x_on_qubit_one() {
        let mut reg = Register::new(2).unwrap();
        reg.execute_gate(&Gate::PauliX, 1).unwrap();
        assert_eq!(reg.state()[1], ONE);
        assert_eq!(reg.read_basis_states(), "1*|01>");
    }

    #[test]
    fn test_pauli_x_on_qubit_zero() {
        let mut reg = Register::new(2).unwrap();
        reg.execute_gate(&Gate::PauliX, 0).unwrap();
        assert_eq!(reg.read_basis_states(), "1*|10>");
    }

    #[test]
    fn test_hadamard_readout() {
        let mut reg = Register::new(1).unwrap();
        reg.execute_gate(&Gate::Hadamard, 0).unwrap();
        let expected = format!("{FRAC_1_SQRT_2}*|0> + {FRAC_1_SQRT_2}*|1>");
        assert_eq!(reg.read_basis_states(), expected);
    }

    #[test]
    fn test_complex_readout() {
        let mut reg = Register::new(1).unwrap();
        reg.execute_gate(&Gate::Hadamard, 0).unwrap();
        reg.execute_gate(&Gate::S, 0).unwrap();
        let out = reg.read_basis_states();
        assert!(out.starts_with(&format!("{FRAC_1_SQRT_2}*|0> + ")));
        assert!(out.ends_with("i*|1>"), "{out}");
    }

    #[test]
    fn test_negative_zero_imaginary_is_real() {
        let term = BasisTerm {
            index: 2,
            amplitude: Complex64::new(-0.5, -1e-17),
            width: 3,
            tolerance: 1e-12,
        };
        assert_eq!(term.to_string(), "-0.5*|010>");
    }

    #[test]
    fn test_out_of_range_index() {
        let mut reg = Register::new(2).unwrap();
        let before = reg.clone();
        assert_eq!(
            reg.execute_gate(&Gate::Hadamard, 2),
            Err(KetError::QubitOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(reg, before);
    }

    #[test]
    fn test_cnot_entangles() {
        let mut reg = Register::new(2).unwrap();
        reg.execute_gate(&Gate::Hadamard, 0).unwrap();
        reg.execute_gate(&Gate::Cnot, 0).unwrap();
        // (|00⟩ + |11⟩)/√2
        let p = reg.probabilities();
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!(p[1] < 1e-24);
        assert!(p[2] < 1e-24);
        assert!((p[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_swap() {
        let mut reg = Register::new(3).unwrap();
        reg.execute_gate(&Gate::PauliX, 0).unwrap();
        reg.execute_gate(&Gate::Swap, 0).unwrap();
        assert_eq!(reg.read_basis_states(), "1*|010>");
        reg.execute_gate(&Gate::Swap, 1).unwrap();
        assert_eq!(reg.read_basis_states(), "1*|001>");
    }

    #[test]
    fn test_controlled_phase() {
        let mut reg = Register::new(2).unwrap();
        reg.execute_gate(&Gate::PauliX, 0).unwrap();
        reg.execute_gate(&Gate::PauliX, 1).unwrap();
        reg.execute_controlled(&Gate::controlled_r(1), 1, 0).unwrap();
        // |11⟩ ganha fase -1
        assert!((reg.state()[3] + ONE).norm() < 1e-12);
    }

    #[test]
    fn test_from_qubits_product_state() {
        let reg = Register::from_qubits(&[Qubit::one(), Qubit::zero()]).unwrap();
        assert_eq!(reg.read_basis_states(), "1*|10>");
        assert_eq!(Register::from_qubits(&[]), Err(KetError::EmptyRegister));
    }

    #[test]
    fn test_from_basis_state() {
        let basis = BasisState::from_qubits(&[Qubit::zero(), Qubit::one(), Qubit::one()]).unwrap();
        let reg = Register::from_basis_state(basis).unwrap();
        assert_eq!(reg.size(), 3);
        assert_eq!(reg.read_basis_states(), "1*|011>");
    }

    #[test]
    fn test_product_constructors_with_config() {
        let config = SimConfig::default().with_max_qubits(20);
        let qubits = vec![Qubit::zero(); 17];
        assert_eq!(
            Register::from_qubits(&qubits),
            Err(KetError::TooManyQubits { requested: 17, max: 16 })
        );
        let reg = Register::from_qubits_with(&qubits, config.clone()).unwrap();
        assert_eq!(reg.size(), 17);
        assert_eq!(reg.config().max_qubits, 20);

        let basis = BasisState::from_qubits_with(&qubits, &config).unwrap();
        let reg = Register::from_basis_state_with(basis, config).unwrap();
        assert_eq!(reg.dimension(), 1 << 17);

        let small = SimConfig::default().with_max_qubits(1);
        let basis = BasisState::from_qubits(&[Qubit::one(), Qubit::zero()]).unwrap();
        assert_eq!(
            Register::from_basis_state_with(basis, small),
            Err(KetError::TooManyQubits { requested: 2, max: 1 })
        );
    }

    #[test]
    fn test_from_amplitudes() {
        let h = Complex64::new(0.5, 0.0);
        let reg = Register::from_amplitudes(vec![h, h, h, h], SimConfig::default()).unwrap();
        assert_eq!(reg.size(), 2);
        assert_eq!(
            reg.read_basis_states(),
            "0.5*|00> + 0.5*|01> + 0.5*|10> + 0.5*|11>"
        );

        let one = Complex64::new(1.0, 0.0);
        assert!(matches!(
            Register::from_amplitudes(vec![one, one], SimConfig::default()),
            Err(KetError::NotNormalized(_))
        ));
        assert_eq!(
            Register::from_amplitudes(vec![one; 3], SimConfig::default()),
            Err(KetError::NotPowerOfTwo(3))
        );
    }

    #[test]
    fn test_empty_readout() {
        let mut reg = Register::new(1).unwrap();
        reg.state = Array1::from_elem(2, ZERO);
        assert_eq!(reg.read_basis_states(), "");
    }

    #[test]
    fn test_readout_does_not_mutate() {
        let mut reg = Register::new(2).unwrap();
        reg.execute_gate(&Gate::Hadamard, 1).unwrap();
        let before = reg.state().clone();
        let _ = reg.read_basis_states();
        assert_eq!(reg.state(), &before);
    }
}
