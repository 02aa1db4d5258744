//! # ⚛️ ket-core — State-Vector Quantum Simulation
//!
//! Simula qubits e registradores de n qubits como vetores de estado
//! complexos, aplica portas unitárias e lê o resultado em notação de kets.
//!
//! ## Computational Complexity
//!
//! **Upscaling — O(4^n):**
//! - O operador `2^n × 2^n` é materializado por produto de Kronecker
//!
//! **Gate application — O(4^n):**
//! - Produto matriz-vetor denso sobre 2^n amplitudes
//!
//! **Readout — O(2^n):**
//! - Uma passada sobre as amplitudes
//!
//! **Scalability:**
//! - Small registers (n ≤ 10): ✓ Excellent
//! - Medium registers (10 < n ≤ 16): △ Memory bound
//! - n > 16: rejected by the default `max_qubits`
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Circuit  {qubit_in, qubit_out, gate}   │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate (X, Y, Z, H, S, T, R_k, PS_n, ...)  │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Operator upscaling  I ⊗ … ⊗ G ⊗ … ⊗ I    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Qubit / Register  →  "amp*|bits> + …"    │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use ket_core::prelude::*;
//!
//! let mut reg = Register::new(2)?;
//! reg.execute_gate(&Gate::PauliX, 1)?;
//! assert_eq!(reg.read_basis_states(), "1*|01>");
//!
//! let mut reg = Register::new(3)?;
//! Circuit::qft(3).run(&mut reg)?;
//! assert_eq!(reg.basis_terms().count(), 8);
//! # Ok::<(), KetError>(())
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod gates;
pub mod linalg;
pub mod operator;
pub mod prelude;
pub mod qubit;
pub mod register;

pub use circuit::{Circuit, CircuitStep};
pub use config::SimConfig;
pub use error::{KetError, KetResult};
pub use gates::{Gate, QuantumGate};
pub use linalg::{ComplexMatrix, ComplexVector};
pub use operator::{upscale_controlled, upscale_gate};
pub use qubit::{BasisState, Qubit};
pub use register::{BasisTerm, Register};
