//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use ket_core::prelude::*;
//! ```

// Estado
pub use crate::qubit::{BasisState, Qubit};
pub use crate::register::{BasisTerm, Register};

// Portas e circuitos
pub use crate::circuit::{Circuit, CircuitStep};
pub use crate::gates::{Gate, QuantumGate};
pub use crate::operator::{upscale_controlled, upscale_gate};

// Álgebra linear
pub use crate::linalg::{ComplexMatrix, ComplexVector};
pub use num_complex::Complex64;

// Configuração e erros
pub use crate::config::SimConfig;
pub use crate::error::{KetError, KetResult};
