//! # Operator Upscaling — Embutir portas em n qubits
//!
//! Uma porta de k qubits aplicada a partir do qubit `t` num sistema de `n`
//! qubits vira o operador `2^n × 2^n`:
//!
//! ```text
//! I ⊗ … ⊗ I ⊗ G ⊗ I ⊗ … ⊗ I
//! └── t ──┘       └ n-t-k ┘
//! ```
//!
//! Portas controladas usam projetores no qubit de controle:
//!
//! ```text
//! |0⟩⟨0|_c ⊗ I  +  |1⟩⟨1|_c ⊗ G_t
//! ```
//!
//! ## Complexidade
//!
//! O(4^n) em tempo e memória: o operador denso é materializado.

use ndarray::array;
use tracing::trace;

use crate::error::{KetError, KetResult};
use crate::linalg::{self, ComplexMatrix, ONE, ZERO};

/// Posiciona matrizes em qubits específicos, completando com identidades
///
/// `placements` deve estar ordenado por posição e sem sobreposição.
fn embed(size: usize, placements: &[(usize, &ComplexMatrix, usize)]) -> ComplexMatrix {
    let identity = linalg::identity2();
    let mut factors: Vec<&ComplexMatrix> = Vec::with_capacity(size);
    let mut qubit = 0;
    for &(position, matrix, width) in placements {
        while qubit < position {
            factors.push(&identity);
            qubit += 1;
        }
        factors.push(matrix);
        qubit += width;
    }
    while qubit < size {
        factors.push(&identity);
        qubit += 1;
    }
    linalg::kron_chain(factors)
}

fn check_span(gate_qubits: usize, target: usize, size: usize) -> KetResult<()> {
    if target >= size {
        return Err(KetError::QubitOutOfRange {
            index: target,
            size,
        });
    }
    if target + gate_qubits > size {
        return Err(KetError::GateTooWide {
            gate_qubits,
            target,
            size,
        });
    }
    Ok(())
}

/// Eleva uma porta de k qubits ao operador de um sistema de `size` qubits
///
/// A porta ocupa os qubits `target..target + k`; o qubit 0 é o fator mais
/// significativo do produto tensorial.
///
/// # Errors
///
/// - [`KetError::NotPowerOfTwo`] se a matriz não for 2^k × 2^k
/// - [`KetError::QubitOutOfRange`] se `target >= size`
/// - [`KetError::GateTooWide`] se a porta não couber a partir de `target`
pub fn upscale_gate(gate: &ComplexMatrix, target: usize, size: usize) -> KetResult<ComplexMatrix> {
    let gate_qubits = linalg::qubit_count(gate)?;
    check_span(gate_qubits, target, size)?;

    let operator = embed(size, &[(target, gate, gate_qubits)]);
    trace!(qubit = target, size, dim = operator.nrows(), "upscaled gate");
    Ok(operator)
}

/// Operador de `gate` em `target` condicionado a `control = |1⟩`
pub fn upscale_controlled(
    gate: &ComplexMatrix,
    control: usize,
    target: usize,
    size: usize,
) -> KetResult<ComplexMatrix> {
    let gate_qubits = linalg::qubit_count(gate)?;
    check_span(gate_qubits, target, size)?;
    if control >= size {
        return Err(KetError::QubitOutOfRange {
            index: control,
            size,
        });
    }
    if (target..target + gate_qubits).contains(&control) {
        return Err(KetError::SameControlTarget(control));
    }

    let project_zero = array![[ONE, ZERO], [ZERO, ZERO]];
    let project_one = array![[ZERO, ZERO], [ZERO, ONE]];

    let idle = embed(size, &[(control, &project_zero, 1)]);
    let active = if control < target {
        embed(size, &[(control, &project_one, 1), (target, gate, gate_qubits)])
    } else {
        embed(size, &[(target, gate, gate_qubits), (control, &project_one, 1)])
    };

    let operator = idle + active;
    trace!(control, qubit = target, size, dim = operator.nrows(), "upscaled controlled gate");
    Ok(operator)
}
