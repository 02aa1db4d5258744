//! # Álgebra Linear — Vetores e Matrizes Complexas
//!
//! Primitivas densas sobre `ndarray` + `num-complex`: produto de Kronecker,
//! norma, adjunta e comparação aproximada.
//!
//! ## Ordem dos fatores
//!
//! ```text
//! f_0 ⊗ f_1 ⊗ … ⊗ f_{n-1}     (qubit 0 = fator mais significativo)
//! ```
//!
//! O produto de Kronecker não é comutativo: a cadeia é sempre montada da
//! esquerda para a direita.

use ndarray::{Array1, Array2, Axis, linalg::kron};
use num_complex::Complex64;

use crate::error::{KetError, KetResult};

/// Vetor coluna complexo denso
pub type ComplexVector = Array1<Complex64>;

/// Matriz complexa densa
pub type ComplexMatrix = Array2<Complex64>;

/// Zero complexo
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Um complexo
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Matriz identidade `dim × dim`
pub fn identity(dim: usize) -> ComplexMatrix {
    Array2::eye(dim)
}

/// Identidade 2x2 (fator neutro das cadeias de tensor)
pub fn identity2() -> ComplexMatrix {
    identity(2)
}

/// Produto tensorial ordenado `factors[0] ⊗ factors[1] ⊗ …`
///
/// Uma cadeia vazia resulta na matriz 1x1 `[1]`.
pub fn kron_chain<'a, I>(factors: I) -> ComplexMatrix
where
    I: IntoIterator<Item = &'a ComplexMatrix>,
{
    factors
        .into_iter()
        .fold(Array2::from_elem((1, 1), ONE), |acc, factor| kron(&acc, factor))
}

/// Produto tensorial de dois vetores de estado
pub fn kron_vec(a: &ComplexVector, b: &ComplexVector) -> ComplexVector {
    let a_col = a.view().insert_axis(Axis(1));
    let b_col = b.view().insert_axis(Axis(1));
    kron(&a_col, &b_col).remove_axis(Axis(1))
}

/// Transposta conjugada (dagger)
pub fn dagger(m: &ComplexMatrix) -> ComplexMatrix {
    m.t().mapv(|z| z.conj())
}

/// Norma euclidiana
pub fn norm(v: &ComplexVector) -> f64 {
    v.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
}

/// Divide o vetor pela sua norma
pub fn normalize_vector(v: &ComplexVector) -> KetResult<ComplexVector> {
    let n = norm(v);
    if n == 0.0 {
        return Err(KetError::ZeroVector);
    }
    Ok(v.mapv(|a| a / n))
}

/// Comparação elemento a elemento com tolerância absoluta
pub fn approx_eq(a: &ComplexMatrix, b: &ComplexMatrix, tolerance: f64) -> bool {
    a.dim() == b.dim()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Comparação aproximada de vetores
pub fn approx_eq_vec(a: &ComplexVector, b: &ComplexVector, tolerance: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Verifica U·U† = I dentro da tolerância
pub fn is_unitary(m: &ComplexMatrix, tolerance: f64) -> bool {
    let (rows, cols) = m.dim();
    if rows != cols {
        return false;
    }
    let product = m.dot(&dagger(m));
    approx_eq(&product, &identity(rows), tolerance)
}

/// Número de qubits de uma matriz 2^k × 2^k
pub fn qubit_count(m: &ComplexMatrix) -> KetResult<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(KetError::DimensionMismatch {
            expected: rows,
            actual: cols,
        });
    }
    if rows < 2 || !rows.is_power_of_two() {
        return Err(KetError::NotPowerOfTwo(rows));
    }
    Ok(rows.trailing_zeros() as usize)
}
