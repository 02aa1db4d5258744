//! Tipos de erro para ket-core

use thiserror::Error;

/// Resultado customizado para operações de simulação
pub type KetResult<T> = Result<T, KetError>;

/// Erros que podem ocorrer na construção de estados e na aplicação de gates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KetError {
    #[error("Qubit requires either an angle or a vector")]
    MissingInitializer,

    #[error("Qubit at position {position} is not in a computational basis state")]
    NotBasisState { position: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Qubit index {index} out of range for register of size {size}")]
    QubitOutOfRange { index: usize, size: usize },

    #[error("Gate on {gate_qubits} qubits does not fit at target {target} of a {size}-qubit system")]
    GateTooWide {
        gate_qubits: usize,
        target: usize,
        size: usize,
    },

    #[error("Gate dimension {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("State is not normalized: norm {0}")]
    NotNormalized(f64),

    #[error("Cannot normalize a zero vector")]
    ZeroVector,

    #[error("Register must hold at least one qubit")]
    EmptyRegister,

    #[error("Register of {requested} qubits exceeds the configured maximum of {max}")]
    TooManyQubits { requested: usize, max: usize },

    #[error("Control and target are the same qubit: {0}")]
    SameControlTarget(usize),

    #[error("Step {step} is not a local single-qubit step")]
    NonLocalStep { step: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for KetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
