//! Tipos de erro para gaia-core

use thiserror::Error;

/// Resultado customizado para operações de gates
pub type GateResult<T> = Result<T, GateError>;

/// Erros que podem ocorrer em operações de gates e redes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    #[error("Invalid bit: expected 0 or 1, got {0}")]
    InvalidBit(u8),

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Empty network: {declared} nodes declared, at least 2 inputs required")]
    EmptyNetwork { declared: usize },

    #[error("Node {node} reads input {input} before it was assigned")]
    UninitializedNode { node: usize, input: usize },

    #[error("Node index {index} out of range ({count} nodes declared)")]
    NodeOutOfRange { index: usize, count: usize },

    #[error("Node {0} is not an adaptive gate")]
    NotAdaptive(usize),

    #[error("Invalid probability: {0} (must lie in [0, 1])")]
    InvalidProbability(f32),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
