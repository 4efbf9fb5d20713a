//! # 🔌 gaia-core — Composable Binary Gates
//!
//! Primitivas de 1 bit que se combinam: portas puras, gates com memória,
//! superposição com colapso determinístico, gates adaptativos e redes
//! acíclicas de gates.
//!
//! ## Computational Complexity
//!
//! - **Primitive / Memory / Superposition:** O(1) por chamada
//! - **PatternDetector::feed:** O(4), registrador de tamanho fixo
//! - **AdaptiveGate::learn:** O(4) pesos
//! - **GateNetwork::evaluate:** O(N) nós, N ≤ capacidade (padrão 10)
//!
//! Tudo é síncrono e cada instância é dona exclusiva do seu estado.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          GateNetwork (DAG, ordem de índice)     │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  AND / OR / XOR  +  AdaptiveGate (pesos)  │  │
//! │  └───────────────────────────────────────────┘  │
//! ├─────────────────────────────────────────────────┤
//! │  MemoryGate ─► PatternDetector   Superposition  │
//! ├─────────────────────────────────────────────────┤
//! │  PrimitiveGate (AND OR XOR NAND NOT) over Bit   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use gaia_core::{Bit, GateNetwork, NodeKind};
//!
//! let mut net = GateNetwork::new();
//! net.declare_input()?;
//! net.declare_input()?;
//! net.declare_node(NodeKind::And, 0, 1)?;
//! net.declare_node(NodeKind::Xor, 0, 1)?;
//! net.declare_node(NodeKind::Or, 2, 3)?;
//!
//! assert_eq!(net.evaluate(Bit::One, Bit::Zero)?, Bit::One);
//! # Ok::<(), gaia_core::GateError>(())
//! ```

pub mod adaptive;
pub mod bit;
pub mod config;
pub mod error;
pub mod memory;
pub mod network;
pub mod pattern;
pub mod primitives;
pub mod superposition;

pub use adaptive::{AdaptiveConfig, AdaptiveGate, LearningRule, TrainingReport};
pub use bit::Bit;
pub use config::GaiaConfig;
pub use error::{GateError, GateResult};
pub use memory::{MemoryCell, MemoryGate, MemoryMode};
pub use network::{GateNetwork, NetworkNode, NodeIndex, NodeKind};
pub use pattern::PatternDetector;
pub use primitives::{evaluate, PrimitiveGate};
pub use superposition::Superposition;
