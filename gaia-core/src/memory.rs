//! # Memory Gate — célula de 1 bit com histórico
//!
//! A saída depende da entrada atual e do que a célula lembra. Existem dois
//! modos com semânticas diferentes, ambos suportados:
//!
//! | Modo | Saída | Atualização da memória |
//! |------|-------|------------------------|
//! | [`MemoryMode::XorWithMemory`] | `input ^ memory` | `memory ← state anterior` |
//! | [`MemoryMode::SimpleLag`] | `input ^ memory` | `memory ← input` |
//!
//! No modo `XorWithMemory` a memória fica um passo mais atrasada que a
//! entrada; no `SimpleLag` ela é simplesmente a entrada anterior.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::bit::Bit;
use crate::error::GateError;
use crate::primitives::PrimitiveGate;

/// Semântica de atualização da memória
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryMode {
    /// `memory` recebe o estado anterior
    XorWithMemory,
    /// `memory` recebe a entrada anterior
    #[default]
    SimpleLag,
}

impl MemoryMode {
    /// Nome descritivo
    pub fn name(&self) -> &'static str {
        match self {
            Self::XorWithMemory => "xor-with-memory",
            Self::SimpleLag => "simple-lag",
        }
    }
}

impl fmt::Display for MemoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MemoryMode {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xor-with-memory" | "xor_with_memory" => Ok(Self::XorWithMemory),
            "simple-lag" | "simple_lag" => Ok(Self::SimpleLag),
            other => Err(GateError::InvalidConfig(format!("unknown memory mode '{other}'"))),
        }
    }
}

/// Célula de memória: estado atual + memória
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCell {
    /// Última saída produzida
    pub state: Bit,
    /// Estado anterior ou entrada anterior, conforme o modo
    pub memory: Bit,
}

/// Gate com memória
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryGate {
    cell: MemoryCell,
    mode: MemoryMode,
}

impl MemoryGate {
    /// Cria gate com state = memory = 0
    pub fn new(mode: MemoryMode) -> Self {
        Self {
            cell: MemoryCell::default(),
            mode,
        }
    }

    /// Modo configurado
    pub fn mode(&self) -> MemoryMode {
        self.mode
    }

    /// Estado atual (última saída)
    pub fn state(&self) -> Bit {
        self.cell.state
    }

    /// Conteúdo da memória
    pub fn memory(&self) -> Bit {
        self.cell.memory
    }

    /// Célula completa
    pub fn cell(&self) -> MemoryCell {
        self.cell
    }

    /// Processa um bit de entrada
    pub fn process(&mut self, input: Bit) -> Bit {
        let output = input ^ self.cell.memory;
        self.cell.memory = match self.mode {
            MemoryMode::XorWithMemory => self.cell.state,
            MemoryMode::SimpleLag => input,
        };
        self.cell.state = output;

        trace!(mode = %self.mode, %input, %output, memory = %self.cell.memory, "memory step");
        output
    }

    /// Aplica uma porta primitiva a (a, b) e passa o resultado pela memória
    pub fn process_gate(&mut self, gate: PrimitiveGate, a: Bit, b: Bit) -> Bit {
        self.process(gate.apply(a, b))
    }

    /// Processa uma sequência, retornando todas as saídas
    pub fn process_sequence(&mut self, inputs: &[Bit]) -> Vec<Bit> {
        inputs.iter().map(|&input| self.process(input)).collect()
    }

    /// Volta para state = memory = 0
    pub fn reset(&mut self) {
        self.cell = MemoryCell::default();
    }
}
