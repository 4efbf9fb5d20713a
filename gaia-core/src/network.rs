//! # Gate Network — DAG de gates avaliado em ordem de índice
//!
//! Os nós 0 e 1 são entradas; todo nó a partir do índice 2 consome a saída
//! de dois nós com índice estritamente menor. Como a declaração garante que
//! as arestas só apontam para trás, avaliar em ordem crescente de índice já
//! é uma ordem topológica.
//!
//! ```text
//!   [0] a ──┬──► [2] AND ──┐
//!           │              ├──► [4] OR  (saída)
//!   [1] b ──┴──► [3] XOR ──┘
//! ```
//!
//! A saída é o último nó declarado, a menos que [`GateNetwork::set_output`]
//! indique outro.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::adaptive::AdaptiveGate;
use crate::bit::Bit;
use crate::error::{GateError, GateResult};

/// Índice de nó (ordem de declaração)
pub type NodeIndex = usize;

/// Capacidade padrão de nós
pub const DEFAULT_CAPACITY: usize = 10;

/// Teto aceito por `GaiaConfig::validate`
pub const MAX_CAPACITY: usize = 4096;

/// Nós de entrada (índices 0 e 1)
pub const NUM_INPUTS: usize = 2;

/// Tipo de nó
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Entrada externa (somente índices 0 e 1)
    Input,
    And,
    Or,
    Xor,
    /// Gate adaptativo com pesos próprios
    Adaptive(AdaptiveGate),
}

impl NodeKind {
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Nome descritivo
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Adaptive(_) => "ADAPTIVE",
        }
    }

    /// Avalia o nó; `None` para entradas, que não têm função
    fn apply(&self, left: Bit, right: Bit) -> Option<Bit> {
        match self {
            Self::Input => None,
            Self::And => Some(left & right),
            Self::Or => Some(left | right),
            Self::Xor => Some(left ^ right),
            Self::Adaptive(gate) => Some(gate.decide(left, right)),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Nó da rede
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub kind: NodeKind,
    /// (esquerda, direita); sem uso em nós de entrada
    pub inputs: (NodeIndex, NodeIndex),
    /// Valor da última avaliação
    pub value: Option<Bit>,
}

/// Forma serializada; reconstruída via `declare_node` ao desserializar
#[derive(Debug, Clone, Deserialize)]
struct RawNetwork {
    nodes: Vec<NetworkNode>,
    capacity: usize,
    output: Option<NodeIndex>,
}

impl TryFrom<RawNetwork> for GateNetwork {
    type Error = GateError;

    fn try_from(raw: RawNetwork) -> Result<Self, Self::Error> {
        let mut net = GateNetwork::with_capacity(raw.capacity);
        for node in raw.nodes {
            let (left, right) = node.inputs;
            net.declare_node(node.kind, left, right)?;
        }
        if let Some(output) = raw.output {
            net.set_output(output)?;
        }
        Ok(net)
    }
}

/// Rede de gates com topologia estática
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNetwork")]
pub struct GateNetwork {
    nodes: Vec<NetworkNode>,
    capacity: usize,
    output: Option<NodeIndex>,
}

impl Default for GateNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl GateNetwork {
    /// Cria rede vazia com capacidade padrão
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Cria rede vazia com capacidade específica. `capacity` só limita
    /// declarações; a pré-alocação não passa de `DEFAULT_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            output: None,
        }
    }

    /// Rede AND + XOR alimentando um OR
    pub fn and_xor_or() -> GateResult<Self> {
        let mut net = Self::new();
        net.declare_input()?;
        net.declare_input()?;
        net.declare_node(NodeKind::And, 0, 1)?;
        net.declare_node(NodeKind::Xor, 0, 1)?;
        net.declare_node(NodeKind::Or, 2, 3)?;
        Ok(net)
    }

    /// Declara o próximo nó de entrada
    pub fn declare_input(&mut self) -> GateResult<NodeIndex> {
        self.declare_node(NodeKind::Input, 0, 0)
    }

    /// Declara um nó. Falha com `InvalidTopology` se a capacidade acabou, se
    /// uma entrada aparece depois dos índices 0/1, se um nó funcional ocupa
    /// um índice de entrada, ou se alguma referência não aponta para trás.
    pub fn declare_node(
        &mut self,
        kind: NodeKind,
        left: NodeIndex,
        right: NodeIndex,
    ) -> GateResult<NodeIndex> {
        let index = self.nodes.len();

        if index >= self.capacity {
            return Err(GateError::InvalidTopology(format!(
                "capacity of {} nodes exhausted",
                self.capacity
            )));
        }

        match (kind.is_input(), index < NUM_INPUTS) {
            (true, false) => {
                return Err(GateError::InvalidTopology(format!(
                    "input node declared at index {index}; only 0 and 1 are inputs"
                )));
            }
            (false, true) => {
                return Err(GateError::InvalidTopology(format!(
                    "{kind} node declared at index {index}, reserved for inputs"
                )));
            }
            (false, false) if left >= index || right >= index => {
                return Err(GateError::InvalidTopology(format!(
                    "node {index} reads ({left}, {right}); inputs must have a smaller index"
                )));
            }
            _ => {}
        }

        debug!(index, %kind, left, right, "network node declared");
        self.nodes.push(NetworkNode {
            kind,
            inputs: (left, right),
            value: None,
        });
        Ok(index)
    }

    /// Avalia a rede e retorna o valor do nó de saída
    pub fn evaluate(&mut self, input_a: Bit, input_b: Bit) -> GateResult<Bit> {
        if self.nodes.len() < NUM_INPUTS {
            return Err(GateError::EmptyNetwork {
                declared: self.nodes.len(),
            });
        }

        for node in self.nodes.iter_mut().skip(NUM_INPUTS) {
            node.value = None;
        }
        self.nodes[0].value = Some(input_a);
        self.nodes[1].value = Some(input_b);

        for i in NUM_INPUTS..self.nodes.len() {
            let (left, right) = self.input_values(i)?;
            let node = &mut self.nodes[i];
            let value = node.kind.apply(left, right).ok_or_else(|| {
                GateError::InvalidTopology(format!("input node found at index {i}"))
            })?;
            node.value = Some(value);
            trace!(node = i, kind = %node.kind, %left, %right, %value, "node evaluated");
        }

        let count = self.nodes.len();
        let output = self.output.unwrap_or(count - 1);
        let node = self
            .nodes
            .get(output)
            .ok_or(GateError::NodeOutOfRange { index: output, count })?;
        node.value.ok_or(GateError::UninitializedNode {
            node: output,
            input: output,
        })
    }

    /// Avalia a partir de inteiros brutos
    pub fn evaluate_raw(&mut self, input_a: u8, input_b: u8) -> GateResult<Bit> {
        self.evaluate(Bit::try_from(input_a)?, Bit::try_from(input_b)?)
    }

    /// Valores atuais das duas entradas de um nó
    fn input_values(&self, index: NodeIndex) -> GateResult<(Bit, Bit)> {
        let (left, right) = self.nodes[index].inputs;
        let read = |input: NodeIndex| {
            self.nodes
                .get(input)
                .filter(|_| input < index)
                .and_then(|n| n.value)
                .ok_or(GateError::UninitializedNode { node: index, input })
        };
        Ok((read(left)?, read(right)?))
    }

    /// Um passo de aprendizado no nó adaptativo `index`, usando as entradas
    /// que ele recebeu na última avaliação
    pub fn learn_node(&mut self, index: NodeIndex, expected: Bit) -> GateResult<bool> {
        self.adaptive_node_mut(index)?;
        let (left, right) = self.input_values(index)?;
        let gate = self.adaptive_node_mut(index)?;
        Ok(gate.learn(left, right, expected))
    }

    /// Acesso ao gate de um nó adaptativo
    pub fn adaptive_node_mut(&mut self, index: NodeIndex) -> GateResult<&mut AdaptiveGate> {
        let count = self.nodes.len();
        match self.nodes.get_mut(index) {
            Some(NetworkNode { kind: NodeKind::Adaptive(gate), .. }) => Ok(gate),
            Some(_) => Err(GateError::NotAdaptive(index)),
            None => Err(GateError::NodeOutOfRange { index, count }),
        }
    }

    /// Define explicitamente o nó de saída
    pub fn set_output(&mut self, index: NodeIndex) -> GateResult<()> {
        if index >= self.nodes.len() {
            return Err(GateError::NodeOutOfRange {
                index,
                count: self.nodes.len(),
            });
        }
        self.output = Some(index);
        Ok(())
    }

    /// Volta a usar o último nó como saída
    pub fn clear_output(&mut self) {
        self.output = None;
    }

    /// Índice do nó de saída efetivo
    pub fn output_index(&self) -> Option<NodeIndex> {
        self.output.or_else(|| self.nodes.len().checked_sub(1))
    }

    pub fn node(&self, index: NodeIndex) -> Option<&NetworkNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    /// Valores de todos os nós após a última avaliação
    pub fn values(&self) -> Vec<Option<Bit>> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
