//! # Adaptive Gate — scorer linear com aprendizado online
//!
//! ```text
//! score(a, b) = w0·a + w1·b + w2·(a&b) + w3·(a^b)
//! decide(a, b) = 1 se score > threshold, senão 0
//! ```
//!
//! Duas regras de atualização, escolhidas via [`LearningRule`]:
//!
//! - **SignedError**: `w_i += lr · (expected - got) · x_i` nas quatro features
//! - **Directional**: só `w0`, `w1`, empurrados por `±lr·a`, `±lr·b` conforme
//!   `expected` (o valor obtido só decide se há atualização)
//!
//! Nenhuma das duas garante convergência. Alvos linearmente separáveis
//! (AND, OR) costumam convergir; XOR pode não convergir.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::bit::Bit;
use crate::error::GateError;
use crate::primitives::PrimitiveGate;

/// Número de features/pesos: [a, b, a&b, a^b]
pub const NUM_WEIGHTS: usize = 4;

/// Pesos iniciais padrão
pub const DEFAULT_WEIGHTS: [f32; NUM_WEIGHTS] = [0.5; NUM_WEIGHTS];

/// Threshold usado no caminho de rede
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Taxa de aprendizado padrão
pub const DEFAULT_LEARNING_RATE: f32 = 0.1;

/// Regra de atualização de pesos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningRule {
    /// Perceptron: erro com sinal sobre as quatro features
    #[default]
    SignedError,
    /// Só w0/w1, direção dada por `expected`
    Directional,
}

impl LearningRule {
    /// Aplica a regra. Só deve ser chamado quando `got != expected`.
    pub fn apply(
        &self,
        weights: &mut [f32; NUM_WEIGHTS],
        features: [f32; NUM_WEIGHTS],
        expected: Bit,
        got: Bit,
        learning_rate: f32,
    ) {
        match self {
            Self::SignedError => {
                let error = expected.as_f32() - got.as_f32();
                for (w, x) in weights.iter_mut().zip(features) {
                    *w += learning_rate * error * x;
                }
            }
            Self::Directional => {
                let sign = if expected.is_one() { 1.0 } else { -1.0 };
                weights[0] += sign * learning_rate * features[0];
                weights[1] += sign * learning_rate * features[1];
            }
        }
    }

    /// Nome descritivo
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignedError => "signed-error",
            Self::Directional => "directional",
        }
    }
}

impl fmt::Display for LearningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LearningRule {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signed-error" | "signed_error" | "signed" => Ok(Self::SignedError),
            "directional" => Ok(Self::Directional),
            other => Err(GateError::InvalidConfig(format!("unknown learning rule '{other}'"))),
        }
    }
}

/// Configuração do gate adaptativo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    /// Decide 1 somente se score > threshold
    pub threshold: f32,
    /// Taxa de aprendizado
    pub learning_rate: f32,
    /// Regra de atualização
    pub rule: LearningRule,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            learning_rate: DEFAULT_LEARNING_RATE,
            rule: LearningRule::default(),
        }
    }
}

impl AdaptiveConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_rule(mut self, rule: LearningRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Resultado de uma sessão de treino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Épocas completas (tabela inteira por época)
    pub epochs: usize,
    /// Número de atualizações de pesos
    pub updates: usize,
    /// Linhas corretas antes do treino (0-4)
    pub correct_before: usize,
    /// Linhas corretas depois do treino (0-4)
    pub correct_after: usize,
}

impl TrainingReport {
    /// Acurácia piorou?
    pub fn regressed(&self) -> bool {
        self.correct_after < self.correct_before
    }

    /// Acertou a tabela inteira?
    pub fn converged(&self) -> bool {
        self.correct_after == 4
    }
}

/// Gate adaptativo com 4 pesos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveGate {
    weights: [f32; NUM_WEIGHTS],
    config: AdaptiveConfig,
}

impl Default for AdaptiveGate {
    fn default() -> Self {
        Self::new(AdaptiveConfig::default())
    }
}

impl AdaptiveGate {
    /// Cria gate com pesos padrão
    pub fn new(config: AdaptiveConfig) -> Self {
        Self::with_weights(DEFAULT_WEIGHTS, config)
    }

    /// Cria gate com pesos iniciais explícitos
    pub fn with_weights(weights: [f32; NUM_WEIGHTS], config: AdaptiveConfig) -> Self {
        Self { weights, config }
    }

    pub fn weights(&self) -> &[f32; NUM_WEIGHTS] {
        &self.weights
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Features [a, b, a&b, a^b]
    #[inline]
    fn features(a: Bit, b: Bit) -> [f32; NUM_WEIGHTS] {
        [a.as_f32(), b.as_f32(), (a & b).as_f32(), (a ^ b).as_f32()]
    }

    /// Score linear
    pub fn score(&self, a: Bit, b: Bit) -> f32 {
        self.weights
            .iter()
            .zip(Self::features(a, b))
            .map(|(w, x)| w * x)
            .sum()
    }

    /// Decide o bit de saída
    pub fn decide(&self, a: Bit, b: Bit) -> Bit {
        Bit::from(self.score(a, b) > self.config.threshold)
    }

    /// Um passo de aprendizado. Retorna true se os pesos mudaram.
    pub fn learn(&mut self, a: Bit, b: Bit, expected: Bit) -> bool {
        let got = self.decide(a, b);
        if got == expected {
            return false;
        }

        self.config.rule.apply(
            &mut self.weights,
            Self::features(a, b),
            expected,
            got,
            self.config.learning_rate,
        );
        debug!(
            rule = %self.config.rule,
            %a, %b, %expected, %got,
            weights = ?self.weights,
            "adaptive weights updated"
        );
        true
    }

    /// Linhas da tabela verdade de `target` previstas corretamente
    pub fn accuracy(&self, target: PrimitiveGate) -> usize {
        target
            .truth_table()
            .iter()
            .filter(|&&(a, b, expected)| self.decide(a, b) == expected)
            .count()
    }

    /// Treina `epochs` passadas completas sobre a tabela verdade de `target`
    pub fn train(&mut self, target: PrimitiveGate, epochs: usize) -> TrainingReport {
        let correct_before = self.accuracy(target);
        let mut updates = 0;

        for _ in 0..epochs {
            for (a, b, expected) in target.truth_table() {
                if self.learn(a, b, expected) {
                    updates += 1;
                }
            }
        }

        let report = TrainingReport {
            epochs,
            updates,
            correct_before,
            correct_after: self.accuracy(target),
        };
        debug!(%target, ?report, "training finished");
        report
    }
}
