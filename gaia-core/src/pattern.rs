//! Detector de padrão sobre um fluxo de bits.
//!
//! Registrador de deslocamento de 4 posições: o bit novo entra no índice 0,
//! os antigos andam para o índice 3 e o mais velho é descartado. O alvo é
//! comparado posição a posição, do mais novo para o mais velho.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bit::Bit;

/// Tamanho fixo do registrador
pub const PATTERN_LEN: usize = 4;

/// Alvo padrão, do mais novo (índice 0) ao mais velho (índice 3).
/// Em ordem de chegada corresponde a 1, 0, 1, 1.
pub const DEFAULT_TARGET: [Bit; PATTERN_LEN] = [Bit::One, Bit::One, Bit::Zero, Bit::One];

/// Detector de padrão com registrador de deslocamento
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDetector {
    register: [Bit; PATTERN_LEN],
    target: [Bit; PATTERN_LEN],
    /// Sticky: só volta a false via `reset`
    detected: bool,
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDetector {
    /// Cria detector com o alvo padrão
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    /// Cria detector com alvo customizado (mais novo primeiro)
    pub fn with_target(target: [Bit; PATTERN_LEN]) -> Self {
        Self {
            register: [Bit::Zero; PATTERN_LEN],
            target,
            detected: false,
        }
    }

    /// Alimenta um bit. Retorna true se o registrador casa com o alvo neste passo.
    pub fn feed(&mut self, bit: Bit) -> bool {
        self.register.rotate_right(1);
        self.register[0] = bit;

        let matched = self.register == self.target;
        if matched {
            self.detected = true;
            debug!(register = ?self.register, "pattern detected");
        }
        matched
    }

    /// Alimenta uma sequência e retorna os índices dos passos com match
    pub fn feed_sequence(&mut self, bits: &[Bit]) -> Vec<usize> {
        bits.iter()
            .enumerate()
            .filter_map(|(i, &bit)| self.feed(bit).then_some(i))
            .collect()
    }

    /// Houve algum match desde a criação ou o último reset?
    pub fn detected(&self) -> bool {
        self.detected
    }

    pub fn register(&self) -> &[Bit; PATTERN_LEN] {
        &self.register
    }

    pub fn target(&self) -> &[Bit; PATTERN_LEN] {
        &self.target
    }

    /// Zera registrador e flag
    pub fn reset(&mut self) {
        self.register = [Bit::Zero; PATTERN_LEN];
        self.detected = false;
    }
}
