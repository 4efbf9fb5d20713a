//! # Superposition — par de probabilidades com colapso determinístico
//!
//! Não há sorteio: o colapso compara `prob_one` com [`COLLAPSE_THRESHOLD`]
//! (estritamente maior). Uma vez colapsado, o valor nunca muda.
//!
//! | Entrada (a, b) | P(1) | Colapso |
//! |----------------|------|---------|
//! | (1, 1) | 0.8 | 1 |
//! | (0, 0) | 0.2 | 0 |
//! | (0, 1), (1, 0) | 0.5 | 0 |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bit::Bit;
use crate::error::{GateError, GateResult};

/// P(1) quando ambas as entradas são 1
pub const PROB_BOTH_HIGH: f32 = 0.8;

/// P(1) quando ambas as entradas são 0
pub const PROB_BOTH_LOW: f32 = 0.2;

/// P(1) para entradas divergentes
pub const PROB_MIXED: f32 = 0.5;

/// Colapsa para 1 somente se P(1) > threshold
pub const COLLAPSE_THRESHOLD: f32 = 0.5;

/// Estado de superposição
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Superposition {
    prob_one: f32,
    prob_zero: f32,
    /// `Some` após o colapso; imutável daí em diante
    value: Option<Bit>,
}

impl Superposition {
    /// Cria superposição a partir de um par de entradas
    pub fn create(a: Bit, b: Bit) -> Self {
        let prob_one = match (a, b) {
            (Bit::One, Bit::One) => PROB_BOTH_HIGH,
            (Bit::Zero, Bit::Zero) => PROB_BOTH_LOW,
            _ => PROB_MIXED,
        };
        Self::uncollapsed(prob_one)
    }

    /// Cria superposição com P(1) arbitrária em [0, 1]
    pub fn from_probability(prob_one: f32) -> GateResult<Self> {
        if !(0.0..=1.0).contains(&prob_one) {
            return Err(GateError::InvalidProbability(prob_one));
        }
        Ok(Self::uncollapsed(prob_one))
    }

    fn uncollapsed(prob_one: f32) -> Self {
        Self {
            prob_one,
            prob_zero: 1.0 - prob_one,
            value: None,
        }
    }

    /// Colapsa (idempotente)
    pub fn collapse(&mut self) -> Bit {
        if let Some(value) = self.value {
            return value;
        }

        let value = Bit::from(self.prob_one > COLLAPSE_THRESHOLD);
        self.value = Some(value);
        debug!(prob_one = self.prob_one, %value, "superposition collapsed");
        value
    }

    pub fn prob_one(&self) -> f32 {
        self.prob_one
    }

    pub fn prob_zero(&self) -> f32 {
        self.prob_zero
    }

    pub fn is_collapsed(&self) -> bool {
        self.value.is_some()
    }

    /// Valor colapsado, se houver
    pub fn value(&self) -> Option<Bit> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_probabilities() {
        let s = Superposition::create(Bit::One, Bit::One);
        assert_eq!(s.prob_one(), 0.8);
        assert!((s.prob_zero() - 0.2).abs() < 1e-6);
        assert!(!s.is_collapsed());
        assert_eq!(s.value(), None);

        assert_eq!(Superposition::create(Bit::Zero, Bit::Zero).prob_one(), 0.2);
        assert_eq!(Superposition::create(Bit::One, Bit::Zero).prob_one(), 0.5);
        assert_eq!(Superposition::create(Bit::Zero, Bit::One).prob_one(), 0.5);
    }

    #[test]
    fn test_collapse_values() {
        let collapse = |a, b| Superposition::create(a, b).collapse();
        assert_eq!(collapse(Bit::One, Bit::One), Bit::One);
        assert_eq!(collapse(Bit::Zero, Bit::Zero), Bit::Zero);
        // 0.5 não é > 0.5
        assert_eq!(collapse(Bit::One, Bit::Zero), Bit::Zero);
        assert_eq!(collapse(Bit::Zero, Bit::One), Bit::Zero);
    }

    #[test]
    fn test_collapse_idempotent() {
        let mut s = Superposition::create(Bit::One, Bit::One);
        let (p1, p0) = (s.prob_one(), s.prob_zero());
        let first = s.collapse();
        let second = s.collapse();
        assert_eq!(first, second);
        assert_eq!(s.prob_one(), p1);
        assert_eq!(s.prob_zero(), p0);
        assert_eq!(s.value(), Some(first));
    }

    #[test]
    fn test_from_probability() {
        assert_eq!(Superposition::from_probability(0.9).unwrap().collapse(), Bit::One);
        assert_eq!(Superposition::from_probability(0.3).unwrap().collapse(), Bit::Zero);
        assert_eq!(
            Superposition::from_probability(1.5),
            Err(GateError::InvalidProbability(1.5))
        );
        assert!(Superposition::from_probability(f32::NAN).is_err());
    }
}
