//! # Primitive Gates — portas booleanas puras
//!
//! AND, OR, XOR, NAND e NOT sobre [`Bit`]. Funções totais, sem estado e
//! sem modos de falha; a única validação acontece na fronteira
//! ([`PrimitiveGate::evaluate_raw`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bit::Bit;
use crate::error::GateResult;

/// Porta booleana sem estado
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveGate {
    And,
    Or,
    Xor,
    Nand,
    /// Unária: o operando direito é ignorado
    Not,
}

impl PrimitiveGate {
    /// Todas as portas, na ordem em que são reportadas
    pub const ALL: [PrimitiveGate; 5] = [
        PrimitiveGate::And,
        PrimitiveGate::Or,
        PrimitiveGate::Xor,
        PrimitiveGate::Nand,
        PrimitiveGate::Not,
    ];

    /// Número de operandos usados
    pub fn arity(&self) -> usize {
        match self {
            Self::Not => 1,
            _ => 2,
        }
    }

    /// Avalia a porta
    #[inline]
    pub fn apply(&self, a: Bit, b: Bit) -> Bit {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::Nand => !(a & b),
            Self::Not => !a,
        }
    }

    /// Avalia a partir de inteiros brutos, rejeitando valores fora de {0, 1}
    pub fn evaluate_raw(&self, a: u8, b: u8) -> GateResult<Bit> {
        let a = Bit::try_from(a)?;
        let b = Bit::try_from(b)?;
        Ok(self.apply(a, b))
    }

    /// Tabela verdade completa: (a, b, saída) para 00, 01, 10, 11
    pub fn truth_table(&self) -> [(Bit, Bit, Bit); 4] {
        let mut rows = [(Bit::Zero, Bit::Zero, Bit::Zero); 4];
        for (row, (a, b)) in rows.iter_mut().zip(Bit::pairs()) {
            *row = (a, b, self.apply(a, b));
        }
        rows
    }

    /// Nome descritivo
    pub fn name(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nand => "NAND",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for PrimitiveGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Atalho para `PrimitiveGate::apply`
#[inline]
pub fn evaluate(gate: PrimitiveGate, a: Bit, b: Bit) -> Bit {
    gate.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GateError;

    #[test]
    fn test_exhaustive_truth_tables() {
        for a in 0u8..=1 {
            for b in 0u8..=1 {
                let bit = |g: PrimitiveGate| g.evaluate_raw(a, b).unwrap().as_u8();
                assert_eq!(bit(PrimitiveGate::And), a & b);
                assert_eq!(bit(PrimitiveGate::Or), a | b);
                assert_eq!(bit(PrimitiveGate::Xor), a ^ b);
                assert_eq!(bit(PrimitiveGate::Nand), 1 - (a & b));
                assert_eq!(bit(PrimitiveGate::Not), 1 - a);
            }
        }
    }

    #[test]
    fn test_binary_gates_commute() {
        for gate in PrimitiveGate::ALL.into_iter().filter(|g| g.arity() == 2) {
            for (a, b) in Bit::pairs() {
                assert_eq!(gate.apply(a, b), gate.apply(b, a), "{gate} not commutative");
            }
        }
    }

    #[test]
    fn test_raw_input_rejected() {
        assert_eq!(
            PrimitiveGate::And.evaluate_raw(1, 2),
            Err(GateError::InvalidBit(2))
        );
        assert_eq!(
            PrimitiveGate::Not.evaluate_raw(3, 0),
            Err(GateError::InvalidBit(3))
        );
    }

    #[test]
    fn test_truth_table_rows() {
        let rows = PrimitiveGate::Nand.truth_table();
        let outputs: Vec<u8> = rows.iter().map(|(_, _, out)| out.as_u8()).collect();
        assert_eq!(outputs, vec![1, 1, 1, 0]);
    }
}
