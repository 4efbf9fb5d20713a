//! # Bit — valor lógico de 1 bit
//!
//! Todo sinal que atravessa os gates é um [`Bit`]. Inteiros vindos de fora
//! passam por [`Bit::try_from`], que rejeita qualquer valor fora de {0, 1}
//! em vez de tratá-lo como "verdadeiro".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::{GateError, GateResult};

/// Bit lógico
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Nível baixo
    #[default]
    Zero = 0,
    /// Nível alto
    One = 1,
}

impl Bit {
    /// Os dois valores, em ordem crescente
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Valor numérico (0 ou 1)
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Valor como f32, usado pelo scorer adaptativo
    #[inline]
    pub fn as_f32(self) -> f32 {
        self.as_u8() as f32
    }

    /// É nível alto?
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    /// Valida uma sequência bruta de bytes
    pub fn parse_sequence(raw: &[u8]) -> GateResult<Vec<Bit>> {
        raw.iter().map(|&b| Bit::try_from(b)).collect()
    }

    /// Todos os pares de entrada (a, b) na ordem 00, 01, 10, 11
    pub fn pairs() -> impl Iterator<Item = (Bit, Bit)> {
        Self::ALL
            .into_iter()
            .flat_map(|a| Self::ALL.into_iter().map(move |b| (a, b)))
    }
}

impl TryFrom<u8> for Bit {
    type Error = GateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(GateError::InvalidBit(other)),
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl From<Bit> for f32 {
    fn from(bit: Bit) -> Self {
        bit.as_f32()
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from(self.is_one() && rhs.is_one())
    }
}

impl BitOr for Bit {
    type Output = Bit;

    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from(self.is_one() || rhs.is_one())
    }
}

impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self != rhs)
    }
}

impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
