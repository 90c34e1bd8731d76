use crate::error::{Error, Result};
use std::fmt;

/// The two-letter alphabet of the Kolakoski sequence.
///
/// A symbol doubles as a run length: `One` describes a run of one term,
/// `Two` a run of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    One = 1,
    Two = 2,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn flip(self) -> Self {
        match self {
            Symbol::One => Symbol::Two,
            Symbol::Two => Symbol::One,
        }
    }

    /// Returns the symbol read as a run length.
    pub fn run_length(self) -> usize {
        self as usize
    }

    /// Returns the symbol's digit.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Symbol {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Symbol::One),
            2 => Ok(Symbol::Two),
            other => Err(Error::InvalidSymbol(other)),
        }
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.value()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
