use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{Report, Result};

use super::sequence::Sequence;
use crate::Error;

/// Peptide sequence over the one-letter amino acid code: the 20 standard residues, the
/// ambiguity codes `B`, `Z`, `X`, selenocysteine `U`, pyrrolysine `O` and the stop symbol `*`.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct ProteinSequence {
    seq: Vec<u8>,
}

impl ProteinSequence {
    const ALPHABET: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWYBZXUO*";

    pub fn new(seq: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_symbols(seq)
    }
}

impl Sequence for ProteinSequence {
    const KIND: &'static str = "protein";

    fn symbols(&self) -> &[u8] {
        &self.seq
    }

    unsafe fn symbols_mut(&mut self) -> &mut Vec<u8> {
        &mut self.seq
    }

    unsafe fn from_symbols_unchecked(symbols: Vec<u8>) -> Self {
        Self { seq: symbols }
    }

    fn normalize(symbol: u8) -> Result<u8> {
        let upper = symbol.to_ascii_uppercase();
        if Self::ALPHABET.contains(&upper) {
            Ok(upper)
        } else {
            Err(Error::Type(format!(
                "{:?} is not a valid {} symbol",
                symbol as char,
                Self::KIND
            ))
            .into())
        }
    }

    fn complement_symbol(_: u8) -> Result<u8> {
        Err(Error::Type("protein sequences have no complement".to_string()).into())
    }
}

impl Display for ProteinSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.seq))
    }
}

impl FromStr for ProteinSequence {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ProteinSequence {
    type Error = Report;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
