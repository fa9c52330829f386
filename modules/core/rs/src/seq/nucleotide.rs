use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{Report, Result};

use super::sequence::Sequence;
use crate::Error;

/// DNA sequence over the `ACGTN` alphabet. Lowercase input is accepted and stored uppercase.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct NucleotideSequence {
    seq: Vec<u8>,
}

impl NucleotideSequence {
    pub fn new(seq: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_symbols(seq)
    }
}

impl Sequence for NucleotideSequence {
    const KIND: &'static str = "nucleotide";

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
        match symbol.to_ascii_uppercase() {
            x @ (b'A' | b'C' | b'G' | b'T' | b'N') => Ok(x),
            _ => Err(Error::Type(format!(
                "{:?} is not a valid {} symbol",
                symbol as char,
                Self::KIND
            ))
            .into()),
        }
    }

    fn complement_symbol(symbol: u8) -> Result<u8> {
        match symbol {
            b'A' => Ok(b'T'),
            b'T' => Ok(b'A'),
            b'C' => Ok(b'G'),
            b'G' => Ok(b'C'),
            b'N' => Ok(b'N'),
            _ => Err(Error::Type(format!("{:?} has no complement", symbol as char)).into()),
        }
    }
}

impl Display for NucleotideSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only ASCII symbols are ever stored
        write!(f, "{}", String::from_utf8_lossy(&self.seq))
    }
}

impl FromStr for NucleotideSequence {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for NucleotideSequence {
    type Error = Report;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() -> Result<()> {
        let seq = NucleotideSequence::new("acgtN")?;
        assert_eq!(seq.symbols(), b"ACGTN");
        assert_eq!(seq.to_string(), "ACGTN");
        assert!(NucleotideSequence::new("").is_ok_and(|x| x.is_empty()));

        for invalid in ["ACGU", "AC GT", "ACGT1"] {
            let err = NucleotideSequence::new(invalid).unwrap_err();
            assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Type(_))));
        }
        Ok(())
    }

    #[test]
    fn test_get_set() -> Result<()> {
        let mut seq: NucleotideSequence = "ACGT".parse()?;
        assert_eq!(seq.get(2)?, b'G');
        assert!(seq.get(4).is_err());

        seq.set(0, b't')?;
        assert_eq!(seq.to_string(), "TCGT");
        assert!(seq.set(0, b'X').is_err());
        assert!(seq.set(10, b'A').is_err());
        assert_eq!(seq.to_string(), "TCGT");
        Ok(())
    }

    #[test]
    fn test_slice_and_splice() -> Result<()> {
        let mut seq = NucleotideSequence::new("AACCGGTT")?;
        assert_eq!(seq.slice(2..6)?.to_string(), "CCGG");
        assert!(seq.slice(2..6)?.len() == 4);
        assert!(seq.slice(0..0)?.is_empty());
        assert!(seq.slice(6..9).is_err());

        seq.splice(1, &NucleotideSequence::new("GG")?)?;
        assert_eq!(seq.to_string(), "AGGCGGTT");
        assert!(seq.splice(7, &NucleotideSequence::new("GG")?).is_err());
        assert_eq!(seq.to_string(), "AGGCGGTT");

        // Up to the very end
        seq.splice(6, &NucleotideSequence::new("ca")?)?;
        assert_eq!(seq.to_string(), "AGGCGGCA");
        let empty = seq.empty_like();
        seq.splice(8, &empty)?;
        assert_eq!(seq.to_string(), "AGGCGGCA");
        Ok(())
    }

    #[test]
    fn test_reverse_complement() -> Result<()> {
        let seq = NucleotideSequence::new("AACGN")?;
        assert_eq!(seq.reversed().to_string(), "NGCAA");
        assert_eq!(seq.complemented()?.to_string(), "TTGCN");
        assert_eq!(seq.reversed().complemented()?.to_string(), "NCGTT");
        Ok(())
    }

    #[test]
    fn test_concat() -> Result<()> {
        let left = NucleotideSequence::new("AC")?;
        let right = NucleotideSequence::new("GT")?;
        assert_eq!(left.concat(&right).to_string(), "ACGT");
        assert_eq!(left.to_string(), "AC");

        let mut empty = left.empty_like();
        assert!(empty.is_empty());
        empty.append(&left).append(&right);
        assert_eq!(empty.to_string(), "ACGT");
        Ok(())
    }
}
