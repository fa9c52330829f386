use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// Direction of a feature location relative to the reference sequence.
/// Peptide features are always located on the forward strand.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(i8)]
pub enum Strand {
    /// The forward strand, also known as the positive strand or Watson strand.
    #[default]
    Forward = 1,
    /// The reverse strand, also known as the negative strand or Crick strand.
    Reverse = -1,
}

impl Strand {
    /// Get the symbolic representation of the strand.
    pub fn symbol(&self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }

    /// Arrow used when rendering locations: '>' points downstream on the forward strand.
    pub fn arrow(&self) -> char {
        match self {
            Self::Forward => '>',
            Self::Reverse => '<',
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_symbols() {
        assert_eq!(format!("{}", Strand::Forward), "+");
        assert_eq!(format!("{}", Strand::Reverse), "-");
        assert_eq!(Strand::Forward.arrow(), '>');
        assert_eq!(Strand::Reverse.arrow(), '<');
    }

    #[test]
    fn test_strand_default() {
        assert_eq!(Strand::default(), Strand::Forward);
    }
}
