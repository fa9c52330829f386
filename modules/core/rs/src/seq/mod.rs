pub use nucleotide::NucleotideSequence;
pub use protein::ProteinSequence;
pub use sequence::Sequence;

mod nucleotide;
mod protein;
mod sequence;
