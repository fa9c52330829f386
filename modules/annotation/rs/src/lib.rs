pub use annotated_sequence::AnnotatedSequence;
pub use annotation::Annotation;
pub use feature::Feature;

mod annotated_sequence;
mod annotation;
mod feature;
