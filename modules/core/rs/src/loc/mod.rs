pub use defect::Defect;
pub use location::{Location, LocationOp};
pub use strand::Strand;

mod defect;
mod location;
mod strand;
