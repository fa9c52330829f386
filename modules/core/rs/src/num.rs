use std::fmt::{Debug, Display};
use std::hash::Hash;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are signed primitive integers usable as biological coordinates.
/// Coordinates can be negative (e.g. features starting upstream of the sequence), hence signed.
pub trait Coord: PrimInt + ::num::Signed + Hash + Display + Send + Sync {}

impl<T: PrimInt + ::num::Signed + Hash + Display + Send + Sync> Coord for T {}
