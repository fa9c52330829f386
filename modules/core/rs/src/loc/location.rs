use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use derive_more::Constructor;
use impl_tools::autoimpl;
use num::{CheckedAdd, CheckedSub};

use crate::num::Coord;

use super::defect::Defect;
use super::strand::Strand;

/// Location is a single contiguous stretch [first, last] of a feature, both ends inclusive.
///
/// Unlike `Range`, no ordering of `first` and `last` is enforced: locations are built as they
/// are described by the annotation source and `first <= last` is a convention of the callers.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve, Constructor)]
pub struct Location<Idx: Coord> {
    first: Idx,
    last: Idx,
    strand: Strand,
    defect: Defect,
}

/// Trait for types that can be generally viewed as a feature location.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
pub trait LocationOp {
    type Idx: Coord;

    /// First (inclusive) position of the location-like object.
    fn first(&self) -> Self::Idx;

    /// Last (inclusive) position of the location-like object.
    fn last(&self) -> Self::Idx;

    fn strand(&self) -> Strand;

    fn defect(&self) -> Defect;

    /// Number of positions covered by the location-like object.
    /// Saturates at the bounds of `Idx` for locations spanning (almost) the whole coordinate range.
    fn span(&self) -> Self::Idx {
        let (first, last) = (self.first(), self.last());
        last.checked_sub(&first)
            .and_then(|x| x.checked_add(&<Self::Idx as ::num::One>::one()))
            .unwrap_or_else(|| {
                if last >= first {
                    <Self::Idx as ::num::Bounded>::max_value()
                } else {
                    <Self::Idx as ::num::Bounded>::min_value()
                }
            })
    }

    /// Check if the location-like object shares at least one position with [first, last].
    fn overlaps(&self, first: Self::Idx, last: Self::Idx) -> bool {
        self.first() <= last && self.last() >= first
    }

    /// Turn the location-like object into a basic location.
    fn as_location(&self) -> Location<Self::Idx> {
        Location::new(self.first(), self.last(), self.strand(), self.defect())
    }
}

impl<Idx: Coord> LocationOp for Location<Idx> {
    type Idx = Idx;

    #[inline(always)]
    fn first(&self) -> Self::Idx {
        self.first
    }
    #[inline(always)]
    fn last(&self) -> Self::Idx {
        self.last
    }
    #[inline(always)]
    fn strand(&self) -> Strand {
        self.strand
    }
    #[inline(always)]
    fn defect(&self) -> Defect {
        self.defect
    }
}

impl<Idx: Coord> Location<Idx> {
    /// Defect-free location on the forward strand.
    pub fn forward(first: Idx, last: Idx) -> Self {
        Self::new(first, last, Strand::Forward, Defect::NONE)
    }

    /// Defect-free location on the reverse strand.
    pub fn reverse(first: Idx, last: Idx) -> Self {
        Self::new(first, last, Strand::Reverse, Defect::NONE)
    }

    pub fn with_defect(mut self, defect: Defect) -> Self {
        self.defect = defect;
        self
    }

    /// Truncate the location to the window [first, last], flagging every truncated side.
    /// Ends that stick out on the left get MISS_LEFT, on the right MISS_RIGHT.
    /// Locations outside the window are truncated as well and end up with first > last.
    pub fn truncate(&mut self, first: Idx, last: Idx) -> &mut Self {
        if self.first < first {
            self.first = first;
            self.defect |= Defect::MISS_LEFT;
        }
        if self.last > last {
            self.last = last;
            self.defect |= Defect::MISS_RIGHT;
        }
        self
    }

    pub fn truncated(mut self, first: Idx, last: Idx) -> Self {
        self.truncate(first, last);
        self
    }
}

impl<Idx: Coord> Display for Location<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.strand {
            Strand::Forward => write!(f, "{}-{} {}", self.first, self.last, self.strand.arrow())?,
            Strand::Reverse => write!(f, "{} {}-{}", self.strand.arrow(), self.first, self.last)?,
        }
        if !self.defect.is_none() {
            write!(f, " {}", self.defect)?;
        }
        Ok(())
    }
}

impl<Idx: Coord> From<(Idx, Idx)> for Location<Idx> {
    fn from(value: (Idx, Idx)) -> Self {
        Self::forward(value.0, value.1)
    }
}

impl<Idx: Coord> From<(Idx, Idx, Strand)> for Location<Idx> {
    fn from(value: (Idx, Idx, Strand)) -> Self {
        Self::new(value.0, value.1, value.2, Defect::NONE)
    }
}

impl<Idx: Coord> PartialEq<(Idx, Idx)> for Location<Idx> {
    fn eq(&self, other: &(Idx, Idx)) -> bool {
        self.first == other.0 && self.last == other.1
    }
}
