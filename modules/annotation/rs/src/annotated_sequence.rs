use std::ops::{Bound, Range, RangeBounds};

use annobit_core_rs::loc::{Location, LocationOp, Strand};
use annobit_core_rs::num::Coord;
use annobit_core_rs::seq::Sequence;
use annobit_core_rs::Error;
use derive_getters::{Dissolve, Getters};
use eyre::Result;

use crate::annotation::Annotation;
use crate::feature::Feature;

/// A sequence paired with its annotation.
///
/// All positions accepted by this type are given in the coordinate system of the annotation,
/// where `sequence_start` is the position of the first stored symbol (1 by default, i.e.
/// one-based coordinates). Positions are translated to storage indices by subtracting
/// `sequence_start`.
#[derive(Clone, PartialEq, Eq, Debug, Dissolve, Getters)]
pub struct AnnotatedSequence<S: Sequence, Idx: Coord> {
    annotation: Annotation<Idx>,
    sequence: S,
    #[getter(skip)]
    sequence_start: Idx,
}

impl<S: Sequence, Idx: Coord> AnnotatedSequence<S, Idx> {
    pub fn new(annotation: Annotation<Idx>, sequence: S, sequence_start: Idx) -> Self {
        Self {
            annotation,
            sequence,
            sequence_start,
        }
    }

    /// Annotated sequence whose first symbol is at position 1.
    pub fn one_based(annotation: Annotation<Idx>, sequence: S) -> Self {
        Self::new(annotation, sequence, Idx::one())
    }

    /// Position of the first stored symbol.
    pub fn sequence_start(&self) -> Idx {
        self.sequence_start
    }

    pub fn annotation_mut(&mut self) -> &mut Annotation<Idx> {
        &mut self.annotation
    }

    /// Sequence covered by the feature.
    ///
    /// Sub-sequences of all locations are joined in the order of the locations, sub-sequences
    /// on the reverse strand are reverse complemented first. Inverted locations contribute
    /// nothing.
    pub fn extract(&self, feature: &Feature<Idx>) -> Result<S> {
        let mut result = self.sequence.empty_like();
        for loc in feature.locs() {
            let chunk = self.sequence.slice(self.storage_range(loc)?)?;
            match loc.strand() {
                Strand::Forward => result.append(&chunk),
                Strand::Reverse => result.append(&chunk.reversed().complemented()?),
            };
        }
        Ok(result)
    }

    /// Write `value` into the locations of the feature, the inverse of `extract` on the forward
    /// strand. `value` is split into chunks matching the span of each location.
    ///
    /// Chunks are written as is, reverse strand locations are NOT reverse complemented.
    pub fn assign(&mut self, feature: &Feature<Idx>, value: &S) -> Result<()> {
        let ranges = feature
            .locs()
            .iter()
            .map(|loc| self.storage_range(loc))
            .collect::<Result<Vec<_>>>()?;

        // Validate everything before touching the sequence
        let expected: usize = ranges.iter().map(|x| x.len()).sum();
        if expected != value.len() {
            return Err(Error::LengthMismatch {
                expected,
                actual: value.len(),
            }
            .into());
        }
        for range in &ranges {
            self.sequence.check_range(range)?;
        }

        let mut offset = 0;
        for range in ranges {
            let chunk = value.slice(offset..offset + range.len())?;
            self.sequence.splice(range.start, &chunk)?;
            offset += range.len();
        }
        Ok(())
    }

    /// Sub-sequence covering the range together with the sliced annotation.
    ///
    /// Omitted bounds extend to the ends of the sequence. Note that `sequence_start` of the result
    /// is the same as in `self`, it doesn't follow the start of the range.
    pub fn slice(&self, range: impl RangeBounds<Idx>) -> Result<Self> {
        let storage = self.storage_bounds(&range)?;
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        Ok(Self {
            annotation: self.annotation.slice(bounds),
            sequence: self.sequence.slice(storage)?,
            sequence_start: self.sequence_start,
        })
    }

    /// Overwrite the symbols in the range with `value` of the same length.
    pub fn assign_range(&mut self, range: impl RangeBounds<Idx>, value: &S) -> Result<()> {
        let storage = self.storage_bounds(&range)?;
        if storage.len() != value.len() {
            return Err(Error::LengthMismatch {
                expected: storage.len(),
                actual: value.len(),
            }
            .into());
        }
        self.sequence.check_range(&storage)?;
        self.sequence.splice(storage.start, value)
    }

    /// Symbol at the given position.
    pub fn symbol(&self, pos: Idx) -> Result<u8> {
        self.sequence.get(self.storage_index(pos)?)
    }

    pub fn set_symbol(&mut self, pos: Idx, symbol: u8) -> Result<()> {
        let ind = self.storage_index(pos)?;
        self.sequence.set(ind, symbol)
    }

    fn storage_index(&self, pos: Idx) -> Result<usize> {
        pos.checked_sub(&self.sequence_start)
            .and_then(|x| x.to_usize())
            .ok_or_else(|| Error::out_of_bounds(pos, self.sequence.len()).into())
    }

    /// Storage range of the location. Inverted locations (first > last), e.g. ones truncated by
    /// slicing while lying outside the window, cover no symbols.
    fn storage_range(&self, loc: &Location<Idx>) -> Result<Range<usize>> {
        if loc.first() > loc.last() {
            return Ok(0..0);
        }
        Ok(self.storage_index(loc.first())?..self.storage_index(self.successor(loc.last())?)?)
    }

    fn storage_bounds(&self, range: &impl RangeBounds<Idx>) -> Result<Range<usize>> {
        let start = match range.start_bound() {
            Bound::Included(x) => self.storage_index(*x)?,
            Bound::Excluded(x) => self.storage_index(self.successor(*x)?)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(x) => self.storage_index(self.successor(*x)?)?,
            Bound::Excluded(x) => self.storage_index(*x)?,
            Bound::Unbounded => self.sequence.len(),
        };
        // Reversed ranges are empty
        Ok(start..end.max(start))
    }

    fn successor(&self, pos: Idx) -> Result<Idx> {
        pos.checked_add(&Idx::one())
            .ok_or_else(|| Error::out_of_bounds(pos, self.sequence.len()).into())
    }
}
