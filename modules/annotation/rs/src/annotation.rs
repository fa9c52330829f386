use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Bound, RangeBounds};

use annobit_core_rs::num::Coord;
use annobit_core_rs::Error;
use eyre::Result;

use crate::feature::Feature;

/// A collection of features belonging to one sequence.
///
/// Its advantage over a plain `Vec<Feature>` is the position based slicing: `slice` creates a
/// sub-annotation with copies of all features that overlap the requested range. Features sticking
/// out of the range are truncated to its boundaries and flagged with the `MISS_LEFT` and/or
/// `MISS_RIGHT` defects, features outside of the range are dropped.
///
/// The iteration order is an implementation detail and should not be relied upon. Scalar
/// indexing is not supported, iterate over the annotation or use `get_features` instead.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Annotation<Idx: Coord> {
    features: Vec<Feature<Idx>>,
}

impl<Idx: Coord> Annotation<Idx> {
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Copy of all stored features.
    pub fn get_features(&self) -> Vec<Feature<Idx>> {
        self.features.clone()
    }

    /// Add a copy of the feature to the annotation. Duplicates are allowed.
    pub fn add_feature(&mut self, feature: &Feature<Idx>) -> &mut Self {
        self.features.push(feature.clone());
        self
    }

    /// Delete the first feature that is equal to the given one.
    pub fn del_feature(&mut self, feature: &Feature<Idx>) -> Result<()> {
        match self.features.iter().position(|x| x == feature) {
            Some(ind) => {
                self.features.remove(ind);
                Ok(())
            }
            None => Err(Error::NotFound(format!("feature {feature} is not in the annotation")).into()),
        }
    }

    pub fn contains(&self, feature: &Feature<Idx>) -> bool {
        self.features.contains(feature)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature<Idx>> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Sub-annotation with all features overlapping the range.
    ///
    /// Omitted bounds leave the corresponding side unbounded. The end of `a..b` is exclusive as
    /// usual, so a feature is kept intact only if its last position is smaller than `b`.
    pub fn slice(&self, range: impl RangeBounds<Idx>) -> Self {
        let mut sliced = Self::new();
        let Some((first, last)) = Self::window(&range) else {
            log::trace!("Empty slicing window, returning an empty annotation");
            return sliced;
        };

        for feature in self.iter().filter(|x| x.overlaps(first, last)) {
            sliced.add_feature(&feature.truncated(first, last));
        }
        log::trace!(
            "Sliced annotation to [{first}, {last}]: kept {} of {} features",
            sliced.len(),
            self.len()
        );
        sliced
    }

    /// Inclusive [first, last] window covered by the range, None if the range is empty.
    fn window(range: &impl RangeBounds<Idx>) -> Option<(Idx, Idx)> {
        let first = match range.start_bound() {
            Bound::Included(x) => *x,
            Bound::Excluded(x) => x.checked_add(&Idx::one())?,
            Bound::Unbounded => Idx::min_value(),
        };
        let last = match range.end_bound() {
            Bound::Included(x) => *x,
            Bound::Excluded(x) => x.checked_sub(&Idx::one())?,
            Bound::Unbounded => Idx::max_value(),
        };
        (first <= last).then_some((first, last))
    }
}

impl<Idx: Coord> From<Vec<Feature<Idx>>> for Annotation<Idx> {
    fn from(features: Vec<Feature<Idx>>) -> Self {
        Self { features }
    }
}

impl<Idx: Coord> FromIterator<Feature<Idx>> for Annotation<Idx> {
    fn from_iter<T: IntoIterator<Item = Feature<Idx>>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl<Idx: Coord> Extend<Feature<Idx>> for Annotation<Idx> {
    fn extend<T: IntoIterator<Item = Feature<Idx>>>(&mut self, iter: T) {
        self.features.extend(iter)
    }
}

impl<'a, Idx: Coord> IntoIterator for &'a Annotation<Idx> {
    type Item = &'a Feature<Idx>;
    type IntoIter = std::slice::Iter<'a, Feature<Idx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Idx: Coord> IntoIterator for Annotation<Idx> {
    type Item = Feature<Idx>;
    type IntoIter = std::vec::IntoIter<Feature<Idx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<Idx: Coord> Add for Annotation<Idx> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.features.extend(rhs.features);
        self
    }
}

impl<Idx: Coord> Add for &Annotation<Idx> {
    type Output = Annotation<Idx>;

    fn add(self, rhs: Self) -> Self::Output {
        self.iter().chain(rhs.iter()).cloned().collect()
    }
}

impl<Idx: Coord> Add<Feature<Idx>> for Annotation<Idx> {
    type Output = Self;

    fn add(mut self, rhs: Feature<Idx>) -> Self::Output {
        self.features.push(rhs);
        self
    }
}

impl<Idx: Coord> Add<&Feature<Idx>> for &Annotation<Idx> {
    type Output = Annotation<Idx>;

    fn add(self, rhs: &Feature<Idx>) -> Self::Output {
        let mut merged = self.clone();
        merged.add_feature(rhs);
        merged
    }
}

impl<Idx: Coord> Display for Annotation<Idx> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for feature in &self.features {
            writeln!(f, "{feature}")?;
        }
        Ok(())
    }
}
