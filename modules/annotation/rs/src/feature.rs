use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use annobit_core_rs::loc::{Location, LocationOp};
use annobit_core_rs::num::Coord;
use derive_getters::Dissolve;
use itertools::Itertools;

/// A single sequence feature, e.g. an entry of a GenBank feature table.
///
/// A feature is a named (`key`, e.g. "gene", "CDS" or "regulatory") and qualified set of
/// locations. Most features have a single location, spliced ones (e.g. eukaryotic CDS) have
/// several, kept in the order they are joined.
///
/// Features own their locations and qualifiers, they are never shared between annotations.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Dissolve)]
pub struct Feature<Idx: Coord> {
    key: String,
    locs: Vec<Location<Idx>>,
    qual: BTreeMap<String, String>,
}

impl<Idx: Coord> Feature<Idx> {
    pub fn new(
        key: impl Into<String>,
        locs: impl IntoIterator<Item = Location<Idx>>,
        qual: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            key: key.into(),
            locs: locs.into_iter().collect(),
            qual: qual
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Feature without qualifiers.
    pub fn unqualified(key: impl Into<String>, locs: impl IntoIterator<Item = Location<Idx>>) -> Self {
        Self::new(key, locs, Vec::<(String, String)>::new())
    }

    /// Name of the feature class.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn locs(&self) -> &[Location<Idx>] {
        &self.locs
    }

    /// Qualifier key-value pairs.
    pub fn qual(&self) -> &BTreeMap<String, String> {
        &self.qual
    }

    /// True if any location of the feature shares a position with [first, last].
    pub fn overlaps(&self, first: Idx, last: Idx) -> bool {
        self.locs.iter().any(|loc| loc.overlaps(first, last))
    }

    /// Copy of the feature with every location truncated to [first, last].
    pub fn truncated(&self, first: Idx, last: Idx) -> Self {
        let mut truncated = self.clone();
        for loc in truncated.locs.iter_mut() {
            if !loc.overlaps(first, last) {
                log::debug!(
                    "Location {loc} of the '{}' feature lies outside of [{first}, {last}] and will be inverted",
                    self.key
                );
            }
            loc.truncate(first, last);
        }
        truncated
    }
}

impl<Idx: Coord> Display for Feature<Idx> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.key, self.locs.iter().join(", "))?;
        if !self.qual.is_empty() {
            write!(
                f,
                " {{{}}}",
                self.qual.iter().map(|(k, v)| format!("{k}={v}")).join(", ")
            )?;
        }
        Ok(())
    }
}
