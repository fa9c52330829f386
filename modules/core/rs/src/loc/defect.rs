use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_more::{BitAnd, BitOr, BitOrAssign};
use itertools::Itertools;

/// Set of reasons why the stored bounds of a location don't match the real feature boundaries.
///
/// Flags are independent bits and combine with `|`:
/// - `MISS_LEFT` / `MISS_RIGHT`: part of the feature was truncated before the first / after the
///   last position (usually by slicing an annotation).
/// - `BEYOND_LEFT` / `BEYOND_RIGHT`: the feature starts / ends at an unknown position outside
///   the location.
/// - `UNK_LOC`: the feature occupies a single, unknown position inside the location.
/// - `BETWEEN`: the feature lies between two consecutive positions.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, BitOr, BitOrAssign, BitAnd,
)]
pub struct Defect(u8);

impl Defect {
    pub const NONE: Self = Self(0);
    pub const MISS_LEFT: Self = Self(1);
    pub const MISS_RIGHT: Self = Self(2);
    pub const BEYOND_LEFT: Self = Self(4);
    pub const BEYOND_RIGHT: Self = Self(8);
    pub const UNK_LOC: Self = Self(16);
    pub const BETWEEN: Self = Self(32);

    const NAMED: [(Self, &'static str); 6] = [
        (Self::MISS_LEFT, "MISS_LEFT"),
        (Self::MISS_RIGHT, "MISS_RIGHT"),
        (Self::BEYOND_LEFT, "BEYOND_LEFT"),
        (Self::BEYOND_RIGHT, "BEYOND_RIGHT"),
        (Self::UNK_LOC, "UNK_LOC"),
        (Self::BETWEEN, "BETWEEN"),
    ];

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// True if all flags of `other` are set in `self`.
    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the individual flags set, in bit order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

impl Display for Defect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", self.names().join("|"))
        }
    }
}
