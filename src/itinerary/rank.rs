use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

use super::Itinerary;

/// The property by which itineraries are ordered.
///
/// All orders are ascending: fewest hops, cheapest, shortest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Hops,
    Cost,
    Distance,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Hops, SortKey::Cost, SortKey::Distance];

    /// Compares two itineraries by this key.
    ///
    /// Floating point totals are compared by [`f64::total_cmp`], so the order
    /// is total even in presence of values that are not comparable otherwise.
    pub fn compare(&self, lhs: &Itinerary, rhs: &Itinerary) -> Ordering {
        match self {
            SortKey::Hops => lhs.hops().cmp(&rhs.hops()),
            SortKey::Cost => lhs.total_cost().total_cmp(&rhs.total_cost()),
            SortKey::Distance => lhs.total_distance().total_cmp(&rhs.total_distance()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Hops => "hops",
            SortKey::Cost => "cost",
            SortKey::Distance => "distance",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key \"{0}\", expected one of: hops, cost, distance")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortKeyError(s.to_owned()))
    }
}

/// Sorts itineraries in place, in ascending order by the given key.
///
/// The sort is stable, so itineraries with equal key keep their relative
/// order. Sorting by the same key again does not change anything.
pub fn sort_by(itineraries: &mut [Itinerary], key: SortKey) {
    itineraries.sort_by(|lhs, rhs| key.compare(lhs, rhs));
}
