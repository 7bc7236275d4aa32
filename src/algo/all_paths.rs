//! Enumerate [all simple paths] between two cities whose total cost and
//! number of legs stay within given bounds.
//!
//! See available parameters [here](AllPathsBuilder#implementations).
//!
//! Unlike shortest path algorithms, the search reports every qualifying
//! itinerary, not just the best one. The number of simple paths grows
//! exponentially with the size of the network, so on dense networks the
//! bounds (and possibly a [limit](AllPathsBuilder::limit)) are what keeps the
//! running time reasonable.
//!
//! [all simple paths]: https://en.wikipedia.org/wiki/Path_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use airway::{algo::AllPaths, core::Network, itinerary::SortKey};
//!
//! let mut network = Network::new();
//!
//! let pittsburgh = network.add_city("Pittsburgh");
//! let altoona = network.add_city("Altoona");
//! let harrisburg = network.add_city("Harrisburg");
//! let philadelphia = network.add_city("Philadelphia");
//!
//! network.extend_with_routes([
//!     (pittsburgh, altoona, 95.0, 60.0),
//!     (altoona, harrisburg, 130.0, 70.0),
//!     (pittsburgh, harrisburg, 205.0, 150.0),
//!     (harrisburg, philadelphia, 105.0, 80.0),
//!     (pittsburgh, philadelphia, 305.0, 260.0),
//! ]);
//!
//! let mut paths = AllPaths::on(&network)
//!     .max_cost(250.0)
//!     .max_hops(3)
//!     .run(pittsburgh, philadelphia)
//!     .unwrap();
//!
//! paths.sort_by(SortKey::Cost);
//!
//! for itinerary in paths.iter() {
//!     println!("{itinerary}");
//! }
//!
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[0].total_cost(), 210.0);
//! ```

use std::{fmt, ops::Index, slice, vec};

use thiserror::Error;

use crate::{
    core::{error::InvalidEndpoint, id::VertexId},
    itinerary::{sort_by, Itinerary, SortKey},
};

mod backtrack;
mod builder;

pub use builder::AllPathsBuilder;

/// All itineraries found by a single search.
///
/// The itineraries are in the order in which the search found them, which
/// follows the order of routes in the network. Use
/// [`sort_by`](AllPaths::sort_by) if a specific order is needed.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPaths {
    source: VertexId,
    destination: VertexId,
    itineraries: Vec<Itinerary>,
    limit_reached: bool,
}

impl AllPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    /// No itinerary satisfies the query. This is a valid outcome, not an
    /// error.
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// Returns `true` if the search stopped because the
    /// [limit](AllPathsBuilder::limit) was reached. There may or may not be
    /// more itineraries that were not reported.
    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    pub fn iter(&self) -> slice::Iter<'_, Itinerary> {
        self.itineraries.iter()
    }

    pub fn as_slice(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// Reorders the itineraries in place. See [`sort_by`](crate::itinerary::sort_by).
    pub fn sort_by(&mut self, key: SortKey) {
        sort_by(&mut self.itineraries, key);
    }

    pub fn into_vec(self) -> Vec<Itinerary> {
        self.itineraries
    }
}

impl Index<usize> for AllPaths {
    type Output = Itinerary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.itineraries[index]
    }
}

impl IntoIterator for AllPaths {
    type Item = Itinerary;
    type IntoIter = vec::IntoIter<Itinerary>;

    fn into_iter(self) -> Self::IntoIter {
        self.itineraries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AllPaths {
    type Item = &'a Itinerary;
    type IntoIter = slice::Iter<'a, Itinerary>;

    fn into_iter(self) -> Self::IntoIter {
        self.itineraries.iter()
    }
}

/// The role of a city in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Destination,
    Via,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            Role::Source => "source",
            Role::Destination => "destination",
            Role::Via => "via",
        };
        f.write_str(role)
    }
}

/// The error encountered during an [`AllPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A city of the query does not exist in the network.
    #[error("{role} city {vertex} does not exist in a network of {count} cities")]
    OutOfRangeVertex {
        role: Role,
        vertex: VertexId,
        count: usize,
    },

    /// A route reported as incident to a city does not touch it.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates a bad implementation of the network.
    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpoint),
}
