//! Model of an airline route network and enumeration of all itineraries
//! between two cities that fit given cost and hop bounds.
//!
//! ```
//! use airway::prelude::*;
//!
//! let network: Network = "3 A B C  0 1 100 50  1 2 200 80  0 2 250 120".parse().unwrap();
//!
//! let a = network.find_city("a").unwrap();
//! let c = network.find_city("c").unwrap();
//!
//! let mut paths = AllPaths::on(&network).max_cost(200.0).run(a, c).unwrap();
//! paths.sort_by(SortKey::Hops);
//!
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[0].hops(), 1);
//! assert_eq!(paths[1].total_cost(), 130.0);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod itinerary;

pub use infra::parse::{parse_network, ParseError};

pub mod prelude {
    pub use crate::{
        algo::AllPaths,
        core::{id::VertexId, Network},
        itinerary::{Itinerary, Leg, SortKey},
    };
}
