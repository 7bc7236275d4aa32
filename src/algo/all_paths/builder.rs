use crate::core::{id::VertexId, Network};

use super::{
    backtrack::{backtrack, Query},
    AllPaths, Error, Role,
};

pub struct AllPathsBuilder<'a> {
    network: &'a Network,
    max_cost: f64,
    max_hops: usize,
    via: Option<VertexId>,
    limit: Option<usize>,
}

impl AllPaths {
    pub fn on(network: &Network) -> AllPathsBuilder<'_> {
        AllPathsBuilder {
            network,
            max_cost: f64::INFINITY,
            max_hops: usize::MAX,
            via: None,
            limit: None,
        }
    }
}

impl<'a> AllPathsBuilder<'a> {
    /// Upper bound (inclusive) on the total cost of an itinerary.
    pub fn max_cost(self, max_cost: f64) -> Self {
        Self { max_cost, ..self }
    }

    /// Upper bound (inclusive) on the number of legs of an itinerary.
    pub fn max_hops(self, max_hops: usize) -> Self {
        Self { max_hops, ..self }
    }

    /// Keep only itineraries that visit the given city.
    pub fn via(self, via: VertexId) -> Self {
        Self {
            via: Some(via),
            ..self
        }
    }

    pub fn via_opt(self, via: Option<VertexId>) -> Self {
        Self { via, ..self }
    }

    /// Stop the search once this many itineraries were found.
    pub fn limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    pub fn run(self, source: VertexId, destination: VertexId) -> Result<AllPaths, Error> {
        let AllPathsBuilder {
            network,
            max_cost,
            max_hops,
            via,
            limit,
        } = self;

        check_range(network, Role::Source, source)?;
        check_range(network, Role::Destination, destination)?;
        if let Some(via) = via {
            check_range(network, Role::Via, via)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %source, %destination, ?via, max_cost, max_hops, ?limit,
            "enumerating all paths"
        );

        let query = Query {
            source,
            destination,
            via,
            max_cost,
            max_hops,
            limit,
        };

        let outcome = backtrack(network, &query)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            count = outcome.itineraries.len(),
            limit_reached = outcome.limit_reached,
            "path enumeration finished"
        );

        Ok(AllPaths {
            source,
            destination,
            itineraries: outcome.itineraries,
            limit_reached: outcome.limit_reached,
        })
    }
}

fn check_range(network: &Network, role: Role, vertex: VertexId) -> Result<(), Error> {
    if network.contains_city(vertex) {
        Ok(())
    } else {
        Err(Error::OutOfRangeVertex {
            role,
            vertex,
            count: network.city_count(),
        })
    }
}
