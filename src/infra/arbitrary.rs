use arbitrary::Arbitrary;

use crate::{
    algo::{all_paths::Error, AllPaths},
    core::{error::AddRouteError, id::VertexId, Network},
};

/// Upper bound on the number of cities in a generated network. The number of
/// simple paths explodes quickly, keep the searches short.
pub const MAX_CITIES: usize = 10;

/// Upper bound on the number of routes in a generated network. Parallel routes
/// multiply the number of paths.
pub const MAX_ROUTES: usize = 24;

/// Upper bound on the number of legs of a generated query.
pub const MAX_HOPS: usize = 7;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    /// Maps the index to a city that may lie one past the last city, so that
    /// out of range queries are exercised too.
    pub fn vertex(&self, city_count: usize) -> VertexId {
        VertexId::from(self.0 % (city_count + 1))
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub struct RouteInput {
    pub from: Index,
    pub to: Index,
    pub distance: f64,
    pub cost: f64,
}

#[derive(Debug, Arbitrary, Clone)]
pub struct NetworkInput {
    pub cities: Vec<String>,
    pub routes: Vec<RouteInput>,
}

impl NetworkInput {
    /// Builds the network. Route inputs that the network refuses are
    /// skipped, the returned list contains the errors for them in order.
    pub fn build(&self) -> (Network, Vec<AddRouteError>) {
        let cities = &self.cities[..self.cities.len().min(MAX_CITIES)];
        let routes = &self.routes[..self.routes.len().min(MAX_ROUTES)];
        let mut network = Network::with_capacity(cities.len(), routes.len());
        let mut errors = Vec::new();

        for name in cities {
            network.add_city(name.as_str());
        }

        for route in routes {
            // Out of range endpoints are mapped to one past the last city so
            // that the absent city error is reachable.
            let from = route.from.vertex(cities.len());
            let to = route.to.vertex(cities.len());

            if let Err(error) = network.try_add_route(from, to, route.distance, route.cost) {
                errors.push(error);
            }
        }

        (network, errors)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub struct QueryInput {
    pub source: Index,
    pub destination: Index,
    pub via: Option<Index>,
    pub max_cost: Option<f64>,
    pub max_hops: Option<u8>,
    pub limit: Option<u16>,
}

impl QueryInput {
    pub fn max_hops(&self) -> usize {
        self.max_hops.map_or(MAX_HOPS, |hops| usize::from(hops) % (MAX_HOPS + 1))
    }

    pub fn run(&self, network: &Network) -> Result<AllPaths, Error> {
        let n = network.city_count();
        let mut builder = AllPaths::on(network)
            .max_hops(self.max_hops())
            .via_opt(self.via.map(|via| via.vertex(n)));

        if let Some(max_cost) = self.max_cost {
            builder = builder.max_cost(max_cost);
        }

        if let Some(limit) = self.limit {
            builder = builder.limit(usize::from(limit));
        }

        builder.run(self.source.vertex(n), self.destination.vertex(n))
    }
}
