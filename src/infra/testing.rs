use thiserror::Error;

use crate::core::{
    id::{IdType, RouteId, VertexId},
    Network,
};

/// Three cities A, B and C connected by routes A-B (distance 100, cost 50),
/// B-C (distance 200, cost 80) and A-C (distance 250, cost 120), added in
/// this order.
pub fn create_triangle() -> Network {
    let mut network = Network::with_capacity(3, 3);

    let a = network.add_city("A");
    let b = network.add_city("B");
    let c = network.add_city("C");

    network.extend_with_routes([
        (a, b, 100.0, 50.0),
        (b, c, 200.0, 80.0),
        (a, c, 250.0, 120.0),
    ]);

    network
}

/// Complete network on `city_count` cities, every route with distance and
/// cost 1.
pub fn create_complete(city_count: usize) -> Network {
    let mut network =
        Network::with_capacity(city_count, city_count * city_count.saturating_sub(1) / 2);

    let cities = (0..city_count)
        .map(|i| network.add_city(format!("c{i}")))
        .collect::<Vec<_>>();

    for (i, u) in cities.iter().enumerate() {
        for v in cities[i + 1..].iter() {
            network.add_route(*u, *v, 1.0, 1.0);
        }
    }

    network
}

/// Cities on a line, consecutive ones connected by a route with distance and
/// cost 1.
pub fn create_path(city_count: usize) -> Network {
    let mut network = Network::with_capacity(city_count, city_count.saturating_sub(1));

    let mut prev: Option<VertexId> = None;
    for i in 0..city_count {
        let curr = network.add_city(format!("c{i}"));
        if let Some(prev) = prev {
            network.add_route(prev, curr, 1.0, 1.0);
        }
        prev = Some(curr);
    }

    network
}

/// Grid of `rows` x `cols` cities numbered row by row, horizontal and vertical
/// neighbors connected by a route with distance and cost 1.
pub fn create_grid(rows: usize, cols: usize) -> Network {
    let mut network = Network::with_capacity(rows * cols, 2 * rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            network.add_city(format!("r{r}c{c}"));
        }
    }

    let id = |r: usize, c: usize| VertexId::from_usize(r * cols + c);

    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                network.add_route(id(r, c), id(r, c + 1), 1.0, 1.0);
            }
            if r + 1 < rows {
                network.add_route(id(r, c), id(r + 1, c), 1.0, 1.0);
            }
        }
    }

    network
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("cities iterator count ({0}) is not equal to city count ({1})")]
    CitiesCityCountMismatch(usize, usize),
    #[error("routes iterator count ({0}) is not equal to route count ({1})")]
    RoutesRouteCountMismatch(usize, usize),
    #[error("route {0} has an endpoint that does not exist")]
    EndpointAbsent(RouteId),
    #[error("route {0} is a self-loop")]
    SelfLoop(RouteId),
    #[error("route {0} is missing in the adjacency list of {1}")]
    AdjacencyMissing(RouteId, VertexId),
    #[error("route {0} in the adjacency list of {1} does not touch it")]
    AdjacencyInvalid(RouteId, VertexId),
    #[error("sum of degrees ({0}) is not equal to doubled route count ({1})")]
    HandshakingLemma(usize, usize),
}

pub fn check_consistency(network: &Network) -> Result<(), ConsistencyCheckError> {
    let city_count = network.city_count();
    let route_count = network.route_count();

    if network.cities().count() != city_count {
        return Err(ConsistencyCheckError::CitiesCityCountMismatch(
            network.cities().count(),
            city_count,
        ));
    }

    if network.routes().count() != route_count {
        return Err(ConsistencyCheckError::RoutesRouteCountMismatch(
            network.routes().count(),
            route_count,
        ));
    }

    for route in network.routes() {
        let [a, b] = route.route().endpoints();

        if !network.contains_city(a) || !network.contains_city(b) {
            return Err(ConsistencyCheckError::EndpointAbsent(route.id()));
        }

        if a == b {
            return Err(ConsistencyCheckError::SelfLoop(route.id()));
        }

        for endpoint in [a, b] {
            if !network.neighbors(endpoint).any(|r| r.id() == route.id()) {
                return Err(ConsistencyCheckError::AdjacencyMissing(route.id(), endpoint));
            }
        }
    }

    let mut degree_sum = 0;
    for (vertex, city) in network.cities() {
        degree_sum += city.degree();

        for route in network.neighbors(vertex) {
            if route.other(vertex).is_err() {
                return Err(ConsistencyCheckError::AdjacencyInvalid(route.id(), vertex));
            }
        }
    }

    if degree_sum != 2 * route_count {
        return Err(ConsistencyCheckError::HandshakingLemma(
            degree_sum,
            2 * route_count,
        ));
    }

    Ok(())
}
