use crate::{
    common::{TypedBitSet, VisitSet},
    core::{id::VertexId, NeighborsIter, Network, RouteRef},
    itinerary::{Itinerary, Leg},
};

use super::Error;

pub(super) struct Query {
    pub source: VertexId,
    pub destination: VertexId,
    pub via: Option<VertexId>,
    pub max_cost: f64,
    pub max_hops: usize,
    pub limit: Option<usize>,
}

pub(super) struct Outcome {
    pub itineraries: Vec<Itinerary>,
    pub limit_reached: bool,
}

pub(super) fn backtrack(network: &Network, query: &Query) -> Result<Outcome, Error> {
    let mut search = Search::new(network, query);
    search.explore()?;

    Ok(Outcome {
        itineraries: search.found,
        limit_reached: search.limit_reached,
    })
}

// An open city on the current path: the routes not tried yet and the totals
// of the path up to the city.
struct Frame<'a> {
    vertex: VertexId,
    routes: NeighborsIter<'a>,
    cost: f64,
    distance: f64,
}

// State of a single enumeration. It lives only for the duration of one
// `backtrack` call, so concurrent queries over the same network never share
// it.
//
// Stack of iterators as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html,
// so the depth of the path is not limited by the program stack. The frame of
// the city at depth `d` is `stack[d]` and the route that led to it is
// `legs[d - 1]`.
struct Search<'a> {
    network: &'a Network,
    query: &'a Query,
    // Cities whose name matches the name of the via city. The filter compares
    // names, not ids, so all same-named cities qualify.
    via: Option<TypedBitSet<VertexId>>,
    visited: TypedBitSet<VertexId>,
    stack: Vec<Frame<'a>>,
    legs: Vec<RouteRef<'a>>,
    found: Vec<Itinerary>,
    limit_reached: bool,
}

impl<'a> Search<'a> {
    fn new(network: &'a Network, query: &'a Query) -> Self {
        let via = query.via.map(|via| {
            let name = network.city_name(via);
            let mut matching = TypedBitSet::<VertexId>::with_capacity(network.city_count());
            for (vertex, city) in network.cities() {
                if city.has_name(name) {
                    matching.visit(vertex);
                }
            }
            matching
        });

        Self {
            network,
            query,
            via,
            visited: TypedBitSet::with_capacity(network.city_count()),
            stack: Vec::new(),
            legs: Vec::new(),
            found: Vec::new(),
            limit_reached: query.limit == Some(0),
        }
    }

    fn explore(&mut self) -> Result<(), Error> {
        let Query {
            source,
            destination,
            max_cost,
            max_hops,
            ..
        } = *self.query;

        self.visited.visit(source);

        if source == destination {
            self.accept(0.0, 0.0);
            return Ok(());
        }

        if max_hops == 0 {
            return Ok(());
        }

        self.open(source, 0.0, 0.0);

        while let Some(frame) = self.stack.last_mut() {
            if self.limit_reached {
                break;
            }

            let Some(route) = frame.routes.next() else {
                // All routes of the city tried, take it off the path.
                if let Some(frame) = self.stack.pop() {
                    if frame.vertex != source {
                        self.legs.pop();
                        self.visited.unvisit(&frame.vertex);
                    }
                }
                continue;
            };

            let (vertex, cost, distance) = (frame.vertex, frame.cost, frame.distance);

            let next = route.other(vertex)?;
            if self.visited.is_visited(&next) {
                continue;
            }

            let next_cost = cost + route.cost();
            // Written so that NaN budget prunes everything.
            if !(next_cost <= max_cost) {
                continue;
            }

            let next_distance = distance + route.distance();

            if next == destination {
                self.legs.push(route);
                self.accept(next_cost, next_distance);
                self.legs.pop();
                continue;
            }

            // Only a city that can be left without exceeding the hop limit is
            // worth opening.
            if self.legs.len() + 1 < max_hops {
                self.visited.visit(next);
                self.legs.push(route);
                self.open(next, next_cost, next_distance);
            }
        }

        Ok(())
    }

    fn open(&mut self, vertex: VertexId, cost: f64, distance: f64) {
        self.stack.push(Frame {
            vertex,
            routes: self.network.neighbors(vertex),
            cost,
            distance,
        });
    }

    fn accept(&mut self, cost: f64, distance: f64) {
        if self.limit_reached {
            return;
        }

        if !self.visits_via() {
            #[cfg(feature = "tracing")]
            tracing::trace!(hops = self.legs.len(), "path rejected, via city not visited");
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(hops = self.legs.len(), cost, distance, "path accepted");

        let legs = self
            .legs
            .iter()
            .map(|route| Leg::new(self.network, *route))
            .collect();

        self.found.push(Itinerary::new(
            self.network,
            self.query.source,
            legs,
            cost,
            distance,
        ));

        if self.query.limit == Some(self.found.len()) {
            self.limit_reached = true;
        }
    }

    fn visits_via(&self) -> bool {
        let Some(ref matching) = self.via else {
            return true;
        };

        if self.legs.is_empty() {
            return matching.is_visited(&self.query.source);
        }

        self.legs
            .iter()
            .any(|route| matching.is_visited(&route.near()) || matching.is_visited(&route.far()))
    }
}
