//! Itineraries, the results of a path search, and their ordering.
//!
//! An [`Itinerary`] is a simple path through the network: a sequence of legs
//! in which no city repeats. Its totals are computed by the search while the
//! path is being built and are stored, so reading them is free.

use std::{fmt, slice};

use rustc_hash::FxHashSet;

use crate::{
    common::VisitSet,
    core::{
        id::{RouteId, VertexId},
        Network, RouteRef,
    },
    infra::export::grouped,
};

mod rank;

pub use rank::{sort_by, ParseSortKeyError, SortKey};

/// One traversed route, oriented in the direction of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    route: RouteId,
    from: VertexId,
    to: VertexId,
    from_name: String,
    to_name: String,
    cost: f64,
    distance: f64,
}

impl Leg {
    pub(crate) fn new(network: &Network, route: RouteRef<'_>) -> Self {
        let from = route.near();
        let to = route.far();

        Self {
            route: route.id(),
            from,
            to,
            from_name: network.city_name(from).to_owned(),
            to_name: network.city_name(to).to_owned(),
            cost: route.cost(),
            distance: route.distance(),
        }
    }

    pub fn route(&self) -> RouteId {
        self.route
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    pub fn to_name(&self) -> &str {
        &self.to_name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({},{}) c:{} d:{}]",
            self.from_name,
            self.to_name,
            grouped(self.cost, 2),
            grouped(self.distance, 1)
        )
    }
}

/// A simple path from an origin to a destination city.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    origin: VertexId,
    origin_name: String,
    legs: Vec<Leg>,
    total_cost: f64,
    total_distance: f64,
}

impl Itinerary {
    pub(crate) fn new(
        network: &Network,
        origin: VertexId,
        legs: Vec<Leg>,
        total_cost: f64,
        total_distance: f64,
    ) -> Self {
        Self {
            origin,
            origin_name: network.city_name(origin).to_owned(),
            legs,
            total_cost,
            total_distance,
        }
    }

    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn destination(&self) -> VertexId {
        self.legs.last().map(Leg::to).unwrap_or(self.origin)
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    pub fn hops(&self) -> usize {
        self.legs.len()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Iterates over the cities on the itinerary, from the origin to the
    /// destination.
    pub fn cities(&self) -> Cities<'_> {
        Cities {
            origin: Some(self.origin),
            legs: self.legs.iter(),
        }
    }

    /// Returns `true` if the city is the origin, the destination or any
    /// intermediate stop.
    pub fn passes_through(&self, vertex: VertexId) -> bool {
        self.cities().any(|v| v == vertex)
    }

    /// Returns `true` if any leg starts or ends in a city of the given name,
    /// ignoring case. An itinerary without legs matches the name of its
    /// origin.
    pub fn visits_city(&self, name: &str) -> bool {
        let name = name.to_lowercase();

        if self.legs.is_empty() {
            return self.origin_name.to_lowercase() == name;
        }

        self.legs.iter().any(|leg| {
            leg.from_name.to_lowercase() == name || leg.to_name.to_lowercase() == name
        })
    }

    /// Returns `true` if no city repeats and consecutive legs are connected.
    pub fn is_simple(&self) -> bool {
        let mut visited: FxHashSet<VertexId> = FxHashSet::default();

        if !visited.visit(self.origin) {
            return false;
        }

        let mut at = self.origin;
        for leg in self.legs.iter() {
            if leg.from != at || !visited.visit(leg.to) {
                return false;
            }
            at = leg.to;
        }

        true
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cost: ${} -- Distance: {} -- Hops: {} -- Edges:",
            grouped(self.total_cost, 2),
            grouped(self.total_distance, 1),
            self.hops()
        )?;

        for (i, leg) in self.legs.iter().enumerate() {
            writeln!(f, "\t{}. {}", i + 1, leg)?;
        }

        Ok(())
    }
}

/// Iterator over the cities of an [`Itinerary`].
pub struct Cities<'a> {
    origin: Option<VertexId>,
    legs: slice::Iter<'a, Leg>,
}

impl<'a> Iterator for Cities<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.origin.take() {
            Some(origin) => Some(origin),
            None => self.legs.next().map(Leg::to),
        }
    }
}
