use std::fmt;

use thiserror::Error;

use super::id::{RouteId, VertexId};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("adding route failed: {kind}")]
pub struct AddRouteError {
    pub kind: AddRouteErrorKind,
}

impl AddRouteError {
    pub fn new(kind: AddRouteErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddRouteErrorKind {
    SourceAbsent,
    DestinationAbsent,
    SelfLoop,
    InvalidDistance(f64),
    InvalidCost(f64),
}

impl fmt::Display for AddRouteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddRouteErrorKind::SourceAbsent => f.write_str("source does not exist"),
            AddRouteErrorKind::DestinationAbsent => f.write_str("destination does not exist"),
            AddRouteErrorKind::SelfLoop => f.write_str("a route must connect two different cities"),
            AddRouteErrorKind::InvalidDistance(distance) => {
                write!(f, "distance {distance} is not a finite non-negative number")
            }
            AddRouteErrorKind::InvalidCost(cost) => {
                write!(f, "cost {cost} is not a finite positive number")
            }
        }
    }
}

/// A route was asked for its other endpoint using a city it does not touch.
///
/// This error should not happen in normal circumstances. If it does, it
/// indicates a bug in the caller or a corrupted network.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("city {vertex} is not an endpoint of route {route}")]
pub struct InvalidEndpoint {
    pub route: RouteId,
    pub vertex: VertexId,
}
