//! Plain text description of a network.
//!
//! The description is a sequence of whitespace-separated tokens: the number
//! of cities `V`, then `V` city names, then any number of route records
//! `v w distance cost`, where `v` and `w` are zero-based city indices. Line
//! breaks carry no meaning, but conventionally each name and each record is on
//! its own line:
//!
//! ```text
//! 3
//! Pittsburgh
//! Harrisburg
//! Philadelphia
//! 0 1 200 120
//! 1 2 100 90.5
//! ```
//!
//! City names are single tokens and must be unique when compared ignoring
//! case.

use std::{fmt, iter::Peekable, str::FromStr, str::SplitWhitespace};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{error::AddRouteErrorKind, id::IdType, Network};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("parsing network failed at token {position}: {kind}")]
pub struct ParseError {
    /// One-based position of the offending token. Points one past the last
    /// token if the input ended prematurely.
    pub position: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedEnd(&'static str),
    InvalidInteger(String),
    InvalidNumber(String),
    CityOutOfRange { index: usize, count: usize },
    DuplicateCity(String),
    InvalidRoute(AddRouteErrorKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedEnd(expected) => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ParseErrorKind::InvalidInteger(token) => {
                write!(f, "\"{token}\" is not a non-negative integer")
            }
            ParseErrorKind::InvalidNumber(token) => write!(f, "\"{token}\" is not a number"),
            ParseErrorKind::CityOutOfRange { index, count } => {
                write!(f, "city index {index} is out of range for {count} cities")
            }
            ParseErrorKind::DuplicateCity(name) => write!(f, "city \"{name}\" is listed twice"),
            ParseErrorKind::InvalidRoute(kind) => write!(f, "invalid route: {kind}"),
        }
    }
}

struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().peekable(),
            position: 0,
        }
    }

    fn is_empty(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            position: self.position,
            kind,
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.position += 1;
        self.inner
            .next()
            .ok_or_else(|| self.error(ParseErrorKind::UnexpectedEnd(expected)))
    }

    fn integer(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let token = self.next(expected)?;
        token
            .parse()
            .map_err(|_| self.error(ParseErrorKind::InvalidInteger(token.to_owned())))
    }

    fn number(&mut self, expected: &'static str) -> Result<f64, ParseError> {
        let token = self.next(expected)?;
        token
            .parse()
            .map_err(|_| self.error(ParseErrorKind::InvalidNumber(token.to_owned())))
    }

    fn city(&mut self, expected: &'static str, count: usize) -> Result<usize, ParseError> {
        let index = self.integer(expected)?;
        if index < count {
            Ok(index)
        } else {
            Err(self.error(ParseErrorKind::CityOutOfRange { index, count }))
        }
    }
}

pub fn parse_network(input: &str) -> Result<Network, ParseError> {
    let mut tokens = Tokens::new(input);

    let city_count = tokens.integer("number of cities")?;
    // Every name takes at least two bytes of the input.
    let capacity = city_count.min(input.len() / 2);
    let mut network = Network::with_capacity(capacity, capacity);
    let mut names = FxHashSet::default();

    for _ in 0..city_count {
        let name = tokens.next("city name")?;
        if !names.insert(name.to_lowercase()) {
            return Err(tokens.error(ParseErrorKind::DuplicateCity(name.to_owned())));
        }
        network.add_city(name);
    }

    while !tokens.is_empty() {
        let from = tokens.city("route source", city_count)?;
        let to = tokens.city("route destination", city_count)?;
        let distance = tokens.number("route distance")?;
        let cost = tokens.number("route cost")?;

        network
            .try_add_route(from, to, distance, cost)
            .map_err(|error| tokens.error(ParseErrorKind::InvalidRoute(error.kind)))?;
    }

    Ok(network)
}

/// Writes the network in the format accepted by [`parse_network`].
pub fn write_network(network: &Network) -> String {
    let mut out = format!("{}\n", network.city_count());

    for (_, city) in network.cities() {
        out.push_str(city.name());
        out.push('\n');
    }

    for route in network.routes() {
        let [from, to] = route.route().endpoints();
        out.push_str(&format!(
            "{} {} {} {}\n",
            from.as_usize(),
            to.as_usize(),
            route.distance(),
            route.cost()
        ));
    }

    out
}

impl FromStr for Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_network(s)
    }
}
