use std::{iter::Enumerate, ops::Index, slice};

use super::{
    error::{AddRouteError, AddRouteErrorKind, InvalidEndpoint},
    id::{IdType, RouteId, VertexId},
};

/// A city served by the network together with the list of its incident
/// routes.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    routes: Vec<RouteId>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of direct routes departing from the city.
    pub fn degree(&self) -> usize {
        self.routes.len()
    }

    /// Compares the name of the city with given one, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// A direct, undirected connection between two cities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    endpoints: [VertexId; 2],
    distance: f64,
    cost: f64,
}

impl Route {
    /// Endpoints in the order they were given when the route was added.
    pub fn endpoints(&self) -> [VertexId; 2] {
        self.endpoints
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if the route touches the given city.
    pub fn is_incident(&self, vertex: VertexId) -> bool {
        self.endpoints.contains(&vertex)
    }
}

/// Borrowed route together with its id.
///
/// When obtained from [`Network::neighbors`], it also remembers the city from
/// which it was reached, so that [`RouteRef::far`] can be computed without
/// any failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRef<'a> {
    id: RouteId,
    route: &'a Route,
    near: VertexId,
}

impl<'a> RouteRef<'a> {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn route(&self) -> &'a Route {
        self.route
    }

    pub fn distance(&self) -> f64 {
        self.route.distance
    }

    pub fn cost(&self) -> f64 {
        self.route.cost
    }

    /// The city from which the route is viewed.
    pub fn near(&self) -> VertexId {
        self.near
    }

    /// The city on the other side of the route.
    pub fn far(&self) -> VertexId {
        let [a, b] = self.route.endpoints;
        if a == self.near {
            b
        } else {
            a
        }
    }

    /// Returns the endpoint different from `known`.
    pub fn other(&self, known: VertexId) -> Result<VertexId, InvalidEndpoint> {
        match self.route.endpoints {
            [a, b] if a == known => Ok(b),
            [a, b] if b == known => Ok(a),
            _ => Err(InvalidEndpoint {
                route: self.id,
                vertex: known,
            }),
        }
    }
}

/// Undirected network of cities connected by direct routes.
///
/// Every route is registered in the adjacency lists of both its endpoints, so
/// the neighborhood relation is symmetric. The network only grows: cities and
/// routes can be added, but never changed or removed.
///
/// # Examples
///
/// ```
/// use airway::core::Network;
///
/// let mut network = Network::new();
///
/// let pittsburgh = network.add_city("Pittsburgh");
/// let harrisburg = network.add_city("Harrisburg");
/// let philadelphia = network.add_city("Philadelphia");
///
/// network.add_route(pittsburgh, harrisburg, 200.0, 120.0);
/// network.add_route(harrisburg, philadelphia, 100.0, 90.0);
///
/// assert_eq!(network.find_city("HARRISBURG"), Some(harrisburg));
/// assert_eq!(network.neighbors(harrisburg).count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    cities: Vec<City>,
    routes: Vec<Route>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(city_count: usize, route_count: usize) -> Self {
        Self {
            cities: Vec::with_capacity(city_count),
            routes: Vec::with_capacity(route_count),
        }
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of distinct routes. Each route counts once even though it is
    /// present in two adjacency lists.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains_city(&self, vertex: VertexId) -> bool {
        vertex.as_usize() < self.cities.len()
    }

    pub fn city(&self, vertex: VertexId) -> Option<&City> {
        self.cities.get(vertex.as_usize())
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.as_usize())
    }

    /// Name of the city, or an empty string if it does not exist.
    pub fn city_name(&self, vertex: VertexId) -> &str {
        self.city(vertex).map(City::name).unwrap_or_default()
    }

    /// Resolves a city name to its id, ignoring case.
    ///
    /// If more cities share the same name, the one added first is returned.
    pub fn find_city(&self, name: &str) -> Option<VertexId> {
        let name = name.to_lowercase();
        self.cities
            .iter()
            .position(|city| city.name.to_lowercase() == name)
            .map(VertexId::from_usize)
    }

    pub fn cities(&self) -> CitiesIter<'_> {
        CitiesIter {
            inner: self.cities.iter().enumerate(),
        }
    }

    pub fn routes(&self) -> RoutesIter<'_> {
        RoutesIter {
            inner: self.routes.iter().enumerate(),
        }
    }

    /// Iterates over the routes incident to the given city in the order they
    /// were added. The order is stable for a given network.
    ///
    /// A city that does not exist has no neighbors.
    pub fn neighbors(&self, vertex: VertexId) -> NeighborsIter<'_> {
        let ids = self
            .cities
            .get(vertex.as_usize())
            .map(|city| city.routes.as_slice())
            .unwrap_or_default();

        NeighborsIter {
            ids: ids.iter(),
            routes: &self.routes,
            near: vertex,
        }
    }

    /// Returns the endpoint of the route that is different from `known`.
    ///
    /// # Panics
    ///
    /// Panics if the route does not exist.
    pub fn other_endpoint(
        &self,
        route: RouteId,
        known: VertexId,
    ) -> Result<VertexId, InvalidEndpoint> {
        RouteRef {
            id: route,
            route: &self[route],
            near: known,
        }
        .other(known)
    }

    pub fn add_city(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId::from_usize(self.cities.len());
        self.cities.push(City {
            name: name.into(),
            routes: Vec::new(),
        });
        id
    }

    pub fn try_add_route<VI: Into<VertexId>>(
        &mut self,
        from: VI,
        to: VI,
        distance: f64,
        cost: f64,
    ) -> Result<RouteId, AddRouteError> {
        let from = from.into();
        let to = to.into();

        if !self.contains_city(from) {
            return Err(AddRouteError::new(AddRouteErrorKind::SourceAbsent));
        }

        if !self.contains_city(to) {
            return Err(AddRouteError::new(AddRouteErrorKind::DestinationAbsent));
        }

        if from == to {
            return Err(AddRouteError::new(AddRouteErrorKind::SelfLoop));
        }

        if !(distance.is_finite() && distance >= 0.0) {
            return Err(AddRouteError::new(AddRouteErrorKind::InvalidDistance(
                distance,
            )));
        }

        if !(cost.is_finite() && cost > 0.0) {
            return Err(AddRouteError::new(AddRouteErrorKind::InvalidCost(cost)));
        }

        let id = RouteId::from_usize(self.routes.len());
        self.routes.push(Route {
            endpoints: [from, to],
            distance,
            cost,
        });

        self.cities[from.as_usize()].routes.push(id);
        self.cities[to.as_usize()].routes.push(id);

        Ok(id)
    }

    /// # Panics
    ///
    /// Panics if [`Network::try_add_route`] fails.
    pub fn add_route<VI: Into<VertexId>>(
        &mut self,
        from: VI,
        to: VI,
        distance: f64,
        cost: f64,
    ) -> RouteId {
        match self.try_add_route(from, to, distance, cost) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    /// Adds routes given as `(from, to, distance, cost)` tuples.
    ///
    /// # Panics
    ///
    /// Panics if any route is invalid.
    pub fn extend_with_routes<VI, I>(&mut self, iter: I)
    where
        VI: Into<VertexId>,
        I: IntoIterator<Item = (VI, VI, f64, f64)>,
    {
        for (from, to, distance, cost) in iter {
            self.add_route(from, to, distance, cost);
        }
    }
}

impl Index<VertexId> for Network {
    type Output = City;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.cities[index.as_usize()]
    }
}

impl Index<RouteId> for Network {
    type Output = Route;

    fn index(&self, index: RouteId) -> &Self::Output {
        &self.routes[index.as_usize()]
    }
}

pub struct CitiesIter<'a> {
    inner: Enumerate<slice::Iter<'a, City>>,
}

impl<'a> Iterator for CitiesIter<'a> {
    type Item = (VertexId, &'a City);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, city)| (VertexId::from_usize(index), city))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct RoutesIter<'a> {
    inner: Enumerate<slice::Iter<'a, Route>>,
}

impl<'a> Iterator for RoutesIter<'a> {
    type Item = RouteRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, route)| RouteRef {
            id: RouteId::from_usize(index),
            route,
            near: route.endpoints[0],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct NeighborsIter<'a> {
    ids: slice::Iter<'a, RouteId>,
    routes: &'a [Route],
    near: VertexId,
}

impl<'a> Iterator for NeighborsIter<'a> {
    type Item = RouteRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next()?;
        Some(RouteRef {
            id,
            route: &self.routes[id.as_usize()],
            near: self.near,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn create_triangle() -> Network {
        let mut network = Network::new();

        let a = network.add_city("A");
        let b = network.add_city("B");
        let c = network.add_city("C");

        network.add_route(a, b, 100.0, 50.0);
        network.add_route(b, c, 200.0, 80.0);
        network.add_route(a, c, 250.0, 120.0);

        network
    }

    #[test]
    fn counts() {
        let network = create_triangle();

        assert_eq!(network.city_count(), 3);
        assert_eq!(network.route_count(), 3);
        assert!(!network.is_empty());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let network = create_triangle();

        for route in network.routes() {
            let [a, b] = route.route().endpoints();
            assert!(network.neighbors(a).any(|r| r.id() == route.id()));
            assert!(network.neighbors(b).any(|r| r.id() == route.id()));
        }
    }

    #[test]
    fn neighbors_in_insertion_order() {
        let network = create_triangle();

        let far = network.neighbors(v(0)).map(|r| r.far()).collect::<Vec<_>>();
        assert_eq!(far, vec![v(1), v(2)]);

        let far = network.neighbors(v(2)).map(|r| r.far()).collect::<Vec<_>>();
        assert_eq!(far, vec![v(1), v(0)]);
    }

    #[test]
    fn neighbors_of_absent_city() {
        let network = create_triangle();
        assert_eq!(network.neighbors(v(10)).count(), 0);
    }

    #[test]
    fn other_endpoint() {
        let network = create_triangle();
        let r = RouteId::from_usize(1);

        assert_eq!(network.other_endpoint(r, v(1)), Ok(v(2)));
        assert_eq!(network.other_endpoint(r, v(2)), Ok(v(1)));
        assert_eq!(
            network.other_endpoint(r, v(0)),
            Err(InvalidEndpoint {
                route: r,
                vertex: v(0)
            })
        );
    }

    #[test]
    fn find_city_ignores_case() {
        let network = create_triangle();

        assert_eq!(network.find_city("b"), Some(v(1)));
        assert_eq!(network.find_city("B"), Some(v(1)));
        assert_eq!(network.find_city("D"), None);
        assert!(network[v(2)].has_name("c"));
    }

    #[test]
    fn add_route_errors() {
        let mut network = create_triangle();

        assert_matches!(
            network.try_add_route(v(0), v(5), 1.0, 1.0),
            Err(AddRouteError {
                kind: AddRouteErrorKind::DestinationAbsent
            })
        );
        assert_matches!(
            network.try_add_route(v(5), v(0), 1.0, 1.0),
            Err(AddRouteError {
                kind: AddRouteErrorKind::SourceAbsent
            })
        );
        assert_matches!(
            network.try_add_route(v(1), v(1), 1.0, 1.0),
            Err(AddRouteError {
                kind: AddRouteErrorKind::SelfLoop
            })
        );
        assert_matches!(
            network.try_add_route(v(0), v(1), -1.0, 1.0),
            Err(AddRouteError {
                kind: AddRouteErrorKind::InvalidDistance(_)
            })
        );
        assert_matches!(
            network.try_add_route(v(0), v(1), 1.0, f64::NAN),
            Err(AddRouteError {
                kind: AddRouteErrorKind::InvalidCost(_)
            })
        );
        assert_matches!(
            network.try_add_route(v(0), v(1), 1.0, 0.0),
            Err(AddRouteError {
                kind: AddRouteErrorKind::InvalidCost(_)
            })
        );

        // Failed attempts do not leave anything behind.
        assert_eq!(network.route_count(), 3);
        assert_eq!(network[v(0)].degree(), 2);
    }

    #[test]
    fn zero_distance_is_allowed() {
        let mut network = create_triangle();
        assert_matches!(network.try_add_route(v(0), v(1), 0.0, 1.0), Ok(_));
    }

    #[test]
    fn parallel_routes_are_kept() {
        let mut network = create_triangle();
        network.add_route(v(0), v(1), 90.0, 70.0);

        assert_eq!(network.route_count(), 4);
        assert_eq!(network.neighbors(v(0)).filter(|r| r.far() == v(1)).count(), 2);
    }

    #[test]
    #[should_panic(expected = "a route must connect two different cities")]
    fn add_route_panics_on_error() {
        let mut network = create_triangle();
        network.add_route(v(0), v(0), 1.0, 1.0);
    }
}
