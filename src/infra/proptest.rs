use proptest::{collection::vec, strategy::Strategy};
use rustc_hash::FxHashSet;

use crate::core::Network;

/// Networks of 1 to `max_size` cities with unique names `c0`, `c1`, ..., and
/// routes with integral distances in `1..200` and costs in `1..200`.
///
/// Generated networks have neither parallel routes nor self-loops, so a
/// sequence of cities identifies a path.
pub fn network(max_size: usize) -> impl Strategy<Value = Network> {
    (1..=max_size.max(1)).prop_flat_map(|size| {
        let max_routes = size * (size - 1) / 2;
        vec((0..size, 0..size, 1u32..200, 1u32..200), 0..=max_routes)
            .prop_map(move |routes| build(size, routes))
    })
}

fn build(size: usize, routes: Vec<(usize, usize, u32, u32)>) -> Network {
    let mut network = Network::with_capacity(size, routes.len());

    for i in 0..size {
        network.add_city(format!("c{i}"));
    }

    let mut seen = FxHashSet::default();
    for (from, to, distance, cost) in routes {
        if from == to || !seen.insert((from.min(to), from.max(to))) {
            continue;
        }

        network.add_route(from, to, f64::from(distance), f64::from(cost));
    }

    network
}
