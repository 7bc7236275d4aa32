#![allow(dead_code)]

use airway::core::Network;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Pairs `(v, w)` with `w < v` such that each pair is present with probability
/// `p`, generated in increasing order without enumerating all pairs.
pub struct RandomPairs {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomPairs {
    pub fn new(city_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: city_count,
            p,
        }
    }

    pub fn next_pair(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn airway_random(city_count: usize, density: f32, rng: &mut Rng) -> Network {
    let mut network = Network::with_capacity(city_count, 0);

    for i in 0..city_count {
        network.add_city(format!("c{i}"));
    }

    let mut pairs = RandomPairs::new(city_count, density);

    while let Some((u, v)) = pairs.next_pair(rng) {
        network.add_route(u, v, f64::from(rng.u32(50..500)), f64::from(rng.u32(20..200)));
    }

    network
}

/// Same structure as [`airway_random`] for the same seed.
pub fn petgraph_random(city_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), f64> {
    let mut graph = UnGraph::with_capacity(city_count, 0);

    for _ in 0..city_count {
        graph.add_node(());
    }

    let mut pairs = RandomPairs::new(city_count, density);

    while let Some((u, v)) = pairs.next_pair(rng) {
        let _distance = rng.u32(50..500);
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), f64::from(rng.u32(20..200)));
    }

    graph
}
