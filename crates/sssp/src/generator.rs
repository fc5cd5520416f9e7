use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::Weight;
use crate::error::Result;
use crate::graph::WeightedGraph;

const C_MAX: Weight = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    AlmostLine,
    GridRandom,
    GridSwirl,
    WrongDijkstraKiller,
    Disconnected,
}

pub const ALL_CASES: [GraphCase; 7] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::AlmostLine,
    GraphCase::GridRandom,
    GraphCase::GridSwirl,
    GraphCase::WrongDijkstraKiller,
    GraphCase::Disconnected,
];

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::GridSwirl => "grid_swirl",
            Self::WrongDijkstraKiller => "wrong_dijkstra_killer",
            Self::Disconnected => "disconnected",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: WeightedGraph<u32>,
    pub source: u32,
    pub target: u32,
}

type EdgeList = Vec<(u32, u32, Weight)>;

/// Builds an undirected test graph of roughly `size` vertices.
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> Result<GeneratedGraph> {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed, 4),
        GraphCase::DenseRandom => dense_random_case(size.max(256), seed),
        GraphCase::AlmostLine => almost_line_case(size.max(64), seed),
        GraphCase::GridRandom => grid_case(size.max(256), seed, false),
        GraphCase::GridSwirl => grid_case(size.max(256), seed, true),
        GraphCase::WrongDijkstraKiller => wrong_dijkstra_killer_case(size.max(64), seed),
        GraphCase::Disconnected => disconnected_case(size.max(32), seed),
    }
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let (source, target) = distinct_pair(&mut rng, n);
    finish(n, &edges, source, target)
}

fn dense_random_case(size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u as u32, v as u32, rng.random_range(0..=C_MAX)));
        }
    }

    let (source, target) = distinct_pair(&mut rng, n);
    finish(n, &edges, source, target)
}

// A shuffled path with a few cheap-looking shortcuts of span 2..=3.
fn almost_line_case(size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(8);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(0..=C_MAX));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        push_unique_edge(&mut edges, &mut used, a, b, rng.random_range(0..=C_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(&mut rng);

    finish(n, &edges, perm[0], perm[n - 1])
}

// With `swirl`, edges along a spiral from the corner to the centre are cheap.
fn grid_case(size: usize, seed: u64, swirl: bool) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut len = floor_sqrt((size / 4).max(16)).max(4);
    if len % 2 == 1 {
        len += 1;
    }

    let n = len * len;
    let mut edges = Vec::with_capacity(n * 2);
    let index = |i: usize, j: usize| -> u32 { (i * len + j) as u32 };

    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                let cheap = swirl && j + 1 >= i && j < len - 1 - i;
                edges.push((index(i, j), index(i, j + 1), grid_weight(&mut rng, cheap)));
            }
            if i + 1 < len {
                let cheap = swirl && j >= len - 1 - i && j > i;
                edges.push((index(i, j), index(i + 1, j), grid_weight(&mut rng, cheap)));
            }
        }
    }
    edges.shuffle(&mut rng);

    if swirl {
        let target = index(len / 2, len / 2 - 1) as usize;
        return finish(n, &edges, 0, target);
    }
    let (source, target) = distinct_pair(&mut rng, n);
    finish(n, &edges, source, target)
}

fn grid_weight(rng: &mut StdRng, cheap: bool) -> Weight {
    if cheap {
        rng.random_range(0..=10)
    } else {
        rng.random_range(0..=C_MAX)
    }
}

// Two fans through a hub. The cheapest first hop out of the source leads to
// the most expensive way into the hub, which punishes premature finalisation.
fn wrong_dijkstra_killer_case(size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let one = (size / 4).max(8);
    let n = one * 2 + 3;
    let hub = (one + 1) as u32;
    let sink = (n - 1) as u32;
    let mut edges: EdgeList = Vec::with_capacity(one * 4);

    for i in 0..one {
        let left = (i + 1) as u32;
        let right = (one + 2 + i) as u32;
        edges.push((0, left, i as Weight));
        edges.push((left, hub, ((one - i - 1) * 2) as Weight));
        edges.push((hub, right, (2 * i) as Weight));
        edges.push((right, sink, (one - i - 1) as Weight));
    }
    edges.shuffle(&mut rng);

    finish(n, &edges, 0, n - 1)
}

// Two random components; the target sits in the one the source cannot reach.
fn disconnected_case(size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(4);
    let half = n / 2;
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for (lo, hi) in [(0, half), (half, n)] {
        for v in (lo + 1)..hi {
            let u = rng.random_range(lo..v);
            push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
        }
    }

    let source = rng.random_range(0..half);
    let target = rng.random_range(half..n);
    finish(n, &edges, source, target)
}

fn finish(
    n: usize,
    edges: &[(u32, u32, Weight)],
    source: usize,
    target: usize,
) -> Result<GeneratedGraph> {
    let graph = WeightedGraph::from_edges(0..n as u32, edges.iter().copied())?;
    Ok(GeneratedGraph {
        graph,
        source: source as u32,
        target: target as u32,
    })
}

fn distinct_pair(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut EdgeList,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: Weight,
) -> bool {
    if u == v {
        return false;
    }
    let (lo, hi) = if u < v { (u, v) } else { (v, u) };
    let key = ((lo as u64) << 32) | hi as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}
