use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use heap::{PriorityNode, PriorityQueue};

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;
use crate::{Distance, Weight};

/// A minimum-weight route, `vertices` running from source to target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPath<V> {
    pub vertices: Vec<V>,
    pub distance: Distance,
}

/// Index-addressed view of a graph, rebuilt for every query.
struct Interned<'g, V> {
    vertices: Vec<&'g V>,
    edges: Vec<Vec<(usize, Weight)>>,
}

impl<'g, V: Ord> Interned<'g, V> {
    fn new(graph: &'g WeightedGraph<V>) -> Self {
        let vertices: Vec<&V> = graph.vertices().collect();

        let edges = graph
            .adjacency()
            .values()
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter_map(|n| {
                        let to = vertices.binary_search(&&n.node).ok()?;
                        Some((to, n.weight))
                    })
                    .collect()
            })
            .collect();

        Self { vertices, edges }
    }

    fn position<Q>(&self, graph: &WeightedGraph<V>, vertex: &Q) -> Result<usize>
    where
        V: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let (key, _) = graph
            .adjacency()
            .get_key_value(vertex)
            .ok_or_else(|| GraphError::unknown(&vertex))?;
        self.vertices
            .binary_search(&key)
            .map_err(|_| GraphError::unknown(&vertex))
    }
}

/// Runs Dijkstra from `source`, stopping early once `target` is settled.
///
/// Every vertex starts in the queue, unreached ones behind `Distance::MAX`.
/// Improved distances are pushed again instead of being decreased in place,
/// so an entry whose priority exceeds the current distance is stale and
/// skipped. Sums of `u64` weights along a simple path always fit in a `u128`.
fn settle(
    edges: &[Vec<(usize, Weight)>],
    source: usize,
    target: Option<usize>,
) -> (Vec<Option<Distance>>, Vec<Option<usize>>) {
    let n = edges.len();
    let mut dist = vec![None; n];
    let mut prev = vec![None; n];
    dist[source] = Some(0);

    let mut queue = PriorityQueue::with_capacity(n);
    for (v, d) in dist.iter().enumerate() {
        queue.enqueue(v, d.unwrap_or(Distance::MAX));
    }

    while let Some(PriorityNode {
        value: current,
        priority,
    }) = queue.dequeue()
    {
        if target == Some(current) {
            if dist[current].is_none_or(|d| priority == d) {
                tracing::debug!(distance = ?dist[current], pending = queue.len(), "target settled");
                break;
            }
            continue;
        }
        // Unreached vertices have nothing to relax.
        let Some(d) = dist[current] else {
            continue;
        };
        if priority > d {
            continue;
        }

        for &(next, weight) in &edges[current] {
            let cand = d + Distance::from(weight);
            if dist[next].is_none_or(|old| cand < old) {
                tracing::trace!(from = current, to = next, distance = %cand, "relaxed");
                dist[next] = Some(cand);
                prev[next] = Some(current);
                queue.enqueue(next, cand);
            }
        }
    }

    (dist, prev)
}

/// Minimum-weight path from `source` to `target`.
///
/// Returns `Ok(None)` when `target` cannot be reached, and a single-vertex
/// path when `source == target`.
#[tracing::instrument(skip_all, fields(source = ?source, target = ?target, vertices = graph.vertex_count()))]
pub fn shortest_path<V, Q>(
    graph: &WeightedGraph<V>,
    source: &Q,
    target: &Q,
) -> Result<Option<ShortestPath<V>>>
where
    V: Ord + Clone + Borrow<Q>,
    Q: Ord + fmt::Debug + ?Sized,
{
    let interned = Interned::new(graph);
    let s = interned.position(graph, source)?;
    let t = interned.position(graph, target)?;

    let (dist, prev) = settle(&interned.edges, s, Some(t));
    let Some(distance) = dist[t] else {
        tracing::debug!("queue exhausted before reaching target");
        return Ok(None);
    };

    let mut vertices = Vec::new();
    let mut cursor = Some(t);
    while let Some(v) = cursor {
        vertices.push(interned.vertices[v].clone());
        cursor = prev[v];
    }
    vertices.reverse();

    Ok(Some(ShortestPath { vertices, distance }))
}

/// Distances from `source` to every reachable vertex.
#[tracing::instrument(skip_all, fields(source = ?source, vertices = graph.vertex_count()))]
pub fn shortest_distances<V, Q>(
    graph: &WeightedGraph<V>,
    source: &Q,
) -> Result<BTreeMap<V, Distance>>
where
    V: Ord + Clone + Borrow<Q>,
    Q: Ord + fmt::Debug + ?Sized,
{
    let interned = Interned::new(graph);
    let s = interned.position(graph, source)?;
    let (dist, _) = settle(&interned.edges, s, None);

    let reachable = interned
        .vertices
        .iter()
        .zip(dist)
        .filter_map(|(&v, d)| d.map(|d| (v.clone(), d)))
        .collect::<BTreeMap<_, _>>();
    tracing::debug!(reachable = reachable.len(), "distances settled");
    Ok(reachable)
}

impl<V> WeightedGraph<V>
where
    V: Ord + Clone,
{
    pub fn dijkstra<Q>(&self, source: &Q, target: &Q) -> Result<Option<ShortestPath<V>>>
    where
        V: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        shortest_path(self, source, target)
    }
}
