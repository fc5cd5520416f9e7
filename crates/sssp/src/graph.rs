use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use crate::Weight;
use crate::error::{GraphError, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Neighbor<V> {
    pub node: V,
    pub weight: Weight,
}

/// Undirected weighted graph stored as an adjacency list keyed by vertex id.
///
/// Every edge is recorded on both endpoints with the same weight. Vertices
/// are visited in key order, which keeps traversals deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightedGraph<V = String> {
    adjacency: BTreeMap<V, Vec<Neighbor<V>>>,
}

impl<V: Ord> WeightedGraph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph from vertex and edge lists. Edges may only reference
    /// listed vertices.
    pub fn from_edges<I, J, K>(vertices: I, edges: J) -> Result<Self>
    where
        V: Clone + fmt::Debug,
        I: IntoIterator,
        I::Item: Into<V>,
        J: IntoIterator<Item = (K, K, Weight)>,
        K: Into<V>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (a, b, weight) in edges {
            let (a, b): (V, V) = (a.into(), b.into());
            graph.add_edge(&a, &b, weight)?;
        }
        Ok(graph)
    }

    /// Adds `vertex` with no neighbors. Returns `false` (and changes nothing)
    /// when it is already present.
    pub fn add_vertex(&mut self, vertex: impl Into<V>) -> bool {
        match self.adjacency.entry(vertex.into()) {
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Both endpoints must exist; otherwise the graph is left untouched.
    pub fn add_edge<Q>(&mut self, a: &Q, b: &Q, weight: Weight) -> Result<()>
    where
        V: Borrow<Q> + Clone,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let Some((a_key, _)) = self.adjacency.get_key_value(a) else {
            tracing::debug!(vertex = ?a, "rejected edge with unknown endpoint");
            return Err(GraphError::unknown(&a));
        };
        let Some((b_key, _)) = self.adjacency.get_key_value(b) else {
            tracing::debug!(vertex = ?b, "rejected edge with unknown endpoint");
            return Err(GraphError::unknown(&b));
        };
        let (a_key, b_key) = (a_key.clone(), b_key.clone());

        if let Some(list) = self.adjacency.get_mut(a) {
            list.push(Neighbor {
                node: b_key,
                weight,
            });
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.push(Neighbor {
                node: a_key,
                weight,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn adjacency(&self) -> &BTreeMap<V, Vec<Neighbor<V>>> {
        &self.adjacency
    }

    #[inline]
    pub fn neighbors<Q>(&self, vertex: &Q) -> Option<&[Neighbor<V>]>
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> {
        self.adjacency.keys()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges; each one is stored twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl<V: Ord> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + fmt::Display> fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex} ->")?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{}({})", neighbor.node, neighbor.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
