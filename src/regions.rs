//! Connected-region numbering for the decoding graph.
//!
//! Each connected component of the model graph gets a region index so a
//! renderer can give every component its own stable color. Numbering is a
//! pure function of vertex order and edge order:
//! - one fresh [`DisjointSetUnion`] per run, unioned along every edge;
//! - vertices are then scanned in order, and the first vertex of each root
//!   claims the next unused region index.

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model_graph::ModelGraph;
use crate::position::Position;
use crate::union_find::DisjointSetUnion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPartition {
    region_of: Vec<usize>,
    roots: Vec<usize>,
}

impl RegionPartition {
    #[inline]
    pub fn region_count(&self) -> usize {
        self.roots.len()
    }

    /// Region index of element `x`. Panics when `x` is out of range.
    #[inline]
    pub fn region_of(&self, x: usize) -> usize {
        self.region_of[x]
    }

    /// Region index per element, in element order.
    #[inline]
    pub fn regions(&self) -> &[usize] {
        &self.region_of
    }

    /// Union-find root of each region, indexed by region.
    #[inline]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Elements of `region` in ascending order.
    pub fn members(&self, region: usize) -> impl Iterator<Item = usize> + '_ {
        self.region_of
            .iter()
            .enumerate()
            .filter(move |&(_, &r)| r == region)
            .map(|(x, _)| x)
    }
}

/// Partition `0..n` into regions joined by `edges`, numbered in element order.
pub fn partition<I>(n: usize, edges: I) -> RegionPartition
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut dsu = DisjointSetUnion::new(n);
    let mut edge_count = 0usize;
    for (a, b) in edges {
        trace!(a, b, "union");
        dsu.union(a, b);
        edge_count += 1;
    }

    let mut region_by_root: HashMap<usize, usize> = HashMap::with_capacity(dsu.component_count());
    let mut roots = Vec::with_capacity(dsu.component_count());
    let mut region_of = Vec::with_capacity(n);
    for x in 0..n {
        let root = dsu.find(x);
        let region = *region_by_root.entry(root).or_insert_with(|| {
            roots.push(root);
            roots.len() - 1
        });
        region_of.push(region);
    }
    debug!(
        elements = n,
        edges = edge_count,
        regions = roots.len(),
        find_hops = dsu.find_hops(),
        "partitioned into regions"
    );
    RegionPartition { region_of, roots }
}

/// Region assignment for the vertices of a [`ModelGraph`].
#[derive(Debug, Clone)]
pub struct ModelGraphRegions {
    positions: Vec<Position>,
    vertex_indices: HashMap<Position, usize>,
    partition: RegionPartition,
}

impl ModelGraphRegions {
    #[inline]
    pub fn region_count(&self) -> usize {
        self.partition.region_count()
    }

    /// Vertex positions in vertex-index order (`t`, then `i`, then `j`).
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn vertex_index(&self, position: &Position) -> Option<usize> {
        self.vertex_indices.get(position).copied()
    }

    pub fn region_at(&self, position: &Position) -> Option<usize> {
        self.vertex_index(position).map(|v| self.partition.region_of(v))
    }

    #[inline]
    pub fn partition(&self) -> &RegionPartition {
        &self.partition
    }

    /// `(position, region)` for every vertex, in vertex-index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.partition.regions().iter().copied())
    }

    /// Regions shown before the user narrows the selection: all of them.
    pub fn default_region_display(&self) -> Vec<usize> {
        (0..self.region_count()).collect()
    }
}

impl ModelGraph {
    /// Number the vertices, union along every edge, and assign region indices.
    ///
    /// Boundary edges leave the graph and never join two regions.
    pub fn regions(&self) -> Result<ModelGraphRegions> {
        let positions: Vec<Position> = self.vertices().map(|node| node.p).collect();
        let vertex_indices: HashMap<Position, usize> = positions
            .iter()
            .enumerate()
            .map(|(idx, p)| (*p, idx))
            .collect();

        let mut edges = Vec::with_capacity(self.edge_entry_count());
        for (vertex, node) in self.vertices().enumerate() {
            for peer in node.edges.keys() {
                let peer_vertex = vertex_indices.get(peer).copied().ok_or_else(|| {
                    Error::UnknownPeer {
                        vertex: node.p.to_string(),
                        peer: peer.to_string(),
                    }
                })?;
                edges.push((vertex, peer_vertex));
            }
        }

        let partition = partition(positions.len(), edges);
        Ok(ModelGraphRegions {
            positions,
            vertex_indices,
            partition,
        })
    }
}
