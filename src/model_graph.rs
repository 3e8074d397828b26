use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::position::Position;

/// Decoding graph laid out on the `[t][i][j]` simulator grid.
///
/// Only measurement positions carry a node; every other slot is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelGraph {
    pub nodes: Vec<Vec<Vec<Option<ModelGraphNode>>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGraphNode {
    /// Position of this node, repeated from its grid slot
    pub p: Position,
    /// Elected edge per peer, in document order; edge payloads stay opaque.
    /// Region roots depend on this order, so it must not be re-sorted.
    #[serde(default)]
    pub edges: IndexMap<Position, Value>,
    #[serde(default)]
    pub all_boundaries: Vec<ModelGraphBoundary>,
}

/// Edge from a node to the code boundary, optionally through a virtual node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGraphBoundary {
    #[serde(default)]
    pub v: Option<Position>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The subset of the case data this crate consumes.
#[derive(Debug, Clone, Default, Deserialize)]
struct CaseData {
    #[serde(default)]
    model_graph: Option<ModelGraph>,
}

impl ModelGraph {
    /// Parse a bare `{ "nodes": ... }` document.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let graph: ModelGraph = serde_json::from_str(data)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Parse full case data and extract its model graph, which may be absent or `null`.
    pub fn from_case_json_str(data: &str) -> Result<Option<Self>> {
        let case: CaseData = serde_json::from_str(data)?;
        if let Some(graph) = &case.model_graph {
            graph.validate()?;
        }
        Ok(case.model_graph)
    }

    /// `(height, vertical, horizontal)`; the inner sizes come from the first row present.
    pub fn shape(&self) -> (usize, usize, usize) {
        let height = self.nodes.len();
        let vertical = self.nodes.first().map_or(0, Vec::len);
        let horizontal = self
            .nodes
            .first()
            .and_then(|layer| layer.first())
            .map_or(0, Vec::len);
        (height, vertical, horizontal)
    }

    pub fn get(&self, position: &Position) -> Option<&ModelGraphNode> {
        self.nodes
            .get(position.t)?
            .get(position.i)?
            .get(position.j)?
            .as_ref()
    }

    /// Existing nodes in `t`, then `i`, then `j` order.
    pub fn vertices(&self) -> impl Iterator<Item = &ModelGraphNode> {
        self.nodes
            .iter()
            .flat_map(|layer| layer.iter())
            .flat_map(|row| row.iter())
            .filter_map(Option::as_ref)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Total number of non-boundary edge entries, counting both directions.
    pub fn edge_entry_count(&self) -> usize {
        self.vertices().map(|node| node.edges.len()).sum()
    }

    /// Every node must sit at the slot its `p` names.
    fn validate(&self) -> Result<()> {
        for (t, layer) in self.nodes.iter().enumerate() {
            for (i, row) in layer.iter().enumerate() {
                for (j, slot) in row.iter().enumerate() {
                    if let Some(node) = slot {
                        let at = Position::new(t, i, j);
                        if node.p != at {
                            return Err(Error::MisplacedNode {
                                slot: at.to_string(),
                                reported: node.p.to_string(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Load case data from a JSON file and return its model graph, if any.
pub fn load_case_model_graph<P: AsRef<Path>>(path: P) -> Result<Option<ModelGraph>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ModelGraph::from_case_json_str(&data)
}
