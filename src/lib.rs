#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod error;
pub mod rng;
pub mod union_find;
pub mod position;
pub mod model_graph;
pub mod regions;

// Re-exports: stable minimal API surface for external callers
pub use crate::error::{Error, Result};
pub use crate::model_graph::{load_case_model_graph, ModelGraph, ModelGraphBoundary, ModelGraphNode};
pub use crate::position::Position;
pub use crate::regions::{partition, ModelGraphRegions, RegionPartition};
pub use crate::rng::{
    splitmix64, splitmix64_next_seed, unit_f64_from_raw, SeededRandom, SplitMix64,
    Xoroshiro128StarStar,
};
pub use crate::union_find::DisjointSetUnion;
