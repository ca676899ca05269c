//! Digen core library.
//!
//! Plans the nine directed-graph datasets, builds each graph from its own
//! seeded generator and writes the resulting payloads as JSON.
//!
//! Generation is deterministic: the dataset plan is drawn from a generator
//! seeded with [`DatasetsConfig::base_seed`], and dataset `i` (1-based) is
//! built from a fresh generator seeded with `base_seed + i`. All randomness
//! flows through explicitly passed generators.

mod density;
mod error;
mod generate;
mod payload;
mod pipeline;
mod plan;
mod spec;
mod writer;

#[cfg(test)]
mod test_utils;

pub use crate::{
    density::Density,
    error::{
        DatasetError, DatasetErrorCode, GraphSpecError, GraphSpecErrorCode, PayloadError,
        PayloadErrorCode, Result,
    },
    generate::{
        Backbone, EdgeSet, WEIGHT_RANGE, assign_weights, backbone_edges, generate_graph,
        inject_cycles, select_source,
    },
    payload::{Edge, GraphPayload, WeightModel},
    pipeline::{DEFAULT_BASE_SEED, DEFAULT_OUTPUT_DIR, DatasetsConfig, generate_datasets},
    plan::{SizeTier, plan_specs},
    spec::{GraphSpec, Topology},
    writer::{DatasetSummary, ensure_output_dir, load_payload, write_payload},
};
