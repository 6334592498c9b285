//! Exact distance transforms by hierarchical-queue flooding.
//!
//! Computes, for every cell of an N-dimensional grid, the exact distance
//! under a pluggable [`DistanceOp`](exdist_metric::DistanceOp) to the
//! nearest of a set of source points. A single wavefront sweep pops cells
//! from a [`PlateauQueue`] in distance order; each frontier cell carries a
//! [`SourceList`] of candidate sources, pruned by a per-hop Lipschitz
//! bound so that only sources that could still be nearest survive.
//!
//! # Entry points
//!
//! - [`exact_distance`]: distances to an explicit list of source coordinates
//! - [`exact_distance_from_image`]: sources are the non-zero cells of an image
//! - [`euclidean_distance_transform`]: the Euclidean special case
//! - [`ExactDistance`]: configurable engine returning [`TransformMetrics`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod image;
pub mod metrics;
pub mod observer;
pub mod queue;
pub mod source_list;
pub mod transform;

pub use config::{Propagation, TransformConfig, TransformConfigBuilder};
pub use error::{ConfigError, TransformError};
pub use image::{
    euclidean_distance_transform, exact_distance_from_image, exact_distance_from_image_with_config,
    image_sources,
};
pub use metrics::TransformMetrics;
pub use observer::{NoopObserver, TransformObserver};
pub use queue::PlateauQueue;
pub use source_list::{Offer, Slack, SourceId, SourceList};
pub use transform::{exact_distance, exact_distance_with_config, ExactDistance};
