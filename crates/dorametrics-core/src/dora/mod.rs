//! Synthetic DORA metrics: model, rating tables and generators.
//!
//! - [`model`]: response records (samples, summaries, deployment listings).
//! - [`rating`]: per-kind threshold tables mapping a value onto a [`model::Rating`].
//! - [`random`]: injectable random sources.
//! - [`generate`]: pure generators over an explicit RNG.
//! - [`generator`]: [`DoraGenerator`], the stateless facade used by tool hosts.

pub mod generate;
pub mod generator;
pub mod model;
pub mod random;
pub mod rating;

pub use generator::DoraGenerator;
pub use model::{
    ChangeFailureRate, DeploymentFrequency, DeploymentList, DeploymentRecord, DeploymentStatus,
    DoraSummary, LeadTime, MetricKind, MetricSample, MetricValue, Mttr, Rating, StatusFilter, Unit,
};
pub use random::{RandomSource, SeededSource, ThreadSource};
