//! Stateless generator facade.

use chrono::Utc;

use crate::error::Result;

use super::generate;
use super::model::{
    ChangeFailureRate, DeploymentFrequency, DeploymentList, DoraSummary, LeadTime, Mttr,
    StatusFilter,
};
use super::random::{RandomSource, ThreadSource};

/// Produces DORA responses from an injected [`RandomSource`].
///
/// Holds no per-request state; share it freely behind an `Arc`.
#[derive(Debug, Default)]
pub struct DoraGenerator<S = ThreadSource> {
    source: S,
}

impl DoraGenerator<ThreadSource> {
    pub fn new() -> Self {
        Self { source: ThreadSource }
    }
}

impl<S: RandomSource> DoraGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn aggregate_metrics(&self, service: &str, days: u32) -> Result<DoraSummary> {
        tracing::info!(service = %service, days, "generating DORA metrics");
        generate::aggregate_metrics(&mut self.source.fork()?, service, days)
    }

    pub fn deployment_frequency(&self, service: &str, days: u32) -> Result<DeploymentFrequency> {
        tracing::info!(service = %service, days, "generating deployment frequency");
        generate::deployment_frequency(&mut self.source.fork()?, service, days)
    }

    pub fn lead_time(&self, service: &str, days: u32) -> Result<LeadTime> {
        tracing::info!(service = %service, days, "generating lead time");
        generate::lead_time(&mut self.source.fork()?, service, days)
    }

    pub fn mttr(&self, service: &str, days: u32) -> Result<Mttr> {
        tracing::info!(service = %service, days, "generating MTTR");
        generate::mttr(&mut self.source.fork()?, service, days)
    }

    pub fn change_failure_rate(&self, service: &str, days: u32) -> Result<ChangeFailureRate> {
        tracing::info!(service = %service, days, "generating change failure rate");
        generate::change_failure_rate(&mut self.source.fork()?, service, days)
    }

    pub fn list_deployments(
        &self,
        service: &str,
        limit: usize,
        status: StatusFilter,
    ) -> Result<DeploymentList> {
        tracing::info!(service = %service, limit, status = status.as_str(), "listing deployments");
        generate::list_deployments_at(&mut self.source.fork()?, Utc::now(), service, limit, status)
    }
}
