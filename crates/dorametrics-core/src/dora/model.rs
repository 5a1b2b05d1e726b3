//! DORA response records.
//!
//! Every record is built fresh per request and never stored. Wire names match
//! what visualization clients already expect (`lead_time_for_changes`,
//! `mean_time_to_recovery`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rating;

/// The four DORA indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricKind {
    #[serde(rename = "deployment_frequency")]
    DeploymentFrequency,
    #[serde(rename = "lead_time_for_changes")]
    LeadTime,
    #[serde(rename = "mean_time_to_recovery")]
    Mttr,
    #[serde(rename = "change_failure_rate")]
    ChangeFailureRate,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::DeploymentFrequency,
        MetricKind::LeadTime,
        MetricKind::Mttr,
        MetricKind::ChangeFailureRate,
    ];

    /// Wire name, also used as the key in [`DoraSummary`].
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::DeploymentFrequency => "deployment_frequency",
            MetricKind::LeadTime => "lead_time_for_changes",
            MetricKind::Mttr => "mean_time_to_recovery",
            MetricKind::ChangeFailureRate => "change_failure_rate",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            MetricKind::DeploymentFrequency => Unit::DeploymentsPerDay,
            MetricKind::LeadTime | MetricKind::Mttr => Unit::Hours,
            MetricKind::ChangeFailureRate => Unit::Percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    DeploymentsPerDay,
    Hours,
    Percent,
}

/// Performance tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Elite,
    High,
    Medium,
    Low,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Elite => "elite",
            Rating::High => "high",
            Rating::Medium => "medium",
            Rating::Low => "low",
        }
    }
}

/// Round to two decimals, the precision every emitted value carries.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One rated metric for one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSample {
    pub service: String,
    pub metric: MetricKind,
    pub value: f64,
    pub unit: Unit,
    pub rating: Rating,
    pub period_days: u32,
}

impl MetricSample {
    /// Rounds `value` and rates the rounded number, so the emitted value and
    /// rating always agree with the kind's threshold table.
    pub fn new(service: &str, metric: MetricKind, value: f64, period_days: u32) -> Self {
        let value = round2(value);
        Self {
            service: service.to_string(),
            metric,
            value,
            unit: metric.unit(),
            rating: rating::classify(metric, value),
            period_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentFrequency {
    #[serde(flatten)]
    pub sample: MetricSample,
    pub total_deployments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadTime {
    #[serde(flatten)]
    pub sample: MetricSample,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mttr {
    #[serde(flatten)]
    pub sample: MetricSample,
    pub incidents_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeFailureRate {
    #[serde(flatten)]
    pub sample: MetricSample,
    pub total_deployments: u32,
    pub failed_deployments: u32,
}

/// Value/unit/rating triple used inside [`DoraSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricValue {
    pub value: f64,
    pub unit: Unit,
    pub rating: Rating,
}

impl From<&MetricSample> for MetricValue {
    fn from(s: &MetricSample) -> Self {
        Self {
            value: s.value,
            unit: s.unit,
            rating: s.rating,
        }
    }
}

/// All four metrics for a service over one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoraSummary {
    pub service: String,
    pub period_days: u32,
    pub deployment_frequency: MetricValue,
    pub lead_time_for_changes: MetricValue,
    pub mean_time_to_recovery: MetricValue,
    pub change_failure_rate: MetricValue,
}

impl DoraSummary {
    pub fn entries(&self) -> [(MetricKind, &MetricValue); 4] {
        [
            (MetricKind::DeploymentFrequency, &self.deployment_frequency),
            (MetricKind::LeadTime, &self.lead_time_for_changes),
            (MetricKind::Mttr, &self.mean_time_to_recovery),
            (MetricKind::ChangeFailureRate, &self.change_failure_rate),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Success,
    Failed,
}

/// `status` argument of `list_deployments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Failed,
}

impl StatusFilter {
    pub fn matches(self, status: DeploymentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Success => status == DeploymentStatus::Success,
            StatusFilter::Failed => status == DeploymentStatus::Failed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Success => "success",
            StatusFilter::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRecord {
    pub id: String,
    pub service: String,
    pub version: String,
    pub status: DeploymentStatus,
    /// Serialized as RFC 3339 (ISO-8601, UTC).
    pub timestamp: DateTime<Utc>,
    pub duration_seconds: u32,
    pub author: String,
    pub commit_sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentList {
    pub service: String,
    pub deployments: Vec<DeploymentRecord>,
    pub total: usize,
}
