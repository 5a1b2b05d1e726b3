//! Pure generators over an explicit RNG.
//!
//! Every function takes the RNG (and, for listings, the current time) as an
//! argument, so a seeded `StdRng` reproduces any response exactly.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::error::{DoraError, Result};

use super::model::{
    ChangeFailureRate, DeploymentFrequency, DeploymentList, DeploymentRecord, DeploymentStatus,
    DoraSummary, LeadTime, MetricKind, MetricSample, MetricValue, Mttr, StatusFilter,
};

/// Deployments are spread over the last 30 days.
const DEPLOY_WINDOW_HOURS: i64 = 720;

const AUTHORS: [&str; 4] = ["alice", "bob", "charlie", "diana"];

/// FNV-1a. Stable across processes and toolchains, unlike `DefaultHasher`.
pub fn service_hash(name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    name.bytes()
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}

fn check_window(service: &str, days: u32) -> Result<()> {
    if service.trim().is_empty() {
        return Err(DoraError::BadRequest("service must not be empty".into()));
    }
    if days == 0 {
        return Err(DoraError::BadRequest("days must be at least 1".into()));
    }
    Ok(())
}

/// All four metrics, each nudged by the service's hash so a given service
/// drifts toward similar values across calls.
pub fn aggregate_metrics<R: Rng>(rng: &mut R, service: &str, days: u32) -> Result<DoraSummary> {
    check_window(service, days)?;

    let bias = (service_hash(service) % 100) as f64;
    let df = rng.random_range(1.0..=10.0) + bias / 50.0;
    let lt = rng.random_range(0.5..=24.0) + (100.0 - bias) / 10.0;
    let mttr = rng.random_range(0.1..=4.0) + (100.0 - bias) / 25.0;
    let cfr = rng.random_range(0.0..=15.0) + (100.0 - bias) / 10.0;

    let value = |kind, v| MetricValue::from(&MetricSample::new(service, kind, v, days));
    Ok(DoraSummary {
        service: service.to_string(),
        period_days: days,
        deployment_frequency: value(MetricKind::DeploymentFrequency, df),
        lead_time_for_changes: value(MetricKind::LeadTime, lt),
        mean_time_to_recovery: value(MetricKind::Mttr, mttr),
        change_failure_rate: value(MetricKind::ChangeFailureRate, cfr),
    })
}

pub fn deployment_frequency<R: Rng>(
    rng: &mut R,
    service: &str,
    days: u32,
) -> Result<DeploymentFrequency> {
    check_window(service, days)?;
    let count = rng.random_range(days / 2..=days.saturating_mul(3));
    deployment_frequency_from_count(service, days, count)
}

/// Rate a known deployment count over `days`.
pub fn deployment_frequency_from_count(
    service: &str,
    days: u32,
    count: u32,
) -> Result<DeploymentFrequency> {
    check_window(service, days)?;
    let per_day = f64::from(count) / f64::from(days);
    Ok(DeploymentFrequency {
        sample: MetricSample::new(service, MetricKind::DeploymentFrequency, per_day, days),
        total_deployments: count,
    })
}

pub fn lead_time<R: Rng>(rng: &mut R, service: &str, days: u32) -> Result<LeadTime> {
    check_window(service, days)?;
    let hours = rng.random_range(0.5..=72.0);
    Ok(LeadTime {
        sample: MetricSample::new(service, MetricKind::LeadTime, hours, days),
    })
}

pub fn mttr<R: Rng>(rng: &mut R, service: &str, days: u32) -> Result<Mttr> {
    check_window(service, days)?;
    let incidents = rng.random_range(1..=10u32);
    let hours = rng.random_range(0.1..=48.0);
    Ok(Mttr {
        sample: MetricSample::new(service, MetricKind::Mttr, hours, days),
        incidents_count: incidents,
    })
}

pub fn change_failure_rate<R: Rng>(
    rng: &mut R,
    service: &str,
    days: u32,
) -> Result<ChangeFailureRate> {
    check_window(service, days)?;
    let total = rng.random_range(10..=100u32);
    let failed = rng.random_range(0..=total / 3);
    change_failure_rate_from_counts(service, days, total, failed)
}

/// Rate known totals; `failed` may not exceed `total`.
pub fn change_failure_rate_from_counts(
    service: &str,
    days: u32,
    total: u32,
    failed: u32,
) -> Result<ChangeFailureRate> {
    check_window(service, days)?;
    if total == 0 {
        return Err(DoraError::BadRequest("total deployments must be positive".into()));
    }
    if failed > total {
        return Err(DoraError::BadRequest(format!(
            "failed deployments ({failed}) exceed total ({total})"
        )));
    }
    let percent = f64::from(failed) / f64::from(total) * 100.0;
    Ok(ChangeFailureRate {
        sample: MetricSample::new(service, MetricKind::ChangeFailureRate, percent, days),
        total_deployments: total,
        failed_deployments: failed,
    })
}

fn candidate<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    service: &str,
    index: usize,
) -> DeploymentRecord {
    let hours_ago = rng.random_range(1..=DEPLOY_WINDOW_HOURS);
    // 3:1 success to failure
    let status = if rng.random_ratio(1, 4) {
        DeploymentStatus::Failed
    } else {
        DeploymentStatus::Success
    };
    let version = format!(
        "v1.{}.{}",
        rng.random_range(0..=50u32),
        rng.random_range(0..=100u32)
    );
    let duration_seconds = rng.random_range(30..=600u32);
    let author = AUTHORS[rng.random_range(0..AUTHORS.len())];
    let commit_sha = format!("{:06x}", rng.random_range(0..=0xff_ffffu32));

    DeploymentRecord {
        id: format!("deploy-{:04}", service_hash(&format!("{service}-{index}")) % 10_000),
        service: service.to_string(),
        version,
        status,
        timestamp: now - Duration::hours(hours_ago),
        duration_seconds,
        author: author.to_string(),
        commit_sha,
    }
}

/// Recent deployments, newest first.
///
/// Exactly `limit` candidates are drawn and the filter is applied afterwards,
/// so a filtered listing may hold fewer than `limit` records. Every candidate
/// consumes the same draws whatever the filter.
pub fn list_deployments_at<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    service: &str,
    limit: usize,
    status: StatusFilter,
) -> Result<DeploymentList> {
    if service.trim().is_empty() {
        return Err(DoraError::BadRequest("service must not be empty".into()));
    }

    let mut deployments: Vec<DeploymentRecord> = (0..limit)
        .map(|i| candidate(rng, now, service, i))
        .filter(|d| status.matches(d.status))
        .collect();

    deployments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    deployments.truncate(limit);

    Ok(DeploymentList {
        service: service.to_string(),
        total: deployments.len(),
        deployments,
    })
}
