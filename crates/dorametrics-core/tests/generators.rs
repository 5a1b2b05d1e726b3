//! Generator ranges, injected counts and deployment listings.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dorametrics_core::dora::generate::{self, service_hash};
use dorametrics_core::dora::{
    DeploymentStatus, DoraGenerator, MetricKind, Rating, SeededSource, StatusFilter,
};
use dorametrics_core::error::ClientCode;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()
}

#[test]
fn injected_deployment_count_rates_elite() {
    let df = generate::deployment_frequency_from_count("checkout", 30, 45).unwrap();
    assert_eq!(df.sample.value, 1.5);
    assert_eq!(df.sample.rating, Rating::Elite);
    assert_eq!(df.total_deployments, 45);
    assert_eq!(df.sample.metric, MetricKind::DeploymentFrequency);
}

#[test]
fn injected_failure_counts_rate_medium() {
    let cfr = generate::change_failure_rate_from_counts("checkout", 30, 50, 20).unwrap();
    assert_eq!(cfr.sample.value, 40.0);
    assert_eq!(cfr.sample.rating, Rating::Medium);
    assert_eq!(cfr.failed_deployments, 20);
}

#[test]
fn failure_counts_are_checked() {
    let err = generate::change_failure_rate_from_counts("checkout", 30, 10, 11).unwrap_err();
    assert_eq!(err.client_code(), ClientCode::BadRequest);
    assert!(generate::change_failure_rate_from_counts("checkout", 30, 0, 0).is_err());
}

#[test]
fn zero_days_and_blank_service_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = generate::lead_time(&mut rng, "checkout", 0).unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(generate::aggregate_metrics(&mut rng, "  ", 30).is_err());
}

#[test]
fn draws_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let df = generate::deployment_frequency(&mut rng, "api", 30).unwrap();
        assert!((15..=90).contains(&df.total_deployments));

        let lt = generate::lead_time(&mut rng, "api", 30).unwrap();
        assert!((0.5..=72.0).contains(&lt.sample.value));

        let m = generate::mttr(&mut rng, "api", 30).unwrap();
        assert!((1..=10).contains(&m.incidents_count));
        assert!((0.1..=48.0).contains(&m.sample.value));

        let cfr = generate::change_failure_rate(&mut rng, "api", 30).unwrap();
        assert!((10..=100).contains(&cfr.total_deployments));
        assert!(cfr.failed_deployments <= cfr.total_deployments / 3);
    }
}

#[test]
fn service_hash_is_stable() {
    assert_eq!(service_hash(""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(service_hash("checkout"), service_hash("checkout"));
    assert_ne!(service_hash("checkout"), service_hash("payments"));
}

#[test]
fn listing_never_exceeds_limit_and_is_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    for limit in [0usize, 1, 5, 10, 50] {
        for filter in [StatusFilter::All, StatusFilter::Success, StatusFilter::Failed] {
            let list =
                generate::list_deployments_at(&mut rng, fixed_now(), "checkout", limit, filter)
                    .unwrap();
            assert!(list.deployments.len() <= limit);
            assert_eq!(list.total, list.deployments.len());
            assert!(list
                .deployments
                .windows(2)
                .all(|w| w[0].timestamp >= w[1].timestamp));
            assert!(list.deployments.iter().all(|d| filter.matches(d.status)));
        }
    }
}

#[test]
fn unfiltered_listing_returns_every_candidate() {
    let mut rng = StdRng::seed_from_u64(9);
    let list =
        generate::list_deployments_at(&mut rng, fixed_now(), "checkout", 25, StatusFilter::All)
            .unwrap();
    assert_eq!(list.total, 25);
}

#[test]
fn filter_keeps_exactly_the_matching_candidates() {
    let seed = 2026;
    let all = generate::list_deployments_at(
        &mut StdRng::seed_from_u64(seed),
        fixed_now(),
        "checkout",
        5,
        StatusFilter::All,
    )
    .unwrap();
    let failed = generate::list_deployments_at(
        &mut StdRng::seed_from_u64(seed),
        fixed_now(),
        "checkout",
        5,
        StatusFilter::Failed,
    )
    .unwrap();

    let expected: Vec<_> = all
        .deployments
        .iter()
        .filter(|d| d.status == DeploymentStatus::Failed)
        .cloned()
        .collect();
    assert_eq!(failed.deployments, expected);
    // seed 2026 draws two failed and three successful candidates
    assert_eq!(failed.total, 2);
    assert_eq!(all.total - failed.total, 3);
    assert!(failed
        .deployments
        .iter()
        .all(|d| d.status == DeploymentStatus::Failed));
}

#[test]
fn record_fields_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(3);
    let now = fixed_now();
    let list =
        generate::list_deployments_at(&mut rng, now, "checkout", 40, StatusFilter::All).unwrap();

    for d in &list.deployments {
        assert!(d.id.starts_with("deploy-") && d.id.len() == "deploy-0000".len());
        assert_eq!(d.service, "checkout");
        assert!(d.version.starts_with("v1."));
        assert_eq!(d.commit_sha.len(), 6);
        assert!(d.commit_sha.chars().all(|c| c.is_ascii_hexdigit()));
        assert!((30..=600).contains(&d.duration_seconds));
        assert!(["alice", "bob", "charlie", "diana"].contains(&d.author.as_str()));
        assert!(d.timestamp <= now - Duration::hours(1));
        assert!(d.timestamp >= now - Duration::hours(720));
    }

    let json = serde_json::to_value(&list).unwrap();
    let ts = json["deployments"][0]["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn seeded_generator_is_reproducible() {
    let a = DoraGenerator::with_source(SeededSource::new(11));
    let b = DoraGenerator::with_source(SeededSource::new(11));
    assert_eq!(
        a.aggregate_metrics("checkout", 30).unwrap(),
        b.aggregate_metrics("checkout", 30).unwrap()
    );
    assert_eq!(a.mttr("checkout", 7).unwrap(), b.mttr("checkout", 7).unwrap());
}

#[test]
fn sample_json_uses_wire_names() {
    let generator = DoraGenerator::with_source(SeededSource::new(5));
    let lt = serde_json::to_value(generator.lead_time("checkout", 14).unwrap()).unwrap();
    assert_eq!(lt["metric"], "lead_time_for_changes");
    assert_eq!(lt["unit"], "hours");
    assert_eq!(lt["period_days"], 14);

    let m = serde_json::to_value(generator.mttr("checkout", 14).unwrap()).unwrap();
    assert_eq!(m["metric"], "mean_time_to_recovery");
    assert!(m["incidents_count"].is_u64());
}
