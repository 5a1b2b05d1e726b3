//! Threshold tables for the four DORA indicators.

use super::model::{MetricKind, Rating};

/// How a value is compared against the tier cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Higher is better; a tier is reached when `value >= cut`.
    AtLeast,
    /// Lower is better; a tier is reached when `value < cut`.
    Below,
    /// Lower is better; a tier is reached when `value <= cut`.
    AtMost,
}

/// Cut-offs for elite, high and medium. Anything past `medium` is low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub bound: Bound,
    pub elite: f64,
    pub high: f64,
    pub medium: f64,
}

impl Thresholds {
    fn reaches(&self, value: f64, cut: f64) -> bool {
        match self.bound {
            Bound::AtLeast => value >= cut,
            Bound::Below => value < cut,
            Bound::AtMost => value <= cut,
        }
    }

    pub fn rate(&self, value: f64) -> Rating {
        if self.reaches(value, self.elite) {
            Rating::Elite
        } else if self.reaches(value, self.high) {
            Rating::High
        } else if self.reaches(value, self.medium) {
            Rating::Medium
        } else {
            Rating::Low
        }
    }
}

pub const fn thresholds(kind: MetricKind) -> Thresholds {
    match kind {
        // deploys per day: daily / ~weekly / ~monthly
        MetricKind::DeploymentFrequency => Thresholds {
            bound: Bound::AtLeast,
            elite: 1.0,
            high: 0.14,
            medium: 0.03,
        },
        // hours: one hour / one day / one week
        MetricKind::LeadTime | MetricKind::Mttr => Thresholds {
            bound: Bound::Below,
            elite: 1.0,
            high: 24.0,
            medium: 168.0,
        },
        // percent of deployments
        MetricKind::ChangeFailureRate => Thresholds {
            bound: Bound::AtMost,
            elite: 15.0,
            high: 30.0,
            medium: 45.0,
        },
    }
}

pub fn classify(kind: MetricKind, value: f64) -> Rating {
    thresholds(kind).rate(value)
}
