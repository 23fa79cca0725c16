//! SLA traffic-light indicator. Thresholds come only from configuration;
//! a module without a policy reports `Unconfigured`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaPolicy {
    pub warning_after_hours: u32,
    pub breach_after_hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaIndicator {
    Green,
    Yellow,
    Red,
    Unconfigured,
}

impl SlaIndicator {
    pub fn label_key(&self) -> &'static str {
        match self {
            SlaIndicator::Green => "sla.green",
            SlaIndicator::Yellow => "sla.yellow",
            SlaIndicator::Red => "sla.red",
            SlaIndicator::Unconfigured => "sla.unconfigured",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SlaIndicator::Green => "badge badge--success",
            SlaIndicator::Yellow => "badge badge--warning",
            SlaIndicator::Red => "badge badge--error",
            SlaIndicator::Unconfigured => "badge badge--neutral",
        }
    }
}

impl SlaPolicy {
    pub fn is_valid(&self) -> bool {
        self.warning_after_hours < self.breach_after_hours
    }

    /// Indicator for an item opened at `opened_at`, evaluated at `now`.
    pub fn indicator(&self, opened_at: DateTime<Utc>, now: DateTime<Utc>) -> SlaIndicator {
        let elapsed_minutes = (now - opened_at).num_minutes().max(0);
        if elapsed_minutes >= i64::from(self.breach_after_hours) * 60 {
            SlaIndicator::Red
        } else if elapsed_minutes >= i64::from(self.warning_after_hours) * 60 {
            SlaIndicator::Yellow
        } else {
            SlaIndicator::Green
        }
    }
}

pub fn evaluate(
    policy: Option<&SlaPolicy>,
    opened_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> SlaIndicator {
    policy
        .map(|p| p.indicator(opened_at, now))
        .unwrap_or(SlaIndicator::Unconfigured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_thresholds() {
        let policy = SlaPolicy {
            warning_after_hours: 2,
            breach_after_hours: 4,
        };
        let opened = Utc::now();
        assert_eq!(policy.indicator(opened, opened + Duration::minutes(119)), SlaIndicator::Green);
        assert_eq!(policy.indicator(opened, opened + Duration::hours(2)), SlaIndicator::Yellow);
        assert_eq!(policy.indicator(opened, opened + Duration::hours(4)), SlaIndicator::Red);
        // clock skew never reads as late
        assert_eq!(policy.indicator(opened, opened - Duration::hours(9)), SlaIndicator::Green);
    }

    #[test]
    fn test_no_policy_is_unconfigured() {
        let now = Utc::now();
        assert_eq!(evaluate(None, now - Duration::days(30), now), SlaIndicator::Unconfigured);
    }
}
