//! Session pricing and end-time derivation for the booking form.
//!
//! Given a selected service, a session tier and a start time, this
//! service resolves the price the client pays and the time the room is
//! free again. Both operations are pure; the caller re-runs them on
//! every relevant field change and must not submit a draft while either
//! fails.

use chrono::{Duration, NaiveTime};
use log::debug;
use shared::{ServiceOffering, SessionTier};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The selected tier is not offered by the selected service, or the
    /// service's price rows do not cover it.
    #[error("Tier {tier} is not offered by service '{service}'")]
    InvalidTierSelection {
        tier: SessionTier,
        service: String,
    },
    /// The start time string is not a valid HH:MM time of day.
    #[error("Malformed time of day: '{0}'")]
    MalformedTimeOfDay(String),
}

/// Stateless pricing engine. Holds nothing and caches nothing; every
/// derivation is a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the price for booking `tier` of `offering`.
    ///
    /// The discounted price is authoritative for bookings; the list
    /// price is display-only and never consulted here. A tier missing
    /// from the offering's tier list, or a price row shorter than the
    /// tier list, fails with [`PricingError::InvalidTierSelection`] and
    /// the caller must block submission.
    pub fn resolve_price(
        &self,
        offering: &ServiceOffering,
        tier: SessionTier,
    ) -> Result<f64, PricingError> {
        let index = offering.tier_index(tier).ok_or_else(|| {
            PricingError::InvalidTierSelection {
                tier,
                service: offering.name.clone(),
            }
        })?;

        let price = offering.discounted_price.get(index).copied().ok_or_else(|| {
            PricingError::InvalidTierSelection {
                tier,
                service: offering.name.clone(),
            }
        })?;

        debug!(
            "Resolved price {:.2} for service '{}' tier {}",
            price, offering.name, tier
        );
        Ok(price)
    }

    /// Resolve the undiscounted list price for `tier`, for display
    /// alongside the booking price.
    pub fn list_price(
        &self,
        offering: &ServiceOffering,
        tier: SessionTier,
    ) -> Result<f64, PricingError> {
        let index = offering.tier_index(tier).ok_or_else(|| {
            PricingError::InvalidTierSelection {
                tier,
                service: offering.name.clone(),
            }
        })?;

        offering.list_price.get(index).copied().ok_or_else(|| {
            PricingError::InvalidTierSelection {
                tier,
                service: offering.name.clone(),
            }
        })
    }

    /// Compute the session end time: start time plus the tier's total
    /// minutes on a 24-hour clock.
    ///
    /// The result wraps over midnight without any indication that a day
    /// boundary was crossed (23:30 plus a 45-minute tier yields 00:15).
    /// Callers that care should use
    /// [`compute_end_time_with_rollover`](Self::compute_end_time_with_rollover).
    pub fn compute_end_time(&self, start: NaiveTime, tier: SessionTier) -> NaiveTime {
        self.compute_end_time_with_rollover(start, tier).0
    }

    /// Like [`compute_end_time`](Self::compute_end_time), but also
    /// reports whether the session crosses midnight so the caller can
    /// surface a warning instead of silently accepting an "earlier"
    /// end time.
    pub fn compute_end_time_with_rollover(
        &self,
        start: NaiveTime,
        tier: SessionTier,
    ) -> (NaiveTime, bool) {
        let (end, wrapped_seconds) =
            start.overflowing_add_signed(Duration::minutes(tier.total_minutes()));
        (end, wrapped_seconds != 0)
    }

    /// Parse a start-time string in strict 24-hour HH:MM form.
    pub fn parse_time_of_day(&self, raw: &str) -> Result<NaiveTime, PricingError> {
        NaiveTime::parse_from_str(raw.trim(), "%H:%M")
            .map_err(|_| PricingError::MalformedTimeOfDay(raw.to_string()))
    }

    /// Format a time of day back into the HH:MM wire form.
    pub fn format_time_of_day(&self, time: NaiveTime) -> String {
        time.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swedish() -> ServiceOffering {
        ServiceOffering {
            id: "svc::swedish".to_string(),
            name: "Swedish".to_string(),
            description: "Classic full-body massage".to_string(),
            duration_tiers: SessionTier::ALL.to_vec(),
            list_price: vec![45.0, 60.0, 75.0, 110.0, 140.0],
            discounted_price: vec![40.0, 50.0, 65.0, 95.0, 120.0],
        }
    }

    #[test]
    fn test_resolve_price_uses_discounted_row() {
        let service = PricingService::new();
        let offering = swedish();

        for (i, tier) in offering.duration_tiers.iter().enumerate() {
            assert_eq!(
                service.resolve_price(&offering, *tier).unwrap(),
                offering.discounted_price[i]
            );
        }
    }

    #[test]
    fn test_resolve_price_rejects_missing_tier() {
        let service = PricingService::new();
        let mut offering = swedish();
        offering.duration_tiers = vec![SessionTier::Min45, SessionTier::Min60];
        offering.list_price = vec![60.0, 75.0];
        offering.discounted_price = vec![50.0, 65.0];

        let err = service
            .resolve_price(&offering, SessionTier::Min120)
            .unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidTierSelection {
                tier: SessionTier::Min120,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_price_rejects_short_price_row() {
        let service = PricingService::new();
        let mut offering = swedish();
        // Malformed catalog row: five tiers, four discounted prices.
        offering.discounted_price.pop();

        assert!(service
            .resolve_price(&offering, SessionTier::Min120)
            .is_err());
    }

    #[test]
    fn test_list_price_lookup() {
        let service = PricingService::new();
        let offering = swedish();
        assert_eq!(
            service.list_price(&offering, SessionTier::Min90).unwrap(),
            110.0
        );
    }

    #[test]
    fn test_compute_end_time_basic() {
        let service = PricingService::new();
        let nine = service.parse_time_of_day("09:00").unwrap();
        let end = service.compute_end_time(nine, SessionTier::Min45);
        assert_eq!(service.format_time_of_day(end), "10:00");

        let two_pm = service.parse_time_of_day("14:00").unwrap();
        let end = service.compute_end_time(two_pm, SessionTier::Min30);
        assert_eq!(service.format_time_of_day(end), "14:45");
    }

    #[test]
    fn test_compute_end_time_every_tier() {
        let service = PricingService::new();
        let ten = service.parse_time_of_day("10:00").unwrap();
        let expected = [
            (SessionTier::Min30, "10:45"),
            (SessionTier::Min45, "11:00"),
            (SessionTier::Min60, "11:15"),
            (SessionTier::Min90, "11:45"),
            (SessionTier::Min120, "12:15"),
        ];
        for (tier, end) in expected {
            assert_eq!(
                service.format_time_of_day(service.compute_end_time(ten, tier)),
                end
            );
        }
    }

    #[test]
    fn test_compute_end_time_wraps_past_midnight() {
        let service = PricingService::new();
        let late = service.parse_time_of_day("23:30").unwrap();

        // 45 total minutes wrap to 00:15; a 60-minute tier lands on 00:30
        let end = service.compute_end_time(late, SessionTier::Min30);
        assert_eq!(service.format_time_of_day(end), "00:15");

        let end = service.compute_end_time(late, SessionTier::Min45);
        assert_eq!(service.format_time_of_day(end), "00:30");

        let (end, crossed) = service.compute_end_time_with_rollover(late, SessionTier::Min30);
        assert_eq!(service.format_time_of_day(end), "00:15");
        assert!(crossed);

        let (_, crossed) = service.compute_end_time_with_rollover(
            service.parse_time_of_day("09:00").unwrap(),
            SessionTier::Min120,
        );
        assert!(!crossed);
    }

    #[test]
    fn test_parse_time_of_day() {
        let service = PricingService::new();

        assert!(service.parse_time_of_day("00:00").is_ok());
        assert!(service.parse_time_of_day("23:59").is_ok());
        assert!(service.parse_time_of_day(" 09:30 ").is_ok());

        for bad in ["24:00", "12:60", "9am", "12", "", "ab:cd"] {
            let err = service.parse_time_of_day(bad).unwrap_err();
            assert!(
                matches!(err, PricingError::MalformedTimeOfDay(_)),
                "expected malformed time for {bad:?}"
            );
        }
    }
}
