//! Validation and search for the service catalog management view.
//!
//! The catalog itself lives in the external backend; administrators
//! edit offerings through a form whose rules are enforced here before
//! anything is submitted.

use log::info;
use shared::{ServiceOffering, SessionTier};
use std::collections::HashSet;

use crate::domain::models::service_offering::CatalogValidationError;

/// Stateless validator for service offerings.
#[derive(Debug, Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Validate an offering as entered in the catalog form. Checks the
    /// parallel-array invariant (one price per tier in each row) plus
    /// per-row sanity.
    pub fn validate_offering(
        &self,
        offering: &ServiceOffering,
    ) -> Result<(), CatalogValidationError> {
        if offering.name.trim().is_empty() {
            return Err(CatalogValidationError::EmptyName);
        }
        if offering.duration_tiers.is_empty() {
            return Err(CatalogValidationError::NoTiers);
        }

        let mut seen = HashSet::new();
        for tier in &offering.duration_tiers {
            if !seen.insert(tier) {
                return Err(CatalogValidationError::DuplicateTier(
                    tier.label().to_string(),
                ));
            }
        }

        if !offering.has_aligned_prices() {
            return Err(CatalogValidationError::MismatchedPriceRows {
                tiers: offering.duration_tiers.len(),
                list: offering.list_price.len(),
                discounted: offering.discounted_price.len(),
            });
        }

        for (i, tier) in offering.duration_tiers.iter().enumerate() {
            let list = offering.list_price[i];
            let discounted = offering.discounted_price[i];

            if list < 0.0 || discounted < 0.0 {
                return Err(CatalogValidationError::NegativePrice(
                    tier.label().to_string(),
                ));
            }
            if discounted > list {
                return Err(CatalogValidationError::DiscountExceedsList(
                    tier.label().to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Case-insensitive name search over the catalog, preserving
    /// catalog order. An empty term returns everything.
    pub fn search_offerings(
        &self,
        offerings: &[ServiceOffering],
        term: &str,
    ) -> Vec<ServiceOffering> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return offerings.to_vec();
        }

        let matches: Vec<ServiceOffering> = offerings
            .iter()
            .filter(|o| o.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        info!(
            "Catalog search '{}': {} of {} offerings",
            term,
            matches.len(),
            offerings.len()
        );
        matches
    }

    /// A blank offering for the "add service" modal: the full tier set
    /// with zeroed price rows.
    pub fn new_offering_template(&self) -> ServiceOffering {
        ServiceOffering {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            duration_tiers: SessionTier::ALL.to_vec(),
            list_price: vec![0.0; SessionTier::ALL.len()],
            discounted_price: vec![0.0; SessionTier::ALL.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_offering() -> ServiceOffering {
        ServiceOffering {
            id: "svc::1".to_string(),
            name: "Hot Stone".to_string(),
            description: String::new(),
            duration_tiers: SessionTier::ALL.to_vec(),
            list_price: vec![50.0, 65.0, 80.0, 115.0, 145.0],
            discounted_price: vec![45.0, 58.0, 72.0, 100.0, 130.0],
        }
    }

    #[test]
    fn test_valid_offering_passes() {
        let service = CatalogService::new();
        assert!(service.validate_offering(&valid_offering()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let service = CatalogService::new();
        let mut offering = valid_offering();
        offering.name = "   ".to_string();
        assert_eq!(
            service.validate_offering(&offering),
            Err(CatalogValidationError::EmptyName)
        );
    }

    #[test]
    fn test_mismatched_price_rows_rejected() {
        let service = CatalogService::new();
        let mut offering = valid_offering();
        offering.discounted_price.pop();

        assert!(matches!(
            service.validate_offering(&offering),
            Err(CatalogValidationError::MismatchedPriceRows {
                tiers: 5,
                list: 5,
                discounted: 4,
            })
        ));
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        let service = CatalogService::new();
        let mut offering = valid_offering();
        offering.duration_tiers[1] = SessionTier::Min30;
        assert!(matches!(
            service.validate_offering(&offering),
            Err(CatalogValidationError::DuplicateTier(_))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let service = CatalogService::new();
        let mut offering = valid_offering();
        offering.discounted_price[2] = -1.0;
        assert!(matches!(
            service.validate_offering(&offering),
            Err(CatalogValidationError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_discount_above_list_rejected() {
        let service = CatalogService::new();
        let mut offering = valid_offering();
        offering.discounted_price[0] = offering.list_price[0] + 10.0;
        assert!(matches!(
            service.validate_offering(&offering),
            Err(CatalogValidationError::DiscountExceedsList(_))
        ));
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let service = CatalogService::new();
        let mut second = valid_offering();
        second.id = "svc::2".to_string();
        second.name = "Stone Therapy".to_string();
        let mut third = valid_offering();
        third.id = "svc::3".to_string();
        third.name = "Aromatherapy".to_string();

        let catalog = vec![valid_offering(), second, third];

        let hits = service.search_offerings(&catalog, "stone");
        let names: Vec<&str> = hits.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Hot Stone", "Stone Therapy"]);

        assert_eq!(service.search_offerings(&catalog, "").len(), 3);
        assert!(service.search_offerings(&catalog, "facial").is_empty());
    }

    #[test]
    fn test_new_offering_template() {
        let service = CatalogService::new();
        let template = service.new_offering_template();
        assert_eq!(template.duration_tiers, SessionTier::ALL.to_vec());
        assert!(template.has_aligned_prices());
        assert!(service.validate_offering(&template).is_err()); // name empty
    }
}
