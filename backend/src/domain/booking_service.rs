//! Booking-draft lifecycle: field edits, price/end-time re-derivation
//! and submission readiness.
//!
//! The service holds the read-only service catalog and re-derives
//! `derived_price` and `derived_end_time` on every edit of the service,
//! tier or start-time fields, so a draft can never be submitted with a
//! stale derivation.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use shared::{BookingFormConfig, CreateBookingRequest, ServiceOffering, SessionTier};

use crate::domain::models::booking::{BookingDraft, BookingValidationError};
use crate::domain::pricing_service::{PricingError, PricingService};

/// Service managing booking drafts against a service catalog.
#[derive(Debug, Clone)]
pub struct BookingService {
    offerings: Vec<ServiceOffering>,
    pricing: PricingService,
    config: BookingFormConfig,
}

impl BookingService {
    /// Create a booking service over `offerings` with default form
    /// limits.
    pub fn new(offerings: Vec<ServiceOffering>) -> Self {
        Self::with_config(offerings, BookingFormConfig::default())
    }

    pub fn with_config(offerings: Vec<ServiceOffering>, config: BookingFormConfig) -> Self {
        Self {
            offerings,
            pricing: PricingService::new(),
            config,
        }
    }

    /// Replace the catalog after the external catalog service refreshes
    /// it. Existing drafts keep their selections; the next edit
    /// re-derives against the new catalog.
    pub fn replace_catalog(&mut self, offerings: Vec<ServiceOffering>) {
        info!("Replacing booking catalog: {} offerings", offerings.len());
        self.offerings = offerings;
    }

    pub fn offerings(&self) -> &[ServiceOffering] {
        &self.offerings
    }

    /// Open a fresh, empty draft for the given creator. The default
    /// tier is pre-selected; price and end time stay unset until a
    /// service and start time are chosen.
    pub fn new_draft(&self, created_by: &str) -> BookingDraft {
        BookingDraft {
            client_name: String::new(),
            client_contact: String::new(),
            service_id: None,
            service_name: String::new(),
            date: None,
            start_time: None,
            session_tier: self.config.default_tier,
            derived_end_time: None,
            crosses_midnight: false,
            derived_price: 0.0,
            staff: String::new(),
            created_by: created_by.to_string(),
            payment_mode: shared::PaymentMode::Card,
            other_payment: 0.0,
            room_number: String::new(),
        }
    }

    /// Select a service by catalog id and re-derive the price. A
    /// failed selection (unknown id, or a service that does not offer
    /// the current tier) leaves the draft unchanged.
    pub fn select_service(&self, draft: &mut BookingDraft, service_id: &str) -> Result<()> {
        let offering = self
            .find_offering(service_id)
            .with_context(|| format!("Unknown service: {}", service_id))?;

        let price = self
            .pricing
            .resolve_price(offering, draft.session_tier)
            .with_context(|| format!("Deriving price for service '{}'", offering.name))?;

        draft.service_id = Some(offering.id.clone());
        draft.service_name = offering.name.clone();
        draft.derived_price = price;

        info!(
            "Selected service '{}' for draft, price {:.2}",
            draft.service_name, draft.derived_price
        );
        Ok(())
    }

    /// Select a session tier and re-derive both price and end time.
    pub fn select_tier(&self, draft: &mut BookingDraft, tier: SessionTier) -> Result<()> {
        draft.session_tier = tier;
        self.rederive(draft)
            .with_context(|| format!("Deriving price and end time for tier {}", tier))?;
        Ok(())
    }

    /// Set the start time from its HH:MM form and re-derive the end
    /// time.
    pub fn set_start_time(&self, draft: &mut BookingDraft, raw: &str) -> Result<()> {
        let start = self.pricing.parse_time_of_day(raw)?;
        draft.start_time = Some(start);
        self.rederive(draft).context("Deriving end time")?;

        if draft.crosses_midnight {
            warn!(
                "Booking draft crosses midnight: start {} tier {}",
                raw, draft.session_tier
            );
        }
        Ok(())
    }

    /// Set the booking date from its ISO (YYYY-MM-DD) form.
    pub fn set_date(&self, draft: &mut BookingDraft, raw: &str) -> Result<()> {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid booking date: '{}'", raw))?;
        draft.date = Some(date);
        Ok(())
    }

    /// Whether the contact field is complete enough to trigger a
    /// client-history lookup against the external booking service.
    pub fn contact_ready_for_lookup(&self, draft: &BookingDraft) -> bool {
        draft.client_contact.len() == self.config.contact_digits
            && draft.client_contact.chars().all(|c| c.is_ascii_digit())
    }

    /// Field-level validation of a draft. An empty result means the
    /// draft may be finalized.
    pub fn validate_draft(&self, draft: &BookingDraft) -> Vec<BookingValidationError> {
        let mut errors = Vec::new();

        if draft.client_name.trim().is_empty() {
            errors.push(BookingValidationError::EmptyClientName);
        } else if draft.client_name.len() > self.config.max_client_name_length {
            errors.push(BookingValidationError::ClientNameTooLong);
        }

        if !self.contact_ready_for_lookup(draft) {
            errors.push(BookingValidationError::InvalidClientContact {
                expected: self.config.contact_digits,
            });
        }

        if draft.service_id.is_none() {
            errors.push(BookingValidationError::NoServiceSelected);
        }
        if draft.date.is_none() {
            errors.push(BookingValidationError::NoDateSet);
        }
        if draft.start_time.is_none() {
            errors.push(BookingValidationError::NoStartTimeSet);
        }

        if draft.other_payment < 0.0 {
            errors.push(BookingValidationError::NegativeOtherPayment);
        } else if draft.other_payment > self.config.max_other_payment {
            errors.push(BookingValidationError::OtherPaymentTooLarge);
        }

        errors
    }

    /// Re-derive and validate, then produce the submission payload for
    /// the external booking service. Fails rather than ever defaulting
    /// a price or end time.
    pub fn finalize_draft(&self, draft: &BookingDraft) -> Result<CreateBookingRequest> {
        let mut derived = draft.clone();
        self.rederive(&mut derived)
            .context("Draft derivation failed; refusing to submit")?;

        let errors = self.validate_draft(&derived);
        if !errors.is_empty() {
            let summary: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            bail!("Booking draft is not valid: {}", summary.join("; "));
        }

        // validate_draft guarantees these are present
        let service_id = derived.service_id.clone().unwrap_or_default();
        let date = derived.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        let start = derived
            .start_time
            .map(|t| self.pricing.format_time_of_day(t))
            .unwrap_or_default();
        let end = derived
            .derived_end_time
            .map(|t| self.pricing.format_time_of_day(t))
            .unwrap_or_default();

        info!(
            "Finalized booking draft for '{}': {} {} -> {}, {:.2}",
            derived.client_name, date, start, end, derived.derived_price
        );

        Ok(CreateBookingRequest {
            client_name: derived.client_name.trim().to_string(),
            client_contact: derived.client_contact.clone(),
            service_id,
            service_name: derived.service_name.clone(),
            date,
            start_time: start,
            end_time: end,
            session_tier: derived.session_tier,
            price: derived.derived_price,
            staff: derived.staff.clone(),
            created_by: derived.created_by.clone(),
            payment_mode: derived.payment_mode,
            other_payment: derived.other_payment,
            room_number: derived.room_number.clone(),
        })
    }

    /// Reset a draft after successful submission, preserving only the
    /// creator stamp.
    pub fn reset_draft(&self, draft: &mut BookingDraft) {
        let created_by = std::mem::take(&mut draft.created_by);
        *draft = self.new_draft(&created_by);
    }

    fn find_offering(&self, service_id: &str) -> Option<&ServiceOffering> {
        self.offerings.iter().find(|o| o.id == service_id)
    }

    /// Recompute the derived fields from the current selections. Price
    /// derivation only runs once a service is selected; end-time
    /// derivation only once a start time is set.
    fn rederive(&self, draft: &mut BookingDraft) -> Result<(), PricingError> {
        if let Some(service_id) = draft.service_id.clone() {
            if let Some(offering) = self.find_offering(&service_id) {
                draft.derived_price = self.pricing.resolve_price(offering, draft.session_tier)?;
            } else {
                // Catalog was replaced underneath the draft
                return Err(PricingError::InvalidTierSelection {
                    tier: draft.session_tier,
                    service: draft.service_name.clone(),
                });
            }
        }

        match draft.start_time {
            Some(start) => {
                let (end, crossed) = self
                    .pricing
                    .compute_end_time_with_rollover(start, draft.session_tier);
                draft.derived_end_time = Some(end);
                draft.crosses_midnight = crossed;
            }
            None => {
                draft.derived_end_time = None;
                draft.crosses_midnight = false;
            }
        }

        Ok(())
    }
}
