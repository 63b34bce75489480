//! # Spa Admin Backend
//!
//! Domain core for the spa administration dashboard. This crate holds
//! the business rules behind the presentation layer: booking-draft
//! derivation (price and end time), role-based navigation and route
//! admission, catalog validation, and display aggregation. It performs
//! no I/O of its own; HTTP transport, persistence and authentication
//! live in external collaborators.

use shared::ServiceOffering;

pub mod domain;

pub use domain::access_service::AccessService;
pub use domain::booking_service::BookingService;
pub use domain::catalog_service::CatalogService;
pub use domain::pricing_service::{PricingError, PricingService};
pub use domain::report_service::ReportService;

/// Main backend struct that orchestrates all services.
pub struct Backend {
    pub pricing_service: PricingService,
    pub access_service: AccessService,
    pub booking_service: BookingService,
    pub catalog_service: CatalogService,
    pub report_service: ReportService,
}

impl Backend {
    /// Create a backend instance over the given service catalog. The
    /// catalog is supplied by the external catalog service and treated
    /// as read-only here.
    pub fn new(offerings: Vec<ServiceOffering>) -> Self {
        Backend {
            pricing_service: PricingService::new(),
            access_service: AccessService::new(),
            booking_service: BookingService::new(offerings),
            catalog_service: CatalogService::new(),
            report_service: ReportService::new(),
        }
    }
}
