//! Domain services for the spa admin dashboard.
//!
//! Each service is a small, synchronous rule engine. The presentation
//! layer re-invokes them on every relevant input change; none of them
//! cache or hold hidden state beyond the catalog handed to
//! [`booking_service::BookingService`].

pub mod access_service;
pub mod booking_service;
pub mod catalog_service;
pub mod models;
pub mod pricing_service;
pub mod report_service;

pub use access_service::AccessService;
pub use booking_service::BookingService;
pub use catalog_service::CatalogService;
pub use pricing_service::PricingService;
pub use report_service::ReportService;
