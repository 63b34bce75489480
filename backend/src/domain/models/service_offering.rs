//! Catalog-side validation rules for service offerings.

/// Problems with a service offering as entered in the catalog
/// management view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogValidationError {
    #[error("Service name cannot be empty")]
    EmptyName,
    #[error("A service must offer at least one duration tier")]
    NoTiers,
    #[error("Duration tier {0} is listed more than once")]
    DuplicateTier(String),
    #[error("Price rows must match the tier list: {tiers} tiers, {list} list prices, {discounted} discounted prices")]
    MismatchedPriceRows {
        tiers: usize,
        list: usize,
        discounted: usize,
    },
    #[error("Price for tier {0} cannot be negative")]
    NegativePrice(String),
    #[error("Discounted price for tier {0} exceeds the list price")]
    DiscountExceedsList(String),
}
