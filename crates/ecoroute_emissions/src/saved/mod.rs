pub mod baseline;
pub mod route_estimate;
pub mod saved_per_route;

/// Decimal places kept in every reported CO₂ figure.
pub const SAVED_DECIMALS: u32 = 3;
