pub mod engine_type;
pub mod kilograms;
pub mod kmh;
pub mod meters;
pub mod route_segment;
pub mod vehicle_category;
