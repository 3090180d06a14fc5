pub mod cache;
pub mod graphhopper_api;
pub mod mapbox_api;
pub mod osrm_api;
pub mod route_alternatives;
pub mod route_client;
pub mod route_provider;
