pub mod co2;
pub mod speed_band;
