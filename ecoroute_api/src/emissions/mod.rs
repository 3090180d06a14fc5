pub mod post_emissions;
