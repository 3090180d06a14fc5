pub mod emission;
pub mod error;
pub mod json;
pub mod problem;
pub mod saved;

#[cfg(test)]
pub(crate) mod test_utils;
