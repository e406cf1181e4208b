pub mod health_checks;
pub(crate) mod review;

pub use health_checks::*;
