mod repository;
pub mod review;

pub use repository::*;
