pub mod review;
pub mod user;

pub use review::*;
pub use user::*;
