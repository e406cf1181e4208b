pub(crate) mod html;
pub(crate) mod json;

pub use html::*;
pub(crate) use json::*;
