pub mod add;
pub mod delete;
pub mod edit;
pub mod get;

pub use add::*;
pub use delete::*;
pub use edit::*;
pub use get::*;

use crate::services::review::LifecycleError;
use actix_web::{error, http::header, HttpResponse};

/// Fallback conversion for lifecycle failures that have no dedicated flow in
/// a handler. Denials normally never take this path; they are turned into
/// notices at the call site.
pub(crate) fn lifecycle_error(err: LifecycleError) -> actix_web::Error {
    match err {
        LifecycleError::NotFound => error::ErrorNotFound("review not found"),
        LifecycleError::Denied(msg) => error::ErrorForbidden(msg),
        LifecycleError::Storage(msg) => error::ErrorInternalServerError(msg),
    }
}

pub(crate) fn detail_url(id: i32) -> String {
    format!("/review/{}", id)
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
