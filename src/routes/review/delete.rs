use crate::db::ReviewRepository;
use crate::helpers;
use crate::models;
use crate::services::review as lifecycle;
use crate::services::review::LifecycleError;
use actix_web::{get, web, HttpResponse, Result};
use actix_web_flash_messages::IncomingFlashMessages;
use std::sync::Arc;

#[tracing::instrument(name = "Delete review.", skip_all)]
#[get("/delete/{id}")]
pub async fn delete_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(i32,)>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let actor = user.into_inner();

    // both outcomes fall through to the remaining list, only the notice
    // differs; a missing review still surfaces as NotFound
    let notice = match lifecycle::delete(repo.get_ref().as_ref(), &actor, id).await {
        Ok(()) => lifecycle::REVIEW_DELETED,
        Err(LifecycleError::Denied(msg)) => msg,
        Err(err) => return Err(super::lifecycle_error(err)),
    };

    let mut notices = helpers::notices(&messages);
    notices.push(notice.to_string());

    super::get::render_list(&actor, repo.get_ref().as_ref(), &templates, notices).await
}
