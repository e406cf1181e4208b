use crate::db::ReviewRepository;
use crate::forms;
use crate::helpers;
use crate::models;
use crate::services::review as lifecycle;
use crate::services::review::LifecycleError;
use actix_web::{get, post, web, HttpResponse, Result};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Edit review form.", skip_all)]
#[get("/edit/{id}")]
pub async fn edit_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(i32,)>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let actor = user.into_inner();

    match lifecycle::edit_target(repo.get_ref().as_ref(), &actor, id).await {
        // the form starts out filled with the review's current values
        Ok(review) => super::add::render_form(
            &templates,
            &forms::ReviewForm::from(&review),
            &format!("/review/edit/{}", id),
            None,
            helpers::notices(&messages),
        ),
        Err(LifecycleError::Denied(msg)) => {
            FlashMessage::warning(msg).send();
            Ok(super::see_other(&super::detail_url(id)))
        }
        Err(err) => Err(super::lifecycle_error(err)),
    }
}

#[tracing::instrument(name = "Update review.", skip_all)]
#[post("/edit/{id}")]
pub async fn update_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(i32,)>,
    form: web::Form<forms::ReviewForm>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let actor = user.into_inner();

    // ownership is settled before the submitted input is even looked at
    let review = match lifecycle::edit_target(repo.get_ref().as_ref(), &actor, id).await {
        Ok(review) => review,
        Err(LifecycleError::Denied(msg)) => {
            FlashMessage::warning(msg).send();
            return Ok(super::see_other(&super::detail_url(id)));
        }
        Err(err) => return Err(super::lifecycle_error(err)),
    };

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        // rejected input is discarded; the form falls back to the stored values
        return super::add::render_form(
            &templates,
            &forms::ReviewForm::from(&review),
            &format!("/review/edit/{}", id),
            Some(errors.to_string()),
            Vec::new(),
        );
    }

    lifecycle::update(repo.get_ref().as_ref(), &actor, id, &form)
        .await
        .map_err(super::lifecycle_error)?;

    Ok(super::see_other(&super::detail_url(id)))
}
