use crate::db::ReviewRepository;
use crate::forms;
use crate::helpers;
use crate::models;
use crate::services::review as lifecycle;
use actix_web::{get, post, web, HttpResponse, Result};
use actix_web_flash_messages::IncomingFlashMessages;
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "New review form.", skip_all)]
#[get("/new")]
pub async fn new_handler(
    templates: web::Data<tera::Tera>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse> {
    render_form(
        &templates,
        &forms::ReviewForm::default(),
        "/review/new",
        None,
        helpers::notices(&messages),
    )
}

#[tracing::instrument(name = "Create review.", skip_all)]
#[post("/new")]
pub async fn create_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Form<forms::ReviewForm>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
) -> Result<HttpResponse> {
    let actor = user.into_inner();
    let form = form.into_inner();

    // invalid input never reaches the lifecycle layer; the form comes back
    // with the submitted values intact
    if let Err(errors) = form.validate() {
        return render_form(
            &templates,
            &form,
            "/review/new",
            Some(errors.to_string()),
            Vec::new(),
        );
    }

    let review = lifecycle::create(repo.get_ref().as_ref(), &actor, &form)
        .await
        .map_err(super::lifecycle_error)?;

    Ok(super::see_other(&super::detail_url(review.id)))
}

pub(super) fn render_form(
    templates: &tera::Tera,
    form: &forms::ReviewForm,
    action: &str,
    error: Option<String>,
    notices: Vec<String>,
) -> Result<HttpResponse> {
    let mut context = tera::Context::new();
    context.insert("form", form);
    context.insert("action", action);
    context.insert("error", &error);
    context.insert("notices", &notices);
    helpers::render(templates, "reviewform.html", &context)
}
