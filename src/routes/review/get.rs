use crate::db::ReviewRepository;
use crate::helpers;
use crate::models;
use crate::services::review as lifecycle;
use actix_web::{get, web, HttpResponse, Result};
use actix_web_flash_messages::IncomingFlashMessages;
use std::sync::Arc;

#[tracing::instrument(name = "List reviews.", skip_all)]
#[get("/list")]
pub async fn list_handler(
    user: web::ReqData<Arc<models::User>>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse> {
    let actor = user.into_inner();
    render_list(
        &actor,
        repo.get_ref().as_ref(),
        &templates,
        helpers::notices(&messages),
    )
    .await
}

// `/reviews` is an alias of `/review/list`.
#[tracing::instrument(name = "List reviews (index).", skip_all)]
#[get("")]
pub async fn index_handler(
    user: web::ReqData<Arc<models::User>>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse> {
    let actor = user.into_inner();
    render_list(
        &actor,
        repo.get_ref().as_ref(),
        &templates,
        helpers::notices(&messages),
    )
    .await
}

#[tracing::instrument(name = "Get review.", skip_all)]
#[get("/{id}")]
pub async fn get_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(i32,)>,
    repo: web::Data<Arc<dyn ReviewRepository>>,
    templates: web::Data<tera::Tera>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let review = lifecycle::get(repo.get_ref().as_ref(), id)
        .await
        .map_err(super::lifecycle_error)?;

    let mut context = tera::Context::new();
    context.insert("review", &review);
    context.insert("current_user_id", &user.id);
    context.insert("notices", &helpers::notices(&messages));
    helpers::render(&templates, "review.html", &context)
}

pub(super) async fn render_list(
    actor: &models::User,
    repo: &dyn ReviewRepository,
    templates: &tera::Tera,
    notices: Vec<String>,
) -> Result<HttpResponse> {
    let reviews = lifecycle::list(repo).await.map_err(super::lifecycle_error)?;

    let mut context = tera::Context::new();
    context.insert("reviews", &reviews);
    context.insert("current_user_id", &actor.id);
    context.insert("notices", &notices);
    helpers::render(templates, "reviews.html", &context)
}
