use actix_web::{error, HttpResponse, Result};
use actix_web_flash_messages::IncomingFlashMessages;

/// Renders a named template; a broken template is a server fault, never a
/// user-facing validation problem.
pub fn render(
    templates: &tera::Tera,
    name: &str,
    context: &tera::Context,
) -> Result<HttpResponse> {
    let body = templates.render(name, context).map_err(|err| {
        tracing::error!("Failed to render template {}: {:?}", name, err);
        error::ErrorInternalServerError("template error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Collects flash-message texts for the template context.
pub fn notices(messages: &IncomingFlashMessages) -> Vec<String> {
    messages
        .iter()
        .map(|message| message.content().to_string())
        .collect()
}
