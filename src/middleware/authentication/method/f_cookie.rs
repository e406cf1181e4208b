use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;

#[tracing::instrument(name = "Authenticate with cookie", skip_all)]
pub async fn try_cookie(req: &mut ServiceRequest) -> Result<bool, String> {
    let cookie_header = get_header::<String>(req, "cookie")?;
    if cookie_header.is_none() {
        return Ok(false);
    }

    let cookies = cookie_header.unwrap();
    let token = cookies.split(';').find_map(|cookie| {
        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
        if parts.len() == 2 && parts[0] == "access_token" {
            Some(parts[1].to_string())
        } else {
            None
        }
    });

    let token = match token {
        Some(token) => token,
        None => return Ok(false),
    };

    tracing::debug!("Found access_token in cookies");

    super::f_bearer::authenticate_token(req, &token)
        .await
        .map(|_| true)
}
