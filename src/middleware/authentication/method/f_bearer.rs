use crate::configuration::Settings;
use crate::forms;
use crate::middleware::authentication::get_header;
use crate::models;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Short-lived cache of resolved tokens so that a burst of requests from the
/// same actor does not hammer the auth service.
pub struct TokenCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedUser>>,
}

struct CachedUser {
    user: models::User,
    expires_at: Instant,
}

impl TokenCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, token: &str) -> Option<models::User> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(token) {
                if entry.expires_at > now {
                    return Some(entry.user.clone());
                }
            }
        }

        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(token) {
            if entry.expires_at <= now {
                entries.remove(token);
            } else {
                return Some(entry.user.clone());
            }
        }

        None
    }

    pub async fn insert(&self, token: String, user: models::User) {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.entries.write().await;
        entries.insert(token, CachedUser { user, expires_at });
    }
}

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer scheme is missing".to_string()),
    }

    match authentication_parts.next() {
        Some(token) => Ok(token.to_string()),
        None => {
            tracing::error!("Bearer token is missing");
            Err("Authentication required".to_string())
        }
    }
}

#[tracing::instrument(name = "Authenticate with bearer token", skip_all)]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authentication = get_header::<String>(req, "authorization")?;
    if authentication.is_none() {
        return Ok(false);
    }

    let token = try_extract_token(authentication.unwrap())?;
    authenticate_token(req, &token).await.map(|_| true)
}

/// Resolves a token against the auth service and stores the actor in the
/// request extensions for the handlers to extract.
pub(super) async fn authenticate_token(req: &mut ServiceRequest, token: &str) -> Result<(), String> {
    let settings = req
        .app_data::<web::Data<Settings>>()
        .cloned()
        .ok_or_else(|| "settings are not configured".to_string())?;
    let http_client = req
        .app_data::<web::Data<reqwest::Client>>()
        .cloned()
        .ok_or_else(|| "auth http client is not configured".to_string())?;
    let cache = req
        .app_data::<web::Data<TokenCache>>()
        .cloned()
        .ok_or_else(|| "token cache is not configured".to_string())?;

    let user = match cache.get(token).await {
        Some(user) => user,
        None => {
            let user = fetch_user(&http_client, settings.auth_url.as_str(), token).await?;
            cache.insert(token.to_string(), user.clone()).await;
            user
        }
    };

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already resolved".to_string());
    }

    Ok(())
}

pub(super) async fn fetch_user(
    client: &reqwest::Client,
    auth_url: &str,
    token: &str,
) -> Result<models::User, String> {
    let resp = client
        .get(auth_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|_err| "no response from auth server".to_string())?;

    if !resp.status().is_success() {
        return Err("401 Unauthorized".to_string());
    }

    resp.json::<forms::UserForm>()
        .await
        .map_err(|_err| "can't parse the auth response body".to_string())?
        .try_into()
}
