use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user-authored review. `author` holds the external id of the actor that
/// created it and never changes afterwards; `modify_date` is refreshed on
/// every successful update.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub star: i32,
    pub text: String,
    pub recommendation: bool,
    pub author: String, // external user id, taken from the authentication middleware
    pub modify_date: DateTime<Utc>,
}
