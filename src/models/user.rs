use serde::{Deserialize, Serialize};

/// The authenticated actor, resolved once per request by the authentication
/// middleware from the external auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_confirmed: bool,
}
