mod f_bearer;
mod f_cookie;

pub use f_bearer::{try_bearer, TokenCache};
pub use f_cookie::try_cookie;

/// Last link of the authentication chain: every route behind the manager
/// requires a resolved identity, so an unidentified request is refused.
pub fn reject() -> Result<bool, String> {
    Err("authentication required".to_string())
}
