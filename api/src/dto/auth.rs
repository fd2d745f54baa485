use serde::Deserialize;
use validator::Validate;

/// Body of `POST /auth/register`
///
/// No `Debug`: the password must never reach the logs.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 8, max = 100, message = "Password must be between 8 and 100 characters"))]
    pub password: String,
}
