use actix_web::{web, HttpResponse};
use anyhow::anyhow;
use validator::Validate;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::HttpError;
use crate::middleware::RequestId;

/// Handler for POST /auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Ada Lovelace",
///     "email": "ada@example.com",
///     "password": "correct horse"
/// }
/// ```
///
/// # Errors
/// - 400 `ValidationError` when a field breaks its rule
/// - 500 for a valid body: registration is not implemented yet
pub async fn register(
    request_id: RequestId,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, HttpError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!("[{}] register attempt", request_id);

    Err(anyhow!("Not implemented").into())
}
