use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RForgotPassword;
use crate::utils::mail::mail_password_reset;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("/forgot-password")]
async fn forgot_password(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RForgotPassword>,
) -> ApiResult<Response> {
    let request = body.validate()?;

    let user = db.get_user_by_email(&request.email).await?;

    // Best effort: the caller learns nothing about mail delivery
    if let Err(err) =
        mail_password_reset(&user.email, &user.username, &request.reset_password_url).await
    {
        error!("password reset mail to {} failed: {err}", user.email);
    }

    Ok(ApiResponse::NoContent)
}
