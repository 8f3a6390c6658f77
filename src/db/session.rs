use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::{construct_token, extract_token_parts, new_id, new_token};
use chrono::Utc;
use entity::session::{ActiveModel as SessionActive, Entity as Session, Model as SessionModel};
use sea_orm::{EntityTrait, Set};
use uuid::Uuid;

impl PostgresService {
    /// Login: mint a session and hand back the opaque bearer token. Only
    /// the secret's hash is persisted.
    pub async fn create_session(&self, user_id: Uuid) -> Result<String, AppError> {
        let session_id = new_id();
        let secret = new_token();
        let token_hash = hash_password(&secret)
            .map_err(|_| AppError::Internal("failed to hash session token".to_string()))?;

        Session::insert(SessionActive {
            id: Set(session_id),
            user_id: Set(user_id),
            token_hash: Set(token_hash),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(construct_token(&session_id.to_string(), &secret))
    }

    /// Resolve a bearer token to its session row. Every failure mode is
    /// the same Unauthorized so callers can't probe for session ids.
    pub async fn session_from_token(&self, token: &str) -> Result<SessionModel, AppError> {
        let (session_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;
        let session = Session::find_by_id(session_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::Unauthorized)?;
        if !verify_password(&secret, &session.token_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }
        Ok(session)
    }

    /// Logout. A missing row means the token was already invalidated.
    pub async fn delete_session(&self, session_id: &Uuid) -> Result<(), AppError> {
        let res = Session::delete_by_id(*session_id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::Unauthorized);
        }
        Ok(())
    }
}
