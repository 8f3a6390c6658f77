use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::utils::validate::{required, valid_email, valid_username};

/// Registration payload. Fields stay optional so a missing field is a
/// validation error, not a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserCreate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar: Option<String>,
}

impl RUserCreate {
    pub fn validate(&self) -> Result<NewUser, AppError> {
        let email = required(&self.email, "email")?;
        if !valid_email(email) {
            return Err(AppError::Validation("email format is invalid".to_string()));
        }
        let username = required(&self.username, "username")?;
        if !valid_username(username) {
            return Err(AppError::Validation(
                "username must be 3-30 letters, digits or underscores".to_string(),
            ));
        }
        let password = required(&self.password, "password")?;
        if password.len() < 4 {
            return Err(AppError::Validation(
                "password must be at least 4 characters".to_string(),
            ));
        }
        Ok(NewUser {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            avatar: self.avatar.clone(),
        })
    }
}

/// What actually lands in the database.
pub struct DBUserCreate {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

pub struct UserUpdate {
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

impl RUserUpdate {
    pub fn validate(&self) -> Result<UserUpdate, AppError> {
        let email = required(&self.email, "email")?;
        if !valid_email(email) {
            return Err(AppError::Validation("email format is invalid".to_string()));
        }
        let password = required(&self.password, "password")?;
        if password.len() < 4 {
            return Err(AppError::Validation(
                "password must be at least 4 characters".to_string(),
            ));
        }
        Ok(UserUpdate {
            email: email.to_string(),
            password: password.to_string(),
            avatar: self.avatar.clone(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RForgotPassword {
    pub email: Option<String>,
    #[serde(rename = "resetPasswordUrl")]
    pub reset_password_url: Option<String>,
}

pub struct ForgotPassword {
    pub email: String,
    pub reset_password_url: String,
}

impl RForgotPassword {
    pub fn validate(&self) -> Result<ForgotPassword, AppError> {
        let email = required(&self.email, "email")?;
        if !valid_email(email) {
            return Err(AppError::Validation("email format is invalid".to_string()));
        }
        let reset_password_url = required(&self.reset_password_url, "resetPasswordUrl")?;
        Ok(ForgotPassword {
            email: email.to_string(),
            reset_password_url: reset_password_url.to_string(),
        })
    }
}

/// Public projection of a user. Password material never crosses here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
}

impl From<entity::user::Model> for UserView {
    fn from(user: entity::user::Model) -> Self {
        UserView {
            id: user.id,
            email: user.email,
            username: user.username,
            avatar: user.avatar,
        }
    }
}
