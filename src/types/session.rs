use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate::required;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RSessionCreate {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl RSessionCreate {
    pub fn validate(&self) -> Result<Credentials, AppError> {
        let email = required(&self.email, "email")?;
        let password = required(&self.password, "password")?;
        Ok(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenView {
    #[serde(rename = "type")]
    pub kind: String,
    pub token: String,
}

impl TokenView {
    pub fn bearer(token: String) -> Self {
        TokenView {
            kind: "bearer".to_string(),
            token,
        }
    }
}
