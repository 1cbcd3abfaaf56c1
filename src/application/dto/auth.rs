use crate::domain::user::{Role, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A freshly signed token.
#[derive(Debug, Clone)]
pub struct AuthTokenDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Response of a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInDto {
    /// First name of the signed-in user.
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub login: String,
    pub role: Role,
}

/// Claims recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub login: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The authenticated caller of the current request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user: User,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Principal {
    pub fn id(&self) -> UserId {
        self.user.id
    }
}
