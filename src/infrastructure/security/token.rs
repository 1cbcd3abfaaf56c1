// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenClaims, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::Role;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::Arc};

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: String,
    roles: Vec<String>,
    iat: i64,
    exp: i64,
}

/// HS256 session tokens. The configured secret is base64-encoded once and the
/// encoded bytes are the HMAC key.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let key = STANDARD.encode(secret.as_bytes());
        Self {
            encoding: EncodingKey::from_secret(key.as_bytes()),
            decoding: DecodingKey::from_secret(key.as_bytes()),
            ttl,
            clock,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock instead.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["sub".to_string(), "exp".to_string()]);
        validation
    }
}

fn timestamp(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(ApplicationError::InvalidToken)
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;
        let claims = JwtClaims {
            sub: subject.login,
            roles: vec![subject.role.as_str().to_string()],
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!(login = %claims.sub, "jwt signed");

        Ok(AuthTokenDto { token, expires_at })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let data = decode::<JwtClaims>(token, &self.decoding, &Self::validation()).map_err(|err| {
            tracing::debug!(error = %err, "jwt rejected");
            ApplicationError::InvalidToken
        })?;
        let claims = data.claims;

        // Valid strictly before `exp`.
        if self.clock.now().timestamp() >= claims.exp {
            tracing::debug!(login = %claims.sub, "jwt expired");
            return Err(ApplicationError::InvalidToken);
        }

        let role = claims
            .roles
            .first()
            .and_then(|role| role.parse::<Role>().ok())
            .ok_or(ApplicationError::InvalidToken)?;

        Ok(TokenClaims {
            login: claims.sub,
            role,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Mutex;

    struct SteppingClock(Mutex<DateTime<Utc>>);

    impl SteppingClock {
        fn at(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self(Mutex::new(now)))
        }

        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            login: "ricardo".into(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn issued_token_round_trips_claims() {
        let clock = SteppingClock::at(start());
        let manager = JwtTokenManager::new("secret", Duration::minutes(1440), clock.clone());

        let issued = manager.issue(subject()).await.unwrap();
        assert_eq!(issued.expires_at, start() + Duration::minutes(1440));

        let claims = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(claims.login, "ricardo");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.issued_at, start());
        assert_eq!(claims.expires_at, start() + Duration::minutes(1440));
    }

    #[tokio::test]
    async fn zero_ttl_token_is_immediately_invalid() {
        let clock = SteppingClock::at(start());
        let manager = JwtTokenManager::new("secret", Duration::zero(), clock);

        let issued = manager.issue(subject()).await.unwrap();
        let err = manager.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidToken));
    }

    #[tokio::test]
    async fn token_expires_at_exactly_exp() {
        let clock = SteppingClock::at(start());
        let manager = JwtTokenManager::new("secret", Duration::minutes(10), clock.clone());
        let issued = manager.issue(subject()).await.unwrap();

        clock.advance(Duration::minutes(10) - Duration::seconds(1));
        assert!(manager.authenticate(&issued.token).await.is_ok());

        clock.advance(Duration::seconds(1));
        assert!(matches!(
            manager.authenticate(&issued.token).await,
            Err(ApplicationError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn foreign_signature_and_garbage_are_rejected() {
        let clock = SteppingClock::at(start());
        let ours = JwtTokenManager::new("secret", Duration::minutes(5), clock.clone());
        let theirs = JwtTokenManager::new("other-secret", Duration::minutes(5), clock);

        let foreign = theirs.issue(subject()).await.unwrap();
        assert!(matches!(
            ours.authenticate(&foreign.token).await,
            Err(ApplicationError::InvalidToken)
        ));
        assert!(matches!(
            ours.authenticate("not-a-jwt").await,
            Err(ApplicationError::InvalidToken)
        ));
    }
}
