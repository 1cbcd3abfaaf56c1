use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{PasswordHash, RawPassword, User},
};

impl UserCommandService {
    pub(super) async fn hash_password(&self, raw: &RawPassword) -> ApplicationResult<PasswordHash> {
        let hashed = self.password_hasher.hash(raw.as_str()).await?;
        Ok(PasswordHash::new(hashed)?)
    }

    /// A non-blank password replaces the stored hash; otherwise the existing
    /// hash is kept.
    pub(super) async fn password_for_update(
        &self,
        existing: &User,
        password: Option<&str>,
    ) -> ApplicationResult<PasswordHash> {
        match password.filter(|p| !p.trim().is_empty()) {
            Some(password) => {
                let raw = RawPassword::new(password)?;
                self.hash_password(&raw).await
            }
            None => Ok(existing.password_hash.clone()),
        }
    }
}
