use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        errors::{DomainError, Resource},
        user::UserId,
    },
};

impl UserCommandService {
    /// Removes the user together with every car they own.
    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let id = UserId::new(id).map_err(|_| DomainError::NotFound(Resource::User))?;
        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound(Resource::User).into());
        }
        self.user_repo.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}
