use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};

impl UserCommandService {
    pub async fn refresh_usage_total(&self, user_id: UserId) -> ApplicationResult<()> {
        self.user_repo.refresh_usage_total(user_id).await?;
        Ok(())
    }
}
