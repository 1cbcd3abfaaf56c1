use super::UserCommandService;
use crate::application::error::ApplicationResult;
use chrono::Duration;

pub const INACTIVITY_WINDOW_DAYS: i64 = 30;

impl UserCommandService {
    /// Deletes accounts whose last login (or creation, if they never signed
    /// in) is older than the inactivity window. Returns the number removed.
    pub async fn delete_inactive_users(&self) -> ApplicationResult<u64> {
        let cutoff = self.clock.now() - Duration::days(INACTIVITY_WINDOW_DAYS);
        let removed = self.user_repo.delete_inactive_since(cutoff).await?;
        tracing::info!(removed, %cutoff, "inactive users swept");
        Ok(removed)
    }
}
