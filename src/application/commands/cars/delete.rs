use super::CarCommandService;
use crate::application::{dto::Principal, error::ApplicationResult};

impl CarCommandService {
    pub async fn delete(&self, principal: &Principal, id: i64) -> ApplicationResult<()> {
        let car = self.load_owned(principal, id).await?;
        self.car_repo.delete(car.id).await?;
        // the owner's total must drop the removed car's counter
        self.user_repo.refresh_usage_total(principal.id()).await?;
        tracing::info!(car_id = %car.id, user_id = %principal.id(), "car deleted");
        Ok(())
    }
}
