use super::CarCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{car::CarId, user::UserId},
};

impl CarCommandService {
    /// Bumps the usage counter of `car_id` if `owner` owns it. Does nothing
    /// for any other pairing.
    pub async fn increment_usage_counter(&self, owner: UserId, car_id: i64) -> ApplicationResult<()> {
        let Ok(car_id) = CarId::new(car_id) else {
            return Ok(());
        };
        self.car_repo.increment_usage(car_id, owner).await?;
        Ok(())
    }
}
