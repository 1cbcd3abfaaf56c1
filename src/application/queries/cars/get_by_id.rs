use super::CarQueryService;
use crate::application::{
    commands::cars::load_owned_car,
    dto::{CarDto, Principal},
    error::ApplicationResult,
};

impl CarQueryService {
    pub async fn get_by_id(&self, principal: &Principal, id: i64) -> ApplicationResult<CarDto> {
        let car = load_owned_car(self.car_repo.as_ref(), principal, id).await?;
        Ok(car.into())
    }
}
