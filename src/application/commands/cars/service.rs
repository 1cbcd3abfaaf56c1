use std::sync::Arc;

use crate::{
    application::{
        dto::Principal,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        car::{Car, CarId, CarOwnershipSpec, CarRepository},
        errors::{DomainError, Resource},
        user::UserRepository,
    },
};

pub struct CarCommandService {
    pub(super) car_repo: Arc<dyn CarRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CarCommandService {
    pub fn new(
        car_repo: Arc<dyn CarRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            car_repo,
            user_repo,
            clock,
        }
    }

    /// Loads a car the principal owns.
    pub(super) async fn load_owned(&self, principal: &Principal, id: i64) -> ApplicationResult<Car> {
        load_owned_car(self.car_repo.as_ref(), principal, id).await
    }
}

/// Fetches a car and enforces ownership: absent cars are `NotFound`,
/// cars of another user are `PermissionDenied`.
pub(crate) async fn load_owned_car(
    repo: &dyn CarRepository,
    principal: &Principal,
    id: i64,
) -> ApplicationResult<Car> {
    let id = CarId::new(id).map_err(|_| DomainError::NotFound(Resource::Car))?;
    let car = repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound(Resource::Car))?;

    if !CarOwnershipSpec::new(&car, principal.id()).is_satisfied() {
        tracing::warn!(car_id = %car.id, user_id = %principal.id(), "car access denied");
        return Err(ApplicationError::PermissionDenied);
    }

    Ok(car)
}
