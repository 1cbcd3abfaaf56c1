use crate::domain::car::{
    entity::{Car, CarUpdate, NewCar},
    value_objects::CarId,
};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn insert(&self, new_car: NewCar) -> DomainResult<Car>;

    async fn update(&self, update: CarUpdate) -> DomainResult<Car>;

    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>>;

    /// Cars holding `plate` across all owners, ignoring `exclude` when given.
    async fn count_by_plate(&self, plate: &str, exclude: Option<CarId>) -> DomainResult<u64>;

    async fn delete(&self, id: CarId) -> DomainResult<()>;

    /// Cars of `owner`, ordered by usage descending, then model ascending.
    async fn list_by_owner(&self, owner: UserId, page: PageRequest) -> DomainResult<Page<Car>>;

    /// Adds one to the usage counter of `id` when it belongs to `owner`.
    /// A mismatched pair is left untouched and is not an error.
    async fn increment_usage(&self, id: CarId, owner: UserId) -> DomainResult<()>;
}
