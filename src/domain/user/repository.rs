use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Login, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>>;

    /// Users holding `login`, ignoring `exclude` when given.
    async fn count_by_login(&self, login: &str, exclude: Option<UserId>) -> DomainResult<u64>;

    async fn count_by_email(&self, email: &str, exclude: Option<UserId>) -> DomainResult<u64>;

    /// Removes the user and every car they own.
    async fn delete(&self, id: UserId) -> DomainResult<()>;

    /// Ordered by total usage descending, then login ascending.
    async fn list_ranked(&self, page: PageRequest) -> DomainResult<Page<User>>;

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()>;

    /// Recomputes the cached usage aggregate from the user's cars.
    async fn refresh_usage_total(&self, id: UserId) -> DomainResult<()>;

    /// Deletes every user whose last activity is strictly before `cutoff`,
    /// returning how many were removed.
    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;
}
