use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::{
        errors::{DomainError, Resource},
        user::{Login, User, UserId},
    },
};

impl UserQueryService {
    pub async fn get_by_id(&self, id: i64) -> ApplicationResult<UserDto> {
        let id = UserId::new(id).map_err(|_| DomainError::NotFound(Resource::User))?;
        let user = self.find_user(id).await?;
        Ok(user.into())
    }

    pub async fn find_by_login(&self, login: &Login) -> ApplicationResult<User> {
        self.user_repo
            .find_by_login(login)
            .await?
            .ok_or_else(|| DomainError::NotFound(Resource::User).into())
    }

    pub(super) async fn find_user(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(Resource::User).into())
    }
}
