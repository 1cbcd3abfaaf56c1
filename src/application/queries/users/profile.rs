use super::UserQueryService;
use crate::application::{
    dto::{Principal, UserDto},
    error::ApplicationResult,
};

impl UserQueryService {
    /// Fresh view of the signed-in user.
    pub async fn get_profile(&self, principal: &Principal) -> ApplicationResult<UserDto> {
        let user = self.find_user(principal.id()).await?;
        Ok(user.into())
    }
}
