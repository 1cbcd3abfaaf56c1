use super::UserQueryService;
use crate::{
    application::{
        dto::{PaginatedResult, UserDto},
        error::ApplicationResult,
    },
    domain::pagination::{DEFAULT_PAGE_SIZE, PageRequest},
};

#[derive(Debug, Clone, Copy)]
pub struct ListUsersQuery {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UserQueryService {
    /// Users ranked by total usage, heaviest first; ties broken by login.
    pub async fn list_users(
        &self,
        query: ListUsersQuery,
    ) -> ApplicationResult<PaginatedResult<UserDto>> {
        let request = PageRequest::new(query.page_number, query.page_size);
        let page = self.user_repo.list_ranked(request).await?;
        Ok(PaginatedResult::from_page(page, request))
    }
}
