use super::CarQueryService;
use crate::{
    application::{
        dto::{CarDto, PaginatedResult, Principal},
        error::ApplicationResult,
    },
    domain::pagination::{DEFAULT_PAGE_SIZE, PageRequest},
};

#[derive(Debug, Clone, Copy)]
pub struct ListCarsQuery {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for ListCarsQuery {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CarQueryService {
    /// The principal's cars, most used first; ties broken by model.
    pub async fn list_cars(
        &self,
        principal: &Principal,
        query: ListCarsQuery,
    ) -> ApplicationResult<PaginatedResult<CarDto>> {
        let request = PageRequest::new(query.page_number, query.page_size);
        let page = self.car_repo.list_by_owner(principal.id(), request).await?;
        Ok(PaginatedResult::from_page(page, request))
    }
}
