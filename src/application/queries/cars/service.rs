use crate::domain::car::CarRepository;
use std::sync::Arc;

pub struct CarQueryService {
    pub(super) car_repo: Arc<dyn CarRepository>,
}

impl CarQueryService {
    pub fn new(car_repo: Arc<dyn CarRepository>) -> Self {
        Self { car_repo }
    }
}
