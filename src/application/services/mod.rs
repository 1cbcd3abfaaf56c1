// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{cars::CarCommandService, users::UserCommandService},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{cars::CarQueryService, users::UserQueryService},
    },
    domain::{car::CarRepository, user::UserRepository},
};

mod principal;

pub use principal::{BEARER_PREFIX, extract_bearer};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub car_commands: Arc<CarCommandService>,
    pub car_queries: Arc<CarQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        car_repo: Arc<dyn CarRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let car_commands = Arc::new(CarCommandService::new(
            Arc::clone(&car_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let car_queries = Arc::new(CarQueryService::new(Arc::clone(&car_repo)));

        Self {
            user_commands,
            user_queries,
            car_commands,
            car_queries,
            token_manager,
        }
    }
}
