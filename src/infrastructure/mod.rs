pub mod database;
pub mod repositories;
pub mod scheduler;
pub mod security;
pub mod time;
