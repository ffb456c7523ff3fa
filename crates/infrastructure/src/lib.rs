pub mod audit;
pub mod database;
pub mod repositories;
