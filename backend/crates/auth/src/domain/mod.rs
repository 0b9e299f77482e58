pub mod repository;
pub mod user;
