pub mod postgres;
pub mod sqlite;

mod row;
