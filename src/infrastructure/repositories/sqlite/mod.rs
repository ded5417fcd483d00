pub mod connection;
pub mod error;
pub mod model;
pub mod repository;
pub mod schema;
