pub mod di;
pub mod export;
pub mod http;
pub mod opener;
pub mod repositories;
