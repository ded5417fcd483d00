pub mod bookmark_service;
pub mod bookmark_service_impl;
