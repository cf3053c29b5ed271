//! API client for the video catalog backend
//!
//! The backend is an external service; everything here is a thin
//! asynchronous boundary around its HTTP endpoints.

pub mod catalog;

pub use catalog::{ApiError, CatalogClient};
