pub mod client;
pub mod common;
pub mod error;
pub mod objects;

pub use client::{Client, ClientConfig};
pub use common::{ApiErrorDetails, ListQuery, PaginatedResponse};
pub use error::ApiError;
pub use objects::ObjectEndpoint;
