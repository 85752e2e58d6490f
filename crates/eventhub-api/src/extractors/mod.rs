//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{CurrentAccount, MaybeAccount};
pub use pagination::PaginationParams;
