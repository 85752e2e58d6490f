//! Account registration and lookup.

pub mod service;

pub use service::AccountService;
