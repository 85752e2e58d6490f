//! Route handlers organized by domain.

pub mod account;
pub mod event;
pub mod health;
