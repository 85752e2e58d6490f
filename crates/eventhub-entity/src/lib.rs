//! # eventhub-entity
//!
//! Domain entity models for EventHub. Every struct in this crate
//! represents a database table row or a transient input shape. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod account;
pub mod event;
