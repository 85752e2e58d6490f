//! # eventhub-database
//!
//! PostgreSQL connection management, the store traits the service layer
//! programs against, and their two implementations: sqlx repositories for
//! production and in-memory stores for single-node runs and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{MemoryAccountStore, MemoryEventStore};
pub use repositories::{AccountRepository, EventRepository};
pub use store::{AccountStore, EventStore};
