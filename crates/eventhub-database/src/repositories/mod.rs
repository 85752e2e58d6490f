//! PostgreSQL repository implementations.

pub mod account;
pub mod event;

pub use account::AccountRepository;
pub use event::EventRepository;
