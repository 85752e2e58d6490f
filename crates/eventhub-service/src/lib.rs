//! # eventhub-service
//!
//! Business logic service layer for EventHub. Services orchestrate the
//! stores and the password hasher to implement application use cases.
//!
//! Services follow constructor injection: every dependency is provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod event;

pub use account::AccountService;
pub use context::RequestContext;
pub use event::{EventService, EventValidator, FieldError};
