//! Event validation and lifecycle.

pub mod service;
pub mod validator;

pub use service::EventService;
pub use validator::{EventValidator, FieldError};
