//! Event domain entities.

pub mod dto;
pub mod model;
pub mod status;

pub use dto::EventDto;
pub use model::Event;
pub use status::EventStatus;
