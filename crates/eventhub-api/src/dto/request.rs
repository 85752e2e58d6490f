//! Request DTOs.
//!
//! Event bodies deserialize straight into [`eventhub_entity::event::EventDto`];
//! only shapes without a domain counterpart live here.

use serde::{Deserialize, Serialize};

/// Account registration request.
///
/// Carries no roles: self-registered accounts are always `USER`, and any
/// extra fields a client sends are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAccountRequest {
    /// Login email.
    pub email: String,
    /// Raw password, hashed before it is stored.
    pub password: String,
}
