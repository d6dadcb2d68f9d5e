//! Typed publish/subscribe messaging between decoupled components.
//!
//! This module provides the in-process message bus of the toolkit:
//! - `bus` -- `Messenger` with typed, token-routed fan-out and a
//!   fire-and-forget variant
//! - `key` -- `RegistrationKey`, the `(recipient, token)` pair a
//!   subscription is stored under

pub mod bus;
pub mod key;

pub use bus::{Messenger, MessengerError};
pub use key::RegistrationKey;
