//! Runtime services for the Vitrine UI-support toolkit.
//!
//! The heart of the crate is the [`messenger`] module: a typed
//! publish/subscribe bus that lets independent components exchange messages
//! without holding references to each other. Around it sit the [`host`]
//! contracts a UI host implements (window management, dialogs, change
//! notification) and the [`service`] locator that wires everything together
//! for an application session.

pub mod host;
pub mod messenger;
pub mod service;
