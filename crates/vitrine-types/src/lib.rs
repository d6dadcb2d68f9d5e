//! Shared domain types for Vitrine.
//!
//! This crate contains the core domain types used across the Vitrine toolkit:
//! messenger identities (recipient, token), window modality, dialog message
//! kinds, and the property-change payload.
//!
//! Zero infrastructure dependencies -- only serde and uuid.

pub mod dialog;
pub mod messenger;
pub mod property;
pub mod window;
