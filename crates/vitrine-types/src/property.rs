//! Property-change notification payload.
//!
//! Vitrine does not implement change-notification mechanics; hosts that
//! relay "property changed" events over the messenger bus use this payload
//! as the message type.

use serde::{Deserialize, Serialize};

use crate::messenger::RecipientId;

/// Notification that a named property of `source` has a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChanged {
    /// Identity of the component whose property changed.
    pub source: RecipientId,
    /// Name of the changed property.
    pub property: String,
}

impl PropertyChanged {
    /// Create a notification for `property` of `source`.
    pub fn new(source: RecipientId, property: impl Into<String>) -> Self {
        Self {
            source,
            property: property.into(),
        }
    }
}
