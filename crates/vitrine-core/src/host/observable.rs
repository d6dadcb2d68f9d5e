//! Change-notification contract.
//!
//! The toolkit does not implement property-change plumbing. Hosts that have
//! one expose it through `ChangeNotifier`; hosts that prefer to relay the
//! event over the messenger use `vitrine_types::property::PropertyChanged`
//! as the message type instead.

use vitrine_types::messenger::RecipientId;

/// Per-object "property changed" event sink provided by the host.
pub trait ChangeNotifier: Send + Sync {
    /// Announce that `property` of the component identified by `source` has
    /// a new value.
    fn property_changed(&self, source: RecipientId, property: &str);
}
