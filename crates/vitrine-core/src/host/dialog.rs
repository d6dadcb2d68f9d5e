//! User dialog contract.

use vitrine_types::dialog::MessageKind;

/// Message-box capability provided by the UI host.
pub trait DialogHost: Send + Sync {
    /// Show `text` to the user in a message box titled `caption`.
    fn show_message(&self, kind: MessageKind, text: &str, caption: &str);
}
