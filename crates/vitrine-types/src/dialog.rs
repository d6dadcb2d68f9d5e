//! Dialog domain types.

use serde::{Deserialize, Serialize};

/// Severity of a message shown to the user through the dialog host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Informational notice.
    Info,
    /// Something unexpected that the user may want to act on.
    Warning,
    /// An operation failed.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_serde() {
        let json = serde_json::to_string(&MessageKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let parsed: MessageKind = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, MessageKind::Error);
    }
}
