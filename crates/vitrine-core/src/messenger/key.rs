//! Registry key for messenger subscriptions.

use vitrine_types::messenger::{RecipientId, Token};

/// The `(recipient, token)` pair a subscription is stored under.
///
/// Equality contract: recipients compare by identity (two freshly minted
/// ids are never equal) and tokens compare by value, so one component can
/// hold one registration per distinct token text, and two components never
/// collide even under the same token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationKey {
    recipient: RecipientId,
    token: Token,
}

impl RegistrationKey {
    pub(crate) fn new(recipient: RecipientId, token: Token) -> Self {
        Self { recipient, token }
    }

    /// The subscribing component's identity.
    pub fn recipient(&self) -> RecipientId {
        self.recipient
    }

    /// The routing token.
    pub fn token(&self) -> &Token {
        &self.token
    }
}
