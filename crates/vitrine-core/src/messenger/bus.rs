//! Typed publish/subscribe message bus with token routing.
//!
//! The `Messenger` is the decoupling hub of the toolkit. Subscribers declare
//! a message type and a routing token when they register; publishers send a
//! message value plus a token; delivery happens only where the token matches
//! and the registered message type equals the sent type exactly. Matching is
//! nominal, per `TypeId` -- no coercions, no wrapper types.

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::debug;
use vitrine_types::messenger::{RecipientId, Token};

use super::key::RegistrationKey;

/// Shared handler storage: the concrete type hidden behind the erased
/// registration entry, recovered by downcast at dispatch time.
type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Errors that can occur during messenger operations.
///
/// Only missing identities are errors. "Nobody subscribed" and "key already
/// registered" are ordinary `false` results, not failures.
#[derive(Debug, Error)]
pub enum MessengerError {
    /// The recipient id was the nil sentinel.
    #[error("recipient id is nil")]
    NilRecipient,

    /// The routing token was empty.
    #[error("routing token is empty")]
    EmptyToken,

    /// `begin_send` was called outside a tokio runtime context.
    #[error("begin_send requires a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// One stored subscription: the erased handler plus its message type tag.
struct Registration {
    /// `TypeId` of the message type the handler was registered with.
    /// Compared for exact equality at dispatch.
    message_type: TypeId,
    /// The erased `Handler<T>`.
    handler: Box<dyn Any + Send + Sync>,
}

/// Typed publish/subscribe bus keyed by `(recipient, token)` pairs.
///
/// Cloning the messenger clones a handle to the same registry, so one bus
/// is constructed per application session and handed to every component
/// that needs it. All operations are safe to call from any thread without
/// external locking; the registry is sharded, so unrelated keys never
/// serialize on a common lock.
#[derive(Clone)]
pub struct Messenger {
    registry: Arc<DashMap<RegistrationKey, Registration>>,
}

impl Messenger {
    /// Create an empty messenger.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(DashMap::new()),
        }
    }

    /// Subscribe `recipient` to messages of type `T` routed under `token`.
    ///
    /// Returns `Ok(true)` when the registration was inserted and `Ok(false)`
    /// when the `(recipient, token)` pair already holds one; the earlier
    /// handler stays in place, and the caller must
    /// [`unregister`](Self::unregister) before registering again.
    ///
    /// # Errors
    ///
    /// [`MessengerError::NilRecipient`] or [`MessengerError::EmptyToken`]
    /// when either identity is missing.
    pub fn register<T: 'static>(
        &self,
        recipient: RecipientId,
        token: Token,
        handler: impl Fn(&T) + Send + Sync + 'static,
    ) -> Result<bool, MessengerError> {
        validate(recipient, &token)?;
        // The entry API locks the shard, making the uniqueness check and
        // the insert one atomic step: two racing registrations under the
        // same key cannot both win.
        match self.registry.entry(RegistrationKey::new(recipient, token)) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                let handler: Handler<T> = Arc::new(handler);
                slot.insert(Registration {
                    message_type: TypeId::of::<T>(),
                    handler: Box::new(handler),
                });
                debug!(
                    %recipient,
                    message_type = std::any::type_name::<T>(),
                    "registered messenger handler"
                );
                Ok(true)
            }
        }
    }

    /// Remove the registration at `(recipient, token)`.
    ///
    /// Returns `Ok(true)` iff an entry was removed. Removal is atomic, but
    /// delivery ordering against a concurrent [`send`](Self::send) is
    /// best-effort: a send that collected the handler before the removal
    /// landed may still invoke it.
    ///
    /// # Errors
    ///
    /// [`MessengerError::NilRecipient`] or [`MessengerError::EmptyToken`]
    /// when either identity is missing.
    pub fn unregister(
        &self,
        recipient: RecipientId,
        token: &Token,
    ) -> Result<bool, MessengerError> {
        validate(recipient, token)?;
        let key = RegistrationKey::new(recipient, token.clone());
        let removed = self.registry.remove(&key).is_some();
        if removed {
            debug!(%recipient, %token, "unregistered messenger handler");
        }
        Ok(removed)
    }

    /// Deliver `message` synchronously to every handler registered under
    /// `token` with exactly message type `T`.
    ///
    /// Handlers run on the calling thread, in unspecified order. Returns
    /// `Ok(true)` iff at least one handler was invoked; zero matches is the
    /// normal "nobody subscribed yet" outcome. A panicking handler
    /// propagates to the caller unmodified, and handlers not yet invoked in
    /// that call do not run.
    ///
    /// # Errors
    ///
    /// [`MessengerError::EmptyToken`] when the token is missing.
    pub fn send<T: 'static>(&self, message: &T, token: &Token) -> Result<bool, MessengerError> {
        if token.is_empty() {
            return Err(MessengerError::EmptyToken);
        }
        // Matching handlers are collected before any is invoked: no shard
        // guard is held across handler code, so a handler may re-enter the
        // bus (register, unregister, send) freely.
        let matched: Vec<Handler<T>> = self
            .registry
            .iter()
            .filter(|entry| entry.key().token() == token)
            .filter(|entry| entry.value().message_type == TypeId::of::<T>())
            .filter_map(|entry| entry.value().handler.downcast_ref::<Handler<T>>().cloned())
            .collect();
        debug!(
            %token,
            message_type = std::any::type_name::<T>(),
            matched = matched.len(),
            "messenger fan-out"
        );
        for handler in &matched {
            handler(message);
        }
        Ok(!matched.is_empty())
    }

    /// Fire-and-forget variant of [`send`](Self::send).
    ///
    /// Arguments are validated synchronously; delivery then runs on the
    /// tokio blocking worker pool, so the caller never blocks on subscriber
    /// code and observes neither the fan-out outcome nor handler panics.
    /// There is no back-pressure and no completion notification.
    ///
    /// # Errors
    ///
    /// [`MessengerError::EmptyToken`] when the token is missing, or
    /// [`MessengerError::NoRuntime`] when called outside a tokio runtime.
    pub fn begin_send<T: Send + 'static>(
        &self,
        message: T,
        token: Token,
    ) -> Result<(), MessengerError> {
        if token.is_empty() {
            return Err(MessengerError::EmptyToken);
        }
        let handle = Handle::try_current()?;
        let bus = self.clone();
        // The join handle is dropped: delivery outcome and handler panics
        // stay on the worker.
        let _ = handle.spawn_blocking(move || {
            let _ = bus.send(&message, &token);
        });
        Ok(())
    }

    /// Whether `(recipient, token)` currently holds a registration.
    pub fn is_registered(&self, recipient: RecipientId, token: &Token) -> bool {
        self.registry
            .contains_key(&RegistrationKey::new(recipient, token.clone()))
    }

    /// Number of live registrations across all tokens.
    pub fn registration_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for Messenger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messenger")
            .field("registrations", &self.registry.len())
            .finish()
    }
}

fn validate(recipient: RecipientId, token: &Token) -> Result<(), MessengerError> {
    if recipient.is_nil() {
        return Err(MessengerError::NilRecipient);
    }
    if token.is_empty() {
        return Err(MessengerError::EmptyToken);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
