//! Immutable service aggregate handed to application components.

use std::sync::Arc;

use crate::host::{DialogHost, WindowHost};
use crate::messenger::Messenger;

/// Bundle of the toolkit services, wired once at application startup.
///
/// Construction-time wiring only; the locator has no behavior of its own.
/// Cloning is cheap and every clone shares the same messenger registry and
/// host implementations. There is no hidden process-wide instance: the host
/// constructs one locator per application session and passes it to every
/// component that needs the services.
#[derive(Clone)]
pub struct ServiceLocator {
    windows: Arc<dyn WindowHost>,
    dialogs: Arc<dyn DialogHost>,
    messenger: Messenger,
}

impl ServiceLocator {
    /// Wire the services together.
    pub fn new(
        windows: Arc<dyn WindowHost>,
        dialogs: Arc<dyn DialogHost>,
        messenger: Messenger,
    ) -> Self {
        Self {
            windows,
            dialogs,
            messenger,
        }
    }

    /// Window management service.
    pub fn windows(&self) -> &dyn WindowHost {
        self.windows.as_ref()
    }

    /// User dialog service.
    pub fn dialogs(&self) -> &dyn DialogHost {
        self.dialogs.as_ref()
    }

    /// Message bus shared by every component of this session.
    pub fn messenger(&self) -> &Messenger {
        &self.messenger
    }
}

impl std::fmt::Debug for ServiceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceLocator")
            .field("registrations", &self.messenger.registration_count())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ViewModel, WindowError};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use vitrine_types::dialog::MessageKind;
    use vitrine_types::messenger::{RecipientId, Token};
    use vitrine_types::window::Modality;

    /// Window host double tracking open window names only.
    #[derive(Default)]
    struct StubWindowHost {
        open: Mutex<HashSet<String>>,
    }

    impl WindowHost for StubWindowHost {
        fn show_window(
            &self,
            _modality: Modality,
            name: &str,
            _view_model: ViewModel,
        ) -> Result<(), WindowError> {
            let mut open = self.open.lock().unwrap();
            if !open.insert(name.to_string()) {
                return Err(WindowError::AlreadyOpen(name.to_string()));
            }
            Ok(())
        }

        fn show_window_owned(
            &self,
            modality: Modality,
            name: &str,
            owner: &str,
            view_model: ViewModel,
        ) -> Result<(), WindowError> {
            if !self.window_exists(owner) {
                return Err(WindowError::UnknownOwner(owner.to_string()));
            }
            self.show_window(modality, name, view_model)
        }

        fn show_window_with_active_owner(
            &self,
            modality: Modality,
            name: &str,
            view_model: ViewModel,
        ) -> Result<(), WindowError> {
            self.show_window(modality, name, view_model)
        }

        fn close_window(&self, name: &str) -> Result<(), WindowError> {
            if self.open.lock().unwrap().remove(name) {
                Ok(())
            } else {
                Err(WindowError::UnknownWindow(name.to_string()))
            }
        }

        fn window_exists(&self, name: &str) -> bool {
            self.open.lock().unwrap().contains(name)
        }
    }

    /// Dialog host double recording shown messages.
    #[derive(Default)]
    struct RecordingDialogHost {
        shown: Mutex<Vec<(MessageKind, String, String)>>,
    }

    impl DialogHost for RecordingDialogHost {
        fn show_message(&self, kind: MessageKind, text: &str, caption: &str) {
            self.shown
                .lock()
                .unwrap()
                .push((kind, text.to_string(), caption.to_string()));
        }
    }

    fn make_locator() -> ServiceLocator {
        ServiceLocator::new(
            Arc::new(StubWindowHost::default()),
            Arc::new(RecordingDialogHost::default()),
            Messenger::new(),
        )
    }

    #[test]
    fn clones_share_the_same_messenger() {
        let services = make_locator();
        let clone = services.clone();
        let recipient = RecipientId::fresh();

        clone
            .messenger()
            .register::<String>(recipient, Token::new("token1"), |_| {})
            .unwrap();

        assert!(services
            .messenger()
            .is_registered(recipient, &Token::new("token1")));
    }

    #[test]
    fn window_flow_through_locator() {
        let services = make_locator();
        let vm: ViewModel = Arc::new(());

        assert!(!services.windows().window_exists("SecondWindow"));
        services
            .windows()
            .show_window(Modality::Parallel, "SecondWindow", Arc::clone(&vm))
            .unwrap();
        assert!(services.windows().window_exists("SecondWindow"));

        // A second window may not reuse the name of an open one.
        assert!(matches!(
            services
                .windows()
                .show_window(Modality::Parallel, "SecondWindow", Arc::clone(&vm)),
            Err(WindowError::AlreadyOpen(_))
        ));

        // Owned windows need a live owner.
        assert!(matches!(
            services
                .windows()
                .show_window_owned(Modality::Modal, "Third", "NoSuchOwner", vm),
            Err(WindowError::UnknownOwner(_))
        ));

        services.windows().close_window("SecondWindow").unwrap();
        assert!(!services.windows().window_exists("SecondWindow"));
    }

    #[test]
    fn undelivered_send_surfaces_dialog_warning() {
        // The pattern of a producer component: try to reach a subscriber,
        // fall back to a dialog when nobody is listening.
        let dialogs = Arc::new(RecordingDialogHost::default());
        let services = ServiceLocator::new(
            Arc::new(StubWindowHost::default()),
            Arc::clone(&dialogs) as Arc<dyn DialogHost>,
            Messenger::new(),
        );

        let delivered = services
            .messenger()
            .send(&"message delivered".to_string(), &Token::new("token1"))
            .unwrap();
        if !delivered {
            services.dialogs().show_message(
                MessageKind::Warning,
                "No subscriber registered for this message.",
                "Message not delivered",
            );
        }

        let shown = dialogs.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, MessageKind::Warning);
        assert_eq!(shown[0].2, "Message not delivered");
    }

    #[test]
    fn debug_impl() {
        let services = make_locator();
        let debug = format!("{services:?}");
        assert!(debug.contains("ServiceLocator"));
        assert!(debug.contains("registrations"));
    }
}
