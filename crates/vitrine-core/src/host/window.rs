//! Window management contract.

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;
use vitrine_types::window::Modality;

/// Opaque view-model handle attached to a window as its data context.
///
/// The toolkit never inspects it; the host passes it through to the view
/// layer unchanged.
pub type ViewModel = Arc<dyn Any + Send + Sync>;

/// Errors reported by a window host.
#[derive(Debug, Error)]
pub enum WindowError {
    /// A window with this name is already open.
    #[error("window '{0}' is already open")]
    AlreadyOpen(String),

    /// The name does not resolve to a known view.
    #[error("'{0}' is not the name of a view")]
    UnknownView(String),

    /// No open window has this name.
    #[error("window '{0}' is not open or does not exist")]
    UnknownWindow(String),

    /// No open window has this name to act as owner.
    #[error("owner window '{0}' does not exist")]
    UnknownOwner(String),
}

/// Window management capability provided by the UI host.
///
/// Implementations resolve `name` to a view in whatever way their view
/// layer supports and attach the supplied view model as the data context.
/// Window names are unique among open windows.
pub trait WindowHost: Send + Sync {
    /// Show the named window with no owner.
    fn show_window(
        &self,
        modality: Modality,
        name: &str,
        view_model: ViewModel,
    ) -> Result<(), WindowError>;

    /// Show the named window owned by the open window named `owner`.
    fn show_window_owned(
        &self,
        modality: Modality,
        name: &str,
        owner: &str,
        view_model: ViewModel,
    ) -> Result<(), WindowError>;

    /// Show the named window owned by whichever window is currently active.
    fn show_window_with_active_owner(
        &self,
        modality: Modality,
        name: &str,
        view_model: ViewModel,
    ) -> Result<(), WindowError>;

    /// Close the named window.
    fn close_window(&self, name: &str) -> Result<(), WindowError>;

    /// Whether a window with this name is currently open.
    fn window_exists(&self, name: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_error_display() {
        let err = WindowError::AlreadyOpen("SecondWindow".to_string());
        assert_eq!(err.to_string(), "window 'SecondWindow' is already open");

        let err = WindowError::UnknownOwner("MainWindow".to_string());
        assert!(err.to_string().contains("MainWindow"));
    }
}
