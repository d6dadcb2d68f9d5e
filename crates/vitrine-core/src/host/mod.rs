//! Contracts implemented by the UI host.
//!
//! Vitrine ships no rendering backend. The traits here are the seams where
//! a host application plugs in its UI capabilities:
//! - `window` -- `WindowHost` for showing and closing named windows
//! - `dialog` -- `DialogHost` for message boxes
//! - `observable` -- `ChangeNotifier` for property-change events

pub mod dialog;
pub mod observable;
pub mod window;

pub use dialog::DialogHost;
pub use observable::ChangeNotifier;
pub use window::{ViewModel, WindowError, WindowHost};
