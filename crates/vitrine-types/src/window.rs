//! Window management domain types.

use serde::{Deserialize, Serialize};

/// How a window is shown relative to the rest of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Blocks interaction with the rest of the UI until the window closes.
    Modal,
    /// Opens alongside the other windows without blocking them.
    Parallel,
}
