//! Immediate-mode GUI helpers for parameter trees.
//!
//! [`GuiContext`] owns the per-pass state (open window, tree depth, label
//! scopes) and draws through a [`UiBackend`]. Window placement that must
//! survive between frames lives in the caller's [`GuiSettings`].

mod backend;
mod context;
#[cfg(feature = "egui")]
mod egui_backend;
pub mod headless;
mod names;
mod settings;
mod widget;

pub use backend::{TextureId, UiBackend, WindowFrame, WindowPlacement};
pub use context::GuiContext;
#[cfg(feature = "egui")]
pub use egui_backend::EguiBackend;
pub use names::NameScopes;
pub use settings::{Bounds, GuiSettings};
pub use widget::Widget;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuiError {
    #[error("no name scope is open")]
    NoOpenScope,
    #[error("{open} name scope(s) still open at end of frame")]
    UnbalancedScopes { open: usize },
}
