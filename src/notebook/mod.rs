//! Notebook Presentation
//!
//! - **theme**: page copy (title, messages, placeholders)
//! - **actions**: the `save` handler and the pure `render` function
//! - **view**: the rendered notebook, as HTML or terminal text

pub mod actions;
pub mod theme;
pub mod view;

pub use actions::{render, save, SaveOutcome};
pub use theme::Theme;
pub use view::{Notice, NotebookView, PageView, Pages};
