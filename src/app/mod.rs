//! Viewer-Seite: Owner-Typ und Canvas-Stellvertreter.

pub mod canvas;
pub mod viewer;

pub use canvas::Canvas;
pub use viewer::{Viewer, ViewerHandle, ViewerWeak};
