//! Layer-Viewer Library.
//!
//! Geordnete, beobachtbare Layer-Sammlung fuer einen interaktiven Viewer:
//! Listen-Semantik (Index-Zugriff, Einfuegen, Entfernen, Umordnen) plus
//! event-getriebene Synchronisation von Draw-Order, Viewer-Attachment und
//! Canvas-Refresh. Single-threaded; Events laufen synchron und inline.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{Canvas, Viewer, ViewerHandle, ViewerWeak};
pub use core::{
    CallbackId, CallbackList, ImageLayer, Layer, LayerBase, LayerHandle, LayerList,
    LayerListError, LayerListEvents, LayerRef, ShapeLayer,
};
pub use shared::ViewerOptions;
