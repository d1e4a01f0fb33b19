//! Core-Domaenentypen: Layer, Handles, Liste, Events, Fehler.

pub mod error;
pub mod events;
pub mod layer;
pub mod layer_list;
pub mod layer_ref;

pub use error::LayerListError;
pub use events::{CallbackId, CallbackList, LayerListEvents};
pub use layer::{ImageLayer, Layer, LayerBase, LayerHandle, ShapeLayer};
pub use layer_list::LayerList;
pub use layer_ref::LayerRef;
