//! Dual-typisierte Listen-Argumente: Layer-Handle oder Index.
//!
//! `swap` und `reorder` akzeptieren beides; statt Laufzeit-Typpruefung wird
//! das als Tagged Union modelliert und ueber `LayerList::resolve_index`
//! in genau einer Funktion aufgeloest.

use crate::core::LayerHandle;

/// Referenz auf ein Listenelement, per Position oder per Identitaet.
#[derive(Debug, Clone)]
pub enum LayerRef {
    /// Positionsindex; negativ zaehlt von hinten (Python-Konvention)
    Index(isize),
    /// Identitaetsreferenz auf einen enthaltenen Layer
    Handle(LayerHandle),
}

impl From<isize> for LayerRef {
    fn from(index: isize) -> Self {
        LayerRef::Index(index)
    }
}

impl From<i32> for LayerRef {
    fn from(index: i32) -> Self {
        LayerRef::Index(index as isize)
    }
}

impl From<usize> for LayerRef {
    fn from(index: usize) -> Self {
        LayerRef::Index(index as isize)
    }
}

impl From<LayerHandle> for LayerRef {
    fn from(handle: LayerHandle) -> Self {
        LayerRef::Handle(handle)
    }
}

impl From<&LayerHandle> for LayerRef {
    fn from(handle: &LayerHandle) -> Self {
        LayerRef::Handle(handle.clone())
    }
}
