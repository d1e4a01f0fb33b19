//! Der Viewer als Owner einer Layer-Liste.
//!
//! Viewer leben in `Rc<RefCell<_>>`; die Layer-Liste und alle Layer halten
//! sie nur als `Weak`. Ein zerstoerter Viewer degradiert damit ueberall zu
//! einem Absent-Owner-Zustand statt zu einem Fehler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::app::Canvas;
use crate::core::LayerHandle;
use crate::shared::ViewerOptions;

/// Starkes, geteiltes Viewer-Handle.
pub type ViewerHandle = Rc<RefCell<Viewer>>;
/// Nicht-besitzende Viewer-Referenz (Liste, Layer).
pub type ViewerWeak = Weak<RefCell<Viewer>>;

/// Parent-Viewer mit Canvas.
pub struct Viewer {
    /// Fenstertitel (nur Anzeige/Diagnose)
    pub title: String,
    /// Canvas mit Draw-Order-Registry
    pub canvas: Canvas,
}

impl Viewer {
    /// Erstellt einen Viewer mit Default-Optionen.
    pub fn new(title: impl Into<String>) -> ViewerHandle {
        Self::with_options(title, &ViewerOptions::default())
    }

    /// Erstellt einen Viewer mit expliziten Optionen.
    pub fn with_options(title: impl Into<String>, options: &ViewerOptions) -> ViewerHandle {
        Rc::new(RefCell::new(Self {
            title: title.into(),
            canvas: Canvas::new(options.canvas_clear_color),
        }))
    }

    /// Change-Hook der Layer-Liste; laeuft bei item-added und item-removed
    /// mit dem betroffenen Layer, nach der internen Synchronisation.
    ///
    /// Ein aufgenommener Layer traegt zu diesem Zeitpunkt bereits den
    /// Viewer und seinen Order-Wert; ein entfernter ist schon detacht.
    /// Daran unterscheidet der Hook die beiden Faelle.
    pub fn on_layers_change(&mut self, layer: &LayerHandle) {
        if layer.viewer().is_some() {
            self.canvas.draw_order.insert(layer.clone(), layer.order());
        } else {
            self.canvas.draw_order.shift_remove(layer);
        }
        self.canvas.update();
    }
}
