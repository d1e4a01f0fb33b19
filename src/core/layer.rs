//! Layer-Contract und geteilte Layer-Handles.
//!
//! Ein Layer ist eine visuelle Inhaltseinheit des Viewers. Die Liste besitzt
//! Layer nicht, sondern teilt sie: zwei seiner Felder (`viewer`, `order`)
//! werden als Nebeneffekt von Membership-Aenderungen durch die Liste gesetzt,
//! nie direkt vom Layer selbst.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use glam::Vec2;

use crate::app::{ViewerHandle, ViewerWeak};

/// Capability-Contract fuer alle Layer-Typen.
///
/// Objekt-sicher, damit heterogene Layer in einer Liste gehalten werden
/// koennen. `viewer` und `order` sind die beiden von der Liste verwalteten
/// Felder.
pub trait Layer {
    /// Anzeigename des Layers
    fn name(&self) -> &str;
    /// Kurzbezeichner der Layer-Art (fuer Debug-Ausgaben)
    fn kind(&self) -> &'static str;
    /// Aufgeloester Parent-Viewer; `None` wenn detached oder Viewer zerstoert
    fn viewer(&self) -> Option<ViewerHandle>;
    /// Setzt die (schwache) Viewer-Referenz; `None` = detach
    fn set_viewer(&mut self, viewer: Option<ViewerWeak>);
    /// Interner Draw-Order-Wert (Position i ↦ -i)
    fn order(&self) -> i64;
    /// Setzt den Draw-Order-Wert
    fn set_order(&mut self, order: i64);
}

/// Gemeinsamer Zustand aller konkreten Layer-Typen.
#[derive(Default)]
pub struct LayerBase {
    name: String,
    viewer: Option<ViewerWeak>,
    order: i64,
}

impl LayerBase {
    /// Erstellt den Basiszustand mit Name, ohne Viewer, Order 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            viewer: None,
            order: 0,
        }
    }

    /// Anzeigename
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loest die schwache Viewer-Referenz auf (abgelaufen ⇒ `None`).
    pub fn viewer(&self) -> Option<ViewerHandle> {
        self.viewer.as_ref().and_then(std::rc::Weak::upgrade)
    }

    /// Setzt die Viewer-Referenz.
    pub fn set_viewer(&mut self, viewer: Option<ViewerWeak>) {
        self.viewer = viewer;
    }

    /// Draw-Order-Wert
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Setzt den Draw-Order-Wert.
    pub fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

/// Geteiltes Handle auf einen Layer.
///
/// Clone ist billig (Rc); Gleichheit und Hash sind identitaetsbasiert
/// (Pointer), damit Handles als Map-/Set-Keys und als Ziel von
/// `remove`/`find_index` funktionieren. Zwei inhaltsgleiche Layer sind
/// damit ausdruecklich *nicht* gleich.
#[derive(Clone)]
pub struct LayerHandle(Rc<RefCell<dyn Layer>>);

impl LayerHandle {
    /// Verpackt einen konkreten Layer in ein geteiltes Handle.
    pub fn new(layer: impl Layer + 'static) -> Self {
        Self(Rc::new(RefCell::new(layer)))
    }

    /// Anzeigename (Kopie, da das Handle nur geborgt wird)
    pub fn name(&self) -> String {
        self.0.borrow().name().to_owned()
    }

    /// Layer-Art
    pub fn kind(&self) -> &'static str {
        self.0.borrow().kind()
    }

    /// Aufgeloester Parent-Viewer
    pub fn viewer(&self) -> Option<ViewerHandle> {
        self.0.borrow().viewer()
    }

    /// Setzt die Viewer-Referenz des Layers.
    pub fn set_viewer(&self, viewer: Option<ViewerWeak>) {
        self.0.borrow_mut().set_viewer(viewer);
    }

    /// Draw-Order-Wert des Layers
    pub fn order(&self) -> i64 {
        self.0.borrow().order()
    }

    /// Setzt den Draw-Order-Wert des Layers.
    pub fn set_order(&self, order: i64) {
        self.0.borrow_mut().set_order(order);
    }

    /// Identitaetsvergleich (gleiches Rc-Allokat)
    pub fn ptr_eq(&self, other: &LayerHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Zugriff auf den konkreten Layer (fuer Inhalts-Operationen der Hosts)
    pub fn inner(&self) -> &Rc<RefCell<dyn Layer>> {
        &self.0
    }
}

impl PartialEq for LayerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for LayerHandle {}

impl Hash for LayerHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Fat-Pointer auf Datenanteil reduzieren, dann als Adresse hashen
        (Rc::as_ptr(&self.0) as *const () as usize).hash(state);
    }
}

impl fmt::Debug for LayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer = self.0.borrow();
        write!(f, "<{} {:?}>", layer.kind(), layer.name())
    }
}

/// Polygon-/Punkt-Layer fuer 2D-Shapes.
pub struct ShapeLayer {
    base: LayerBase,
    /// Stuetzpunkte in Weltkoordinaten
    pub points: Vec<Vec2>,
    /// RGBA-Fuellfarbe
    pub color: [f32; 4],
}

impl ShapeLayer {
    /// Erstellt einen Shape-Layer mit Stuetzpunkten und Farbe.
    pub fn new(name: impl Into<String>, points: Vec<Vec2>, color: [f32; 4]) -> Self {
        Self {
            base: LayerBase::new(name),
            points,
            color,
        }
    }

    /// Verpackt den Layer direkt in ein Handle.
    pub fn into_handle(self) -> LayerHandle {
        LayerHandle::new(self)
    }
}

impl Layer for ShapeLayer {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> &'static str {
        "shape"
    }

    fn viewer(&self) -> Option<ViewerHandle> {
        self.base.viewer()
    }

    fn set_viewer(&mut self, viewer: Option<ViewerWeak>) {
        self.base.set_viewer(viewer);
    }

    fn order(&self) -> i64 {
        self.base.order()
    }

    fn set_order(&mut self, order: i64) {
        self.base.set_order(order);
    }
}

/// Rasterbild-Layer (nur Extent und Opacity; Pixeldaten liegen beim Host).
pub struct ImageLayer {
    base: LayerBase,
    /// Ausdehnung in Weltkoordinaten
    pub extent: Vec2,
    /// Deckkraft 0.0..=1.0
    pub opacity: f32,
}

impl ImageLayer {
    /// Erstellt einen Bild-Layer mit voller Deckkraft.
    pub fn new(name: impl Into<String>, extent: Vec2) -> Self {
        Self {
            base: LayerBase::new(name),
            extent,
            opacity: crate::shared::options::IMAGE_OPACITY_DEFAULT,
        }
    }

    /// Verpackt den Layer direkt in ein Handle.
    pub fn into_handle(self) -> LayerHandle {
        LayerHandle::new(self)
    }
}

impl Layer for ImageLayer {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> &'static str {
        "image"
    }

    fn viewer(&self) -> Option<ViewerHandle> {
        self.base.viewer()
    }

    fn set_viewer(&mut self, viewer: Option<ViewerWeak>) {
        self.base.set_viewer(viewer);
    }

    fn order(&self) -> i64 {
        self.base.order()
    }

    fn set_order(&mut self, order: i64) {
        self.base.set_order(order);
    }
}
