//! Die geordnete, beobachtbare Layer-Liste des Viewers.
//!
//! Einfuegereihenfolge = Draw-Order. Jede mutierende Operation aendert erst
//! die Sequenz und laeuft dann durch die Notification-Kanaele: die interne
//! Synchronisation (Order-Feld, Viewer-Attachment, Canvas-Refresh) ist fest
//! verdrahtet und laeuft vor allen externen Subscribern. Direkte
//! Sequenz-Mutation am Kanal vorbei gibt es nicht — jeder Aufrufer bekommt
//! "add + synchronize" ueber die oeffentliche API.

use std::fmt;
use std::rc::Rc;

use crate::app::{ViewerHandle, ViewerWeak};
use crate::core::events::{CallbackId, LayerListEvents};
use crate::core::{LayerHandle, LayerListError, LayerRef};


/// Geordnete Layer-Sammlung mit schwacher Rueck-Referenz auf den Viewer.
///
/// Single-threaded und bewusst reentrant-unsicher: Events laufen inline auf
/// dem Thread des Aufrufers, bevor der mutierende Aufruf zurueckkehrt.
pub struct LayerList {
    items: Vec<LayerHandle>,
    owner: Option<ViewerWeak>,
    /// Subscription-Tickets des Owner-Hooks (item_added, item_removed)
    owner_hooks: Option<(CallbackId, CallbackId)>,
    /// Notification-Kanaele fuer externe Subscriber
    pub events: LayerListEvents,
}

impl LayerList {
    /// Erstellt eine leere, nicht attachte Liste.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            owner: None,
            owner_hooks: None,
            events: LayerListEvents::new(),
        }
    }

    /// Erstellt eine leere Liste und attacht sie direkt an einen Viewer.
    pub fn with_owner(owner: &ViewerHandle) -> Self {
        let mut list = Self::new();
        list.set_owner(Some(owner));
        list
    }

    // ── Owner-Lifecycle ─────────────────────────────────────────────

    /// Aufgeloester Parent-Viewer; `None` wenn nie gesetzt oder abgelaufen.
    pub fn owner(&self) -> Option<ViewerHandle> {
        self.owner.as_ref().and_then(std::rc::Weak::upgrade)
    }

    /// Attacht/detacht den Parent-Viewer.
    ///
    /// No-op bei identischem Viewer. Sonst: Hook des alten Owners von den
    /// Item-Kanaelen abmelden, `viewer` auf *jedem* enthaltenen Layer
    /// umsetzen (ohne Item-Events fuer die Bulk-Zuweisung), Hook des neuen
    /// Owners anmelden. Die Liste haelt den Viewer nur schwach und
    /// verlaengert seine Lebenszeit nicht.
    pub fn set_owner(&mut self, owner: Option<&ViewerHandle>) {
        let prev = self.owner();
        match (&prev, owner) {
            (Some(p), Some(n)) if Rc::ptr_eq(p, n) => return,
            (None, None) => return,
            _ => {}
        }

        if let Some((added_id, removed_id)) = self.owner_hooks.take() {
            self.events.item_added.disconnect(added_id);
            self.events.item_removed.disconnect(removed_id);
        }

        let weak = owner.map(Rc::downgrade);
        for layer in &self.items {
            layer.set_viewer(weak.clone());
        }

        if let Some(viewer) = owner {
            let hook = |weak: ViewerWeak| {
                move |layer: &LayerHandle| {
                    if let Some(viewer) = weak.upgrade() {
                        viewer.borrow_mut().on_layers_change(layer);
                    }
                }
            };
            let added_id = self.events.item_added.connect(hook(Rc::downgrade(viewer)));
            let removed_id = self.events.item_removed.connect(hook(Rc::downgrade(viewer)));
            self.owner_hooks = Some((added_id, removed_id));
            log::debug!("LayerList an Viewer attacht ({} Layer)", self.items.len());
        } else {
            log::debug!("LayerList detacht ({} Layer)", self.items.len());
        }

        self.owner = weak;
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Haengt einen Layer ans Ende (oberste Draw-Position per Konvention).
    pub fn append(&mut self, item: LayerHandle) {
        self.items.push(item.clone());
        self.emit_item_added(&item);
    }

    /// Fuegt einen Layer vor `index` ein.
    ///
    /// Index-Semantik wie `list.insert`: negativ zaehlt von hinten,
    /// ausserhalb liegende Indizes clampen auf Anfang/Ende.
    pub fn insert(&mut self, index: isize, item: LayerHandle) {
        let at = clamp_insert_index(index, self.items.len());
        self.items.insert(at, item.clone());
        self.emit_item_added(&item);
    }

    /// Entfernt den Layer an `index` und gibt ihn zurueck.
    pub fn pop(&mut self, index: isize) -> Result<LayerHandle, LayerListError> {
        let at = normalize_index(index, self.items.len())?;
        let item = self.items.remove(at);
        self.emit_item_removed(&item);
        Ok(item)
    }

    /// Entfernt den letzten Layer und gibt ihn zurueck.
    pub fn pop_last(&mut self) -> Result<LayerHandle, LayerListError> {
        self.pop(-1)
    }

    /// Entfernt den ersten identitaetsgleichen Layer.
    pub fn remove(&mut self, item: &LayerHandle) -> Result<(), LayerListError> {
        let at = self
            .items
            .iter()
            .position(|layer| layer == item)
            .ok_or(LayerListError::NotFound)?;
        let removed = self.items.remove(at);
        self.emit_item_removed(&removed);
        Ok(())
    }

    /// Entfernt den Layer an `index` (pop mit verworfenem Ergebnis).
    pub fn remove_at(&mut self, index: isize) -> Result<(), LayerListError> {
        self.pop(index).map(|_| ())
    }

    /// Vertauscht zwei Positionen; `a`/`b` sind Layer oder Indizes.
    ///
    /// Emittiert nur `reordered`, keine Item-Events.
    pub fn swap(
        &mut self,
        a: impl Into<LayerRef>,
        b: impl Into<LayerRef>,
    ) -> Result<(), LayerListError> {
        let i = self.resolve_index(a)?;
        let j = self.resolve_index(b)?;
        self.items.swap(i, j);
        self.emit_reordered();
        Ok(())
    }

    /// Ordnet die Liste gemaess einer Permutation aller aktuellen Indizes um.
    ///
    /// Zwei Paesse: erst alle Referenzen aufloesen und die Permutation
    /// validieren (Duplikat ⇒ [`LayerListError::DuplicateIndex`], Luecken ⇒
    /// [`LayerListError::MissingIndices`]), dann die neue Sequenz in place
    /// uebernehmen. Bei Fehlern bleibt die Liste unveraendert.
    pub fn reorder<I, R>(&mut self, ordering: I) -> Result<(), LayerListError>
    where
        I: IntoIterator<Item = R>,
        R: Into<LayerRef>,
    {
        let mut indices = Vec::with_capacity(self.items.len());
        let mut seen = vec![false; self.items.len()];
        for reference in ordering {
            let index = self.resolve_index(reference)?;
            if seen[index] {
                return Err(LayerListError::DuplicateIndex { index });
            }
            seen[index] = true;
            indices.push(index);
        }

        let missing: Vec<usize> = seen
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .map(|(index, _)| index)
            .collect();
        if !missing.is_empty() {
            return Err(LayerListError::MissingIndices { indices: missing });
        }

        self.items = indices.iter().map(|&i| self.items[i].clone()).collect();
        self.emit_reordered();
        Ok(())
    }

    // ── Suche & Aufloesung ──────────────────────────────────────────

    /// Loest eine [`LayerRef`] in einen gueltigen Positionsindex auf.
    ///
    /// Handles werden per Identitaet gesucht (`NotFound` wenn absent),
    /// Indizes Python-artig normalisiert und range-geprueft (`OutOfRange`).
    pub fn resolve_index(&self, reference: impl Into<LayerRef>) -> Result<usize, LayerListError> {
        match reference.into() {
            LayerRef::Index(index) => normalize_index(index, self.items.len()),
            LayerRef::Handle(handle) => self
                .items
                .iter()
                .position(|layer| *layer == handle)
                .ok_or(LayerListError::NotFound),
        }
    }

    /// Lineare Identitaetssuche mit optionalen Bereichsgrenzen.
    ///
    /// Semantik wie `list.index(item, start, stop)`: erster Treffer im
    /// halboffenen Bereich, sonst `NotFound` — auch wenn der Layer zwar in
    /// der Liste, aber ausserhalb der Grenzen liegt.
    pub fn find_index(
        &self,
        item: &LayerHandle,
        start: Option<usize>,
        stop: Option<usize>,
    ) -> Result<usize, LayerListError> {
        let len = self.items.len();
        let start = start.unwrap_or(0).min(len);
        let stop = stop.unwrap_or(len).min(len);
        if start >= stop {
            return Err(LayerListError::NotFound);
        }
        self.items[start..stop]
            .iter()
            .position(|layer| layer == item)
            .map(|offset| start + offset)
            .ok_or(LayerListError::NotFound)
    }

    // ── Container-Protokoll ─────────────────────────────────────────

    /// Anzahl der Layer.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` wenn die Liste leer ist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iteriert in Listenreihenfolge (= Draw-Order).
    pub fn iter(&self) -> std::slice::Iter<'_, LayerHandle> {
        self.items.iter()
    }

    /// Membership-Test per Identitaet.
    pub fn contains(&self, item: &LayerHandle) -> bool {
        self.items.iter().any(|layer| layer == item)
    }

    /// Layer an Position `index`, `None` ausserhalb.
    pub fn get(&self, index: usize) -> Option<&LayerHandle> {
        self.items.get(index)
    }

    // ── Interne Synchronisation (laeuft vor externen Callbacks) ─────

    fn emit_item_added(&mut self, item: &LayerHandle) {
        self.sync_item_added(item);
        self.events.item_added.emit(item);
    }

    fn emit_item_removed(&mut self, item: &LayerHandle) {
        self.sync_item_removed(item);
        self.events.item_removed.emit(item);
    }

    fn emit_reordered(&mut self) {
        self.sync_reordered();
        self.events.reordered.emit(&());
    }

    /// Neuer Layer: Order auf `-len` (zuletzt aufgenommen = am staerksten
    /// negativ, LIFO-artiges Stacking) und Viewer uebernehmen.
    fn sync_item_added(&self, item: &LayerHandle) {
        item.set_order(-(self.items.len() as i64));
        item.set_viewer(self.owner.clone());
        log::debug!(
            "Layer {:?} aufgenommen (len={}, order={})",
            item,
            self.items.len(),
            item.order()
        );
    }

    /// Entfernter Layer: Viewer loesen, Order zuruecksetzen.
    fn sync_item_removed(&self, item: &LayerHandle) {
        item.set_viewer(None);
        item.set_order(0);
        log::debug!("Layer {:?} entfernt (len={})", item, self.items.len());
    }

    /// Nach Umordnung: Position i ↦ Order -i, dann Draw-Order-Registry des
    /// Owner-Canvas leeren und Redraw anstossen. Ohne (oder mit
    /// abgelaufenem) Owner entfaellt der Canvas-Refresh.
    fn sync_reordered(&self) {
        for (position, layer) in self.items.iter().enumerate() {
            layer.set_order(-(position as i64));
        }
        if let Some(viewer) = self.owner() {
            let mut viewer = viewer.borrow_mut();
            viewer.canvas.draw_order.clear();
            viewer.canvas.update();
        }
        log::debug!("LayerList umgeordnet ({} Layer)", self.items.len());
    }
}

impl Default for LayerList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl std::ops::Index<usize> for LayerList {
    type Output = LayerHandle;

    fn index(&self, index: usize) -> &LayerHandle {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a LayerList {
    type Item = &'a LayerHandle;
    type IntoIter = std::slice::Iter<'a, LayerHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Insert-Index mit `list.insert`-Clamping: negativ von hinten, dann auf
/// `0..=len` begrenzen.
fn clamp_insert_index(index: isize, len: usize) -> usize {
    if index < 0 {
        (len as isize + index).max(0) as usize
    } else {
        (index as usize).min(len)
    }
}

/// Positionsindex mit Python-Negativ-Semantik, range-geprueft.
fn normalize_index(index: isize, len: usize) -> Result<usize, LayerListError> {
    let resolved = if index < 0 {
        len as isize + index
    } else {
        index
    };
    if resolved < 0 || resolved >= len as isize {
        return Err(LayerListError::OutOfRange { index, len });
    }
    Ok(resolved as usize)
}
