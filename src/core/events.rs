//! Callback-Listen fuer die drei Notification-Kanaele der Layer-Liste.
//!
//! Kein generischer Pub/Sub-Mechanismus: die interne Synchronisation laeuft
//! als expliziter Methodenaufruf in jedem Mutator, *bevor* die hier
//! registrierten externen Callbacks in Registrierungsreihenfolge drankommen.
//! Emission ist synchron und inline auf dem Thread des Aufrufers — es gibt
//! kein Queuing und keine Batches.

use crate::core::LayerHandle;

/// Stabiles Ticket einer Subscription, zum spaeteren Abmelden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

/// Liste registrierter Callbacks mit stabiler Reihenfolge.
pub struct CallbackList<A> {
    next_id: u64,
    entries: Vec<(CallbackId, Box<dyn FnMut(&A)>)>,
}

impl<A> CallbackList<A> {
    /// Erstellt eine leere Callback-Liste.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Registriert einen Callback und gibt sein Abmelde-Ticket zurueck.
    pub fn connect(&mut self, callback: impl FnMut(&A) + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Entfernt die Subscription; `false` wenn das Ticket unbekannt ist.
    pub fn disconnect(&mut self, id: CallbackId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Ruft alle Callbacks in Registrierungsreihenfolge auf.
    pub fn emit(&mut self, arg: &A) {
        for (_, callback) in self.entries.iter_mut() {
            callback(arg);
        }
    }

    /// Anzahl registrierter Callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` wenn keine Callbacks registriert sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for CallbackList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for CallbackList<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackList")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Die drei Kanaele der Layer-Liste.
///
/// * `item_added(item)` — nach append/insert
/// * `item_removed(item)` — nach pop/remove/remove_at
/// * `reordered()` — nach swap/reorder
#[derive(Debug, Default)]
pub struct LayerListEvents {
    /// Kanal fuer neu aufgenommene Layer
    pub item_added: CallbackList<LayerHandle>,
    /// Kanal fuer entfernte Layer
    pub item_removed: CallbackList<LayerHandle>,
    /// Kanal fuer Reihenfolge-Aenderungen (ohne Membership-Aenderung)
    pub reordered: CallbackList<()>,
}

impl LayerListEvents {
    /// Erstellt die Kanaele ohne Subscriptions.
    pub fn new() -> Self {
        Self::default()
    }
}
