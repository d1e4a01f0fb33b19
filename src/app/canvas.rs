//! Canvas-Stellvertreter: Draw-Order-Registry und Redraw-Trigger.
//!
//! Die eigentliche Render-Pipeline liegt ausserhalb dieses Crates; der
//! Canvas haelt nur das, was die Layer-Synchronisation braucht: eine
//! leerbare Registry Layer ↦ Order und einen `update()`-Trigger, den der
//! Host-Renderer abfragt.

use indexmap::IndexMap;

use crate::core::LayerHandle;

/// Draw-Order-Registry plus Redraw-Flag.
pub struct Canvas {
    /// Registry Layer ↦ Order-Wert; Insertion-Order bleibt deterministisch
    pub draw_order: IndexMap<LayerHandle, i64>,
    clear_color: [f32; 4],
    pending_redraw: bool,
    update_count: u64,
}

impl Canvas {
    /// Erstellt einen leeren Canvas mit Clear-Color.
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            draw_order: IndexMap::new(),
            clear_color,
            pending_redraw: false,
            update_count: 0,
        }
    }

    /// Stoesst einen Redraw an (wird vom Host-Renderer konsumiert).
    pub fn update(&mut self) {
        self.pending_redraw = true;
        self.update_count += 1;
        log::debug!("Canvas-Update angefordert (#{})", self.update_count);
    }

    /// Konsumiert das Redraw-Flag (Host-Renderer-Seite).
    pub fn take_pending_redraw(&mut self) -> bool {
        std::mem::take(&mut self.pending_redraw)
    }

    /// `true` solange ein Redraw aussteht.
    pub fn pending_redraw(&self) -> bool {
        self.pending_redraw
    }

    /// Anzahl bisher angeforderter Updates (fuer Tests und Diagnose).
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Hintergrundfarbe
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(crate::shared::options::CANVAS_CLEAR_COLOR)
    }
}
