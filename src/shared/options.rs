//! Zentrale Konfiguration fuer den Layer-Viewer.
//!
//! `ViewerOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Hintergrundfarbe des Canvas (RGBA: dunkles Grau).
pub const CANVAS_CLEAR_COLOR: [f32; 4] = [0.12, 0.12, 0.13, 1.0];

// ── Layer-Rendering ─────────────────────────────────────────────────

/// Standard-Farbe neuer Shape-Layer (RGBA: Cyan).
pub const LAYER_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Standard-Deckkraft neuer Bild-Layer.
pub const IMAGE_OPACITY_DEFAULT: f32 = 1.0;

/// Laufzeit-Optionen des Viewers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Fenstertitel
    pub window_title: String,
    /// Hintergrundfarbe des Canvas (RGBA)
    pub canvas_clear_color: [f32; 4],
    /// Standard-Farbe neuer Shape-Layer (RGBA)
    pub layer_color_default: [f32; 4],
    /// Standard-Deckkraft neuer Bild-Layer
    pub image_opacity_default: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            window_title: "Layer Viewer".to_string(),
            canvas_clear_color: CANVAS_CLEAR_COLOR,
            layer_color_default: LAYER_COLOR_DEFAULT,
            image_opacity_default: IMAGE_OPACITY_DEFAULT,
        }
    }
}

impl ViewerOptions {
    /// Laedt Optionen aus einer TOML-Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Optionen nicht parsebar: {}", path.display()))
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))
    }
}
