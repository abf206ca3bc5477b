//! Schmale Schnittstellen zum Host: Farben bauen, Bilder auflösen, Texturen freigeben.
//!
//! Der Render-Kontext implementiert keine davon selbst, er ruft sie nur auf.

use crate::style::{ImageAsset, Rgba};

/// Baut aus RGBA-Werten den Farbtyp des Hosts.
pub trait ColorFactory {
    type Color;

    fn color(&self, rgba: Rgba) -> Self::Color;
}

/// Liefert Farben als normalisiertes `[f32; 4]` (0.0..=1.0), wie es wgpu-Shader erwarten.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedRgba;

impl ColorFactory for NormalizedRgba {
    type Color = [f32; 4];

    fn color(&self, rgba: Rgba) -> [f32; 4] {
        rgba.map(|c| c as f32 / 255.0)
    }
}

/// Löst ein [`ImageAsset`] in ein ladbares Bild auf.
///
/// Erwartet: zuerst lokaler Cache (`file_name`), dann Download (`url`).
pub trait ImageResolver {
    type Image;

    fn resolve(&self, asset: &ImageAsset) -> anyhow::Result<Self::Image>;
}

/// Native/GPU-Textur hinter einem gecachten Kartenbild.
///
/// `delete` muss idempotent sein.
pub trait TextureHandle {
    fn delete(&mut self);
}
