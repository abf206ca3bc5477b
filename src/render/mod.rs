//! Render-Kontext und Host-Schnittstellen.
//!
//! Gezeichnet wird hier nichts: der Kontext liefert Geometrie, Farben und Icons,
//! der Host-Renderer zeichnet und legt das Ergebnis als [`MapImage`] ab.

mod capabilities;
mod context;
mod image;

pub use capabilities::{ColorFactory, ImageResolver, NormalizedRgba, TextureHandle};
pub use context::{MapDimensions, RenderContext};
pub use image::MapImage;
