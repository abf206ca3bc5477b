//! Gecachtes Kartenbild samt optionaler Host-Textur.

use image::{Rgba as Pixel, RgbaImage};

use super::capabilities::TextureHandle;

/// Vom externen Renderer erzeugtes Kartenbild.
///
/// Gehört exklusiv dem [`super::RenderContext`]; wird beim Zerstören freigegeben.
/// Die Host-Textur wird spätestens beim Drop gelöscht.
pub struct MapImage {
    /// Pixeldaten (RGBA8)
    pixels: RgbaImage,
    /// Hochgeladene Textur, falls der Host eine erzeugt hat
    texture: Option<Box<dyn TextureHandle>>,
}

impl MapImage {
    /// Erstellt ein Kartenbild aus fertigen Pixeldaten.
    pub fn new(pixels: RgbaImage) -> Self {
        log::debug!(
            "Kartenbild erstellt: {}x{} Pixel, {} Bytes",
            pixels.width(),
            pixels.height(),
            pixels.len()
        );
        Self {
            pixels,
            texture: None,
        }
    }

    /// Erstellt ein transparentes, quadratisches Kartenbild.
    pub fn blank(side: u32) -> Self {
        Self::new(RgbaImage::from_pixel(side, side, Pixel([0, 0, 0, 0])))
    }

    /// Hängt eine Host-Textur an.
    pub fn with_texture(mut self, texture: Box<dyn TextureHandle>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Gibt die Host-Textur frei. Mehrfacher Aufruf ist unschädlich.
    pub fn release(&mut self) {
        if let Some(mut texture) = self.texture.take() {
            texture.delete();
            log::debug!("Textur des Kartenbilds freigegeben");
        }
    }
}

impl Drop for MapImage {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for MapImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapImage")
            .field("dimensions", &self.dimensions())
            .field("has_texture", &self.has_texture())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingTexture(Rc<Cell<u32>>);

    impl TextureHandle for CountingTexture {
        fn delete(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_blank_ist_transparent() {
        let image = MapImage::blank(4);
        assert_eq!(image.dimensions(), (4, 4));
        assert!(image.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
        assert!(!image.has_texture());
    }

    #[test]
    fn test_release_loescht_textur_genau_einmal() {
        let deletes = Rc::new(Cell::new(0));
        let mut image =
            MapImage::blank(2).with_texture(Box::new(CountingTexture(Rc::clone(&deletes))));

        image.release();
        image.release();

        assert_eq!(deletes.get(), 1);
        assert!(!image.has_texture());
        drop(image);
        assert_eq!(deletes.get(), 1);
    }

    #[test]
    fn test_drop_loescht_textur() {
        let deletes = Rc::new(Cell::new(0));
        {
            let _image =
                MapImage::blank(2).with_texture(Box::new(CountingTexture(Rc::clone(&deletes))));
        }
        assert_eq!(deletes.get(), 1);
    }
}
