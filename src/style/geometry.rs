//! Raster-Geometrie der Karte je Map-Style.

use crate::shared::MapStyle;

/// Pixelmaße eines Raum-Rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapGeometry {
    /// Kantenlänge eines Raums
    pub room_size: u32,
    /// Abstand zwischen zwei Räumen
    pub room_gap: u32,
    /// Breite einer Tür zwischen zwei Räumen
    pub door_width: u32,
}

/// LegalMap: Abstand = 1/3 der Raumgröße.
pub const LEGAL_GEOMETRY: MapGeometry = MapGeometry {
    room_size: 24,
    room_gap: 8,
    door_width: 8,
};

pub const HYPIXEL_GEOMETRY: MapGeometry = MapGeometry {
    room_size: 24,
    room_gap: 6,
    door_width: 10,
};

/// Platzhalter. Türbreite bewusst groß, damit Änderungen auffallen.
pub const TENIOS_GEOMETRY: MapGeometry = MapGeometry {
    room_size: 24,
    room_gap: 6,
    door_width: 15,
};

impl MapGeometry {
    /// Geometrie für einen Map-Style.
    pub const fn for_style(style: MapStyle) -> Self {
        match style {
            MapStyle::LegalMap => LEGAL_GEOMETRY,
            MapStyle::HypixelMap => HYPIXEL_GEOMETRY,
            MapStyle::TeniosMap => TENIOS_GEOMETRY,
        }
    }

    /// Platz, den ein Raum inklusive Abstand im Raster belegt.
    pub const fn block_size(&self) -> u32 {
        self.room_size + self.room_gap
    }
}
