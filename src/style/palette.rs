//! Raumfarben der Dungeon-Karte.
//!
//! Zwei statische Paletten (LegalMap, Hypixel), jeweils vollständig über alle
//! [`RoomType`]s. Tenios nutzt vorerst die Hypixel-Palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::shared::MapStyle;

/// RGBA-Farbwert
pub type Rgba = [u8; 4];

/// Raum-Klassifikation als Schlüssel der Farbtabellen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Spawn,
    Normal,
    Puzzle,
    Miniboss,
    Fairy,
    Blood,
    Unknown,
    Trap,
    /// Nur zum Rendern von Wither-Türen
    Black,
    /// Nur zum Rendern von Verbindungen zwischen normalen Räumen
    NormalConnection,
}

impl RoomType {
    /// Anzahl der Raumtypen.
    pub const COUNT: usize = 10;

    /// Alle Raumtypen in Tabellenreihenfolge.
    pub const ALL: [RoomType; RoomType::COUNT] = [
        RoomType::Spawn,
        RoomType::Normal,
        RoomType::Puzzle,
        RoomType::Miniboss,
        RoomType::Fairy,
        RoomType::Blood,
        RoomType::Unknown,
        RoomType::Trap,
        RoomType::Black,
        RoomType::NormalConnection,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Spawn => "spawn",
            RoomType::Normal => "normal",
            RoomType::Puzzle => "puzzle",
            RoomType::Miniboss => "miniboss",
            RoomType::Fairy => "fairy",
            RoomType::Blood => "blood",
            RoomType::Unknown => "unknown",
            RoomType::Trap => "trap",
            RoomType::Black => "black",
            RoomType::NormalConnection => "normal_connection",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room| room.as_str() == s)
            .ok_or_else(|| RenderError::UnknownRoomType(s.to_string()))
    }
}

/// Vollständige Zuordnung Raumtyp → Farbe.
#[derive(Debug, PartialEq, Eq)]
pub struct ColorMap {
    name: &'static str,
    colors: [Rgba; RoomType::COUNT],
}

impl ColorMap {
    /// Name der Palette (für Logs)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Füllfarbe für einen Raumtyp.
    pub fn get(&self, room: RoomType) -> Rgba {
        self.colors[room.index()]
    }

    /// Iteriert über alle Einträge in Tabellenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (RoomType, Rgba)> + '_ {
        RoomType::ALL.into_iter().map(|room| (room, self.get(room)))
    }

    /// Palette für einen Map-Style.
    pub fn for_style(style: MapStyle) -> &'static ColorMap {
        match style {
            MapStyle::LegalMap => &LEGAL_COLOR_MAP,
            MapStyle::HypixelMap => &HYPIXEL_COLOR_MAP,
            // Noch keine eigene Palette
            MapStyle::TeniosMap => &HYPIXEL_COLOR_MAP,
        }
    }
}

// Reihenfolge wie RoomType::ALL
pub static HYPIXEL_COLOR_MAP: ColorMap = ColorMap {
    name: "hypixel",
    colors: [
        [0, 124, 0, 255],     // Spawn
        [114, 67, 27, 255],   // Normal
        [178, 76, 216, 255],  // Puzzle
        [229, 229, 51, 255],  // Miniboss
        [242, 127, 165, 255], // Fairy
        [255, 0, 0, 255],     // Blood
        [65, 65, 65, 255],    // Unknown
        [216, 127, 51, 255],  // Trap
        [0, 0, 0, 255],       // Black
        [114, 67, 27, 255],   // NormalConnection
    ],
};

pub static LEGAL_COLOR_MAP: ColorMap = ColorMap {
    name: "legal",
    colors: [
        [20, 133, 0, 255],    // Spawn
        [107, 58, 17, 255],   // Normal
        [117, 0, 133, 255],   // Puzzle
        [254, 223, 0, 255],   // Miniboss
        [224, 0, 255, 255],   // Fairy
        [255, 0, 0, 255],     // Blood
        [65, 65, 65, 255],    // Unknown
        [216, 127, 51, 255],  // Trap
        [0, 0, 0, 255],       // Black
        [92, 52, 14, 255],    // NormalConnection
    ],
};
