//! Status-Icons (Haken, Fragezeichen, ...) für Räume.
//!
//! Jedes Icon ist ein [`ImageAsset`]: lokaler Cache-Dateiname plus Remote-URL als Fallback.
//! Das eigentliche Laden übernimmt ein [`crate::render::ImageResolver`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::shared::{TickStyle, SCALE_REFERENCE};

/// Art des Status-Icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKind {
    GreenCheck,
    WhiteCheck,
    FailedRoom,
    QuestionMark,
}

impl IconKind {
    pub const COUNT: usize = 4;

    pub const ALL: [IconKind; IconKind::COUNT] = [
        IconKind::GreenCheck,
        IconKind::WhiteCheck,
        IconKind::FailedRoom,
        IconKind::QuestionMark,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Name wie im Host.
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::GreenCheck => "greenCheck",
            IconKind::WhiteCheck => "whiteCheck",
            IconKind::FailedRoom => "failedRoom",
            IconKind::QuestionMark => "questionMark",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for IconKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        IconKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RenderError::UnknownIconKind(s.to_string()))
    }
}

/// Beschreibung einer Bildressource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageAsset {
    /// Dateiname im lokalen Bild-Cache
    pub file_name: &'static str,
    /// Download-URL, falls die Datei lokal fehlt
    pub url: &'static str,
}

impl ImageAsset {
    const fn new(file_name: &'static str, url: &'static str) -> Self {
        Self { file_name, url }
    }
}

/// Icon-Satz eines Tick-Styles: Assets und Basisgrößen (bei `icon_scale = 8`).
#[derive(Debug, PartialEq, Eq)]
pub struct TickSet {
    name: &'static str,
    assets: [ImageAsset; IconKind::COUNT],
    /// Breite x Höhe in Pixeln, von Hand abgestimmt
    base_sizes: [(u32, u32); IconKind::COUNT],
}

impl TickSet {
    /// Icon-Satz für einen Tick-Style.
    ///
    /// `secrets` ist ein gültiger Style, hat aber noch keine Assets.
    pub fn for_style(style: TickStyle) -> Result<&'static TickSet> {
        match style {
            TickStyle::Standard => Ok(&LEGAL_TICKS),
            TickStyle::Hypixel => Ok(&HYPIXEL_TICKS),
            TickStyle::Secrets => Err(RenderError::NoTickAssets(style)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn asset(&self, kind: IconKind) -> &ImageAsset {
        &self.assets[kind.index()]
    }

    pub fn base_size(&self, kind: IconKind) -> (u32, u32) {
        self.base_sizes[kind.index()]
    }

    /// Icongröße, linear skaliert mit `icon_scale / 8`.
    pub fn scaled_size(&self, kind: IconKind, icon_scale: f32) -> (f32, f32) {
        let (w, h) = self.base_size(kind);
        let factor = icon_scale / SCALE_REFERENCE;
        (w as f32 * factor, h as f32 * factor)
    }
}

// Reihenfolge wie IconKind::ALL: GreenCheck, WhiteCheck, FailedRoom, QuestionMark

pub static LEGAL_TICKS: TickSet = TickSet {
    name: "legal",
    assets: [
        ImageAsset::new("BloomMapGreenCheck.png", "https://i.imgur.com/GQfTfmp.png"),
        ImageAsset::new("BloomMapWhiteCheck.png", "https://i.imgur.com/9cZ28bJ.png"),
        ImageAsset::new("BloomMapFailedRoom.png", "https://i.imgur.com/qAb4O9H.png"),
        ImageAsset::new("BloomMapQuestionMark.png", "https://i.imgur.com/kp92Inw.png"),
    ],
    base_sizes: [(16, 16), (16, 16), (16, 16), (16, 16)],
};

pub static HYPIXEL_TICKS: TickSet = TickSet {
    name: "hypixel",
    assets: [
        ImageAsset::new("greenCheckVanilla.png", "https://i.imgur.com/h2WM1LO.png"),
        ImageAsset::new("whiteCheckVanilla.png", "https://i.imgur.com/hwEAcnI.png"),
        ImageAsset::new("failedRoomVanilla.png", "https://i.imgur.com/WqW69z3.png"),
        ImageAsset::new("questionMarkVanilla.png", "https://i.imgur.com/1jyxH9I.png"),
    ],
    base_sizes: [(10, 10), (10, 10), (14, 14), (10, 16)],
};
