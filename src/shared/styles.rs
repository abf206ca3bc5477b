//! Map- und Tick-Styles (shared zwischen Settings und Renderer).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Visuelles Thema der Karte: bestimmt Raumgröße, Abstände, Türbreite und Farbpalette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    /// LegalMap-Look (eigene Palette, größere Abstände)
    #[default]
    LegalMap,
    /// Nachbau der Hypixel-Vanilla-Karte
    HypixelMap,
    /// Tenios-Karte. Übernimmt vorerst die Hypixel-Palette und Platzhalter-Maße.
    TeniosMap,
}

impl MapStyle {
    /// Alle bekannten Map-Styles.
    pub const ALL: [MapStyle; 3] = [MapStyle::LegalMap, MapStyle::HypixelMap, MapStyle::TeniosMap];

    /// Name wie in der Host-Konfiguration.
    pub fn as_str(self) -> &'static str {
        match self {
            MapStyle::LegalMap => "legalmap",
            MapStyle::HypixelMap => "hypixelmap",
            MapStyle::TeniosMap => "teniosmap",
        }
    }

    /// Gibt zurück, ob Maße und Farben dieses Styles nur Platzhalter sind.
    pub fn uses_placeholder_values(self) -> bool {
        matches!(self, MapStyle::TeniosMap)
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legalmap" => Ok(MapStyle::LegalMap),
            "hypixelmap" => Ok(MapStyle::HypixelMap),
            "teniosmap" => Ok(MapStyle::TeniosMap),
            other => Err(RenderError::UnknownMapStyle(other.to_string())),
        }
    }
}

/// Visuelles Thema der Status-Icons (Haken, Fragezeichen, ...) auf den Räumen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickStyle {
    /// Hypixel-Vanilla-Ticks
    Hypixel,
    /// LegalMap-Ticks (in der Konfiguration `"default"`)
    #[default]
    #[serde(rename = "default")]
    Standard,
    /// Secret-Zähler statt Ticks. Es existiert noch keine Asset-Tabelle dafür.
    Secrets,
}

impl TickStyle {
    /// Alle bekannten Tick-Styles.
    pub const ALL: [TickStyle; 3] = [TickStyle::Hypixel, TickStyle::Standard, TickStyle::Secrets];

    /// Name wie in der Host-Konfiguration.
    pub fn as_str(self) -> &'static str {
        match self {
            TickStyle::Hypixel => "hypixel",
            TickStyle::Standard => "default",
            TickStyle::Secrets => "secrets",
        }
    }
}

impl fmt::Display for TickStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TickStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hypixel" => Ok(TickStyle::Hypixel),
            "default" => Ok(TickStyle::Standard),
            "secrets" => Ok(TickStyle::Secrets),
            other => Err(RenderError::UnknownTickStyle(other.to_string())),
        }
    }
}
